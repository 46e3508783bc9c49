//! Tests for DOK matrix construction, element access, trace, and dense views.
//!
//! These cover the storage invariant (no explicit zeros), the 1-based index
//! convention, and the round-trip between dense grids and sparse storage.

use dokmat::{DokError, DokMatrix, MatShape, add, determinant};
use rand::Rng;

/// Building from a dense grid and materializing it back returns the original
/// values exactly.
#[test]
fn dense_roundtrip() {
    let rows = 4;
    let cols = 6;
    let mut rng = rand::thread_rng();
    let values: Vec<Vec<f64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.r#gen()).collect())
        .collect();
    let m = DokMatrix::from_dense(rows, cols, &values);
    assert_eq!(m.nrows(), rows);
    assert_eq!(m.ncols(), cols);
    assert_eq!(m.to_dense(), values);
}

/// Unset and out-of-range positions both read as zero.
#[test]
fn absent_entries_read_zero() {
    let mut m = DokMatrix::new(3, 3);
    m.set(2, 2, 7.5);
    assert_eq!(m.get(2, 2), 7.5);
    assert_eq!(m.get(1, 3), 0.0);
    assert_eq!(m.get(10, 10), 0.0);
    assert_eq!(m.nnz(), 1);
}

/// Trace refuses non-square matrices with a shape error.
#[test]
fn trace_rejects_non_square() {
    let m = DokMatrix::<f64>::new(2, 3);
    assert!(matches!(m.trace(), Err(DokError::ShapeMismatch(2, 3))));
}

/// The identity matrix stores exactly n entries and has trace n.
#[test]
fn identity_trace() {
    let n = 5;
    let m = DokMatrix::<f64>::identity(n);
    assert_eq!(m.nnz(), n);
    assert_eq!(m.trace().unwrap(), n as f64);
}

/// End-to-end walk of the console-harness scenario: a 2×2 diagonal matrix,
/// its trace, an elementwise sum, and its determinant.
#[test]
fn harness_scenario() {
    let a = DokMatrix::from_dense(2, 2, &[vec![1.0, 0.0], vec![0.0, 2.0]]);
    assert_eq!(a.trace().unwrap(), 3.0);
    assert_eq!(a.get(1, 2), 0.0);

    let b = DokMatrix::from_dense(2, 2, &[vec![0.0, 1.0], vec![1.0, 0.0]]);
    let sum = add(&a, &b).unwrap();
    assert_eq!(sum.to_dense(), vec![vec![1.0, 1.0], vec![1.0, 2.0]]);

    assert_eq!(determinant(&a).unwrap(), 2.0);
}
