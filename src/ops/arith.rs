//! Elementwise and product arithmetic.
//!
//! Each operation builds a brand-new result matrix and leaves its inputs
//! untouched. Operand shapes are checked up front; a mismatch is reported as
//! [`DokError::DimensionMismatch`] rather than computing garbage.

use num_traits::Float;

use crate::core::traits::MatShape;
use crate::error::DokError;
use crate::matrix::dok::DokMatrix;

/// Elementwise sum of two equally-shaped matrices.
///
/// Walks the union of the two entry maps, so the cost is O(nnz_a + nnz_b)
/// rather than O(rows · cols). Entries that cancel to zero are dropped by
/// `set`.
pub fn add<T: Float>(a: &DokMatrix<T>, b: &DokMatrix<T>) -> Result<DokMatrix<T>, DokError> {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return Err(DokError::DimensionMismatch(
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols(),
        ));
    }
    let mut out = DokMatrix::new(a.nrows(), a.ncols());
    for (&(i, j), _) in a.iter().chain(b.iter()) {
        out.set(i, j, a.get(i, j) + b.get(i, j));
    }
    Ok(out)
}

/// Scalar multiple of a matrix.
///
/// Only stored entries are visited; scaling by zero therefore empties the
/// result entirely.
pub fn scale<T: Float>(m: &DokMatrix<T>, scalar: T) -> DokMatrix<T> {
    let mut out = DokMatrix::new(m.nrows(), m.ncols());
    for (&(i, j), &v) in m.iter() {
        out.set(i, j, v * scalar);
    }
    out
}

/// Matrix product of an n×m and an m×p matrix.
///
/// Plain triple loop over the result grid and the shared inner dimension,
/// O(n·p·m); only nonzero sums are stored.
pub fn matmul<T: Float>(a: &DokMatrix<T>, b: &DokMatrix<T>) -> Result<DokMatrix<T>, DokError> {
    if a.ncols() != b.nrows() {
        return Err(DokError::DimensionMismatch(
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols(),
        ));
    }
    let mut out = DokMatrix::new(a.nrows(), b.ncols());
    for i in 1..=a.nrows() {
        for j in 1..=b.ncols() {
            let mut sum = T::zero();
            for k in 1..=a.ncols() {
                sum = sum + a.get(i, k) * b.get(k, j);
            }
            out.set(i, j, sum);
        }
    }
    Ok(out)
}
