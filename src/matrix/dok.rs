//! Dictionary-of-keys sparse matrix.
//!
//! Storage is a single map from `(row, col)` to value; only nonzero values
//! are stored, and a missing key reads as zero. Indices are 1-based,
//! `(1, 1)` through `(rows, cols)`, following the usual mathematical
//! convention.

use std::collections::{HashMap, hash_map};
use std::fmt;

use faer::Mat;
use num_traits::Float;

use crate::core::traits::MatShape;
use crate::error::DokError;

/// Sparse matrix keyed by `(row, col)` coordinates.
///
/// Dimensions are fixed at construction; entries are mutated through
/// [`DokMatrix::set`], which maintains the invariant that the map never
/// holds an explicit zero. Every operation producing a new matrix builds a
/// fresh map; maps are never shared between matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct DokMatrix<T> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: Float> DokMatrix<T> {
    /// Empty `rows` × `cols` matrix.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build from a dense row-major grid, keeping only the nonzero cells.
    ///
    /// The grid is assumed to have `rows` × `cols` shape.
    pub fn from_dense(rows: usize, cols: usize, values: &[Vec<T>]) -> Self {
        let mut m = Self::new(rows, cols);
        for (i, row) in values.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                m.set(i + 1, j + 1, v);
            }
        }
        m
    }

    /// `n` × `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 1..=n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Store `value` at `(i, j)`, dropping the entry when `value` is zero.
    ///
    /// # Panics
    /// Panics if `i` is outside `1..=rows` or `j` is outside `1..=cols`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!((1..=self.rows).contains(&i), "row index out of bounds");
        assert!((1..=self.cols).contains(&j), "column index out of bounds");
        if value == T::zero() {
            self.entries.remove(&(i, j));
        } else {
            self.entries.insert((i, j), value);
        }
    }

    /// Value at `(i, j)`.
    ///
    /// Absent keys read as zero; out-of-range indices are simply absent.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.entries.get(&(i, j)).copied().unwrap_or_else(T::zero)
    }

    /// Sum of the diagonal, zero for an all-zero matrix.
    ///
    /// Fails with [`DokError::ShapeMismatch`] on a non-square matrix.
    pub fn trace(&self) -> Result<T, DokError> {
        if self.rows != self.cols {
            return Err(DokError::ShapeMismatch(self.rows, self.cols));
        }
        let mut sum = T::zero();
        for i in 1..=self.rows {
            sum = sum + self.get(i, i);
        }
        Ok(sum)
    }

    /// Number of stored (nonzero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over stored `((row, col), value)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, (usize, usize), T> {
        self.entries.iter()
    }

    /// Fully materialized dense view, row-major.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        (1..=self.rows)
            .map(|i| (1..=self.cols).map(|j| self.get(i, j)).collect())
            .collect()
    }

    /// Dense working copy as a Faer matrix (0-based).
    pub fn to_mat(&self) -> Mat<T> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.get(i + 1, j + 1))
    }
}

impl<T: Float> MatShape for DokMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

/// Renders the dense view with space-separated values, one matrix row per
/// line. This is the form the console harness prints.
impl<T: Float + fmt::Display> fmt::Display for DokMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 1..=self.rows {
            for j in 1..=self.cols {
                if j > 1 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            if i < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
