//! Determinants by cofactor expansion.

use faer::Mat;
use num_traits::Float;

use crate::core::traits::{MatShape, MinorExtract};
use crate::error::DokError;
use crate::matrix::dok::DokMatrix;

/// Determinant of a square matrix by Laplace expansion along the first row.
///
/// The expansion runs on a dense working copy extracted from the sparse
/// matrix and walks columns in ascending order, which fixes the
/// floating-point summation order. Cost grows factorially with the
/// dimension, so this is only meant for small matrices.
///
/// Fails with [`DokError::ShapeMismatch`] on a non-square matrix.
pub fn determinant<T: Float>(m: &DokMatrix<T>) -> Result<T, DokError> {
    if m.nrows() != m.ncols() {
        return Err(DokError::ShapeMismatch(m.nrows(), m.ncols()));
    }
    Ok(det_dense(&m.to_mat()))
}

/// Recursive expansion on the dense copy. Sizes 1 and 2 are closed forms.
fn det_dense<T: Float>(m: &Mat<T>) -> T {
    let n = m.nrows();
    match n {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        _ => {
            let mut det = T::zero();
            let mut sign = T::one();
            for c in 0..n {
                det = det + sign * m[(0, c)] * det_dense(&m.minor(0, c));
                sign = -sign;
            }
            det
        }
    }
}
