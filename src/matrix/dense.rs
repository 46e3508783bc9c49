//! Dense working copies on top of Faer.
//!
//! The sparse type materializes into a `faer::Mat<T>` whenever an algorithm
//! wants random access over the full grid (cofactor expansion, backend
//! cross-checks). The impl here gives `Mat<T>` the minor extraction the
//! determinant recursion needs.

use crate::core::traits::MinorExtract;
use faer::Mat;

impl<T: Copy + num_traits::Float> MinorExtract for Mat<T> {
    fn minor(&self, row: usize, col: usize) -> Self {
        Mat::from_fn(self.nrows() - 1, self.ncols() - 1, |i, j| {
            let src_i = if i < row { i } else { i + 1 };
            let src_j = if j < col { j } else { j + 1 };
            self[(src_i, src_j)]
        })
    }
}
