//! Free operations over DOK matrices.

pub mod arith;
pub use arith::{add, matmul, scale};

pub mod det;
pub use det::determinant;
