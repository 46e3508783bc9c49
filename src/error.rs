use thiserror::Error;

// Unified error type for dokmat

#[derive(Error, Debug)]
pub enum DokError {
    #[error("expected a square matrix, got {0}x{1}")]
    ShapeMismatch(usize, usize),
    #[error("operand dimensions incompatible: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}
