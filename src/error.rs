//! Crate-wide error taxonomy.
//!
//! Every fallible library operation reports one of these variants and leaves
//! its operands unmodified on failure. Codec failures carry the offending
//! path in the message.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Pixel access outside the buffer extents.
    #[error("pixel ({row}, {col}) is outside a {height}x{width} buffer")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Operand shapes disagree: mismatched buffer dimensions, a channel
    /// index out of range, ragged kernel rows, or a wrong value count.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Convolution requires odd kernel dimensions.
    #[error("kernel dimensions must be odd, not {height}x{width}")]
    InvalidKernel { width: usize, height: usize },

    /// File system failure at the codec boundary.
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed or unsupported image data at the codec boundary.
    #[error("format error: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;
