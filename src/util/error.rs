//! Error types for chromascale.

use crate::histogram::Channel;
use thiserror::Error;

/// Result alias for chromascale operations.
pub type ChromaResult<T> = std::result::Result<T, ChromaError>;

/// Errors that can occur when resampling images or building histogram charts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChromaError {
    /// The scale factor is not a positive finite number.
    #[error("invalid scale factor {scale}: must be positive and finite")]
    InvalidScale { scale: f64 },
    /// Resizing would produce an image with zero width or height.
    #[error("resize by {scale} yields degenerate output {width}x{height}")]
    DegenerateResize {
        width: usize,
        height: usize,
        scale: f64,
    },
    /// The input grid has zero area.
    #[error("empty grid {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    /// A channel histogram has no counts to normalize against.
    #[error("degenerate histogram for {channel:?} channel: all bins are zero")]
    DegenerateHistogram { channel: Channel },
    /// Width or height is out of the representable range.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer length does not match the grid dimensions.
    #[error("buffer length mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// Rows passed to a grid constructor have differing column counts.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Image decoding or encoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
