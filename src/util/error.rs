//! Error types for edgefx.

use thiserror::Error;

/// Result alias for edgefx operations.
pub type EdgeFxResult<T> = std::result::Result<T, EdgeFxError>;

/// Errors that can occur when building images or running filters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EdgeFxError {
    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is shorter than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer is shorter than the view requires.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// ROI does not fit inside the parent image.
    #[error(
        "roi out of bounds: x={x}, y={y}, width={width}, height={height}, \
         image={img_width}x{img_height}"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Owned buffer length does not match its dimensions exactly.
    #[error("buffer size mismatch: expected {expected} elements, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// Color input does not carry the expected number of channels.
    #[error("expected {expected} channels, got {got}")]
    ChannelMismatch { expected: usize, got: usize },
    /// Image cannot hold a single full kernel placement.
    #[error(
        "image {width}x{height} is smaller than the {kernel_width}x{kernel_height} kernel"
    )]
    TooSmallForKernel {
        width: usize,
        height: usize,
        kernel_width: usize,
        kernel_height: usize,
    },
    /// Filter name is not in the catalog.
    #[error("unknown filter: {name}")]
    UnknownFilter { name: String },
    /// Image decoding or encoding failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}

impl EdgeFxError {
    /// Returns true for errors caused by an input of the wrong shape.
    ///
    /// These are raised before any pixel is processed.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::InvalidStride { .. }
                | Self::BufferTooSmall { .. }
                | Self::RoiOutOfBounds { .. }
                | Self::BufferSizeMismatch { .. }
                | Self::ChannelMismatch { .. }
                | Self::TooSmallForKernel { .. }
        )
    }
}
