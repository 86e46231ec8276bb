//! Error types for needlematch.

use thiserror::Error;

/// Result alias for needlematch operations.
pub type NeedleMatchResult<T> = std::result::Result<T, NeedleMatchError>;

/// Errors that can occur when preparing images or running the matcher.
///
/// A needle that does not fit inside the haystack is not an error; `find`
/// reports it as a valid negative result with no location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NeedleMatchError {
    /// An image dimension is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The channel count is zero.
    #[error("invalid channel count: {channels}")]
    InvalidChannels { channels: usize },
    /// The stride is smaller than one row of samples.
    #[error("invalid stride {stride} for width {width} with {channels} channels")]
    InvalidStride {
        width: usize,
        channels: usize,
        stride: usize,
    },
    /// The backing buffer is smaller than the view requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Haystack and needle disagree on the number of channels.
    #[error("channel mismatch: haystack has {haystack}, needle has {needle}")]
    ChannelMismatch { haystack: usize, needle: usize },
    /// Image decoding or encoding failed.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
