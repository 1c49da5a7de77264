//! Errors surfaced to producer callbacks.

use parallax_data::{FrameGeometry, PixelFormat};
use thiserror::Error;

/// Reasons a color frame is rejected at ingestion.
///
/// None of these are fatal: the frame is dropped, the pipeline keeps its
/// previous state, and the consumer keeps rendering whatever it last had.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("unsupported pixel format {0:?}, expected YCrCb420Sp")]
    UnsupportedFormat(PixelFormat),

    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(
        "frame is {got_width}x{got_height} but the stream is locked at {locked_width}x{locked_height}"
    )]
    GeometryMismatch {
        locked_width: u32,
        locked_height: u32,
        got_width: u32,
        got_height: u32,
    },

    #[error("frame payload is {got} bytes, expected at least {expected}")]
    ShortPayload { got: usize, expected: usize },
}

impl StreamError {
    pub(crate) fn geometry_mismatch(locked: FrameGeometry, got: FrameGeometry) -> Self {
        Self::GeometryMismatch {
            locked_width: locked.width,
            locked_height: locked.height,
            got_width: got.width,
            got_height: got.height,
        }
    }
}
