//! Pixel formats and frame geometry for the color stream.

/// Pixel layout reported by the sensor SDK with each color frame.
///
/// Only [`PixelFormat::YCrCb420Sp`] (NV21) is accepted by the conversion
/// pipeline; frames in any other layout are dropped at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Semi-planar 4:2:0: full-resolution luma plane followed by an
    /// interleaved V/U plane at quarter resolution.
    YCrCb420Sp,
    /// Planar 4:2:0 with separate V and U planes.
    Yv12,
    /// Packed 8-bit RGBA.
    Rgba8888,
}

/// Width and height of the color stream, locked in from the first frame.
///
/// All buffer sizes derive from this. Dimensions are validated non-zero and
/// even at construction: 4:2:0 subsamples chroma in 2x2 blocks, so an odd
/// dimension would send the chroma indexing past the end of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    /// Returns `None` if either dimension is zero or odd.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Length of the luma plane in bytes, which is also the byte offset of
    /// the interleaved chroma plane.
    pub fn chroma_offset(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total NV21 payload length: luma plane plus half-size chroma plane.
    pub fn frame_len(&self) -> usize {
        let luma = self.chroma_offset();
        luma + luma / 2
    }

    /// Length of the packed RGB output, stride `width * 3`.
    pub fn rgb_len(&self) -> usize {
        self.chroma_offset() * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_rejects_zero_dimensions() {
        assert!(FrameGeometry::new(0, 720).is_none());
        assert!(FrameGeometry::new(1280, 0).is_none());
        assert!(FrameGeometry::new(0, 0).is_none());
    }

    #[test]
    fn test_buffer_lengths() {
        let geometry = FrameGeometry::new(4, 2).unwrap();
        assert_eq!(geometry.chroma_offset(), 8);
        assert_eq!(geometry.frame_len(), 12);
        assert_eq!(geometry.rgb_len(), 24);
    }

    #[test]
    fn test_buffer_lengths_full_resolution() {
        let geometry = FrameGeometry::new(1280, 720).unwrap();
        assert_eq!(geometry.chroma_offset(), 921_600);
        assert_eq!(geometry.frame_len(), 1_382_400);
        assert_eq!(geometry.rgb_len(), 2_764_800);
    }

    #[test]
    fn test_geometry_rejects_odd_dimensions() {
        // An odd dimension would make the chroma plane indexing read past
        // the end of the payload.
        assert!(FrameGeometry::new(3, 2).is_none());
        assert!(FrameGeometry::new(4, 3).is_none());
        assert!(FrameGeometry::new(3, 3).is_none());
        assert!(FrameGeometry::new(2, 2).is_some());
    }
}
