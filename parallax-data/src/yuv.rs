//! NV21 to packed-RGB conversion.
//!
//! The color stream arrives as YCrCb 4:2:0 semi-planar: a full-resolution
//! luma plane followed by one interleaved V/U byte pair per 2x2 pixel block.
//! Reconstruction is the standard subsampled one - each horizontal pixel pair
//! reads the chroma sample of its even column, with no interpolation.

use crate::geometry::FrameGeometry;

/// BT.601-style conversion of a single (Y, U, V) sample to RGB.
///
/// Channels are computed in floating point and narrowed with `as u8`, which
/// saturates out-of-range values to 0 and 255.
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as f32;
    let u = u as f32 - 128.0;
    let v = v as f32 - 128.0;
    let r = y + 1.370705 * v;
    let g = y - 0.698001 * v - 0.337633 * u;
    let b = y + 1.732446 * u;
    [r as u8, g as u8, b as u8]
}

/// Convert a complete NV21 frame into a packed RGB buffer.
///
/// `yuv` must hold at least `geometry.frame_len()` bytes and `rgb` exactly
/// `geometry.rgb_len()` bytes; both are fixed once the stream geometry is
/// locked, so this cannot fail at runtime.
pub fn convert_frame(geometry: FrameGeometry, yuv: &[u8], rgb: &mut [u8]) {
    let width = geometry.width as usize;
    let height = geometry.height as usize;
    let uv_offset = geometry.chroma_offset();
    assert!(yuv.len() >= geometry.frame_len());
    assert_eq!(rgb.len(), geometry.rgb_len());

    for row in 0..height {
        let uv_row = uv_offset + (row / 2) * width;
        for col in 0..width {
            // Both columns of a horizontal pair read the even column's
            // chroma: V first, then U (NV21 ordering).
            let x = col & !1;
            let v = yuv[uv_row + x];
            let u = yuv[uv_row + x + 1];
            let out = (row * width + col) * 3;
            rgb[out..out + 3].copy_from_slice(&yuv_to_rgb(yuv[row * width + col], u, v));
        }
    }
}
