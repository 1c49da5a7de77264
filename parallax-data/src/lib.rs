//! Parallax Data Crate
//!
//! CPU-side data types and pure algorithms for the parallax sensor pipeline:
//! pixel-format tags, frame geometry, the NV21 to RGB conversion kernel, and
//! the point cloud container. This crate is GPU-agnostic and performs no
//! synchronization; the concurrent pipeline lives in `parallax-stream`.

pub mod cloud;
pub mod geometry;
pub mod yuv;

pub use cloud::PointCloud;
pub use geometry::{FrameGeometry, PixelFormat};
pub use yuv::{convert_frame, yuv_to_rgb};
