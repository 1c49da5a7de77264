//! Parallax Stream Crate
//!
//! Frame synchronization between two asynchronously arriving sensor streams
//! and a single real-time consumer. A color producer and a depth producer
//! call in at their own cadence; the render thread pulls the freshest
//! complete frame of each without tearing and without blocking either
//! producer beyond a buffer copy.
//!
//! ## Modules
//!
//! - [`color`]: double-buffered NV21 ingestion and RGB conversion
//! - [`depth`]: latest-wins point cloud storage with calibration scaling
//! - [`scene`]: per-cycle orchestration facing the renderer
//! - [`error`]: frame rejection reasons surfaced to producer callbacks
//!
//! ## Example
//!
//! ```
//! use parallax_data::{PixelFormat, PointCloud};
//! use parallax_stream::{ScenePipeline, SceneRenderer};
//!
//! struct PrintRenderer;
//!
//! impl SceneRenderer for PrintRenderer {
//!     fn draw_scene(&mut self, rgb: &image::RgbImage, cloud: &PointCloud) {
//!         println!("{}x{} frame, {} points", rgb.width(), rgb.height(), cloud.len());
//!     }
//! }
//!
//! let mut pipeline = ScenePipeline::new();
//! let color = pipeline.color_sink();
//! let depth = pipeline.depth_sink();
//!
//! // Producer callbacks, normally driven from the sensor SDK's threads:
//! color.push_frame(&[128; 12], PixelFormat::YCrCb420Sp, 4, 2)?;
//! depth.push_points([[0.0, 1.0, 2.0]]);
//!
//! // Render thread, once per draw cycle:
//! assert!(pipeline.render_frame(&mut PrintRenderer));
//! # Ok::<(), parallax_stream::StreamError>(())
//! ```

pub mod color;
pub mod depth;
pub mod error;
pub mod scene;

pub use color::{ColorConverter, ColorSink, color_stream};
pub use depth::{DEPTH_SCALE, DepthSink};
pub use error::StreamError;
pub use scene::{PipelineStats, ScenePipeline, SceneRenderer};
