//! Per-cycle orchestration facing the renderer.
//!
//! One [`ScenePipeline::render_frame`] call produces one visual frame: the
//! freshest color frame is converted and the freshest point cloud snapshotted,
//! and both are handed to the renderer together. The two streams are never
//! timestamp-matched; pairing whatever is freshest trades correlation for
//! latency and simplicity.

use image::RgbImage;
use parallax_data::{FrameGeometry, PointCloud};
use tracing::debug;

use crate::color::{self, ColorConverter, ColorSink};
use crate::depth::DepthSink;

/// Render collaborator: receives the converted RGB frame (texture upload)
/// and the point cloud snapshot (vertex upload) once per cycle.
pub trait SceneRenderer {
    fn draw_scene(&mut self, rgb: &RgbImage, cloud: &PointCloud);
}

/// Counters describing pipeline activity since startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub frames_received: u64,
    pub frames_dropped: u64,
    pub clouds_received: u64,
    pub frames_rendered: u64,
}

/// Owns the consumer side of both sensor streams.
///
/// Lives on the render thread; producer handles from [`color_sink`] and
/// [`depth_sink`] are registered with the sensor SDK's callbacks.
///
/// [`color_sink`]: ScenePipeline::color_sink
/// [`depth_sink`]: ScenePipeline::depth_sink
pub struct ScenePipeline {
    color_sink: ColorSink,
    converter: ColorConverter,
    depth: DepthSink,
    frames_rendered: u64,
}

impl ScenePipeline {
    pub fn new() -> Self {
        let (color_sink, converter) = color::color_stream();
        Self {
            color_sink,
            converter,
            depth: DepthSink::new(),
            frames_rendered: 0,
        }
    }

    /// Producer handle for the sensor SDK's color frame callback.
    pub fn color_sink(&self) -> ColorSink {
        self.color_sink.clone()
    }

    /// Producer handle for the sensor SDK's depth callback.
    pub fn depth_sink(&self) -> DepthSink {
        self.depth.clone()
    }

    /// Locked color stream dimensions, once the consumer has observed the
    /// first frame.
    pub fn geometry(&self) -> Option<FrameGeometry> {
        self.converter.geometry()
    }

    /// Produce one visual frame.
    ///
    /// No-op returning `false` until the first color frame arrives, even if
    /// point clouds are already flowing. Otherwise converts the freshest
    /// color frame, snapshots the point cloud, and hands both to `renderer`
    /// in a single call.
    pub fn render_frame<R: SceneRenderer>(&mut self, renderer: &mut R) -> bool {
        let Some(rgb) = self.converter.produce_rgb() else {
            debug!("render cycle skipped, no color frame yet");
            return false;
        };
        let cloud = self.depth.snapshot();
        renderer.draw_scene(rgb, &cloud);
        self.frames_rendered += 1;
        true
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            frames_received: self.color_sink.frames_received(),
            frames_dropped: self.color_sink.frames_dropped(),
            clouds_received: self.depth.clouds_received(),
            frames_rendered: self.frames_rendered,
        }
    }
}

impl Default for ScenePipeline {
    fn default() -> Self {
        Self::new()
    }
}
