//! Latest-wins storage for the depth sensor's point stream.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use glam::Vec3;
use parallax_data::PointCloud;
use tracing::debug;

/// Per-axis calibration correction applied to every incoming point.
pub const DEPTH_SCALE: Vec3 = Vec3::new(0.9, 1.2, 1.0);

/// Shared handle for the depth stream.
///
/// Producer callbacks replace the stored cloud wholesale; the render thread
/// takes snapshots. Cloud cardinality varies per callback, so a fresh
/// allocation is made each time rather than reusing a buffer.
#[derive(Clone, Default)]
pub struct DepthSink {
    latest: Arc<Mutex<Arc<PointCloud>>>,
    received: Arc<AtomicU64>,
}

impl DepthSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored cloud with the scaled version of `points`.
    ///
    /// The previous cloud is discarded entirely; snapshots already handed
    /// out keep their contents. The lock is held only for the pointer store.
    pub fn push_points<I>(&self, points: I)
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        let cloud: PointCloud = points
            .into_iter()
            .map(|[x, y, z]| Vec3::new(x, y, z) * DEPTH_SCALE)
            .collect();
        debug!("replacing point cloud with {} points", cloud.len());

        let cloud = Arc::new(cloud);
        *self.latest.lock().unwrap() = cloud;
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Most recent point cloud, empty before the first callback.
    ///
    /// The lock is released before the snapshot is used, so rendering never
    /// stalls the depth producer; the `Arc` makes the copy-out O(1).
    pub fn snapshot(&self) -> Arc<PointCloud> {
        self.latest.lock().unwrap().clone()
    }

    /// Point clouds received since startup.
    pub fn clouds_received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_empty_before_first_callback() {
        let sink = DepthSink::new();
        assert!(sink.snapshot().is_empty());
        assert_eq!(sink.clouds_received(), 0);
    }

    #[test]
    fn test_calibration_scale_is_applied_per_axis() {
        let sink = DepthSink::new();
        sink.push_points([[1.0, 1.0, 1.0], [2.0, -3.0, 0.5]]);

        let cloud = sink.snapshot();
        let points = cloud.points();
        assert_eq!(points.len(), 2);
        assert!((points[0].x - 0.9).abs() < 1e-6);
        assert!((points[0].y - 1.2).abs() < 1e-6);
        assert!((points[0].z - 1.0).abs() < 1e-6);
        assert!((points[1].x - 1.8).abs() < 1e-6);
        assert!((points[1].y + 3.6).abs() < 1e-6);
        assert!((points[1].z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_each_callback_replaces_the_previous_cloud() {
        let sink = DepthSink::new();
        sink.push_points([[1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]]);
        sink.push_points([[10.0, 10.0, 10.0]]);

        let cloud = sink.snapshot();
        assert_eq!(cloud.len(), 1);
        assert!((cloud.points()[0].x - 9.0).abs() < 1e-5);
        assert_eq!(sink.clouds_received(), 2);
    }

    #[test]
    fn test_empty_callback_clears_the_cloud() {
        let sink = DepthSink::new();
        sink.push_points([[1.0, 2.0, 3.0]]);
        sink.push_points(std::iter::empty());
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let sink = DepthSink::new();
        sink.push_points([[1.0, 2.0, 3.0]]);
        let held = sink.snapshot();

        sink.push_points([[4.0, 5.0, 6.0]]);
        // The older snapshot is untouched by the replacement.
        assert_eq!(held.len(), 1);
        assert!((held.points()[0].y - 2.4).abs() < 1e-6);
        assert!((sink.snapshot().points()[0].y - 6.0).abs() < 1e-5);
    }
}
