//! Point cloud container shared between ingestion and rendering.

use glam::Vec3;

/// An unordered set of 3D points produced wholesale by one depth callback.
///
/// Each callback replaces the previous cloud entirely; there is no
/// incremental merge, so a cloud is immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Flattened xyz triples, suitable for direct vertex buffer upload.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

impl FromIterator<Vec3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cloud() {
        let cloud = PointCloud::default();
        assert!(cloud.is_empty());
        assert_eq!(cloud.len(), 0);
        assert!(cloud.as_flat().is_empty());
    }

    #[test]
    fn test_flattened_view_interleaves_xyz() {
        let cloud = PointCloud::new(vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 5.0, -6.0),
        ]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.as_flat(), &[1.0, 2.0, 3.0, -4.0, 5.0, -6.0]);
    }
}
