//! Orbit path curves.
//!
//! Each non-central body gets one closed circle in the orbital plane,
//! built once as a line-strip mesh. The curves are decorative: they do not
//! follow the bodies and are only shown or hidden afterwards.

use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Number of equal-angle samples around the circle.
    pub segments: u32,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            segments: 100,
            alpha: 0.3,
        }
    }
}

/// Marker for an orbit path curve.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
}

/// Sample a circle of `radius` in the XZ plane.
///
/// Returns `segments + 1` points; the last repeats the first so the strip
/// closes.
pub fn orbit_path_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f32 / segments as f32 * TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Line-strip mesh for an orbit path.
pub fn orbit_path_mesh(radius: f32, segments: u32) -> Mesh {
    let points = orbit_path_points(radius, segments);
    let normals = vec![Vec3::Y; points.len()];
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

/// Dim white, the same for every path.
pub fn orbit_color(alpha: f32) -> Color {
    Color::WHITE.with_alpha(alpha)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_points_close_the_loop() {
        let points = orbit_path_points(50.0, 100);
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], points[100]);
    }

    #[test]
    fn test_points_lie_on_circle_in_orbital_plane() {
        for p in orbit_path_points(62.0, 100) {
            assert_relative_eq!(p.length(), 62.0, epsilon = 1e-3);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_points_are_equally_spaced() {
        let points = orbit_path_points(10.0, 100);
        let first = points[0].distance(points[1]);
        for pair in points.windows(2) {
            assert_relative_eq!(pair[0].distance(pair[1]), first, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_degenerate_segment_count_is_raised() {
        assert_eq!(orbit_path_points(1.0, 0).len(), 4);
    }

    #[test]
    fn test_mesh_is_line_strip() {
        let mesh = orbit_path_mesh(28.0, 100);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);
        assert_eq!(mesh.count_vertices(), 101);
    }

    #[test]
    fn test_orbit_color_is_dim_white() {
        let color = orbit_color(OrbitPathSettings::default().alpha);
        assert_eq!(color, Color::WHITE.with_alpha(0.3));
    }
}
