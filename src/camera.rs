//! Camera for viewing the scene.
//!
//! A perspective camera driven by `bevy_panorbit_camera`: drag to orbit,
//! right-drag to pan, scroll to zoom. The controller updates itself every
//! frame after `Update`.

use std::f32::consts::PI;

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Vertical field of view in radians.
pub const FIELD_OF_VIEW: f32 = PI / 3.0;
pub const NEAR_PLANE: f32 = 0.1;
/// Stars beyond this distance from the camera are clipped.
pub const FAR_PLANE: f32 = 1000.0;

/// Initial camera position; the camera looks at the origin.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 50.0, 150.0);

/// Closest zoom distance from the focus point.
pub const MIN_DISTANCE: f32 = 20.0;
/// Furthest zoom distance from the focus point.
pub const MAX_DISTANCE: f32 = 300.0;

/// Fraction of remaining motion removed each frame once input stops.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Plugin providing the camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Controller configured for the start position and zoom limits.
pub fn camera_controller() -> PanOrbitCamera {
    let horizontal = Vec2::new(START_POSITION.x, START_POSITION.z).length();
    let smoothness = 1.0 - DAMPING_FACTOR;

    PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(START_POSITION.length()),
        yaw: Some(START_POSITION.x.atan2(START_POSITION.z)),
        pitch: Some(START_POSITION.y.atan2(horizontal)),
        zoom_lower_limit: MIN_DISTANCE,
        zoom_upper_limit: Some(MAX_DISTANCE),
        orbit_smoothness: smoothness,
        pan_smoothness: smoothness,
        zoom_smoothness: smoothness,
        force_update: true,
        ..default()
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        camera_controller(),
        Transform::from_translation(START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}
