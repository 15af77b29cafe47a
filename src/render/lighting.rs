//! Scene lighting: a point light inside the central body plus a global
//! ambient term that follows the Real view toggle.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Settings for scene lighting.
#[derive(Resource, Clone, Debug)]
pub struct LightingSettings {
    /// Point light intensity in lumens.
    pub sun_intensity: f32,
    /// Distance beyond which the point light has no effect.
    pub sun_range: f32,
    /// Ambient brightness used when Real view is off.
    pub ambient_brightness: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            sun_intensity: 2.0e8,
            sun_range: 300.0,
            ambient_brightness: 300.0,
        }
    }
}

/// Spawn the central point light and start with ambient light off.
pub fn spawn_lighting(mut commands: Commands, settings: Res<LightingSettings>) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 0.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: settings.sun_intensity,
            range: settings.sun_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sun Light"),
    ));

    info!("Scene lighting initialized");
}
