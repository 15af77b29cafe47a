//! Rendering of the scene: body meshes, orbit paths, lighting and the
//! star field backdrop.

pub mod background;
pub mod bodies;
pub mod lighting;
pub mod orbits;

use bevy::prelude::*;

use self::background::{StarfieldSettings, spawn_starfield};
use self::bodies::CelestialBodyPlugin;
use self::lighting::{LightingSettings, spawn_lighting};
use self::orbits::OrbitPathSettings;

pub use self::bodies::{CelestialBody, CentralBody, PlanetRing, Satellite};
pub use self::orbits::OrbitPath;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightingSettings>()
            .init_resource::<OrbitPathSettings>()
            .init_resource::<StarfieldSettings>()
            .add_plugins(CelestialBodyPlugin)
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}
