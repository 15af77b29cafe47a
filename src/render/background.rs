//! Star field backdrop.

use bevy::asset::RenderAssetUsages;
use bevy::light::NotShadowCaster;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Settings for the star field.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    /// Number of stars.
    pub count: usize,
    /// Edge length of the cube the stars fill, centered on the origin.
    pub extent: f32,
    /// Star opacity.
    pub alpha: f32,
    /// RNG seed so the sky is the same on every run.
    pub seed: u64,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 10_000,
            extent: 2000.0,
            alpha: 0.8,
            seed: 0x5EED_57A5,
        }
    }
}

/// Uniformly scattered star positions.
pub fn star_positions(settings: &StarfieldSettings) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let half = settings.extent * 0.5;
    (0..settings.count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// Spawn all stars as a single point-list mesh.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let positions = star_positions(&settings);
    let normals = vec![Vec3::Y; positions.len()];
    let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(settings.alpha),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
        NotShadowCaster,
        Name::new("Starfield"),
    ));

    info!("Spawned {} background stars", settings.count);
}
