//! Scene graph construction.
//!
//! Turns the [`BodyRegistry`] and the resolved textures into the orbit
//! tree: one pivot per body under the world root, the body mesh under its
//! pivot, and optional satellite and ring nodes under the body mesh.

use std::collections::HashMap;
use std::f32::consts::PI;

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::assets::{FallbackTexture, TextureBatch, TextureSlot};
use crate::controls::{ControlState, path_visibility};
use crate::orbit::{BodySpin, OrbitPivot};
use crate::registry::{BodyRegistry, BodySpec, RingSpec};
use crate::render::orbits::{OrbitPath, OrbitPathSettings, orbit_color, orbit_path_mesh};
use crate::types::AppState;

/// Longitude and latitude subdivisions of every sphere mesh.
pub const SPHERE_SEGMENTS: u32 = 32;
/// Satellite radius relative to its primary.
pub const SATELLITE_RADIUS_FACTOR: f32 = 0.3;
/// Satellite distance from its primary's center, in primary radii.
pub const SATELLITE_DISTANCE_FACTOR: f32 = 1.5;
/// Satellite revolution rate in radians per second.
pub const SATELLITE_ORBIT_SPEED: f32 = 0.05;
/// Ring tilt about the body's local X axis.
pub const RING_TILT: f32 = PI / 3.0;
pub const RING_OPACITY: f32 = 0.8;
pub const RING_SEGMENTS: u32 = 64;

/// Component marking a body mesh node.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Registry name.
    pub name: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
}

/// Marker for the self-illuminated body at the origin.
#[derive(Component)]
pub struct CentralBody;

/// Marker for a satellite mesh node.
#[derive(Component, Clone, Debug)]
pub struct Satellite {
    /// Name of the primary it orbits.
    pub primary: &'static str,
}

/// Marker for a ring attached to a body.
#[derive(Component, Clone, Debug)]
pub struct PlanetRing {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Plugin building the scene once textures are ready.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_solar_system);
    }
}

/// Resolved texture handles keyed by asset path.
struct TextureLookup<'a> {
    by_path: HashMap<&'a str, Handle<Image>>,
    fallback: Handle<Image>,
}

impl<'a> TextureLookup<'a> {
    /// `None` while any request in the batch is outstanding.
    fn new(batch: &'a TextureBatch, fallback: &FallbackTexture) -> Option<Self> {
        let textures = batch.textures()?;
        let by_path = batch
            .slots()
            .iter()
            .map(TextureSlot::path)
            .zip(textures.into_iter().map(|texture| texture.handle))
            .collect();
        Some(Self {
            by_path,
            fallback: fallback.0.clone(),
        })
    }

    /// Texture for `path`, or the shared placeholder if it was never requested.
    fn get(&self, path: &str) -> Handle<Image> {
        self.by_path
            .get(path)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn sphere_mesh(radius: f32) -> Mesh {
    Sphere::new(radius)
        .mesh()
        .uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

/// Build the full orbit tree from the registry.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<BodyRegistry>,
    batch: Res<TextureBatch>,
    fallback: Res<FallbackTexture>,
    controls: Res<ControlState>,
    path_settings: Res<OrbitPathSettings>,
) {
    let Some(textures) = TextureLookup::new(&batch, &fallback) else {
        warn!("Texture batch still loading; scene not built");
        return;
    };

    for (index, body) in registry.bodies().iter().enumerate() {
        let is_central = index == 0;
        let texture = textures.get(body.texture);

        // The central body never revolves, whatever the registry says.
        let orbit_speed = if is_central { 0.0 } else { body.orbit_speed };
        let pivot = commands
            .spawn((
                OrbitPivot::primary(body.name, orbit_speed),
                Name::new(format!("{} Orbit", body.name)),
            ))
            .id();

        let material = if is_central {
            StandardMaterial {
                base_color_texture: Some(texture),
                unlit: true,
                ..default()
            }
        } else {
            StandardMaterial {
                base_color_texture: Some(texture),
                perceptual_roughness: 1.0,
                ..default()
            }
        };

        let mut body_node = commands.spawn((
            Mesh3d(meshes.add(sphere_mesh(body.radius))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_xyz(body.orbit_radius, 0.0, 0.0),
            BodySpin::new(body.rotation_speed),
            CelestialBody {
                name: body.name,
                radius: body.radius,
            },
            Name::new(body.name),
            ChildOf(pivot),
        ));
        if is_central {
            body_node.insert((CentralBody, NotShadowCaster));
        }
        let body_id = body_node.id();

        if let Some(satellite) = &body.satellite {
            let texture = textures.get(satellite.texture);
            spawn_satellite(
                &mut commands,
                &mut meshes,
                &mut materials,
                body,
                body_id,
                texture,
            );
        }

        if let Some(ring) = &body.ring {
            let texture = textures.get(ring.texture);
            spawn_ring(
                &mut commands,
                &mut meshes,
                &mut materials,
                body.name,
                ring,
                body_id,
                texture,
            );
        }

        if !is_central {
            commands.spawn((
                Mesh3d(meshes.add(orbit_path_mesh(body.orbit_radius, path_settings.segments))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: orbit_color(path_settings.alpha),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::default(),
                path_visibility(&controls),
                OrbitPath {
                    radius: body.orbit_radius,
                },
                NotShadowCaster,
                Name::new(format!("{} Orbit Path", body.name)),
            ));
        }
    }

    info!(
        "Spawned {} bodies ({} primaries)",
        registry.len(),
        registry.primaries().len()
    );
}

/// Attach a satellite pivot and mesh under a primary's body node.
///
/// The satellite inherits the primary's revolution and self-spin through
/// the hierarchy and adds its own revolution on top.
fn spawn_satellite(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    primary: &BodySpec,
    body_id: Entity,
    texture: Handle<Image>,
) {
    let pivot = commands
        .spawn((
            OrbitPivot::satellite(SATELLITE_ORBIT_SPEED),
            Name::new(format!("{} Satellite Orbit", primary.name)),
            ChildOf(body_id),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(sphere_mesh(primary.radius * SATELLITE_RADIUS_FACTOR))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(primary.radius * SATELLITE_DISTANCE_FACTOR, 0.0, 0.0),
        Satellite {
            primary: primary.name,
        },
        Name::new(format!("{} Satellite", primary.name)),
        ChildOf(pivot),
    ));
}

/// Attach a tilted, double-sided annulus under a body node.
fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: &'static str,
    ring: &RingSpec,
    body_id: Entity,
    texture: Handle<Image>,
) {
    let mesh = Annulus::new(ring.inner_radius, ring.outer_radius)
        .mesh()
        .resolution(RING_SEGMENTS);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(RING_OPACITY),
            base_color_texture: Some(texture),
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(RING_TILT)),
        PlanetRing {
            inner_radius: ring.inner_radius,
            outer_radius: ring.outer_radius,
        },
        Name::new(format!("{name} Ring")),
        ChildOf(body_id),
    ));
}
