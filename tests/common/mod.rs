//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::ecs::system::RunSystemOnce;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use orrery::assets::{FallbackTexture, SlotStatus, TextureBatch, fallback_image};
use orrery::controls::ControlState;
use orrery::orbit::{OrbitKind, OrbitPivot};
use orrery::registry::{BodyRegistry, BodySpec};
use orrery::render::bodies::spawn_solar_system;
use orrery::render::lighting::LightingSettings;
use orrery::render::orbits::OrbitPathSettings;
use orrery::types::SimulationClock;

/// Central body plus one planet with the reference rates:
/// orbit radius 50, orbit speed 0.01, rotation speed 0.03.
pub fn two_body_registry() -> BodyRegistry {
    BodyRegistry::new(vec![
        BodySpec::new("Central", 10.0, "central.png", 0.0, 0.005, 0.0),
        BodySpec::new("BodyA", 2.0, "body_a.png", 50.0, 0.03, 0.01),
    ])
    .expect("two-body fixture is valid")
}

/// Four bodies: a plain planet, one with a satellite and one with a ring.
pub fn mixed_registry() -> BodyRegistry {
    BodyRegistry::new(vec![
        BodySpec::new("Central", 10.0, "central.png", 0.0, 0.005, 0.0),
        BodySpec::new("Plain", 2.0, "plain.png", 30.0, 0.02, 0.02),
        BodySpec::new("Mooned", 4.0, "mooned.png", 60.0, 0.03, 0.01).with_satellite("moon.png"),
        BodySpec::new("Ringed", 8.0, "ringed.png", 90.0, 0.04, 0.004)
            .with_ring(9.0, 16.0, "ring.png"),
    ])
    .expect("mixed fixture is valid")
}

/// Headless app holding everything the scene builder and animation
/// systems read, with every texture resolved.
///
/// Paths listed in `failed` resolve to the fallback texture.
pub fn scene_app(registry: BodyRegistry, failed: &[&str]) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .init_resource::<Assets<Image>>()
        .init_resource::<LightingSettings>()
        .init_resource::<OrbitPathSettings>()
        .init_resource::<SimulationClock>()
        .insert_resource(GlobalAmbientLight::default())
        .insert_resource(ControlState::from_registry(&registry));

    let world = app.world_mut();
    let (fallback, batch) = {
        let mut images = world.resource_mut::<Assets<Image>>();
        let fallback = images.add(fallback_image());
        let mut batch =
            TextureBatch::request(registry.texture_paths(), |_| images.add(Image::default()));
        batch.poll(
            |slot| {
                if failed.contains(&slot.path()) {
                    SlotStatus::Failed("missing".to_string())
                } else {
                    SlotStatus::Ready
                }
            },
            &fallback,
        );
        (fallback, batch)
    };

    world.insert_resource(FallbackTexture(fallback));
    world.insert_resource(batch);
    world.insert_resource(registry);
    app
}

/// [`scene_app`] with the scene already built.
pub fn built_scene(registry: BodyRegistry) -> App {
    let mut app = scene_app(registry, &[]);
    app.world_mut()
        .run_system_once(spawn_solar_system)
        .expect("scene builder runs");
    app
}

/// Set the frame delta seen by the next animation step.
pub fn set_delta(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<SimulationClock>()
        .advance(secs);
}

/// Pivot of the primary body called `name`.
pub fn primary_pivot(app: &mut App, name: &str) -> (Entity, OrbitPivot) {
    let world = app.world_mut();
    let mut query = world.query::<(Entity, &OrbitPivot)>();
    query
        .iter(world)
        .find(|(_, p)| matches!(p.kind, OrbitKind::Primary { name: n } if n == name))
        .map(|(e, p)| (e, p.clone()))
        .unwrap_or_else(|| panic!("no pivot for {name}"))
}

