//! Control reaction tests: path visibility and ambient lighting.

mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use orrery::controls::{
    ControlEdit, ControlReactions, ControlState, ControlsPlugin, apply_ambient_light,
    apply_path_visibility,
};
use orrery::render::lighting::LightingSettings;
use orrery::render::{CelestialBody, OrbitPath};

use common::{built_scene, mixed_registry};

fn path_states(app: &mut App) -> Vec<(Entity, Visibility)> {
    let world = app.world_mut();
    let mut paths: Vec<_> = world
        .query_filtered::<(Entity, &Visibility), With<OrbitPath>>()
        .iter(world)
        .map(|(e, v)| (e, *v))
        .collect();
    paths.sort_by_key(|(e, _)| *e);
    paths
}

fn edit(app: &mut App, edit: ControlEdit) {
    app.world_mut().resource_mut::<ControlState>().apply(edit);
}

#[test]
fn test_hiding_paths_keeps_geometry_and_bodies() {
    let mut app = built_scene(mixed_registry());
    let shown = path_states(&mut app);
    assert_eq!(shown.len(), 3);

    edit(&mut app, ControlEdit::ShowPaths(false));
    app.world_mut().run_system_once(apply_path_visibility).unwrap();

    let hidden = path_states(&mut app);
    assert_eq!(hidden.len(), shown.len());
    assert!(hidden.iter().all(|(_, v)| *v == Visibility::Hidden));

    let world = app.world_mut();
    let bodies_visible = world
        .query_filtered::<&Visibility, With<CelestialBody>>()
        .iter(world)
        .all(|v| *v != Visibility::Hidden);
    assert!(bodies_visible);
}

#[test]
fn test_showing_paths_restores_same_entities() {
    let mut app = built_scene(mixed_registry());
    let shown = path_states(&mut app);

    edit(&mut app, ControlEdit::ShowPaths(false));
    app.world_mut().run_system_once(apply_path_visibility).unwrap();
    edit(&mut app, ControlEdit::ShowPaths(true));
    app.world_mut().run_system_once(apply_path_visibility).unwrap();

    assert_eq!(path_states(&mut app), shown);
}

#[test]
fn test_real_view_switches_ambient_light() {
    let mut app = built_scene(mixed_registry());
    app.world_mut().run_system_once(apply_ambient_light).unwrap();
    assert_eq!(app.world().resource::<GlobalAmbientLight>().brightness, 0.0);

    edit(&mut app, ControlEdit::RealView(false));
    app.world_mut().run_system_once(apply_ambient_light).unwrap();
    let expected = app.world().resource::<LightingSettings>().ambient_brightness;
    assert_eq!(
        app.world().resource::<GlobalAmbientLight>().brightness,
        expected
    );

    edit(&mut app, ControlEdit::RealView(true));
    app.world_mut().run_system_once(apply_ambient_light).unwrap();
    assert_eq!(app.world().resource::<GlobalAmbientLight>().brightness, 0.0);
}

#[test]
fn test_paths_spawn_hidden_when_toggle_is_off() {
    let mut app = common::scene_app(mixed_registry(), &[]);
    edit(&mut app, ControlEdit::ShowPaths(false));
    app.world_mut()
        .run_system_once(orrery::render::bodies::spawn_solar_system)
        .unwrap();

    assert!(
        path_states(&mut app)
            .iter()
            .all(|(_, v)| *v == Visibility::Hidden)
    );
}

#[test]
fn test_panel_edit_applies_within_the_same_frame() {
    let mut app = built_scene(mixed_registry());
    app.add_plugins(ControlsPlugin);

    // Stands in for the panel pass, which also runs in `PostUpdate`.
    let click_hide_paths = |mut controls: ResMut<ControlState>, mut clicked: Local<bool>| {
        if !*clicked {
            controls.apply(ControlEdit::ShowPaths(false));
            *clicked = true;
        }
    };
    app.add_systems(PostUpdate, click_hide_paths.before(ControlReactions));

    app.update();

    let paths = path_states(&mut app);
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|(_, v)| *v == Visibility::Hidden));
}
