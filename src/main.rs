//! Orrery - Animated Solar System
//!
//! A desktop application showing the Sun and planets revolving and
//! spinning, with live speed and lighting controls.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use orrery::assets::TextureLoaderPlugin;
use orrery::camera::CameraPlugin;
use orrery::controls::ControlsPlugin;
use orrery::orbit::OrbitPlugin;
use orrery::registry::BodyRegistry;
use orrery::render::RenderPlugin;
use orrery::time::TimePlugin;
use orrery::types::AppState;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((EguiPlugin::default(), PanOrbitCameraPlugin))
        .init_state::<AppState>()
        // Insert resources before plugins that depend on them
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(BodyRegistry::default())
        .add_plugins((
            TextureLoaderPlugin,
            ControlsPlugin,
            TimePlugin,
            OrbitPlugin,
            RenderPlugin,
            CameraPlugin,
            UiPlugin,
        ))
        .run();
}
