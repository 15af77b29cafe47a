//! UI module providing the egui settings panel.

pub mod icons;
pub mod panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::controls::ControlState;
use crate::types::AppState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    panel::loading_panel.run_if(in_state(AppState::Loading)),
                    panel::control_panel
                        .run_if(in_state(AppState::Running))
                        .run_if(resource_exists::<ControlState>),
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
