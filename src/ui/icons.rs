//! Phosphor icon definitions for the panel.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Real view (sunlight only)
pub const REAL_VIEW: &str = egui_phosphor::regular::SUN;
/// Orbit path toggle
pub const PATHS: &str = egui_phosphor::regular::CIRCLE_DASHED;
/// Speed sliders
pub const SPEED: &str = egui_phosphor::regular::GAUGE;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
pub const SHOW: &str = egui_phosphor::regular::EYE;
pub const HIDE: &str = egui_phosphor::regular::EYE_SLASH;
/// Texture loading in progress
pub const LOADING: &str = egui_phosphor::regular::HOURGLASS;
