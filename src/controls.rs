//! Live, user-adjustable simulation parameters.
//!
//! [`ControlState`] is written only by the settings panel and read by the
//! animation step each frame. The reaction systems here push the lighting
//! and path toggles into the scene when the state changes.

use bevy::camera::visibility::VisibilitySystems;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy_egui::EguiPostUpdateSet;

use crate::registry::BodyRegistry;
use crate::render::lighting::LightingSettings;
use crate::render::orbits::OrbitPath;

/// Lowest speed multiplier a control accepts.
pub const MIN_SPEED: f32 = 0.0;
/// Highest speed multiplier a control accepts.
pub const MAX_SPEED: f32 = 5.0;
/// Slider granularity for per-body multipliers.
pub const SPEED_STEP: f32 = 0.1;

/// Systems pushing [`ControlState`] toggles into the scene.
///
/// Runs in `PostUpdate` after the settings panel pass and before
/// visibility propagation, so a click shows up in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlReactions;

/// Plugin keeping scene toggles in sync with [`ControlState`].
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            ControlReactions
                .after(EguiPostUpdateSet::EndPass)
                .before(VisibilitySystems::VisibilityPropagate),
        )
        .add_systems(Startup, init_control_state)
        .add_systems(
            PostUpdate,
            (apply_ambient_light, apply_path_visibility)
                .in_set(ControlReactions)
                .run_if(resource_exists_and_changed::<ControlState>),
        );
    }
}

/// Speed multiplier for one primary body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpeed {
    pub name: &'static str,
    /// Accent color for the body's slider label.
    pub tint: Option<Color>,
    pub multiplier: f32,
}

/// A single change requested by the settings panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEdit {
    RealView(bool),
    ShowPaths(bool),
    ShowBodySpeeds(bool),
    GlobalSpeed(f32),
    BodySpeed { name: &'static str, speed: f32 },
}

/// Current control values.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ControlState {
    /// Scales every orbit and self-spin rate.
    global_speed: f32,
    /// One entry per primary body, in registry order.
    body_speeds: Vec<BodySpeed>,
    /// When set, ambient light is off and bodies are lit by the sun only.
    pub real_view: bool,
    /// Whether orbit path curves are drawn.
    pub show_paths: bool,
    /// Whether the per-body sliders are shown in the panel.
    pub show_body_speeds: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            global_speed: 1.0,
            body_speeds: Vec::new(),
            real_view: true,
            show_paths: true,
            show_body_speeds: true,
        }
    }
}

impl ControlState {
    /// Default controls with one speed slider per primary body.
    pub fn from_registry(registry: &BodyRegistry) -> Self {
        Self {
            body_speeds: registry
                .primaries()
                .iter()
                .map(|body| BodySpeed {
                    name: body.name,
                    tint: body.tint,
                    multiplier: 1.0,
                })
                .collect(),
            ..default()
        }
    }

    pub fn global_speed(&self) -> f32 {
        self.global_speed
    }

    /// Set the global multiplier, clamped to the control range.
    pub fn set_global_speed(&mut self, speed: f32) {
        self.global_speed = clamp_speed(speed);
    }

    pub fn body_speeds(&self) -> &[BodySpeed] {
        &self.body_speeds
    }

    /// Multiplier for `name`, or `None` if the body has no speed control.
    pub fn body_speed(&self, name: &str) -> Option<f32> {
        self.body_speeds
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.multiplier)
    }

    /// Set the multiplier for `name`. Returns false if the body has no
    /// speed control.
    pub fn set_body_speed(&mut self, name: &str, speed: f32) -> bool {
        match self.body_speeds.iter_mut().find(|b| b.name == name) {
            Some(entry) => {
                entry.multiplier = snap_speed(speed);
                true
            }
            None => false,
        }
    }

    /// Apply one panel edit.
    pub fn apply(&mut self, edit: ControlEdit) {
        debug!("Control changed: {edit:?}");
        match edit {
            ControlEdit::RealView(on) => self.real_view = on,
            ControlEdit::ShowPaths(on) => self.show_paths = on,
            ControlEdit::ShowBodySpeeds(on) => self.show_body_speeds = on,
            ControlEdit::GlobalSpeed(speed) => self.set_global_speed(speed),
            ControlEdit::BodySpeed { name, speed } => {
                if !self.set_body_speed(name, speed) {
                    warn!("No speed control for body {name}");
                }
            }
        }
    }
}

/// Clamp to the control range. NaN becomes the minimum.
fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return MIN_SPEED;
    }
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Clamp to the control range and snap to the per-body slider step.
fn snap_speed(speed: f32) -> f32 {
    clamp_speed((speed / SPEED_STEP).round() * SPEED_STEP)
}

fn init_control_state(mut commands: Commands, registry: Res<BodyRegistry>) {
    commands.insert_resource(ControlState::from_registry(&registry));
}

/// Ambient brightness for the current Real view setting.
pub fn ambient_brightness(controls: &ControlState, lighting: &LightingSettings) -> f32 {
    if controls.real_view {
        0.0
    } else {
        lighting.ambient_brightness
    }
}

/// Switch ambient light on or off to follow the Real view toggle.
pub fn apply_ambient_light(
    controls: Res<ControlState>,
    lighting: Res<LightingSettings>,
    mut ambient: ResMut<GlobalAmbientLight>,
) {
    let brightness = ambient_brightness(&controls, &lighting);
    if ambient.brightness != brightness {
        ambient.brightness = brightness;
        debug!("Ambient light brightness set to {brightness}");
    }
}

/// Visibility orbit paths should have under `controls`.
pub fn path_visibility(controls: &ControlState) -> Visibility {
    if controls.show_paths {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Show or hide every orbit path without touching its geometry.
pub fn apply_path_visibility(
    controls: Res<ControlState>,
    mut paths: Query<&mut Visibility, With<OrbitPath>>,
) {
    let target = path_visibility(&controls);
    for mut visibility in &mut paths {
        visibility.set_if_neq(target);
    }
}
