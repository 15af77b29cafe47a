//! The "Controls" settings panel and the loading indicator.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::assets::TextureBatch;
use crate::controls::{ControlEdit, ControlState, MAX_SPEED, MIN_SPEED, SPEED_STEP};
use crate::ui::icons;

/// Label of the master toggle for the per-body sliders.
pub fn body_speeds_button_label(visible: bool) -> String {
    if visible {
        format!("{} Hide Planet Speeds", icons::HIDE)
    } else {
        format!("{} Show Planet Speeds", icons::SHOW)
    }
}

/// Label color for a body's slider: its tint, or the default text color.
pub fn label_color(tint: Option<Color>) -> Option<egui::Color32> {
    tint.map(|tint| {
        let [r, g, b] = tint.to_srgba().to_u8_array_no_alpha();
        egui::Color32::from_rgb(r, g, b)
    })
}

fn global_slider(value: &mut f32) -> egui::Slider<'_> {
    egui::Slider::new(value, MIN_SPEED..=MAX_SPEED)
        .fixed_decimals(2)
        .suffix("x")
}

fn body_slider(value: &mut f32) -> egui::Slider<'_> {
    egui::Slider::new(value, MIN_SPEED..=MAX_SPEED)
        .step_by(SPEED_STEP as f64)
        .fixed_decimals(1)
        .suffix("x")
}

/// Render the panel and apply whatever the user changed.
///
/// Edits are collected first and applied afterwards so the control state
/// is only marked changed on frames where something actually changed.
pub fn control_panel(mut contexts: EguiContexts, mut controls: ResMut<ControlState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut edits = Vec::new();

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            let mut real_view = controls.real_view;
            if ui
                .checkbox(&mut real_view, format!("{} Real view", icons::REAL_VIEW))
                .on_hover_text("Light the scene from the sun only")
                .changed()
            {
                edits.push(ControlEdit::RealView(real_view));
            }

            let mut show_paths = controls.show_paths;
            if ui
                .checkbox(&mut show_paths, format!("{} Show paths", icons::PATHS))
                .changed()
            {
                edits.push(ControlEdit::ShowPaths(show_paths));
            }

            let mut global = controls.global_speed();
            ui.horizontal(|ui| {
                ui.label(format!("{} Global Speed", icons::SPEED));
                if ui.add(global_slider(&mut global)).changed() {
                    edits.push(ControlEdit::GlobalSpeed(global));
                }
            });

            ui.separator();

            if ui
                .button(body_speeds_button_label(controls.show_body_speeds))
                .clicked()
            {
                edits.push(ControlEdit::ShowBodySpeeds(!controls.show_body_speeds));
            }

            if controls.show_body_speeds {
                egui::Grid::new("body_speeds")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for body in controls.body_speeds() {
                            let mut speed = body.multiplier;
                            let mut label =
                                egui::RichText::new(format!("{} {}", icons::PLANET, body.name));
                            if let Some(color) = label_color(body.tint) {
                                label = label.color(color);
                            }
                            ui.label(label);
                            if ui.add(body_slider(&mut speed)).changed() {
                                edits.push(ControlEdit::BodySpeed {
                                    name: body.name,
                                    speed,
                                });
                            }
                            ui.end_row();
                        }
                    });
            }
        });

    for edit in edits {
        controls.apply(edit);
    }
}

/// Show texture loading progress until the scene is built.
pub fn loading_panel(mut contexts: EguiContexts, batch: Option<Res<TextureBatch>>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(batch) = batch else {
        return;
    };

    let (resolved, total) = batch.progress();
    let fraction = if total == 0 {
        1.0
    } else {
        resolved as f32 / total as f32
    };

    egui::Window::new("Loading")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(format!("{} Loading textures", icons::LOADING));
            ui.add(
                egui::ProgressBar::new(fraction)
                    .text(format!("{resolved} / {total}"))
                    .desired_width(220.0),
            );
        });
}
