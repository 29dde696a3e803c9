//! Preset detail component
//!
//! Preview of the selected curve, in-place editing of the presented text,
//! the speed field and the generated code. Playback is left to egui's own
//! animation engine; this view only chooses duration and easing.

use crate::catalog::{Curve, Easing};
use crate::presets::AnimationPreset;
use crate::ui::components::CodePanel;
use crate::ui::state::{AppState, DetailFocus};
use crate::ui::theme::Theme;
use egui::emath::easing;
use egui::{self, Key, RichText};
use tracing::debug;

/// Easing egui should apply when previewing `curve`
pub fn preview_easing(curve: &Curve) -> fn(f32) -> f32 {
    match curve {
        Curve::Timing { easing: kind, .. } => match kind {
            Easing::EaseIn => easing::cubic_in,
            Easing::EaseOut => easing::cubic_out,
            Easing::EaseInOut => easing::cubic_in_out,
            Easing::Linear => easing::linear,
        },
        _ => match curve.damping_ratio() {
            Some(ratio) if ratio < 1.0 => easing::back_out,
            _ => easing::cubic_out,
        },
    }
}

/// Keep egui's keyboard focus in line with the requested focus
fn sync_focus(focus: &mut Option<DetailFocus>, field: DetailFocus, response: &egui::Response) {
    if response.gained_focus() {
        *focus = Some(field);
    } else if response.lost_focus() {
        if *focus == Some(field) {
            *focus = None;
        }
    } else if *focus == Some(field) && !response.has_focus() {
        response.request_focus();
    } else if *focus != Some(field) && response.has_focus() {
        response.surrender_focus();
    }
}

/// Detail view for the selected preset
pub struct PresetDetail<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> PresetDetail<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let Some(preset) = self.state.selected_preset() else {
            self.show_placeholder(ui);
            return;
        };
        // Presets with unknown curves never reach the detail view
        let Some(run_curve) = preset.effective_curve() else {
            self.show_placeholder(ui);
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("preset_detail")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing);
                ui.heading(RichText::new(&preset.title).color(self.theme.text_primary));
                ui.label(
                    RichText::new(run_curve.describe())
                        .small()
                        .color(self.theme.text_muted),
                );
                ui.add_space(self.theme.spacing);

                self.show_preview(ui, &preset, &run_curve);

                if !self.state.detail.is_editing_presented_text {
                    self.show_controls(ui);
                }

                if self.state.detail.focus.is_some() || self.state.detail.is_editing_presented_text {
                    ui.horizontal(|ui| {
                        let done = ui.button("Done");
                        done.widget_info(|| {
                            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Done")
                        });
                        if done.clicked() {
                            self.state.done();
                        }
                    });
                }

                if let Some(error) = &self.state.last_error {
                    ui.label(RichText::new(error).color(self.theme.error));
                }

                if !self.state.detail.is_editing_presented_text {
                    ui.add_space(self.theme.spacing_lg);
                    let code = crate::codegen::render(&preset);
                    if CodePanel::new(&code, self.theme).show(ui) {
                        debug!("Copied code for {}", preset.title);
                        self.state.last_copied = Some(code);
                    } else if self.state.last_copied.as_deref() != Some(code.as_str()) {
                        self.state.last_copied = None;
                    }
                    if self.state.last_copied.is_some() {
                        ui.label(RichText::new("Copied").small().color(self.theme.text_muted));
                    }
                }
            });
    }

    fn show_placeholder(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Select an item").color(self.theme.text_muted));
        });
    }

    fn show_preview(&mut self, ui: &mut egui::Ui, preset: &AnimationPreset, run_curve: &Curve) {
        let detail = &self.state.detail;
        let progress = ui.ctx().animate_bool_with_time(
            egui::Id::new(("preview", preset.id)),
            detail.is_showing,
            run_curve.nominal_duration() as f32,
        );

        if progress <= 0.0 && !detail.is_showing {
            return;
        }

        let eased = if detail.is_just_editing_presented_text {
            1.0
        } else {
            preview_easing(run_curve)(progress)
        };

        ui.scope(|ui| {
            ui.set_opacity(eased.clamp(0.0, 1.0));
            ui.horizontal(|ui| {
                if self.state.detail.is_editing_presented_text {
                    let mut text = preset.presented_text.clone();
                    let edit = egui::TextEdit::singleline(&mut text)
                        .hint_text("Presented Text")
                        .desired_width(260.0)
                        .id(egui::Id::new("presented_text_input"));
                    let response = ui.add(edit);
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Presented text")
                    });

                    if response.changed() {
                        self.state.set_presented_text(text);
                    }
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    sync_focus(&mut self.state.detail.focus, DetailFocus::PresentedText, &response);
                    if submitted {
                        self.state.toggle_presented_text_editing();
                    }
                } else {
                    let size = 20.0 * (0.6 + 0.4 * eased);
                    ui.label(
                        RichText::new(preset.display_text())
                            .size(size)
                            .color(self.theme.text_primary),
                    );
                }

                let (icon, label) = if self.state.detail.is_editing_presented_text {
                    ("✔", "Commit presented text")
                } else {
                    ("✏", "Edit presented text")
                };
                let toggle = ui.button(icon);
                toggle.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label)
                });
                if toggle.clicked() {
                    self.state.toggle_presented_text_editing();
                }
            });
        });
        ui.add_space(self.theme.spacing_sm);
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let try_button = ui.button("Try Animation");
        try_button.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Try Animation")
        });
        if try_button.clicked() {
            self.state.try_animation();
        }

        ui.horizontal(|ui| {
            ui.label("Animation Speed: ");
            let mut input = self.state.detail.speed_input.clone();
            let edit = egui::TextEdit::singleline(&mut input)
                .hint_text("Default")
                .desired_width(80.0)
                .id(egui::Id::new("speed_input"));
            let response = ui.add(edit);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Animation speed")
            });

            if response.changed() {
                self.state.set_speed_input(input);
            }
            sync_focus(&mut self.state.detail.focus, DetailFocus::Speed, &response);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CurveId;

    #[test]
    fn test_preview_easing_for_timing_curves() {
        let linear = preview_easing(&CurveId::Linear.curve());
        assert_eq!(linear(0.5), 0.5);
        let ease_in = preview_easing(&CurveId::EaseIn.curve());
        assert!(ease_in(0.5) < 0.5);
    }

    #[test]
    fn test_underdamped_springs_overshoot() {
        let bouncy = preview_easing(&CurveId::Bouncy.curve());
        let peak = (1..100).map(|i| bouncy(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);

        let smooth = preview_easing(&CurveId::Smooth.curve());
        assert!((1..100).all(|i| smooth(i as f32 / 100.0) <= 1.0));
    }
}
