//! Preset list component
//!
//! Lists every preset whose curve resolves; presets with unknown curves are
//! never shown.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};
use uuid::Uuid;

/// Sidebar listing the presets
pub struct PresetList<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> PresetList<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        ui.label(
            RichText::new("Animations")
                .size(13.0)
                .strong()
                .color(self.theme.text_muted),
        );
        ui.add_space(self.theme.spacing_sm);

        let presets = self.state.visible_presets();
        let mut to_select: Option<Uuid> = None;
        let mut to_delete: Option<Uuid> = None;

        egui::ScrollArea::vertical()
            .id_salt("preset_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if presets.is_empty() {
                    ui.label(RichText::new("No animations").color(self.theme.text_muted));
                }

                for (preset, _) in &presets {
                    let selected = self.state.selected == Some(preset.id);

                    ui.horizontal(|ui| {
                        let row = ui.selectable_label(selected, &preset.title);
                        let row_label = format!("Preset: {}", preset.title);
                        row.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::SelectableLabel,
                                true,
                                &row_label,
                            )
                        });
                        if row.clicked() {
                            to_select = Some(preset.id);
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let delete = ui.small_button("🗑").on_hover_text("Delete");
                            let delete_label = format!("Delete {}", preset.title);
                            delete.widget_info(|| {
                                egui::WidgetInfo::labeled(
                                    egui::WidgetType::Button,
                                    true,
                                    &delete_label,
                                )
                            });
                            if delete.clicked() {
                                to_delete = Some(preset.id);
                            }
                        });
                    });
                }
            });

        if let Some(id) = to_select {
            self.state.select(id);
        }
        if let Some(id) = to_delete {
            self.state.delete(id);
        }
    }
}
