//! Code section: the generated SwiftUI snippet with a copy button

use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct CodePanel<'a> {
    code: &'a str,
    theme: &'a Theme,
}

impl<'a> CodePanel<'a> {
    pub fn new(code: &'a str, theme: &'a Theme) -> Self {
        Self { code, theme }
    }

    /// Returns true when the copy button was clicked
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut copied = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Code").strong().color(self.theme.text_muted));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copy = ui.button("📋").on_hover_text("Copy to clipboard");
                copy.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Copy code")
                });
                if copy.clicked() {
                    ui.ctx().copy_text(self.code.to_string());
                    copied = true;
                }
            });
        });

        egui::Frame::none()
            .fill(self.theme.code_bg)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("generated_code")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        let label = ui.label(
                            RichText::new(self.code)
                                .monospace()
                                .color(self.theme.text_secondary),
                        );
                        label.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Label,
                                true,
                                "Generated code",
                            )
                        });
                    });
            });

        copied
    }
}
