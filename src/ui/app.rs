//! Main application struct and eframe integration

use crate::ui::components::{PresetDetail, PresetList};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use tracing::info;

/// The playground window
pub struct PlaygroundApp {
    state: AppState,
    theme: Theme,
}

impl PlaygroundApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, theme: Theme) -> Self {
        theme.apply(&cc.egui_ctx);
        Self { state, theme }
    }

    /// Build without an eframe context, for headless use
    pub fn with_state(state: AppState, theme: Theme) -> Self {
        Self { state, theme }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(self.theme.bg_secondary).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Animation Playground")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    if let Some(error) = self.state.last_error.clone() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                                self.state.clear_error();
                            }
                            ui.label(RichText::new(error).color(self.theme.error));
                        });
                    }
                });
            });
    }

    /// Draw one frame; shared by `eframe::App::update` and UI tests
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.state.on_appear();

        self.show_header(ctx);

        SidePanel::left("preset_list")
            .resizable(true)
            .default_width(220.0)
            .min_width(160.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                PresetList::new(&mut self.state, &self.theme).show(ui);
            });

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                PresetDetail::new(&mut self.state, &self.theme).show(ui);
            });
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Animation Playground shutting down");
    }
}
