//! GUI implementation with egui/eframe
//!
//! The presentation layer: a preset list, a detail view with the preview and
//! the generated code.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::PlaygroundApp;
pub use components::{CodePanel, PresetDetail, PresetList};
pub use state::{AppState, DetailFocus, DetailState};
pub use theme::Theme;

use crate::config::PlaygroundConfig;

/// Run the playground window
pub fn run(config: PlaygroundConfig, state: AppState) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([520.0, 360.0])
            .with_title("Animation Playground"),
        ..Default::default()
    };

    let theme = Theme::from_choice(config.theme);
    eframe::run_native(
        "Animation Playground",
        options,
        Box::new(move |cc| Ok(Box::new(PlaygroundApp::new(cc, state, theme)))),
    )
}
