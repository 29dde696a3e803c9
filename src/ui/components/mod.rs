//! UI components for the playground

mod code_panel;
mod preset_detail;
mod preset_list;

pub use code_panel::CodePanel;
pub use preset_detail::{preview_easing, PresetDetail};
pub use preset_list::PresetList;
