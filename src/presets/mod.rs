pub mod storage;
pub mod types;

pub use storage::PresetStore;
pub use types::{
    default_presented_text, format_speed, normalize_speed, parse_speed, AnimationPreset,
    PresetField,
};
