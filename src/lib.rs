//! Animation Playground
//!
//! Pick a named animation curve, preview it, tune its speed and copy the
//! SwiftUI code that reproduces it. Presets are kept in a local JSON store.

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod presets;
pub mod ui;

pub use catalog::{classify, effective_curve, resolve, Curve, CurveId, Easing};
pub use config::PlaygroundConfig;
pub use error::{PlaygroundError, Result};
pub use presets::{AnimationPreset, PresetField, PresetStore};
