//! Application state management
//!
//! `AppState` owns the preset store handle plus the transient, view-local
//! flags of the detail view. None of the flags are persisted.

use crate::catalog::Curve;
use crate::codegen;
use crate::error::Result;
use crate::presets::{format_speed, AnimationPreset, PresetField, PresetStore};
use tracing::{debug, warn};
use uuid::Uuid;

/// Field of the detail view that should hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    PresentedText,
    Speed,
}

/// Transient state of the detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    /// Preview text is shown
    pub is_showing: bool,
    /// Presented text is being edited in place
    pub is_editing_presented_text: bool,
    /// Editing just ended; the preview text appears without a transition
    pub is_just_editing_presented_text: bool,
    /// Raw contents of the speed field
    pub speed_input: String,
    pub focus: Option<DetailFocus>,
}

/// Central application state
pub struct AppState {
    /// Preset store (shared handle)
    pub store: PresetStore,

    /// Currently selected preset
    pub selected: Option<Uuid>,

    /// Detail view flags
    pub detail: DetailState,

    /// Seed the store on first appearance
    pub seed_on_start: bool,

    /// Last error message shown to the user
    pub last_error: Option<String>,

    /// Code most recently copied from the selected preset
    pub last_copied: Option<String>,

    appeared: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PresetStore::in_memory())
    }
}

impl AppState {
    pub fn new(store: PresetStore) -> Self {
        Self {
            store,
            selected: None,
            detail: DetailState::default(),
            seed_on_start: true,
            last_error: None,
            last_copied: None,
            appeared: false,
        }
    }

    pub fn without_seeding(mut self) -> Self {
        self.seed_on_start = false;
        self
    }

    /// Record a failed store operation for display
    fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Preset store error: {}", e);
                self.last_error = Some(e.user_message());
                None
            }
        }
    }

    /// Called when the list first appears: seeds an empty store once
    pub fn on_appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;

        if self.seed_on_start {
            let result = self.store.seed_if_empty();
            self.report(result);
        }
    }

    /// Presets shown in the list, with their resolved curves
    pub fn visible_presets(&self) -> Vec<(AnimationPreset, Curve)> {
        self.store.visible()
    }

    pub fn selected_preset(&self) -> Option<AnimationPreset> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Select a preset; switching presets hides the preview
    pub fn select(&mut self, id: Uuid) {
        if self.selected == Some(id) {
            return;
        }

        let speed = self.store.get(id).and_then(|p| p.speed);
        self.selected = Some(id);
        self.last_copied = None;
        self.detail = DetailState {
            speed_input: format_speed(speed),
            ..Default::default()
        };
        debug!("Selected preset {}", id);
    }

    /// The curve the preview runs with, speed applied
    pub fn run_curve(&self) -> Option<Curve> {
        self.selected_preset().and_then(|p| p.effective_curve())
    }

    /// "Try Animation": drop focus and toggle the preview
    pub fn try_animation(&mut self) {
        self.detail.focus = None;
        self.detail.is_just_editing_presented_text = false;
        self.detail.is_showing = !self.detail.is_showing;
    }

    /// Pencil/checkmark button: start editing, or commit the edit
    pub fn toggle_presented_text_editing(&mut self) {
        if self.detail.is_editing_presented_text {
            self.commit_presented_text();
        } else {
            self.detail.is_editing_presented_text = true;
            self.detail.is_just_editing_presented_text = false;
            self.detail.focus = Some(DetailFocus::PresentedText);
        }
    }

    fn commit_presented_text(&mut self) {
        self.detail.focus = None;
        if let Some(id) = self.selected {
            let result = self.store.commit_presented_text(id);
            self.report(result);
        }
        if self.detail.is_editing_presented_text {
            self.detail.is_just_editing_presented_text = true;
        }
        self.detail.is_editing_presented_text = false;
    }

    pub fn set_presented_text(&mut self, text: String) {
        if let Some(id) = self.selected {
            let result = self.store.update(id, PresetField::PresentedText(text));
            self.report(result);
        }
    }

    pub fn set_title(&mut self, title: String) {
        if let Some(id) = self.selected {
            let result = self.store.update(id, PresetField::Title(title));
            self.report(result);
        }
    }

    /// Speed field edited; the raw text stays in the field, the store gets
    /// the parsed multiplier
    pub fn set_speed_input(&mut self, input: String) {
        if let Some(id) = self.selected {
            let result = self.store.set_speed_input(id, &input);
            self.report(result);
        }
        self.detail.speed_input = input;
    }

    /// "Done": release focus and finish any text edit
    pub fn done(&mut self) {
        self.detail.focus = None;
        if self.detail.is_editing_presented_text {
            self.commit_presented_text();
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        let result = self.store.delete(id);
        if self.report(result) == Some(true) && self.selected == Some(id) {
            self.selected = None;
            self.detail = DetailState::default();
        }
    }

    /// Generated SwiftUI code for the selected preset
    pub fn code(&self) -> Option<String> {
        self.selected_preset().map(|p| codegen::render(&p))
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
