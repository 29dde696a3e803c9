use crate::catalog::{self, Curve, CurveId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presented text used when none has been entered
pub fn default_presented_text(title: &str) -> String {
    format!("Your Content via {}", title)
}

/// Normalize a speed multiplier: zero, negative and non-finite mean "absent"
pub fn normalize_speed(speed: Option<f64>) -> Option<f64> {
    speed.filter(|s| s.is_finite() && *s > 0.0)
}

/// Parse the speed text field.
///
/// Empty or unparseable input, and any value that is not a positive finite
/// number, yields `None`.
pub fn parse_speed(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    normalize_speed(trimmed.parse::<f64>().ok())
}

/// Text shown in the speed field for a stored multiplier
pub fn format_speed(speed: Option<f64>) -> String {
    match speed {
        Some(speed) => format!("{:?}", speed),
        None => String::new(),
    }
}

/// A persisted animation preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreset {
    pub id: Uuid,
    pub title: String,
    /// Catalog tag, kept raw so presets with unknown curves survive a load
    pub curve_id: String,
    #[serde(default)]
    pub speed: Option<f64>,
    pub presented_text: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl AnimationPreset {
    /// Create a preset for a concrete curve, classified through the catalog
    pub fn new(title: impl Into<String>, curve: &Curve) -> Self {
        let title = title.into();
        let presented_text = default_presented_text(&title);
        Self::with_presented_text(title, curve, presented_text)
    }

    pub fn with_presented_text(
        title: impl Into<String>,
        curve: &Curve,
        presented_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            curve_id: catalog::classify(curve).as_str().to_string(),
            speed: None,
            presented_text: presented_text.into(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style speed setter; invalid multipliers are dropped
    pub fn with_speed(mut self, speed: Option<f64>) -> Self {
        self.speed = normalize_speed(speed);
        self
    }

    /// The seed preset for a catalog entry
    pub fn seed(id: CurveId) -> Self {
        Self::new(id.title(), &id.curve())
    }

    /// The catalog identifier, `None` when the tag is unknown
    pub fn curve(&self) -> Option<CurveId> {
        self.curve_id.parse().ok()
    }

    /// The curve with the speed multiplier applied
    pub fn effective_curve(&self) -> Option<Curve> {
        catalog::effective_curve(&self.curve_id, self.speed)
    }

    /// Presented text, or the default greeting when empty
    pub fn display_text(&self) -> String {
        if self.presented_text.is_empty() {
            default_presented_text(&self.title)
        } else {
            self.presented_text.clone()
        }
    }

    pub(crate) fn apply(&mut self, field: PresetField) {
        match field {
            PresetField::Title(title) => self.title = title,
            PresetField::Speed(speed) => self.speed = normalize_speed(speed),
            PresetField::PresentedText(text) => self.presented_text = text,
        }
    }
}

/// One editable field of a preset with its new value
#[derive(Debug, Clone, PartialEq)]
pub enum PresetField {
    Title(String),
    Speed(Option<f64>),
    PresentedText(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed("2"), Some(2.0));
        assert_eq!(parse_speed(" 0.5 "), Some(0.5));
        assert_eq!(parse_speed("0"), None);
        assert_eq!(parse_speed("0.0"), None);
        assert_eq!(parse_speed(""), None);
        assert_eq!(parse_speed("fast"), None);
        assert_eq!(parse_speed("-1"), None);
        assert_eq!(parse_speed("inf"), None);
        assert_eq!(parse_speed("NaN"), None);
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(Some(2.0)), "2.0");
        assert_eq!(format_speed(Some(0.25)), "0.25");
        assert_eq!(format_speed(None), "");
    }

    #[test]
    fn test_new_preset_defaults() {
        let preset = AnimationPreset::new("Demo", &CurveId::Linear.curve());
        assert_eq!(preset.curve_id, "linear");
        assert_eq!(preset.presented_text, "Your Content via Demo");
        assert_eq!(preset.speed, None);
        assert_eq!(preset.curve(), Some(CurveId::Linear));
    }

    #[test]
    fn test_unmapped_curve_is_stored_as_default() {
        let preset = AnimationPreset::new("Custom", &Curve::spring(2.0, 0.1, 0.0));
        assert_eq!(preset.curve_id, "default");
    }

    #[test]
    fn test_zero_speed_is_absent() {
        let preset = AnimationPreset::seed(CurveId::Snappy).with_speed(Some(0.0));
        assert_eq!(preset.speed, None);

        let mut preset = preset.with_speed(Some(1.5));
        assert_eq!(preset.speed, Some(1.5));
        preset.apply(PresetField::Speed(Some(0.0)));
        assert_eq!(preset.speed, None);
    }

    #[test]
    fn test_display_text_falls_back() {
        let mut preset = AnimationPreset::seed(CurveId::Smooth);
        preset.apply(PresetField::PresentedText(String::new()));
        assert_eq!(preset.display_text(), "Your Content via Smooth");
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "title": "Old",
            "curve_id": "wobbly",
            "presented_text": "hi"
        }"#;
        let preset: AnimationPreset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.speed, None);
        assert_eq!(preset.curve(), None);
        assert_eq!(preset.effective_curve(), None);
    }
}
