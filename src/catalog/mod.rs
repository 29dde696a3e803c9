//! Animation curve catalog
//!
//! A fixed set of named curves with an exhaustive two-way conversion table
//! between `CurveId` tags and concrete `Curve` values.

pub mod curve;

pub use curve::{Curve, Easing};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog curve, persisted as its camelCase tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveId {
    Default,
    Bouncy,
    EaseIn,
    EaseInOut,
    EaseOut,
    InteractiveSpring,
    InterpolatingSpring,
    Linear,
    Snappy,
    Smooth,
    Spring,
}

/// The two-way conversion table. Every `CurveId` appears exactly once and
/// every curve is distinct, so lookups in both directions are unambiguous.
const CATALOG: [(CurveId, Curve); 11] = [
    (CurveId::Default, Curve::spring(0.55, 1.0, 0.0)),
    (CurveId::Bouncy, Curve::spring(0.5, 0.7, 0.0)),
    (CurveId::EaseIn, Curve::timing(Easing::EaseIn, 0.35)),
    (CurveId::EaseInOut, Curve::timing(Easing::EaseInOut, 0.35)),
    (CurveId::EaseOut, Curve::timing(Easing::EaseOut, 0.35)),
    (CurveId::InteractiveSpring, Curve::spring(0.15, 0.86, 0.25)),
    (
        CurveId::InterpolatingSpring,
        Curve::interpolating_spring(1.0, 170.0, 15.0, 0.0),
    ),
    (CurveId::Linear, Curve::timing(Easing::Linear, 0.35)),
    (CurveId::Snappy, Curve::spring(0.5, 0.85, 0.0)),
    (CurveId::Smooth, Curve::spring(0.5, 1.0, 0.0)),
    (CurveId::Spring, Curve::spring(0.55, 0.825, 0.0)),
];

impl CurveId {
    /// All identifiers in declaration order
    pub const ALL: [CurveId; 11] = [
        CurveId::Default,
        CurveId::Bouncy,
        CurveId::EaseIn,
        CurveId::EaseInOut,
        CurveId::EaseOut,
        CurveId::InteractiveSpring,
        CurveId::InterpolatingSpring,
        CurveId::Linear,
        CurveId::Snappy,
        CurveId::Smooth,
        CurveId::Spring,
    ];

    /// The persisted string tag
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveId::Default => "default",
            CurveId::Bouncy => "bouncy",
            CurveId::EaseIn => "easeIn",
            CurveId::EaseInOut => "easeInOut",
            CurveId::EaseOut => "easeOut",
            CurveId::InteractiveSpring => "interactiveSpring",
            CurveId::InterpolatingSpring => "interpolatingSpring",
            CurveId::Linear => "linear",
            CurveId::Snappy => "snappy",
            CurveId::Smooth => "smooth",
            CurveId::Spring => "spring",
        }
    }

    /// Display title: the tag with its first character upper-cased
    pub fn title(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The concrete curve for this identifier
    pub fn curve(&self) -> Curve {
        CATALOG
            .iter()
            .find(|(id, _)| id == self)
            .map(|(_, curve)| *curve)
            .unwrap_or(CATALOG[0].1)
    }

    /// Classify a concrete curve.
    ///
    /// Curves that are not in the catalog, including speed-scaled ones,
    /// fall back to `CurveId::Default`.
    pub fn from_curve(curve: &Curve) -> CurveId {
        CATALOG
            .iter()
            .find(|(_, known)| known == curve)
            .map(|(id, _)| *id)
            .unwrap_or(CurveId::Default)
    }

    /// Member expression used in generated SwiftUI code, e.g. `.easeInOut`
    pub fn swift_expression(&self) -> String {
        format!(".{}", self.as_str())
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag does not name a catalog curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurve(pub String);

impl fmt::Display for UnknownCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown animation curve: {}", self.0)
    }
}

impl std::error::Error for UnknownCurve {}

impl FromStr for CurveId {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCurve(s.to_string()))
    }
}

/// Resolve a persisted tag to its curve, `None` when unrecognized
pub fn resolve(tag: &str) -> Option<Curve> {
    tag.parse::<CurveId>().ok().map(|id| id.curve())
}

/// Classify a concrete curve, falling back to `CurveId::Default`
pub fn classify(curve: &Curve) -> CurveId {
    CurveId::from_curve(curve)
}

/// Resolve a tag and apply an optional speed multiplier
pub fn effective_curve(tag: &str, speed: Option<f64>) -> Option<Curve> {
    let curve = resolve(tag)?;
    Some(match speed {
        Some(multiplier) => curve.speed(multiplier),
        None => curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_stable() {
        for id in CurveId::ALL {
            let curve = resolve(id.as_str());
            assert!(curve.is_some(), "{} should resolve", id);
            let reclassified = classify(&curve.unwrap());
            assert_eq!(reclassified, id);
            assert_eq!(resolve(reclassified.as_str()), curve);
        }
    }

    #[test]
    fn test_catalog_is_exhaustive_and_distinct() {
        for (i, (id, curve)) in CATALOG.iter().enumerate() {
            assert_eq!(*id, CurveId::ALL[i]);
            for (other_id, other) in CATALOG.iter().skip(i + 1) {
                assert_ne!(curve, other, "{} and {} share a curve", id, other_id);
            }
        }
    }

    #[test]
    fn test_unknown_tags_do_not_resolve() {
        assert_eq!(resolve("wobbly"), None);
        assert_eq!(resolve("EaseIn"), None);
        assert_eq!(resolve(""), None);
        assert!("wobbly".parse::<CurveId>().is_err());
    }

    #[test]
    fn test_unmapped_curve_falls_back_to_default() {
        let custom = Curve::timing(Easing::EaseIn, 1.25);
        assert_eq!(classify(&custom), CurveId::Default);

        let scaled = CurveId::Bouncy.curve().speed(2.0);
        assert_eq!(classify(&scaled), CurveId::Default);
    }

    #[test]
    fn test_titles() {
        assert_eq!(CurveId::Default.title(), "Default");
        assert_eq!(CurveId::EaseInOut.title(), "EaseInOut");
        assert_eq!(CurveId::InterpolatingSpring.title(), "InterpolatingSpring");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&CurveId::InteractiveSpring).unwrap();
        assert_eq!(json, "\"interactiveSpring\"");
        let id: CurveId = serde_json::from_str("\"easeOut\"").unwrap();
        assert_eq!(id, CurveId::EaseOut);
    }

    #[test]
    fn test_effective_curve() {
        assert_eq!(effective_curve("linear", None), Some(CurveId::Linear.curve()));
        assert_eq!(
            effective_curve("linear", Some(2.0)),
            Some(Curve::timing(Easing::Linear, 0.175))
        );
        assert_eq!(effective_curve("nope", Some(2.0)), None);
    }

    #[test]
    fn test_swift_expression() {
        assert_eq!(CurveId::Linear.swift_expression(), ".linear");
        assert_eq!(CurveId::Default.swift_expression(), ".default");
    }
}
