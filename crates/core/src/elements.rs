//! Production element categories and classification.
//!
//! LLM breakdowns and manual entry both supply free-text category labels
//! ("Props", "cast member", "Wardrobe/Costume", ...). [`classify`] maps those
//! onto a closed enumeration exactly once, at ingestion; downstream code only
//! ever sees [`ElementCategory`].

use serde::{Deserialize, Serialize};

/// Closed taxonomy for production elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Cast,
    Extra,
    Prop,
    Costume,
    Makeup,
    Vehicle,
    Animal,
    SetDressing,
    SpecialEffect,
    Sound,
    Other,
}

impl ElementCategory {
    /// Stable string form used in the database `category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cast => "cast",
            Self::Extra => "extra",
            Self::Prop => "prop",
            Self::Costume => "costume",
            Self::Makeup => "makeup",
            Self::Vehicle => "vehicle",
            Self::Animal => "animal",
            Self::SetDressing => "set_dressing",
            Self::SpecialEffect => "special_effect",
            Self::Sound => "sound",
            Self::Other => "other",
        }
    }

    /// Parse the stable database string form. Unknown strings map to `Other`.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "cast" => Self::Cast,
            "extra" => Self::Extra,
            "prop" => Self::Prop,
            "costume" => Self::Costume,
            "makeup" => Self::Makeup,
            "vehicle" => Self::Vehicle,
            "animal" => Self::Animal,
            "set_dressing" => Self::SetDressing,
            "special_effect" => Self::SpecialEffect,
            "sound" => Self::Sound,
            _ => Self::Other,
        }
    }
}

/// Classify a free-text category label into the closed taxonomy.
///
/// Matching is case-insensitive substring matching, most specific first:
/// "background extra" must classify as `Extra` before the "cast" check could
/// see it, and "set dressing" before "dressing" alone would mean anything.
pub fn classify(raw: &str) -> ElementCategory {
    let lower = raw.trim().to_lowercase();

    let contains_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if contains_any(&["extra", "background"]) {
        ElementCategory::Extra
    } else if contains_any(&["cast", "actor", "character", "speaking"]) {
        ElementCategory::Cast
    } else if contains_any(&["set dressing", "set_dressing", "dressing", "greens"]) {
        ElementCategory::SetDressing
    } else if contains_any(&["prop"]) {
        ElementCategory::Prop
    } else if contains_any(&["costume", "wardrobe"]) {
        ElementCategory::Costume
    } else if contains_any(&["makeup", "make-up", "hair"]) {
        ElementCategory::Makeup
    } else if contains_any(&["vehicle", "car", "truck", "motorcycle"]) {
        ElementCategory::Vehicle
    } else if contains_any(&["animal", "livestock"]) {
        ElementCategory::Animal
    } else if contains_any(&["effect", "sfx", "vfx", "stunt", "pyro"]) {
        ElementCategory::SpecialEffect
    } else if contains_any(&["sound", "music", "playback"]) {
        ElementCategory::Sound
    } else {
        ElementCategory::Other
    }
}
