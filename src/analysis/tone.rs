//! Skin tone and undertone classification
//!
//! Maps one representative color to a `(skin tone, undertone)` pair with
//! fixed thresholds:
//! - Skin tone from luminance: above 180 fair, above 130 wheatish, else dark
//! - Undertone: warm if R-B > 15 and G-B > 10, else cool if B > R+5,
//!   else neutral
//!
//! The undertone checks run in that order. Both rules are total over every
//! RGB triple.

use serde::{Deserialize, Serialize};

use crate::{
    color::Rgb,
    constants::{skin_tone, undertone},
};

/// Coarse skin tone bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Fair,
    Wheatish,
    Dark,
}

/// Undertone bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

/// Classification of a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneClassification {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
}

impl SkinTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Fair => "fair",
            SkinTone::Wheatish => "wheatish",
            SkinTone::Dark => "dark",
        }
    }
}

impl Undertone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SkinTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Undertone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skin tone bucket from luminance
pub fn detect_skin_tone(color: Rgb) -> SkinTone {
    let luminance = color.luminance();
    if luminance > skin_tone::FAIR_ABOVE {
        SkinTone::Fair
    } else if luminance > skin_tone::WHEATISH_ABOVE {
        SkinTone::Wheatish
    } else {
        SkinTone::Dark
    }
}

/// Undertone bucket from channel differences
pub fn detect_undertone(color: Rgb) -> Undertone {
    let (r, g, b) = (color.r as i16, color.g as i16, color.b as i16);

    if r - b > undertone::WARM_RED_MINUS_BLUE && g - b > undertone::WARM_GREEN_MINUS_BLUE {
        Undertone::Warm
    } else if b > r + undertone::COOL_BLUE_OVER_RED {
        Undertone::Cool
    } else {
        Undertone::Neutral
    }
}

/// Classify a color into both buckets
pub fn classify_tone(color: Rgb) -> ToneClassification {
    ToneClassification {
        skin_tone: detect_skin_tone(color),
        undertone: detect_undertone(color),
    }
}
