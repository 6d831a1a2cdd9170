//! Color value types
//!
//! This module holds the `Rgb` value type every stage passes around,
//! plus luminance, distance, hex and HSL helpers.

pub mod rgb;

pub use rgb::{HslColor, Rgb};
