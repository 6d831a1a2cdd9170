//! RGB value type and the color math shared by every pipeline stage
//!
//! Provides:
//! - Perceptual luminance (BT.601 luma)
//! - Squared Euclidean distance in RGB space
//! - Hex formatting and parsing
//! - HSL conversion through `palette`

use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::{constants::luma, AnalysisError, Result};

/// An 8-bit RGB color without alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triple with hue in degrees [0, 360) and saturation/lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Black, also used as the sentinel for "no color found"
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance `0.299R + 0.587G + 0.114B`, in [0, 255]
    pub fn luminance(&self) -> f64 {
        luma::RED_WEIGHT * self.r as f64
            + luma::GREEN_WEIGHT * self.g as f64
            + luma::BLUE_WEIGHT * self.b as f64
    }

    /// Squared Euclidean distance in RGB space
    ///
    /// Orders colors exactly like the true Euclidean distance, without the
    /// square root.
    pub fn distance_squared(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space
    pub fn distance(&self, other: &Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalysisError::invalid_parameter("hex", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalysisError::invalid_parameter("hex", hex))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to HSL (hue in degrees, saturation and lightness in percent)
    pub fn to_hsl(&self) -> HslColor {
        let srgb: Srgb<f32> = Srgb::<u8>::from(*self).into_format();
        let hsl: Hsl = Hsl::from_color(srgb);
        HslColor {
            h: hsl.hue.into_positive_degrees(),
            s: hsl.saturation * 100.0,
            l: hsl.lightness * 100.0,
        }
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_of_grays_is_exact() {
        for v in [50u8, 130, 150, 180, 181, 200] {
            assert_eq!(Rgb::new(v, v, v).luminance(), v as f64);
        }
    }

    #[test]
    fn test_luminance_weights_green_most() {
        let red = Rgb::new(255, 0, 0).luminance();
        let green = Rgb::new(0, 255, 0).luminance();
        let blue = Rgb::new(0, 0, 255).luminance();
        assert!(green > red && red > blue);
    }

    #[test]
    fn test_distance() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 4, 0);
        assert_eq!(a.distance_squared(&b), 25);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(Rgb::new(0, 0, 0).distance_squared(&Rgb::new(255, 255, 255)), 195_075);
    }

    #[test]
    fn test_hex_roundtrip() {
        let coral = Rgb::new(255, 127, 80);
        assert_eq!(coral.to_hex(), "#FF7F50");
        assert_eq!(Rgb::from_hex("#FF7F50").unwrap(), coral);
        assert_eq!(Rgb::from_hex("ff7f50").unwrap(), coral);
    }

    #[test]
    fn test_hex_invalid() {
        assert!(Rgb::from_hex("#FF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#FF7F5é").is_err());
    }

    #[test]
    fn test_hsl_primary_red() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(hsl.h.abs() < 0.01);
        assert!((hsl.s - 100.0).abs() < 0.01);
        assert!((hsl.l - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_gray_has_no_saturation() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert!(hsl.s.abs() < 0.01);
        assert!((hsl.l - 50.2).abs() < 0.1);
    }

    #[test]
    fn test_hsl_blue_hue() {
        let hsl = Rgb::new(0, 0, 255).to_hsl();
        assert!((hsl.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_palette_interop() {
        let srgb: Srgb<u8> = Rgb::new(10, 20, 30).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (10, 20, 30));
        assert_eq!(Rgb::from(srgb), Rgb::new(10, 20, 30));
    }
}
