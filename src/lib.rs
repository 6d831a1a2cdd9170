//! # Skin Tone Scan
//!
//! A Rust crate for classifying skin tone and undertone from photos.
//!
//! The analysis pipeline:
//! - Samples skin regions (face keypoints or a centered fallback square)
//! - Clusters the samples with k-means to find a small palette
//! - Picks one representative skin color from the palette
//! - Classifies it into a skin tone (fair, wheatish, dark) and an undertone
//!   (warm, cool, neutral)
//!
//! The resulting [`BeautyAnalysis`] is what recommendation lookups key on.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skin_tone_scan::analyze_image;
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("photo.jpg"))?;
//! println!("{} skin, {} undertone ({})", result.skin_tone, result.undertone, result.skin_tone_rgb.to_hex());
//! # Ok::<(), skin_tone_scan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod sampling;
pub mod clustering;
pub mod analysis;
pub mod image_loader;

pub use error::{AnalysisError, Result};
pub use config::AnalysisConfig;
pub use color::Rgb;
pub use analysis::{classify_tone, dominant_color, SkinTone, ToneAnalyzer, ToneClassification, Undertone};
pub use clustering::kmeans_clustering;
pub use sampling::{extract_pixels_from_region, FaceLandmarks, PixelBuffer, Point, Region};

/// Result of analyzing one photo
///
/// Serializes with camelCase keys (`skinTone`, `skinToneRgb`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeautyAnalysis {
    /// Skin tone bucket
    pub skin_tone: SkinTone,
    /// Undertone bucket
    pub undertone: Undertone,
    /// Representative skin color the buckets were derived from
    pub skin_tone_rgb: Rgb,
    /// Representative lip color
    pub lip_color: Rgb,
}

impl BeautyAnalysis {
    pub fn classification(&self) -> ToneClassification {
        ToneClassification {
            skin_tone: self.skin_tone,
            undertone: self.undertone,
        }
    }
}

/// Analyze the centered face region of a photo with default settings
///
/// # Errors
///
/// Returns `AnalysisError` if the image cannot be loaded or decoded. An image
/// whose center holds no usable skin pixels is not an error; it reports the
/// black sentinel classified as dark.
pub fn analyze_image(image_path: &Path) -> Result<BeautyAnalysis> {
    analyze_image_with_config(image_path, &AnalysisConfig::default())
}

/// Analyze the centered face region of a photo
pub fn analyze_image_with_config(image_path: &Path, config: &AnalysisConfig) -> Result<BeautyAnalysis> {
    let analyzer = ToneAnalyzer::from_config(config)?;
    let image = image_loader::load_image(image_path)?;
    Ok(analyzer.analyze_center(&PixelBuffer::from(&image)))
}
