//! Skin color analysis
//!
//! This module picks the representative skin color from clustered
//! centroids, classifies it, and ties every stage together in
//! [`ToneAnalyzer`].

pub mod dominant;
pub mod tone;
pub mod pipeline;

pub use dominant::{dominant_color, sort_by_luminance_desc, DominantColorSelector, DominantStrategy};
pub use tone::{classify_tone, detect_skin_tone, detect_undertone, SkinTone, ToneClassification, Undertone};
pub use pipeline::ToneAnalyzer;
