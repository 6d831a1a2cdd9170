//! Region selection and pixel sampling
//!
//! This module converts image regions (explicit rectangles, face keypoints,
//! or a centered fallback) into filtered RGB sample lists.

pub mod region;
pub mod sampler;
pub mod landmarks;

pub use region::{ClampedRegion, Point, Region};
pub use sampler::{extract_pixels_from_region, PixelBuffer, PixelSampler};
pub use landmarks::FaceLandmarks;
