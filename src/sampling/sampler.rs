//! Pixel sampling from RGBA buffers
//!
//! Turns an image region into a list of RGB samples suitable for
//! clustering:
//! - Region clamped to the image bounds
//! - Strided subsampling (every 2nd row and column by default)
//! - Near-black and clipped pixels discarded
//!
//! Duplicates are kept on purpose; they weight clustering toward the
//! colors that dominate the region.

use image::RgbaImage;
use tracing::trace;

use crate::{
    color::Rgb,
    config::SamplingConfig,
    constants::sampling::{BYTES_PER_PIXEL, MAX_CHANNEL, MIN_CHANNEL, STRIDE},
    sampling::Region,
    AnalysisError, Result,
};

/// Borrowed view over a row-major RGBA8 pixel buffer
///
/// The alpha byte of each pixel is ignored.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidBuffer` if `data` is not exactly `width * height * 4`
    /// bytes long
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(AnalysisError::InvalidBuffer {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// View a decoded `image` crate RGBA buffer
    pub fn from_rgba_image(image: &'a RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB at `(x, y)`; caller guarantees the coordinate is in bounds
    fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Rgb::new(self.data[index], self.data[index + 1], self.data[index + 2])
    }
}

impl<'a> From<&'a RgbaImage> for PixelBuffer<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        Self::from_rgba_image(image)
    }
}

/// Strided, filtered pixel sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSampler {
    stride: u32,
    min_channel: u8,
    max_channel: u8,
}

impl Default for PixelSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSampler {
    /// Sampler with stride 2 that keeps channels strictly inside (20, 250)
    pub fn new() -> Self {
        Self {
            stride: STRIDE,
            min_channel: MIN_CHANNEL,
            max_channel: MAX_CHANNEL,
        }
    }

    /// Sampler with custom parameters; a zero stride is treated as 1
    pub fn with_params(stride: u32, min_channel: u8, max_channel: u8) -> Self {
        Self {
            stride: stride.max(1),
            min_channel,
            max_channel,
        }
    }

    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::with_params(config.stride, config.min_channel, config.max_channel)
    }

    /// True when every channel is strictly between the bounds
    pub fn accepts(&self, color: &Rgb) -> bool {
        [color.r, color.g, color.b]
            .iter()
            .all(|&c| c > self.min_channel && c < self.max_channel)
    }

    /// Sample one region
    ///
    /// Returns an empty list when the region clamps to nothing or every
    /// visited pixel is filtered out.
    pub fn sample(&self, buffer: &PixelBuffer<'_>, region: &Region) -> Vec<Rgb> {
        let bounds = region.clamp(buffer.width(), buffer.height());
        if bounds.is_empty() {
            trace!(?region, "region clamps to nothing");
            return Vec::new();
        }

        let step = self.stride as usize;
        let mut samples = Vec::with_capacity(
            bounds.width().div_ceil(self.stride) as usize * bounds.height().div_ceil(self.stride) as usize,
        );

        for y in (bounds.y0..bounds.y1).step_by(step) {
            for x in (bounds.x0..bounds.x1).step_by(step) {
                let color = buffer.rgb_at(x, y);
                if self.accepts(&color) {
                    samples.push(color);
                }
            }
        }

        trace!(?bounds, kept = samples.len(), "sampled region");
        samples
    }

    /// Sample several regions and concatenate the results in order
    pub fn sample_regions(&self, buffer: &PixelBuffer<'_>, regions: &[Region]) -> Vec<Rgb> {
        regions
            .iter()
            .flat_map(|region| self.sample(buffer, region))
            .collect()
    }
}

/// Extract filtered RGB samples from `(x, y, width, height)` with default parameters
pub fn extract_pixels_from_region(
    buffer: &PixelBuffer<'_>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<Rgb> {
    PixelSampler::new().sample(buffer, &Region::new(x, y, width, height))
}
