//! Image decoding into RGBA buffers
//!
//! Photos arrive either as files or as in-memory uploads. Both paths decode
//! through the `image` crate and produce an owned RGBA8 buffer that
//! [`PixelBuffer`](crate::sampling::PixelBuffer) can view.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, WebP and BMP.
//!
//! EXIF orientation is not applied; regions are expected in the stored
//! pixel orientation.

use image::{ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// WebP image
    WebP,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "webp" => Some(ImageFormat::WebP),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load an image from disk as RGBA8
///
/// # Errors
///
/// Returns `ImageLoadError` if the extension is unsupported, the file cannot
/// be opened, or decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use skin_tone_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), skin_tone_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(AnalysisError::ImageLoadError {
            message: format!("Unknown image format for file: {}", path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let image = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded image");
    Ok(image.to_rgba8())
}

/// Decode an in-memory upload, guessing the format from its content
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AnalysisError::image_load("Failed to read image bytes", e))?;

    let image = reader
        .decode()
        .map_err(|e| AnalysisError::image_load("Failed to decode image bytes", e))?;

    Ok(image.to_rgba8())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "webp", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
