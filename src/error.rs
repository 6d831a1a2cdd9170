//! Error types for the skin_tone_scan library

use thiserror::Error;

/// Result type alias for skin_tone_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for skin tone analysis
///
/// The sampling, clustering and classification stages are total and never
/// fail. Errors only arise at the edges: buffer construction, configuration,
/// file loading, and the opt-in checked analysis path.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pixel buffer length does not match its declared dimensions
    #[error("Invalid pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Every sampled region came back empty after filtering
    #[error("No usable skin samples in {regions} region(s)")]
    InsufficientSamples { regions: usize },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// An empty sample set can usually be fixed by retaking the photo.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::InsufficientSamples { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Failed to process the image. Please ensure it's a valid JPEG or PNG file.".to_string()
            }
            AnalysisError::InsufficientSamples { .. } => {
                "Could not find enough skin in the photo. Please try again with a clearer, well-lit photo.".to_string()
            }
            _ => "Failed to analyze face. Please try again with a different photo.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_buffer_message() {
        let err = AnalysisError::InvalidBuffer {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel buffer: 2x2 RGBA needs 16 bytes, got 12"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(AnalysisError::InsufficientSamples { regions: 4 }.is_recoverable());
        assert!(!AnalysisError::invalid_parameter("k", 0).is_recoverable());
    }

    #[test]
    fn test_image_load_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AnalysisError::image_load("Failed to open photo.jpg", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.user_message().contains("JPEG or PNG"));
    }
}
