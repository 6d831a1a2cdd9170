//! Configuration structures for the skin tone analysis pipeline.
//!
//! This module defines the tunable parameters for sampling, clustering and
//! dominant color selection. Classification thresholds are not configurable;
//! they live in [`crate::constants`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use skin_tone_scan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), skin_tone_scan::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SamplingConfig`]: stride and channel filter bounds
//! - [`ClusteringConfig`]: cluster count, iterations, optional seed
//! - [`DominantStrategy`]: which centroid represents the skin

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    analysis::DominantStrategy,
    constants::{clustering, sampling},
    AnalysisError, Result,
};

/// Complete pipeline configuration.
///
/// Serializes to/from JSON for reproducible runs. `Default` reproduces the
/// reference behavior exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixel sampling configuration
    pub sampling: SamplingConfig,

    /// K-means configuration
    pub clustering: ClusteringConfig,

    /// Dominant color selection rule
    pub selection: DominantStrategy,
}

/// Pixel sampling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Row and column step within a region
    pub stride: u32,

    /// Channels at or below this value reject the pixel
    pub min_channel: u8,

    /// Channels at or above this value reject the pixel
    pub max_channel: u8,
}

/// K-means parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum assignment/update rounds
    pub max_iterations: usize,

    /// Seed for centroid initialization; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            stride: sampling::STRIDE,
            min_channel: sampling::MIN_CHANNEL,
            max_channel: sampling::MAX_CHANNEL,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            k: clustering::DOMINANT_K,
            max_iterations: clustering::MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with a fixed clustering seed
    pub fn seeded(seed: u64) -> Self {
        let mut config = Self::default();
        config.clustering.seed = Some(seed);
        config
    }

    /// Reject parameter combinations the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.sampling.stride == 0 {
            return Err(AnalysisError::invalid_parameter("sampling.stride", 0));
        }
        if self.sampling.min_channel >= self.sampling.max_channel {
            return Err(AnalysisError::invalid_parameter(
                "sampling.min_channel",
                format!(
                    "{} (must be below max_channel {})",
                    self.sampling.min_channel, self.sampling.max_channel
                ),
            ));
        }
        if self.clustering.k == 0 {
            return Err(AnalysisError::invalid_parameter("clustering.k", 0));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
