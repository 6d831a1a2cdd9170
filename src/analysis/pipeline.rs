//! End-to-end skin tone analysis
//!
//! Stages:
//! 1. Sample every skin region and concatenate the samples
//! 2. Cluster the samples with k-means
//! 3. Pick one centroid as the skin color
//! 4. Classify skin tone and undertone
//!
//! Lip color runs the same sample/cluster/select steps on the lip region.
//!
//! An empty skin sample set does not fail: it flows through as black and is
//! classified as dark, matching the reference behavior. Use
//! [`ToneAnalyzer::analyze_checked`] to get an error instead.

use tracing::{debug, warn};

use crate::{
    analysis::{classify_tone, DominantColorSelector, DominantStrategy},
    clustering::{KMeans, RandomSource, RngSource},
    color::Rgb,
    config::AnalysisConfig,
    constants::DEFAULT_LIP_COLOR,
    sampling::{FaceLandmarks, PixelBuffer, PixelSampler, Region},
    AnalysisError, BeautyAnalysis, Result,
};

/// Runs the full sample → cluster → select → classify pipeline
pub struct ToneAnalyzer {
    sampler: PixelSampler,
    kmeans: KMeans,
    selector: Box<dyn DominantColorSelector + Send + Sync>,
    seed: Option<u64>,
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneAnalyzer {
    /// Analyzer with the reference parameters and an unseeded generator
    pub fn new() -> Self {
        let config = AnalysisConfig::default();
        Self {
            sampler: PixelSampler::from_config(&config.sampling),
            kmeans: KMeans::from_config(&config.clustering),
            selector: Box::new(config.selection),
            seed: None,
        }
    }

    /// Analyzer built from a validated configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: PixelSampler::from_config(&config.sampling),
            kmeans: KMeans::from_config(&config.clustering),
            selector: Box::new(config.selection),
            seed: config.clustering.seed,
        })
    }

    /// Replace the dominant color rule
    pub fn with_selector<S>(mut self, selector: S) -> Self
    where
        S: DominantColorSelector + Send + Sync + 'static,
    {
        self.selector = Box::new(selector);
        self
    }

    /// Replace the dominant color rule with a built-in strategy
    pub fn with_strategy(self, strategy: DominantStrategy) -> Self {
        self.with_selector(strategy)
    }

    /// Fix the clustering seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sampler(&self) -> &PixelSampler {
        &self.sampler
    }

    /// Representative color of a sample list, black when it is empty
    pub fn dominant_color_with<R>(&self, samples: &[Rgb], rng: &mut R) -> Rgb
    where
        R: RandomSource + ?Sized,
    {
        let centroids = self.kmeans.run(samples, rng);
        self.selector.select(&centroids)
    }

    /// Classify already-sampled skin (and optionally lip) colors
    ///
    /// `lip_samples` of `None` means no lip region was analyzed and reports
    /// the default coral; an empty lip sample list falls back to the skin
    /// color.
    pub fn analyze_samples_with<R>(
        &self,
        skin_samples: &[Rgb],
        lip_samples: Option<&[Rgb]>,
        rng: &mut R,
    ) -> BeautyAnalysis
    where
        R: RandomSource + ?Sized,
    {
        if skin_samples.is_empty() {
            warn!("no skin samples survived filtering; reporting black sentinel");
        }

        let skin_tone_rgb = self.dominant_color_with(skin_samples, rng);
        let classification = classify_tone(skin_tone_rgb);

        let lip_color = match lip_samples {
            None => Rgb::from(DEFAULT_LIP_COLOR),
            Some([]) => skin_tone_rgb,
            Some(samples) => self.dominant_color_with(samples, rng),
        };

        debug!(
            samples = skin_samples.len(),
            color = %skin_tone_rgb,
            skin_tone = %classification.skin_tone,
            undertone = %classification.undertone,
            "classified skin"
        );

        BeautyAnalysis {
            skin_tone: classification.skin_tone,
            undertone: classification.undertone,
            skin_tone_rgb,
            lip_color,
        }
    }

    /// Sample the given regions and classify with a caller-supplied source
    pub fn analyze_regions_with<R>(
        &self,
        buffer: &PixelBuffer<'_>,
        skin_regions: &[Region],
        lip_region: Option<&Region>,
        rng: &mut R,
    ) -> BeautyAnalysis
    where
        R: RandomSource + ?Sized,
    {
        let skin_samples = self.sampler.sample_regions(buffer, skin_regions);
        let lip_samples = lip_region.map(|region| self.sampler.sample(buffer, region));
        debug!(
            regions = skin_regions.len(),
            skin_samples = skin_samples.len(),
            lip_samples = lip_samples.as_ref().map(Vec::len),
            "sampled regions"
        );
        self.analyze_samples_with(&skin_samples, lip_samples.as_deref(), rng)
    }

    /// Sample the given regions and classify
    pub fn analyze_regions(
        &self,
        buffer: &PixelBuffer<'_>,
        skin_regions: &[Region],
        lip_region: Option<&Region>,
    ) -> BeautyAnalysis {
        self.with_rng(|rng| self.analyze_regions_with(buffer, skin_regions, lip_region, rng))
    }

    /// Like [`analyze_regions`](Self::analyze_regions) but fails when no skin
    /// samples survive filtering
    ///
    /// # Errors
    ///
    /// Returns `InsufficientSamples` instead of the black sentinel
    pub fn analyze_checked(
        &self,
        buffer: &PixelBuffer<'_>,
        skin_regions: &[Region],
        lip_region: Option<&Region>,
    ) -> Result<BeautyAnalysis> {
        let skin_samples = self.sampler.sample_regions(buffer, skin_regions);
        if skin_samples.is_empty() {
            return Err(AnalysisError::InsufficientSamples {
                regions: skin_regions.len(),
            });
        }
        let lip_samples = lip_region.map(|region| self.sampler.sample(buffer, region));
        Ok(self.with_rng(|rng| {
            self.analyze_samples_with(&skin_samples, lip_samples.as_deref(), rng)
        }))
    }

    /// Analyze using face keypoints for cheeks, nose, forehead and lips
    ///
    /// Missing lip keypoints are treated like a lip region with no usable
    /// pixels, so the lip color falls back to the skin color. Coral is only
    /// reported by [`analyze_center`](Self::analyze_center).
    pub fn analyze_landmarks(
        &self,
        buffer: &PixelBuffer<'_>,
        landmarks: &FaceLandmarks,
    ) -> BeautyAnalysis {
        let skin_samples = self.sampler.sample_regions(buffer, &landmarks.skin_regions());
        let lip_samples = self.landmark_lip_samples(buffer, landmarks);
        self.with_rng(|rng| self.analyze_samples_with(&skin_samples, Some(lip_samples.as_slice()), rng))
    }

    /// Like [`analyze_landmarks`](Self::analyze_landmarks) but fails when no
    /// skin samples survive filtering
    ///
    /// # Errors
    ///
    /// Returns `InsufficientSamples` instead of the black sentinel
    pub fn analyze_landmarks_checked(
        &self,
        buffer: &PixelBuffer<'_>,
        landmarks: &FaceLandmarks,
    ) -> Result<BeautyAnalysis> {
        let skin_regions = landmarks.skin_regions();
        let skin_samples = self.sampler.sample_regions(buffer, &skin_regions);
        if skin_samples.is_empty() {
            return Err(AnalysisError::InsufficientSamples {
                regions: skin_regions.len(),
            });
        }
        let lip_samples = self.landmark_lip_samples(buffer, landmarks);
        Ok(self.with_rng(|rng| self.analyze_samples_with(&skin_samples, Some(lip_samples.as_slice()), rng)))
    }

    /// Analyze the centered fallback face region
    pub fn analyze_center(&self, buffer: &PixelBuffer<'_>) -> BeautyAnalysis {
        let region = Region::center_face(buffer.width(), buffer.height());
        self.analyze_regions(buffer, &[region], None)
    }

    fn landmark_lip_samples(&self, buffer: &PixelBuffer<'_>, landmarks: &FaceLandmarks) -> Vec<Rgb> {
        let samples = landmarks
            .lip_region()
            .map(|region| self.sampler.sample(buffer, &region))
            .unwrap_or_default();
        debug!(lip_samples = samples.len(), "sampled lips");
        samples
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        match self.seed {
            Some(seed) => f(&mut RngSource::seeded(seed)),
            None => f(&mut RngSource::thread()),
        }
    }
}
