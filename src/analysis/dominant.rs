//! Dominant color selection from clustered centroids
//!
//! The default rule sorts centroids by luminance (brightest first) and takes
//! the second entry. The brightest cluster tends to be a specular highlight
//! or background spill. The rule is empirical, so it sits behind a trait and
//! can be swapped without touching clustering.

use serde::{Deserialize, Serialize};

use crate::{
    clustering::{KMeans, RandomSource},
    color::Rgb,
    constants::clustering::DOMINANT_K,
};

/// Picks one representative color out of a centroid set
pub trait DominantColorSelector {
    /// Returns black when `centroids` is empty
    fn select(&self, centroids: &[Rgb]) -> Rgb;
}

/// Built-in selection rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantStrategy {
    /// Second-brightest centroid, brightest when only one exists
    #[default]
    SecondBrightest,
    /// Brightest centroid
    Brightest,
    /// Centroid at the middle of the luminance order (upper middle for even counts)
    MedianLuminance,
}

impl DominantColorSelector for DominantStrategy {
    fn select(&self, centroids: &[Rgb]) -> Rgb {
        let sorted = sort_by_luminance_desc(centroids);
        if sorted.is_empty() {
            return Rgb::BLACK;
        }

        let index = match self {
            DominantStrategy::SecondBrightest => 1,
            DominantStrategy::Brightest => 0,
            DominantStrategy::MedianLuminance => (sorted.len() - 1) / 2,
        };
        sorted.get(index).copied().unwrap_or(sorted[0])
    }
}

impl<F> DominantColorSelector for F
where
    F: Fn(&[Rgb]) -> Rgb,
{
    fn select(&self, centroids: &[Rgb]) -> Rgb {
        self(centroids)
    }
}

/// Stable sort, brightest first
pub fn sort_by_luminance_desc(centroids: &[Rgb]) -> Vec<Rgb> {
    let mut sorted = centroids.to_vec();
    sorted.sort_by(|a, b| b.luminance().total_cmp(&a.luminance()));
    sorted
}

/// Cluster `samples` into five colors and pick the second brightest
///
/// An empty sample list yields black, which classifies as dark skin. Callers
/// that need to tell "no data" apart should check the samples first.
pub fn dominant_color<R>(samples: &[Rgb], rng: &mut R) -> Rgb
where
    R: RandomSource + ?Sized,
{
    let centroids = KMeans::new(DOMINANT_K).run(samples, rng);
    DominantStrategy::SecondBrightest.select(&centroids)
}
