//! K-means color clustering
//!
//! Reduces a sample list to `k` representative colors:
//! - Initial centroids are `k` samples drawn uniformly with replacement
//! - Each sample joins its nearest centroid (lowest slot index wins ties)
//! - Each centroid moves to the rounded mean of its members
//! - A cluster that attracts no samples keeps its previous centroid
//!
//! Slot order is stable across iterations and carries no meaning.

use tracing::trace;

use crate::{
    clustering::RandomSource,
    color::Rgb,
    config::ClusteringConfig,
    constants::clustering::{DOMINANT_K, MAX_ITERATIONS},
};

/// One cluster slot during a single iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cluster {
    centroid: Rgb,
    assigned: usize,
    sums: [u64; 3],
}

impl Cluster {
    fn new(centroid: Rgb) -> Self {
        Self {
            centroid,
            assigned: 0,
            sums: [0; 3],
        }
    }

    fn add(&mut self, sample: &Rgb) {
        self.assigned += 1;
        self.sums[0] += sample.r as u64;
        self.sums[1] += sample.g as u64;
        self.sums[2] += sample.b as u64;
    }

    /// Rounded member mean, or the previous centroid when nothing was assigned
    fn next_centroid(&self) -> Rgb {
        if self.assigned == 0 {
            return self.centroid;
        }
        let n = self.assigned as f64;
        let mean = |sum: u64| (sum as f64 / n).round() as u8;
        Rgb::new(mean(self.sums[0]), mean(self.sums[1]), mean(self.sums[2]))
    }
}

/// K-means engine over RGB samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(DOMINANT_K)
    }
}

impl KMeans {
    /// `k` clusters with the default iteration count
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: MAX_ITERATIONS,
        }
    }

    pub fn with_iterations(k: usize, max_iterations: usize) -> Self {
        Self { k, max_iterations }
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::with_iterations(config.k, config.max_iterations)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Cluster `samples` and return exactly `k` centroids
    ///
    /// An empty sample list (or `k == 0`) yields no centroids. Iteration
    /// stops early once a round leaves every centroid unchanged, since any
    /// further round would reproduce the same assignment.
    pub fn run<R>(&self, samples: &[Rgb], rng: &mut R) -> Vec<Rgb>
    where
        R: RandomSource + ?Sized,
    {
        if samples.is_empty() || self.k == 0 {
            return Vec::new();
        }

        let mut centroids: Vec<Rgb> = (0..self.k)
            .map(|_| samples[rng.next_index(samples.len())])
            .collect();

        let mut iterations = 0;
        while iterations < self.max_iterations {
            let clusters = assign(samples, &centroids);
            let next: Vec<Rgb> = clusters.iter().map(Cluster::next_centroid).collect();
            iterations += 1;

            if next == centroids {
                break;
            }
            centroids = next;
        }

        trace!(k = self.k, samples = samples.len(), iterations, "clustered");
        centroids
    }
}

/// Assign every sample to its nearest centroid
fn assign(samples: &[Rgb], centroids: &[Rgb]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = centroids.iter().copied().map(Cluster::new).collect();

    for sample in samples {
        let mut nearest = 0;
        let mut best = u32::MAX;
        for (index, centroid) in centroids.iter().enumerate() {
            let distance = sample.distance_squared(centroid);
            if distance < best {
                best = distance;
                nearest = index;
            }
        }
        clusters[nearest].add(sample);
    }

    clusters
}

/// Cluster with the given `k` and iteration count
pub fn kmeans_clustering<R>(samples: &[Rgb], k: usize, max_iterations: usize, rng: &mut R) -> Vec<Rgb>
where
    R: RandomSource + ?Sized,
{
    KMeans::with_iterations(k, max_iterations).run(samples, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::{RngSource, SequenceSource};

    #[test]
    fn test_empty_samples() {
        let mut rng = SequenceSource::new(vec![0.5]);
        assert!(KMeans::new(3).run(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_default_matches_dominant_color_setup() {
        let kmeans = KMeans::default();
        assert_eq!(kmeans.k(), 5);
        assert_eq!(kmeans.max_iterations(), 20);
        assert_eq!(kmeans, KMeans::from_config(&ClusteringConfig::default()));
    }

    #[test]
    fn test_zero_k() {
        let mut rng = SequenceSource::new(vec![0.5]);
        assert!(KMeans::new(0).run(&[Rgb::new(1, 2, 3)], &mut rng).is_empty());
    }

    #[test]
    fn test_returns_exactly_k_centroids() {
        let samples = vec![Rgb::new(100, 100, 100), Rgb::new(200, 50, 50)];
        let mut rng = RngSource::seeded(3);
        assert_eq!(KMeans::new(5).run(&samples, &mut rng).len(), 5);
    }

    #[test]
    fn test_single_color_converges_everywhere() {
        let samples = vec![Rgb::new(180, 140, 120); 50];
        let mut rng = RngSource::seeded(11);
        let centroids = KMeans::new(4).run(&samples, &mut rng);
        assert_eq!(centroids, vec![Rgb::new(180, 140, 120); 4]);
    }

    #[test]
    fn test_two_tight_clusters() {
        let mut samples = Vec::new();
        for i in 0..20u8 {
            samples.push(Rgb::new(40 + i % 3, 40, 40));
            samples.push(Rgb::new(210, 200 + i % 3, 190));
        }
        // First draw picks a dark sample, second a light one
        let mut rng = SequenceSource::new(vec![0.0, 0.99]);
        let centroids = KMeans::new(2).run(&samples, &mut rng);

        assert!(centroids[0].distance(&Rgb::new(41, 40, 40)) < 2.0);
        assert!(centroids[1].distance(&Rgb::new(210, 201, 190)) < 2.0);
    }

    #[test]
    fn test_empty_cluster_keeps_previous_centroid() {
        let samples = [Rgb::new(100, 100, 100), Rgb::new(110, 100, 100)];
        let centroids = [Rgb::new(104, 100, 100), Rgb::new(240, 30, 30)];
        let clusters = assign(&samples, &centroids);
        assert_eq!(clusters[1].assigned, 0);
        assert_eq!(clusters[1].next_centroid(), Rgb::new(240, 30, 30));
        assert_eq!(clusters[0].next_centroid(), Rgb::new(105, 100, 100));
    }

    #[test]
    fn test_duplicate_seeds_leave_upper_slot_unchanged() {
        // Every sample ties between both slots and goes to slot 0
        let samples = vec![Rgb::new(120, 90, 80); 10];
        let mut rng = SequenceSource::new(vec![0.2, 0.7]);
        let centroids = KMeans::new(2).run(&samples, &mut rng);
        assert_eq!(centroids, vec![Rgb::new(120, 90, 80); 2]);
    }

    #[test]
    fn test_ties_go_to_lowest_slot() {
        let centroids = [Rgb::new(90, 100, 100), Rgb::new(110, 100, 100)];
        let clusters = assign(&[Rgb::new(100, 100, 100)], &centroids);
        assert_eq!(clusters[0].assigned, 1);
        assert_eq!(clusters[1].assigned, 0);
    }

    #[test]
    fn test_mean_is_rounded() {
        let mut cluster = Cluster::new(Rgb::BLACK);
        cluster.add(&Rgb::new(10, 10, 10));
        cluster.add(&Rgb::new(11, 12, 10));
        // 10.5 rounds up, 11 stays, 10 stays
        assert_eq!(cluster.next_centroid(), Rgb::new(11, 11, 10));
    }

    #[test]
    fn test_zero_iterations_returns_seeds() {
        let samples = vec![Rgb::new(30, 30, 30), Rgb::new(90, 90, 90), Rgb::new(150, 150, 150)];
        let mut rng = SequenceSource::new(vec![0.9, 0.1]);
        let centroids = kmeans_clustering(&samples, 2, 0, &mut rng);
        assert_eq!(centroids, vec![Rgb::new(150, 150, 150), Rgb::new(30, 30, 30)]);
    }

    #[test]
    fn test_early_exit_matches_longer_runs() {
        let mut samples = Vec::new();
        for i in 0..30u8 {
            samples.push(Rgb::new(60 + i % 5, 50, 45));
            samples.push(Rgb::new(190, 170 + i % 4, 150));
        }
        let run = |iterations| {
            let mut rng = SequenceSource::new(vec![0.0, 0.99]);
            kmeans_clustering(&samples, 2, iterations, &mut rng)
        };
        assert_eq!(run(20), run(500));
        assert_eq!(run(5), run(20));
    }
}
