//! Color clustering
//!
//! K-means over RGB samples, with the random source used for seeding
//! injected by the caller.

pub mod random;
pub mod kmeans;

pub use random::{RandomSource, RngSource, SequenceSource};
pub use kmeans::{kmeans_clustering, KMeans};
