//! Cluster-based song recommender
//!
//! Looks up a track or artist in a pre-clustered song dataset and suggests
//! songs from the same cluster, by the same artist, or at random.

pub mod catalog;
pub mod config;
pub mod recommend;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, Song, SongCard};
pub use recommend::{MatchTier, Recommendation, RecommendError, Recommender, SamplingPolicy};
