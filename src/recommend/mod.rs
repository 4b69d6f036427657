mod recommender;
mod sampling;
mod selector;

pub use recommender::{Recommender, RecommenderSettings};
pub use sampling::{sample_pool, SamplingPolicy};
pub use selector::{normalize_query, select, DEFAULT_NUM_RECOMMENDATIONS};

use crate::catalog::SongCard;
use serde::Serialize;
use thiserror::Error;

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// The query is the exact title of a song, the rest comes from its cluster.
    Track,
    /// The query is the exact name of an artist.
    Artist,
    /// Nothing matched, random songs from the whole dataset.
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tier: MatchTier,
    /// Title of the anchor song or name of the matched artist, as spelled in the dataset.
    pub matched_name: Option<String>,
    pub songs: Vec<SongCard>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("The query is empty")]
    EmptyQuery,

    #[error("The number of recommendations must be at least 1")]
    InvalidLimit,

    #[error("{tier:?} match needs {requested} songs but only {available} are available")]
    InsufficientPopulation {
        tier: MatchTier,
        requested: usize,
        available: usize,
    },
}
