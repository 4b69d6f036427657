use super::Song;
use std::collections::{BTreeMap, HashSet};

/// Non-fatal issues found while building the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The streams value could not be read as a non-negative number and was set to 0.
    CoercedStreams { row: usize, raw: String },
    /// The row contained bytes that are not valid UTF-8.
    LossyText { row: usize },
}

/// The immutable, in-memory dataset the recommender queries.
///
/// It is built once at startup and shared behind an `Arc`, nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn from_songs(songs: Vec<Song>) -> Catalog {
        Catalog { songs }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter_songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of distinct artists, compared case-insensitively.
    pub fn get_artists_count(&self) -> usize {
        self.songs
            .iter()
            .map(|s| s.artist_name.to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn get_clusters_count(&self) -> usize {
        self.get_cluster_sizes().len()
    }

    pub fn get_cluster_sizes(&self) -> BTreeMap<i64, usize> {
        let mut sizes = BTreeMap::new();
        for song in self.songs.iter() {
            *sizes.entry(song.cluster_id).or_insert(0) += 1;
        }
        sizes
    }
}
