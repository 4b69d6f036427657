use serde::Serialize;

/// A row of the clustered dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Song {
    pub track_name: String,
    pub artist_name: String,
    pub streams: u64,
    pub released_year: i32,
    /// Assigned by the offline clustering step, opaque here.
    pub cluster_id: i64,
}

/// The subset of a [`Song`] that is shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SongCard {
    pub track_name: String,
    pub artist_name: String,
    pub streams: u64,
    pub released_year: i32,
}

impl From<&Song> for SongCard {
    fn from(song: &Song) -> Self {
        SongCard {
            track_name: song.track_name.clone(),
            artist_name: song.artist_name.clone(),
            streams: song.streams,
            released_year: song.released_year,
        }
    }
}
