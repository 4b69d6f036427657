//! Test fixture creation for the dataset

#![allow(dead_code)]

use cluster_recommender::catalog::{load_catalog, Catalog};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Same column layout as the public Spotify export, `artist(s)_name` included.
pub const DATASET_CSV: &str = "\
track_name,artist(s)_name,artist_count,released_year,released_month,streams,bpm,Cluster
Shape of You,Ed Sheeran,1,2017,1,3562543890,96,3
Blinding Lights,The Weeknd,1,2019,11,3703895074,171,3
Dance Monkey,Tones and I,1,2019,5,2864791672,98,3
Someone You Loved,Lewis Capaldi,1,2018,11,2887241814,110,3
\"Sunflower - Spider-Man: Into the Spider-Verse\",\"Post Malone, Swae Lee\",2,2018,10,2808096550,90,3
One Dance,\"Drake, WizKid, Kyla\",3,2016,4,2713922350,104,3
STAY (with Justin Bieber),\"Justin Bieber, The Kid Laroi\",2,2021,7,2665343922,170,3
bad guy,Billie Eilish,1,2019,3,2355719893,135,1
Believer,Imagine Dragons,1,2017,1,2594040133,125,1
Perfect,Ed Sheeran,1,2017,1,2559529074,95,1
Closer,\"The Chainsmokers, Halsey\",2,2016,5,2591224264,95,1
Starboy,\"The Weeknd, Daft Punk\",2,2016,9,2565529693,186,1
Heat Waves,Glass Animals,1,2020,6,2557975762,81,1
Love Grows (Where My Rosemary Goes),Edison Lighthouse,1,1970,1,N/A,110,0
Photograph,Ed Sheeran,1,2014,1,2236667932,108,0
Thinking Out Loud,Ed Sheeran,1,2014,1,2280566092,79,0
lovely - Bonus Track,\"Billie Eilish, Khalid\",2,2017,12,2355719893,115,0
Riptide,Vance Joy,1,2013,5,2009094673,102,0
Clocks,Coldplay,1,2002,1,1000000000,131,2
";

/// A dataset written to a temporary directory, removed on drop.
pub struct TestDataset {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestDataset {
    pub fn new() -> TestDataset {
        Self::with_contents(DATASET_CSV)
    }

    pub fn with_contents(contents: &str) -> TestDataset {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("spotify_clustered.csv");
        fs::write(&path, contents).expect("Failed to write dataset");
        TestDataset { dir, path }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::new(load_catalog(&self.path).expect("Failed to load test dataset"))
    }
}
