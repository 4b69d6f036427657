//! Names and counts of the songs written by the fixtures

#![allow(dead_code)]

pub const SHAPE_OF_YOU: &str = "Shape of You";
pub const SHAPE_OF_YOU_CLUSTER: i64 = 3;

/// The songs sharing cluster 3 with Shape of You.
pub const CLUSTER_3_OTHERS: [&str; 6] = [
    "Blinding Lights",
    "Dance Monkey",
    "Someone You Loved",
    "Sunflower - Spider-Man: Into the Spider-Verse",
    "One Dance",
    "STAY (with Justin Bieber)",
];

pub const ED_SHEERAN: &str = "Ed Sheeran";
pub const ED_SHEERAN_SONGS: [&str; 4] = ["Shape of You", "Perfect", "Photograph", "Thinking Out Loud"];

pub const BILLIE_EILISH: &str = "Billie Eilish";
pub const BAD_GUY: &str = "bad guy";

/// Alone in its cluster.
pub const CLOCKS: &str = "Clocks";

/// Its streams column holds `N/A`.
pub const LOVE_GROWS: &str = "Love Grows (Where My Rosemary Goes)";

pub const TOTAL_SONGS: usize = 19;
pub const TOTAL_CLUSTERS: usize = 4;
