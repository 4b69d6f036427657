//! End-to-end tests for dataset loading

mod common;

use cluster_recommender::catalog::{load_catalog, LoadError};
use common::*;

#[test]
fn test_loads_fixture_dataset() {
    let dataset = TestDataset::new();
    let catalog = dataset.catalog();

    assert_eq!(catalog.len(), TOTAL_SONGS);
    assert_eq!(catalog.get_clusters_count(), TOTAL_CLUSTERS);
    assert_eq!(catalog.get_cluster_sizes().get(&SHAPE_OF_YOU_CLUSTER), Some(&7));

    let first = catalog.get(0).unwrap();
    assert_eq!(first.track_name, SHAPE_OF_YOU);
    assert_eq!(first.artist_name, ED_SHEERAN);
    assert_eq!(first.streams, 3562543890);
    assert_eq!(first.released_year, 2017);
    assert_eq!(first.cluster_id, SHAPE_OF_YOU_CLUSTER);
}

#[test]
fn test_quoted_fields_keep_commas() {
    let dataset = TestDataset::new();
    let catalog = dataset.catalog();

    let closer = catalog
        .iter_songs()
        .find(|s| s.track_name == "Closer")
        .unwrap();
    assert_eq!(closer.artist_name, "The Chainsmokers, Halsey");
}

#[test]
fn test_not_available_streams_load_as_zero() {
    let dataset = TestDataset::new();
    let catalog = dataset.catalog();

    let song = catalog
        .iter_songs()
        .find(|s| s.track_name == LOVE_GROWS)
        .unwrap();
    assert_eq!(song.streams, 0);
    assert_eq!(song.released_year, 1970);
}

#[test]
fn test_missing_cluster_column_is_fatal() {
    let dataset = TestDataset::with_contents(
        "track_name,artist(s)_name,released_year,streams\nCreep,Radiohead,1992,100\n",
    );
    match load_catalog(&dataset.path) {
        Err(LoadError::MissingField { field, row: None }) => assert_eq!(field, "Cluster"),
        Err(other) => panic!("Unexpected error {:?}", other),
        Ok(_) => panic!("Expected a missing field error"),
    }
}

#[test]
fn test_header_only_dataset_is_fatal() {
    let dataset = TestDataset::with_contents(
        "track_name,artist(s)_name,released_year,streams,Cluster\n",
    );
    assert!(matches!(
        load_catalog(&dataset.path),
        Err(LoadError::EmptyDataset)
    ));
}

#[test]
fn test_missing_file_is_fatal() {
    let dataset = TestDataset::new();
    let missing = dataset.dir.path().join("nope.csv");
    assert!(matches!(load_catalog(&missing), Err(LoadError::Io { .. })));
}
