//! Catalog loading functionality
//!
//! Reads the clustered CSV export once. Column names are canonicalized
//! (`artist(s)_name` becomes `artist_name`, the cluster column may be called
//! `Cluster`, `cluster` or `cluster_id`) and the streams column is coerced to a
//! non-negative integer, anything unreadable becoming 0.

use super::{Catalog, LoadCatalogProblem, Song};
use csv::{ByteRecord, ReaderBuilder};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const TRACK_NAME_COLUMNS: &[&str] = &["track_name"];
const ARTIST_NAME_COLUMNS: &[&str] = &["artist_name", "artist(s)_name"];
const STREAMS_COLUMNS: &[&str] = &["streams"];
const RELEASED_YEAR_COLUMNS: &[&str] = &["released_year"];
const CLUSTER_COLUMNS: &[&str] = &["Cluster", "cluster", "cluster_id"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing field \"{field}\"{}", describe_row(.row))]
    MissingField { field: String, row: Option<u64> },

    #[error("The dataset has no rows")]
    EmptyDataset,
}

fn describe_row(row: &Option<u64>) -> String {
    match row {
        Some(line) => format!(" at line {}", line),
        None => " in the header".to_string(),
    }
}

pub struct BuildResult {
    pub catalog: Catalog,
    pub problems: Vec<LoadCatalogProblem>,
}

#[derive(Debug)]
struct Columns {
    track_name: usize,
    artist_name: usize,
    streams: usize,
    released_year: usize,
    cluster_id: usize,
}

fn find_column(headers: &ByteRecord, candidates: &[&str]) -> Result<usize, LoadError> {
    let names: Vec<Cow<str>> = headers.iter().map(String::from_utf8_lossy).collect();
    candidates
        .iter()
        .find_map(|candidate| names.iter().position(|name| name.trim() == *candidate))
        .ok_or_else(|| LoadError::MissingField {
            field: candidates[0].to_string(),
            row: None,
        })
}

impl Columns {
    fn from_headers(headers: &ByteRecord) -> Result<Columns, LoadError> {
        Ok(Columns {
            track_name: find_column(headers, TRACK_NAME_COLUMNS)?,
            artist_name: find_column(headers, ARTIST_NAME_COLUMNS)?,
            streams: find_column(headers, STREAMS_COLUMNS)?,
            released_year: find_column(headers, RELEASED_YEAR_COLUMNS)?,
            cluster_id: find_column(headers, CLUSTER_COLUMNS)?,
        })
    }
}

/// Reads a stream count the way a lenient numeric coercion would:
/// integers as-is, finite non-negative floats truncated, everything else rejected.
pub fn parse_streams(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u64>() {
        return Some(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as u64),
        _ => None,
    }
}

fn parse_integral(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}

struct RowReader<'a> {
    record: &'a ByteRecord,
    line: u64,
    lossy: bool,
}

impl<'a> RowReader<'a> {
    fn text(&mut self, index: usize) -> Option<String> {
        let bytes = self.record.get(index)?;
        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            self.lossy = true;
        }
        Some(text.into_owned())
    }

    fn required_text(&mut self, index: usize, field: &str) -> Result<String, LoadError> {
        self.text(index).ok_or_else(|| self.missing(field))
    }

    fn required_integral(&mut self, index: usize, field: &str) -> Result<i64, LoadError> {
        self.text(index)
            .as_deref()
            .and_then(parse_integral)
            .ok_or_else(|| self.missing(field))
    }

    fn missing(&self, field: &str) -> LoadError {
        LoadError::MissingField {
            field: field.to_string(),
            row: Some(self.line),
        }
    }
}

fn parse_song(
    record: &ByteRecord,
    line: u64,
    columns: &Columns,
    problems: &mut Vec<LoadCatalogProblem>,
) -> Result<Song, LoadError> {
    let mut row = RowReader {
        record,
        line,
        lossy: false,
    };

    let track_name = row.required_text(columns.track_name, "track_name")?;
    let artist_name = row.required_text(columns.artist_name, "artist_name")?;
    let released_year = row.required_integral(columns.released_year, "released_year")?;
    let released_year = i32::try_from(released_year).map_err(|_| row.missing("released_year"))?;
    let cluster_id = row.required_integral(columns.cluster_id, "cluster_id")?;

    let raw_streams = row.text(columns.streams).unwrap_or_default();
    let streams = match parse_streams(&raw_streams) {
        Some(streams) => streams,
        None => {
            problems.push(LoadCatalogProblem::CoercedStreams {
                row: line as usize,
                raw: raw_streams,
            });
            0
        }
    };

    if row.lossy {
        problems.push(LoadCatalogProblem::LossyText { row: line as usize });
    }

    Ok(Song {
        track_name,
        artist_name,
        streams,
        released_year,
        cluster_id,
    })
}

/// Builds a catalog from any CSV source, collecting non-fatal problems along the way.
pub fn read_catalog<R: Read>(reader: R) -> Result<BuildResult, LoadError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(csv_reader.byte_headers()?)?;
    debug!("Resolved dataset columns: {:?}", columns);

    let mut songs = vec![];
    let mut problems = vec![];
    let mut record = ByteRecord::new();
    while csv_reader.read_byte_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        songs.push(parse_song(&record, line, &columns, &mut problems)?);
    }

    if songs.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    Ok(BuildResult {
        catalog: Catalog::from_songs(songs),
        problems,
    })
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    info!("Loading dataset at {:?}...", path);
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let BuildResult { catalog, problems } = read_catalog(file)?;

    if !problems.is_empty() {
        warn!("Found {} non-fatal problems:", problems.len());
        for problem in problems.iter() {
            debug!("- {:?}", problem);
        }
    }

    info!(
        "Dataset has:\n{} songs\n{} artists\n{} clusters",
        catalog.len(),
        catalog.get_artists_count(),
        catalog.get_clusters_count()
    );
    Ok(catalog)
}
