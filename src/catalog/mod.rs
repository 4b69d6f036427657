mod catalog;
mod load;
mod song;

pub use catalog::{Catalog, Problem as LoadCatalogProblem};
pub use load::{load_catalog, parse_streams, read_catalog, BuildResult, LoadError};
pub use song::{Song, SongCard};
