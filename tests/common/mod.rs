//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestDataset, SHAPE_OF_YOU};
//!
//! #[test]
//! fn test_load() {
//!     let dataset = TestDataset::new();
//!     assert!(dataset.catalog().len() > 0);
//! }
//! ```

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::*;
