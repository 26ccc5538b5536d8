//! Filter pipeline: directory walk, record loading and matching
//!
//! This module contains the filter engine, its configuration and path output
//! normalization.

pub mod config;
pub mod engine;
pub mod path_mapping;

pub use config::FilterConfig;
pub use engine::{FilterEngine, MatchingPaths};
pub use path_mapping::to_display_path;

use crate::error::FilterResult;
use crate::matching::Criteria;

/// Filter the record files under `folder` with the default configuration.
///
/// Returns the matching paths with forward-slash separators, in walk order.
pub fn dcm_files_filter(folder: &str, criteria: &Criteria) -> FilterResult<Vec<String>> {
    FilterEngine::default().filter_files(folder, criteria)
}
