//! DICOM JSON metadata filter
//!
//! Scans a directory tree for DICOM JSON files and reports the ones whose
//! attributes list every requested key/value pair.

pub mod cli;
pub mod error;
pub mod matching;
pub mod parser;
pub mod pipeline;

// Re-export commonly used types
pub use error::{FilterError, FilterResult};
pub use matching::{evaluate, matches, Criteria, Criterion, MatchOutcome};
pub use parser::{load_record, Record};
pub use pipeline::{dcm_files_filter, FilterConfig, FilterEngine};

/// Build criteria from comma-separated keys and values and filter `folder`
pub fn filter_folder(folder: &str, keys: &str, values: &str) -> FilterResult<Vec<String>> {
    let criteria = Criteria::from_comma_separated(keys, values)?;
    dcm_files_filter(folder, &criteria)
}
