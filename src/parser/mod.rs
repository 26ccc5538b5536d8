//! DICOM JSON record loading and directory discovery

pub mod directory;
pub mod filter;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Key of the value list inside every attribute descriptor
pub const VALUE_FIELD: &str = "Value";

/// A DICOM JSON metadata record.
///
/// Top-level object mapping attribute names (tags or keywords) to attribute
/// descriptors such as `{"vr": "CS", "Value": ["CT"]}`. Descriptors are kept
/// untyped; lookups go through [`Record::attribute`] and
/// [`Record::value_list`] so a malformed descriptor only fails its own
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create a record from an already parsed JSON object
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Number of attributes in the record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an attribute descriptor by name
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up the `"Value"` list of an attribute
    pub fn value_list(&self, key: &str) -> Option<&Vec<Value>> {
        self.attribute(key)?.get(VALUE_FIELD)?.as_array()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::new(attributes)
    }
}

/// Parse a record from JSON text.
///
/// Returns `None` for invalid JSON and for any top-level value that is not an
/// object.
pub fn parse_record(content: &str) -> Option<Record> {
    match serde_json::from_str::<Record>(content) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!(error = %e, "content is not a JSON object record");
            None
        }
    }
}

/// Load a record from a file, returning `None` if it cannot be read or parsed
pub fn load_record(path: &Path) -> Option<Record> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable file");
            return None;
        }
    };

    let record = parse_record(&content);
    if record.is_none() {
        tracing::debug!(path = %path.display(), "file is not a valid record");
    }
    record
}
