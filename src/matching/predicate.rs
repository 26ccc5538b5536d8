//! Record matching against a set of criteria

use serde_json::Value;
use std::fmt;

use crate::matching::criteria::Criteria;
use crate::parser::Record;

/// Result of evaluating one record, including why it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Every criterion holds
    Matched,
    /// The file could not be loaded as a record
    NoRecord,
    /// The record has no attributes
    EmptyRecord,
    /// No criteria were given; nothing can match
    NoCriteria,
    /// The record has no attribute named by the criterion
    MissingKey { index: usize, key: String },
    /// The attribute has no `"Value"` list
    MissingValueList { index: usize, key: String },
    /// The attribute's `"Value"` list does not contain the expected value
    ValueNotFound {
        index: usize,
        key: String,
        value: String,
    },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Matched => write!(f, "matched"),
            MatchOutcome::NoRecord => write!(f, "no record"),
            MatchOutcome::EmptyRecord => write!(f, "empty record"),
            MatchOutcome::NoCriteria => write!(f, "no criteria"),
            MatchOutcome::MissingKey { index, key } => {
                write!(f, "criterion {}: missing key '{}'", index, key)
            }
            MatchOutcome::MissingValueList { index, key } => {
                write!(f, "criterion {}: '{}' has no Value list", index, key)
            }
            MatchOutcome::ValueNotFound { index, key, value } => {
                write!(f, "criterion {}: '{}' does not list '{}'", index, key, value)
            }
        }
    }
}

/// Evaluate `record` against every criterion, stopping at the first failure
pub fn evaluate(record: Option<&Record>, criteria: &Criteria) -> MatchOutcome {
    let record = match record {
        Some(record) if record.is_empty() => return MatchOutcome::EmptyRecord,
        Some(record) => record,
        None => return MatchOutcome::NoRecord,
    };

    if criteria.is_empty() {
        return MatchOutcome::NoCriteria;
    }

    for (index, criterion) in criteria.iter().enumerate() {
        if record.attribute(&criterion.key).is_none() {
            return MatchOutcome::MissingKey {
                index,
                key: criterion.key.clone(),
            };
        }

        let Some(values) = record.value_list(&criterion.key) else {
            return MatchOutcome::MissingValueList {
                index,
                key: criterion.key.clone(),
            };
        };

        if !contains_text(values, &criterion.value) {
            return MatchOutcome::ValueNotFound {
                index,
                key: criterion.key.clone(),
                value: criterion.value.clone(),
            };
        }
    }

    MatchOutcome::Matched
}

/// Return true if `record` satisfies every criterion
pub fn matches(record: Option<&Record>, criteria: &Criteria) -> bool {
    evaluate(record, criteria).is_match()
}

// Only string elements can equal a textual criterion value.
fn contains_text(values: &[Value], expected: &str) -> bool {
    values
        .iter()
        .any(|value| value.as_str() == Some(expected))
}
