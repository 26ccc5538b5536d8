//! Criteria parsing and record matching

pub mod criteria;
pub mod predicate;

pub use criteria::{Criteria, Criterion};
pub use predicate::{evaluate, matches, MatchOutcome};
