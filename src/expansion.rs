//! Grammar expansion engine
//!
//! The combinatorial core of the crate. [`permute`] enumerates every ordered
//! subset of a filter set up to the length cap, [`builder`] renders one
//! grammar line per permutation under a base syntax template, and
//! [`definitions`] assembles the fixed qualifier blocks shared by every
//! production category. All functions are pure and synchronous.

pub mod builder;
pub mod definitions;
pub mod permute;

pub use builder::{build_clause_block, expand_with_filters, expand_with_matches_clauses};
pub use definitions::year_qualifier_block;
pub use permute::permute_filters;

use std::fmt;

/// Configuration errors reported by expansion operations
///
/// The engine is deterministic and side-effect-free; every failure is a
/// caller input error, never a transient condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpansionError {
    /// A filter set contains the same token twice; callers must pre-deduplicate
    DuplicateFilter(String),
    /// A filter set contains an empty token
    EmptyToken,
    /// A helper token named by the grammar is absent from the vocabulary
    MissingHelper(String),
    /// A clause named by the grammar is absent from the vocabulary
    MissingClause(String),
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionError::DuplicateFilter(token) => {
                write!(f, "duplicate filter token '{}'", token)
            }
            ExpansionError::EmptyToken => write!(f, "filter set contains an empty token"),
            ExpansionError::MissingHelper(name) => {
                write!(f, "vocabulary has no helper '{}'", name)
            }
            ExpansionError::MissingClause(name) => {
                write!(f, "vocabulary has no clause '{}'", name)
            }
        }
    }
}

impl std::error::Error for ExpansionError {}
