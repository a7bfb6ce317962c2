//! # crease
//!
//! Generates the exhaustive set of concrete grammar production rules consumed
//! by the cricket query-understanding layer. Hand-authored base syntax
//! templates are combined with every admissible ordering of their declared
//! optional filter tokens, producing one textual production per combination:
//!
//! ```text
//! matches -> word_matches match_filters word_in year
//! matches -> word_matches match_filters word_in word_this_last word_year
//! matches -> word_matches match_filters word_in ground word_in year
//! ```
//!
//! The combinatorial core lives in [`expansion`]; [`productions`] drives it
//! once per production category and writes the exploded grammar artifacts;
//! [`cache`] holds generated blocks in a namespaced bucket; [`vocabulary`]
//! carries the token vocabulary injected into every expansion call.

pub mod cache;
pub mod expansion;
pub mod productions;
pub mod vocabulary;
