//! Token vocabulary configuration
//!
//! The vocabulary is the single immutable configuration object injected into
//! every expansion call: helper lines keyed by symbolic token name, named
//! filter sets eligible for permutation, and clause maps giving each clause
//! nonterminal its alternative expansions. It is deserialized from YAML and
//! validated up front so the expansion engine never inspects value shapes at
//! runtime.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lazy-compiled pattern for token names: lowercase words separated by single
/// spaces, so a multi-word token such as `word_in year` is accepted as one
/// atomic permutation element.
static TOKEN_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*( [a-z][a-z0-9_]*)*$").unwrap());

/// Errors raised while validating a vocabulary
#[derive(Debug, Clone, PartialEq)]
pub enum VocabularyError {
    InvalidToken { set: String, token: String },
    DuplicateToken { set: String, token: String },
    EmptyHelper(String),
    EmptyClause(String),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::InvalidToken { set, token } => {
                write!(f, "filter set '{}' contains invalid token '{}'", set, token)
            }
            VocabularyError::DuplicateToken { set, token } => {
                write!(f, "filter set '{}' contains duplicate token '{}'", set, token)
            }
            VocabularyError::EmptyHelper(name) => {
                write!(f, "helper '{}' has an empty grammar line", name)
            }
            VocabularyError::EmptyClause(name) => {
                write!(f, "clause '{}' has an empty alternative", name)
            }
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Alternative expansions of a clause nonterminal
///
/// A clause with a single alternative may be written as a bare string in the
/// vocabulary file; anything that is neither a string nor a list of strings
/// fails at deserialize time rather than being coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alternatives {
    Single(String),
    Many(Vec<String>),
}

impl Alternatives {
    /// View the alternatives as a slice, normalizing the single form to a
    /// one-element slice. Order is the declaration order and determines
    /// output line order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Alternatives::Single(alt) => std::slice::from_ref(alt),
            Alternatives::Many(alts) => alts,
        }
    }
}

/// The token vocabulary for one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Symbolic token name -> complete helper grammar line (or bare right-hand
    /// side for tokens like `nlp_number` that are spliced into a production)
    #[serde(default)]
    pub helpers: BTreeMap<String, String>,
    /// Named ordered filter sets eligible for permutation
    #[serde(default)]
    pub filter_sets: BTreeMap<String, Vec<String>>,
    /// Clause nonterminal name -> its alternative expansions
    #[serde(default)]
    pub match_clauses: BTreeMap<String, Alternatives>,
}

impl Vocabulary {
    /// Deserialize a vocabulary from YAML source
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Look up a helper grammar line by symbolic name
    pub fn helper(&self, name: &str) -> Option<&str> {
        self.helpers.get(name).map(String::as_str)
    }

    /// Look up the alternatives of a clause nonterminal
    pub fn clause(&self, name: &str) -> Option<&Alternatives> {
        self.match_clauses.get(name)
    }

    /// Look up a named filter set
    pub fn filter_set(&self, name: &str) -> Option<&[String]> {
        self.filter_sets.get(name).map(Vec::as_slice)
    }

    /// Check token-name shape and duplicate-freeness of every filter set, and
    /// that no helper or clause alternative is empty
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for (set, tokens) in &self.filter_sets {
            let mut seen: Vec<&str> = Vec::with_capacity(tokens.len());
            for token in tokens {
                if !TOKEN_NAME_REGEX.is_match(token) {
                    return Err(VocabularyError::InvalidToken {
                        set: set.clone(),
                        token: token.clone(),
                    });
                }
                if seen.contains(&token.as_str()) {
                    return Err(VocabularyError::DuplicateToken {
                        set: set.clone(),
                        token: token.clone(),
                    });
                }
                seen.push(token);
            }
        }
        for (name, line) in &self.helpers {
            if line.trim().is_empty() {
                return Err(VocabularyError::EmptyHelper(name.clone()));
            }
        }
        for (name, alternatives) in &self.match_clauses {
            if alternatives.as_slice().iter().any(|alt| alt.trim().is_empty()) {
                return Err(VocabularyError::EmptyClause(name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
helpers:
  word_in: "word_in -> 'in'"
  word_year: "word_year -> 'year'"
filter_sets:
  filters_in: ["word_in year", "word_in ground"]
match_clauses:
  clause_between: "word_between team_a word_and team_b"
  clause_result_by_team:
    - "word_won_lost word_by team"
    - "word_played word_by team"
"#
    }

    #[test]
    fn test_from_yaml_parses_all_sections() {
        let vocabulary = Vocabulary::from_yaml(sample_yaml()).unwrap();
        assert_eq!(vocabulary.helper("word_in"), Some("word_in -> 'in'"));
        assert_eq!(
            vocabulary.filter_set("filters_in"),
            Some(&["word_in year".to_string(), "word_in ground".to_string()][..])
        );
        assert_eq!(
            vocabulary.clause("clause_between"),
            Some(&Alternatives::Single(
                "word_between team_a word_and team_b".to_string()
            ))
        );
    }

    #[test]
    fn test_alternatives_single_normalizes_to_one_element() {
        let single = Alternatives::Single("a by team".to_string());
        assert_eq!(single.as_slice(), &["a by team".to_string()]);
    }

    #[test]
    fn test_alternatives_rejects_non_string_shapes() {
        // A mapping is neither a string nor a list of strings
        let result = Vocabulary::from_yaml("match_clauses:\n  clause_bad:\n    nested: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_sample() {
        let vocabulary = Vocabulary::from_yaml(sample_yaml()).unwrap();
        assert!(vocabulary.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_invalid_token() {
        let mut vocabulary = Vocabulary::default();
        vocabulary
            .filter_sets
            .insert("filters_in".to_string(), vec!["Word-In".to_string()]);
        assert_eq!(
            vocabulary.validate(),
            Err(VocabularyError::InvalidToken {
                set: "filters_in".to_string(),
                token: "Word-In".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_token() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.filter_sets.insert(
            "filters_in".to_string(),
            vec!["word_by".to_string(), "word_by".to_string()],
        );
        assert_eq!(
            vocabulary.validate(),
            Err(VocabularyError::DuplicateToken {
                set: "filters_in".to_string(),
                token: "word_by".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_helper() {
        let mut vocabulary = Vocabulary::default();
        vocabulary
            .helpers
            .insert("word_in".to_string(), "  ".to_string());
        assert_eq!(
            vocabulary.validate(),
            Err(VocabularyError::EmptyHelper("word_in".to_string()))
        );
    }
}
