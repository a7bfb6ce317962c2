//! Production orchestration
//!
//! Drives the expansion engine once per production category: reads the
//! per-category expansion definition files from a directory, expands each
//! base syntax into its full syntax block, and writes (or caches) one
//! exploded grammar artifact per category.

use crate::cache::SyntaxCache;
use crate::expansion::{expand_with_filters, expand_with_matches_clauses, ExpansionError};
use crate::vocabulary::{Alternatives, Vocabulary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// The fixed production categories, one per downstream query type
pub const CATEGORIES: [&str; 8] = [
    "compare",
    "matches",
    "matches_cond",
    "most_x",
    "partnerships",
    "player_dismissals",
    "player_stats",
    "scores",
];

/// File extension of expansion definition files
const DEFINITION_EXT: &str = "yaml";

/// Errors raised while loading definitions or writing exploded grammar
#[derive(Debug)]
pub enum ProductionsError {
    Io(std::io::Error),
    Definition { category: String, source: serde_yaml::Error },
    Expansion(ExpansionError),
    MissingDefinition(String),
    UnknownCategory(String),
}

impl fmt::Display for ProductionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductionsError::Io(e) => write!(f, "I/O error: {}", e),
            ProductionsError::Definition { category, source } => {
                write!(f, "malformed definition for '{}': {}", category, source)
            }
            ProductionsError::Expansion(e) => write!(f, "expansion error: {}", e),
            ProductionsError::MissingDefinition(category) => {
                write!(f, "no definition file for category '{}'", category)
            }
            ProductionsError::UnknownCategory(name) => {
                write!(f, "definition file for unknown category '{}'", name)
            }
        }
    }
}

impl std::error::Error for ProductionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProductionsError::Io(e) => Some(e),
            ProductionsError::Definition { source, .. } => Some(source),
            ProductionsError::Expansion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProductionsError {
    fn from(err: std::io::Error) -> Self {
        ProductionsError::Io(err)
    }
}

impl From<ExpansionError> for ProductionsError {
    fn from(err: ExpansionError) -> Self {
        ProductionsError::Expansion(err)
    }
}

/// One category's hand-authored expansion definition, as read from disk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryDefinition {
    /// Base syntax template; may be empty, in which case productions consist
    /// solely of the permuted tokens
    #[serde(default)]
    pub base_syntax: String,
    /// Expandable filter tokens, declaration order
    #[serde(default)]
    pub filters: Vec<String>,
    /// Expandable clause-reference tokens; non-empty selects the
    /// matches-clause expansion with its mandatory trailer
    #[serde(default)]
    pub match_clauses: Vec<String>,
    /// Symbolic token name -> literal word(s), carried as metadata
    #[serde(default)]
    pub expansions: BTreeMap<String, String>,
    /// Clause name -> alternative expansions, carried as metadata
    #[serde(default)]
    pub dynamic_expansions: BTreeMap<String, Alternatives>,
}

/// The generated grammar for one category plus its metadata. Created fresh
/// per generation run and never mutated after emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRecord {
    pub category: String,
    pub syntax: String,
    pub expansions: BTreeMap<String, String>,
    pub dynamic_expansions: BTreeMap<String, Vec<String>>,
}

/// Expands every category definition under a shared vocabulary
#[derive(Debug, Clone)]
pub struct Productions {
    vocabulary: Vocabulary,
}

impl Productions {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Productions { vocabulary }
    }

    /// Expand one category definition into its production record
    pub fn produce(
        &self,
        category: &str,
        definition: &CategoryDefinition,
    ) -> Result<ProductionRecord, ProductionsError> {
        let syntax = if definition.match_clauses.is_empty() {
            expand_with_filters(&definition.base_syntax, &definition.filters)?
        } else {
            expand_with_matches_clauses(
                &definition.base_syntax,
                &definition.match_clauses,
                &definition.filters,
                &self.vocabulary,
            )?
        };
        let dynamic_expansions = definition
            .dynamic_expansions
            .iter()
            .map(|(name, alternatives)| (name.clone(), alternatives.as_slice().to_vec()))
            .collect();
        Ok(ProductionRecord {
            category: category.to_string(),
            syntax,
            expansions: definition.expansions.clone(),
            dynamic_expansions,
        })
    }

    /// Load and expand every category definition in `definitions_dir`.
    ///
    /// Records come back in [`CATEGORIES`] order. A missing definition file
    /// and a definition file whose name is not a known category are both
    /// errors.
    pub fn load_dir(&self, definitions_dir: &Path) -> Result<Vec<ProductionRecord>, ProductionsError> {
        for entry in fs::read_dir(definitions_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DEFINITION_EXT) {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            if !CATEGORIES.contains(&stem) {
                return Err(ProductionsError::UnknownCategory(stem.to_string()));
            }
        }

        let mut records = Vec::with_capacity(CATEGORIES.len());
        for category in CATEGORIES {
            let path = definitions_dir.join(format!("{}.{}", category, DEFINITION_EXT));
            if !path.exists() {
                return Err(ProductionsError::MissingDefinition(category.to_string()));
            }
            let source = fs::read_to_string(&path)?;
            let definition: CategoryDefinition = serde_yaml::from_str(&source).map_err(|e| {
                ProductionsError::Definition {
                    category: category.to_string(),
                    source: e,
                }
            })?;
            records.push(self.produce(category, &definition)?);
        }
        Ok(records)
    }

    /// Explode every category definition to one grammar file per category,
    /// named exactly after the category
    pub fn explode(
        &self,
        definitions_dir: &Path,
        exploded_dir: &Path,
    ) -> Result<(), ProductionsError> {
        let records = self.load_dir(definitions_dir)?;
        fs::create_dir_all(exploded_dir)?;
        for record in &records {
            fs::write(exploded_dir.join(&record.category), &record.syntax)?;
        }
        Ok(())
    }

    /// Load every category definition and store the generated blocks in the
    /// cache, clearing it first
    pub fn build_cache(
        &self,
        definitions_dir: &Path,
        cache: &mut SyntaxCache,
    ) -> Result<(), ProductionsError> {
        let records = self.load_dir(definitions_dir)?;
        cache.clear();
        for record in records {
            cache.put(record.category, record.syntax);
        }
        Ok(())
    }
}
