//! Namespaced syntax cache
//!
//! Generated syntax blocks are held per production category in a single
//! logical bucket. `put` overwrites on key collision; `get` on an absent key
//! is an error, never a defaulted empty block.

use std::collections::HashMap;
use std::fmt;

/// Bucket name used when callers don't supply their own
pub const DEFAULT_NAMESPACE: &str = "crease-syntax-cache";

/// Errors raised by cache lookups
#[derive(Debug, Clone, PartialEq)]
pub enum CacheError {
    NotFound { namespace: String, key: String },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NotFound { namespace, key } => {
                write!(f, "no syntax cached under '{}' in namespace '{}'", key, namespace)
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// In-memory key-value store for generated syntax blocks
#[derive(Debug, Clone)]
pub struct SyntaxCache {
    namespace: String,
    entries: HashMap<String, String>,
}

impl SyntaxCache {
    pub fn new(namespace: impl Into<String>) -> Self {
        SyntaxCache {
            namespace: namespace.into(),
            entries: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Drop every entry in the namespace
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Store a syntax block, replacing any existing block under `key`
    pub fn put(&mut self, key: impl Into<String>, syntax: impl Into<String>) {
        self.entries.insert(key.into(), syntax.into());
    }

    /// Fetch the syntax block stored under `key`
    pub fn get(&self, key: &str) -> Result<&str, CacheError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CacheError::NotFound {
                namespace: self.namespace.clone(),
                key: key.to_string(),
            })
    }

    /// All cached keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SyntaxCache {
    fn default() -> Self {
        SyntaxCache::new(DEFAULT_NAMESPACE)
    }
}
