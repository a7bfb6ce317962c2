//! Filter permutation engine
//!
//! Enumerates every ordered subset of a filter set, length 1 up to
//! [`MAX_PERMUTATION_LEN`]. For a fixed input ordering the output sequence is
//! fixed: within each length, permutations are emitted in lexicographic order
//! by input position, so two runs over the same filter set produce identical
//! sequences.

use crate::expansion::ExpansionError;

/// Permutation length cap. Growing a filter set beyond this only widens the
/// choice of which elements are drawn, never the length of a permutation.
pub const MAX_PERMUTATION_LEN: usize = 4;

/// The filter token that triggers the qualified-year duplication rule
pub const YEAR_FILTER: &str = "word_in year";

/// Replacement emitted alongside every permutation containing [`YEAR_FILTER`],
/// inserting the optional this/last qualifier before "year"
pub const QUALIFIED_YEAR_FILTER: &str = "word_in word_this_last word_year";

/// Enumerate all permutations of `filters` of each length `1..=min(n, 4)`.
///
/// Every emitted permutation containing the exact token `word_in year` is
/// followed immediately by a duplicate with that token replaced by
/// `word_in word_this_last word_year`, so both the plain and the qualified
/// form appear as independent results. An empty filter set yields an empty
/// sequence.
pub fn permute_filters(filters: &[String]) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    for len in 1..=filters.len().min(MAX_PERMUTATION_LEN) {
        for permutation in permutations_of_length(filters, len) {
            if let Some(pos) = permutation.iter().position(|t| t == YEAR_FILTER) {
                let mut qualified = permutation.clone();
                qualified[pos] = QUALIFIED_YEAR_FILTER.to_string();
                results.push(permutation);
                results.push(qualified);
            } else {
                results.push(permutation);
            }
        }
    }
    results
}

/// Reject filter sets the engine cannot expand meaningfully: duplicate tokens
/// would yield textually duplicated productions, empty tokens empty columns.
pub fn validate_filters(filters: &[String]) -> Result<(), ExpansionError> {
    for (i, token) in filters.iter().enumerate() {
        if token.is_empty() {
            return Err(ExpansionError::EmptyToken);
        }
        if filters[..i].contains(token) {
            return Err(ExpansionError::DuplicateFilter(token.clone()));
        }
    }
    Ok(())
}

/// All permutations of `filters` taken `len` at a time, lexicographic by
/// input position
fn permutations_of_length(filters: &[String], len: usize) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    let mut used = vec![false; filters.len()];
    let mut current = Vec::with_capacity(len);
    extend_permutation(filters, len, &mut used, &mut current, &mut results);
    results
}

fn extend_permutation(
    filters: &[String],
    len: usize,
    used: &mut [bool],
    current: &mut Vec<String>,
    results: &mut Vec<Vec<String>>,
) {
    if current.len() == len {
        results.push(current.clone());
        return;
    }
    for i in 0..filters.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(filters[i].clone());
        extend_permutation(filters, len, used, current, results);
        current.pop();
        used[i] = false;
    }
}
