//! Syntax expansion builder
//!
//! Renders the output of the permutation engine into grammar text: one line
//! per permutation under a base syntax template, plus the clause blocks and
//! fixed trailer that every "matches" category carries regardless of which
//! optional filters were permuted.

use crate::expansion::permute::{permute_filters, validate_filters};
use crate::expansion::ExpansionError;
use crate::vocabulary::{Alternatives, Vocabulary};

/// Clause nonterminals always present in a matches grammar, in trailer order
const TRAILER_CLAUSES: [&str; 2] = ["clause_result_by_team", "clause_between"];

/// Helper lines always present in a matches grammar, in trailer order
const TRAILER_HELPERS: [&str; 4] = ["word_won", "word_between", "word_lost", "word_by"];

/// Expand a base syntax template with every permutation of its optional
/// trailing filters.
///
/// Each permutation becomes one production line `{base_syntax} {tokens}` in
/// permutation emission order. An empty base syntax yields lines consisting
/// solely of the permuted tokens; an empty filter set yields an empty block.
pub fn expand_with_filters(
    base_syntax: &str,
    filters: &[String],
) -> Result<String, ExpansionError> {
    validate_filters(filters)?;
    let lines: Vec<String> = permute_filters(filters)
        .iter()
        .map(|permutation| render_line(base_syntax, permutation))
        .collect();
    Ok(lines.join("\n"))
}

/// Expand a matches-category base syntax over the union of clause-reference
/// tokens and filter tokens, then append the mandatory trailer.
///
/// Clause tokens and filters form a single filter set for permutation, so the
/// two kinds interleave freely within one production. The trailer is emitted
/// unconditionally: the `clause_result_by_team` and `clause_between` blocks,
/// the `won` / `between` / `lost` / `by` helper lines, and the numeric
/// `wickets` binding. These encode mandatory alternative sub-grammars rather
/// than optional qualifiers, so they stay out of the combinatorial expansion.
pub fn expand_with_matches_clauses(
    base_syntax: &str,
    match_clause_tokens: &[String],
    filter_tokens: &[String],
    vocabulary: &Vocabulary,
) -> Result<String, ExpansionError> {
    let mut pool: Vec<String> = Vec::with_capacity(match_clause_tokens.len() + filter_tokens.len());
    pool.extend_from_slice(match_clause_tokens);
    pool.extend_from_slice(filter_tokens);
    validate_filters(&pool)?;

    let mut lines: Vec<String> = permute_filters(&pool)
        .iter()
        .map(|permutation| render_line(base_syntax, permutation))
        .collect();
    lines.extend(matches_trailer(vocabulary)?);
    Ok(lines.join("\n"))
}

/// Emit the clause nonterminal's productions, one line per alternative:
/// `{clause_name} -> {alternative}`, declaration order preserved.
pub fn build_clause_block(clause_name: &str, alternatives: &Alternatives) -> String {
    alternatives
        .as_slice()
        .iter()
        .map(|alt| format!("{} -> {}", clause_name, alt))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The seven trailer lines shared by every matches grammar
fn matches_trailer(vocabulary: &Vocabulary) -> Result<Vec<String>, ExpansionError> {
    let mut lines = Vec::with_capacity(7);
    for clause in TRAILER_CLAUSES {
        let alternatives = vocabulary
            .clause(clause)
            .ok_or_else(|| ExpansionError::MissingClause(clause.to_string()))?;
        lines.push(build_clause_block(clause, alternatives));
    }
    for helper in TRAILER_HELPERS {
        lines.push(lookup_helper(vocabulary, helper)?.to_string());
    }
    lines.push(format!(
        "wickets -> {}",
        lookup_helper(vocabulary, "nlp_number")?
    ));
    Ok(lines)
}

fn lookup_helper<'a>(
    vocabulary: &'a Vocabulary,
    name: &str,
) -> Result<&'a str, ExpansionError> {
    vocabulary
        .helper(name)
        .ok_or_else(|| ExpansionError::MissingHelper(name.to_string()))
}

fn render_line(base_syntax: &str, tokens: &[String]) -> String {
    let joined = tokens.join(" ");
    if base_syntax.is_empty() {
        joined
    } else {
        format!("{} {}", base_syntax, joined)
    }
}
