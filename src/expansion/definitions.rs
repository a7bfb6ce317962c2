//! Definition assembler
//!
//! Fixed auxiliary grammar fragments shared by every exploded category,
//! parameterized only by the year value supplied by the caller.

use crate::expansion::ExpansionError;
use crate::vocabulary::Vocabulary;

/// Helper tokens bound by the qualifier block, in output order
const QUALIFIER_HELPERS: [&str; 6] = [
    "ground",
    "word_this_last",
    "word_in",
    "word_year",
    "series",
    "in_match_type",
];

/// Assemble the seven-line qualifier block: ground, this/last, "in", "year",
/// series and in-match-type helper bindings, then `year -> {year_value}`.
///
/// `year_value` is opaque to the assembler; callers typically pass a
/// year-matching pattern.
pub fn year_qualifier_block(
    vocabulary: &Vocabulary,
    year_value: &str,
) -> Result<String, ExpansionError> {
    let mut lines = Vec::with_capacity(QUALIFIER_HELPERS.len() + 1);
    for helper in QUALIFIER_HELPERS {
        let line = vocabulary
            .helper(helper)
            .ok_or_else(|| ExpansionError::MissingHelper(helper.to_string()))?;
        lines.push(line.to_string());
    }
    lines.push(format!("year -> {}", year_value));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualifier_vocabulary() -> Vocabulary {
        Vocabulary::from_yaml(
            r#"
helpers:
  ground: "ground -> 'lords' | 'mcg'"
  word_this_last: "word_this_last -> 'this' | 'last'"
  word_in: "word_in -> 'in'"
  word_year: "word_year -> 'year'"
  series: "series -> 'ashes' | 'world_cup'"
  in_match_type: "in_match_type -> word_in match_type"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_year_qualifier_block_has_seven_lines_in_order() {
        let block = year_qualifier_block(&qualifier_vocabulary(), "'[0-9]{4}'").unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "ground -> 'lords' | 'mcg'");
        assert_eq!(lines[1], "word_this_last -> 'this' | 'last'");
        assert_eq!(lines[2], "word_in -> 'in'");
        assert_eq!(lines[3], "word_year -> 'year'");
        assert_eq!(lines[4], "series -> 'ashes' | 'world_cup'");
        assert_eq!(lines[5], "in_match_type -> word_in match_type");
        assert_eq!(lines[6], "year -> '[0-9]{4}'");
    }

    #[test]
    fn test_year_value_is_opaque() {
        let block = year_qualifier_block(&qualifier_vocabulary(), "2019").unwrap();
        assert!(block.ends_with("year -> 2019"));
    }

    #[test]
    fn test_missing_helper_is_an_error() {
        let mut vocabulary = qualifier_vocabulary();
        vocabulary.helpers.remove("series");
        assert_eq!(
            year_qualifier_block(&vocabulary, "2019"),
            Err(ExpansionError::MissingHelper("series".to_string()))
        );
    }
}
