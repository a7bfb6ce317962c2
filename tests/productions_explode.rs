//! End-to-end tests for the orchestration layer: loading the shipped
//! definition files, exploding them to per-category grammar files, and
//! building the syntax cache

use crease::cache::SyntaxCache;
use crease::productions::{CategoryDefinition, Productions, ProductionsError, CATEGORIES};
use crease::vocabulary::Vocabulary;
use std::fs;
use std::path::Path;

fn productions() -> Productions {
    let source = fs::read_to_string("data/vocabulary.yaml").expect("Failed to read vocabulary");
    let vocabulary = Vocabulary::from_yaml(&source).expect("Failed to parse vocabulary");
    Productions::new(vocabulary)
}

fn definitions_dir() -> &'static Path {
    Path::new("data/expansions")
}

#[test]
fn load_dir_yields_all_categories_in_order() {
    let records = productions().load_dir(definitions_dir()).unwrap();
    let categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, CATEGORIES);
}

#[test]
fn matches_record_carries_trailer_and_metadata() {
    let records = productions().load_dir(definitions_dir()).unwrap();
    let matches = records.iter().find(|r| r.category == "matches").unwrap();

    // 4 pool tokens -> 64 permutations + 49 qualified-year duplicates,
    // then the 10 trailer lines (4 + 1 clause alternatives, 4 helpers, wickets)
    assert_eq!(matches.syntax.lines().count(), 123);
    assert!(matches.syntax.ends_with("wickets -> CD"));
    assert_eq!(matches.expansions["word_matches"], "matches");
    assert_eq!(
        matches.dynamic_expansions["clause_between"],
        vec!["word_between team_a word_and team_b".to_string()]
    );
    assert_eq!(matches.dynamic_expansions["clause_result_by_team"].len(), 4);
}

#[test]
fn scores_record_expands_filters_only() {
    let records = productions().load_dir(definitions_dir()).unwrap();
    let scores = records.iter().find(|r| r.category == "scores").unwrap();

    // 3 filters -> 15 permutations + 11 qualified-year duplicates
    assert_eq!(scores.syntax.lines().count(), 26);
    assert!(scores
        .syntax
        .lines()
        .all(|l| l.starts_with("scores -> word_scores word_of team ")));
}

#[test]
fn explode_writes_one_file_per_category() {
    let out = tempfile::tempdir().unwrap();
    productions().explode(definitions_dir(), out.path()).unwrap();

    let mut written: Vec<String> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, CATEGORIES);

    let matches = fs::read_to_string(out.path().join("matches")).unwrap();
    assert!(matches.ends_with("wickets -> CD"));
}

#[test]
fn explode_is_reproducible() {
    let first_out = tempfile::tempdir().unwrap();
    let second_out = tempfile::tempdir().unwrap();
    let productions = productions();
    productions.explode(definitions_dir(), first_out.path()).unwrap();
    productions.explode(definitions_dir(), second_out.path()).unwrap();

    for category in CATEGORIES {
        let first = fs::read_to_string(first_out.path().join(category)).unwrap();
        let second = fs::read_to_string(second_out.path().join(category)).unwrap();
        assert_eq!(first, second, "category '{}' differs between runs", category);
    }
}

#[test]
fn build_cache_stores_every_category() {
    let mut cache = SyntaxCache::default();
    cache.put("stale", "left over from a previous run");
    productions().build_cache(definitions_dir(), &mut cache).unwrap();

    assert_eq!(cache.keys(), CATEGORIES);
    assert!(cache.get("stale").is_err());
    assert!(cache.get("matches").unwrap().ends_with("wickets -> CD"));
}

#[test]
fn missing_definition_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("compare.yaml"), "base_syntax: \"compare -> c\"\n").unwrap();

    let result = productions().load_dir(dir.path());
    assert!(matches!(
        result,
        Err(ProductionsError::MissingDefinition(category)) if category == "matches"
    ));
}

#[test]
fn unknown_category_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bowling.yaml"), "base_syntax: \"bowling -> b\"\n").unwrap();

    let result = productions().load_dir(dir.path());
    assert!(matches!(
        result,
        Err(ProductionsError::UnknownCategory(name)) if name == "bowling"
    ));
}

#[test]
fn malformed_definition_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    for category in CATEGORIES {
        fs::write(
            dir.path().join(format!("{}.yaml", category)),
            "base_syntax: \"x -> y\"\n",
        )
        .unwrap();
    }
    // A clause alternative that is neither a string nor a list of strings
    fs::write(
        dir.path().join("matches.yaml"),
        "base_syntax: \"m -> n\"\ndynamic_expansions:\n  clause_between:\n    nested: true\n",
    )
    .unwrap();

    let result = productions().load_dir(dir.path());
    assert!(matches!(
        result,
        Err(ProductionsError::Definition { category, .. }) if category == "matches"
    ));
}

#[test]
fn production_records_serialize_to_json() {
    let records = productions().load_dir(definitions_dir()).unwrap();
    let json = serde_json::to_string(&records).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), CATEGORIES.len());
    assert_eq!(value[0]["category"], "compare");
}

#[test]
fn empty_base_syntax_definition_is_allowed() {
    let definition: CategoryDefinition =
        serde_yaml::from_str("filters: [\"word_by\"]\n").unwrap();
    let record = productions().produce("compare", &definition).unwrap();
    assert_eq!(record.syntax, "word_by");
}
