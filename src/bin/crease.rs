//! Command-line interface for crease
//! This binary explodes expansion definition files into the per-category
//! grammar artifacts consumed by the query-understanding layer.
//!
//! Usage:
//!   crease explode `<definitions>` `<out>` [--vocabulary `<path>`]  - Write one grammar file per category
//!   crease productions `<definitions>` [--vocabulary `<path>`]      - Print production records as JSON
//!   crease categories                                           - List the production categories

use clap::{Arg, Command};
use crease::productions::{Productions, CATEGORIES};
use crease::vocabulary::Vocabulary;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("crease")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates grammar productions for cricket query understanding")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("explode")
                .about("Explode definitions into one grammar file per category")
                .arg(
                    Arg::new("definitions")
                        .help("Directory of per-category definition files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("out")
                        .help("Directory to write exploded grammar files to")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("vocabulary")
                        .long("vocabulary")
                        .short('v')
                        .help("Path to the vocabulary file")
                        .default_value("data/vocabulary.yaml"),
                ),
        )
        .subcommand(
            Command::new("productions")
                .about("Print every production record as JSON")
                .arg(
                    Arg::new("definitions")
                        .help("Directory of per-category definition files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("vocabulary")
                        .long("vocabulary")
                        .short('v')
                        .help("Path to the vocabulary file")
                        .default_value("data/vocabulary.yaml"),
                ),
        )
        .subcommand(Command::new("categories").about("List the production categories"))
        .get_matches();

    match matches.subcommand() {
        Some(("explode", explode_matches)) => {
            let definitions = explode_matches.get_one::<String>("definitions").unwrap();
            let out = explode_matches.get_one::<String>("out").unwrap();
            let vocabulary = explode_matches.get_one::<String>("vocabulary").unwrap();
            handle_explode_command(definitions, out, vocabulary);
        }
        Some(("productions", productions_matches)) => {
            let definitions = productions_matches.get_one::<String>("definitions").unwrap();
            let vocabulary = productions_matches.get_one::<String>("vocabulary").unwrap();
            handle_productions_command(definitions, vocabulary);
        }
        Some(("categories", _)) => {
            for category in CATEGORIES {
                println!("{}", category);
            }
        }
        _ => unreachable!(),
    }
}

/// Handle the explode command
fn handle_explode_command(definitions: &str, out: &str, vocabulary_path: &str) {
    let productions = Productions::new(load_vocabulary(vocabulary_path));
    match productions.explode(&PathBuf::from(definitions), &PathBuf::from(out)) {
        Ok(()) => {
            println!("Exploded {} categories into {}", CATEGORIES.len(), out);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the productions command
fn handle_productions_command(definitions: &str, vocabulary_path: &str) {
    let productions = Productions::new(load_vocabulary(vocabulary_path));
    match productions.load_dir(&PathBuf::from(definitions)) {
        Ok(records) => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read and validate the vocabulary, exiting on any configuration error
fn load_vocabulary(path: &str) -> Vocabulary {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading vocabulary {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let vocabulary = match Vocabulary::from_yaml(&source) {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            eprintln!("Error parsing vocabulary {}: {}", path, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = vocabulary.validate() {
        eprintln!("Invalid vocabulary {}: {}", path, e);
        std::process::exit(1);
    }
    vocabulary
}
