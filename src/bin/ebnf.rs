//! Command-line interface for the ebnf engine
//!
//! Usage:
//!   ebnf check `<grammar>`                          - Compile a grammar and report its rules
//!   ebnf parse `<grammar>` `<input>` [--format `<format>`] - Parse an input file against a grammar

use clap::{Arg, Command};
use ebnf::{to_treeviz_str, Grammar, ParseError, Parser};

fn main() {
    let matches = Command::new("ebnf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile EBNF grammars and parse text against them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Compile a grammar and report its rules")
                .arg(
                    Arg::new("grammar")
                        .help("Path to the grammar file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an input file against a grammar")
                .arg(
                    Arg::new("grammar")
                        .help("Path to the grammar file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the input file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('treeviz', 'json' or 'yaml')")
                        .default_value("treeviz"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let grammar = check_matches.get_one::<String>("grammar").unwrap();
            handle_check_command(grammar);
        }
        Some(("parse", parse_matches)) => {
            let grammar = parse_matches.get_one::<String>("grammar").unwrap();
            let input = parse_matches.get_one::<String>("input").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(grammar, input, format);
        }
        _ => unreachable!(),
    }
}

fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

fn load_grammar(path: &str) -> Grammar {
    Grammar::load(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Compile error in {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the check command
fn handle_check_command(grammar_path: &str) {
    let grammar = load_grammar(grammar_path);
    println!("{}: {} rules", grammar_path, grammar.len());
    let mut names: Vec<&str> = grammar.rule_names().collect();
    names.sort_unstable();
    for name in names {
        println!("  {}", name);
    }
}

/// Handle the parse command
fn handle_parse_command(grammar_path: &str, input_path: &str, format: &str) {
    let grammar = load_grammar(grammar_path);
    let input = read_file(input_path);

    match Parser::new(&grammar).parse(&input) {
        Ok(tree) => {
            let output = match format {
                "treeviz" => to_treeviz_str(&tree),
                "json" => serde_json::to_string_pretty(&tree).unwrap_or_else(|e| {
                    eprintln!("Serialization error: {}", e);
                    std::process::exit(1);
                }),
                "yaml" => serde_yaml::to_string(&tree).unwrap_or_else(|e| {
                    eprintln!("Serialization error: {}", e);
                    std::process::exit(1);
                }),
                other => {
                    eprintln!("Unknown format '{}'", other);
                    std::process::exit(1);
                }
            };
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(ParseError::Rejected { diagnostics }) => {
            eprintln!("{} does not match {}:", input_path, grammar_path);
            for diagnostic in &diagnostics {
                eprintln!("  {}", diagnostic);
            }
            std::process::exit(1);
        }
        Err(fatal) => {
            eprintln!("Parse aborted: {}", fatal);
            std::process::exit(1);
        }
    }
}
