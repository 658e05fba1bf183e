//! # ebnf
//!
//! A grammar-driven parser engine. A grammar written in an EBNF-style
//! notation is compiled into a rule table, and a backtracking
//! recursive-descent evaluator walks that table against input text,
//! producing a match tree with per-node source lines and, on rejection,
//! a diagnostic trail.
//!
//! The two entry points are [`Grammar::load`] (compile a grammar from
//! text) and [`Parser::parse`] (parse text against a compiled grammar):
//!
//! ```text
//! let grammar = Grammar::load("program = 'a' , { 'b' } ;")?;
//! let tree = Parser::new(&grammar).parse("abbb")?;
//! ```
//!
//! Parsing starts at the distinguished rule `program` and succeeds only
//! if the whole input is consumed.

pub mod grammar;
pub mod location;
pub mod parser;

pub use grammar::{CompileError, Grammar};
pub use parser::{to_treeviz_str, AstNode, Diagnostic, ParseError, Parser};
