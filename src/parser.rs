//! Parse engine: evaluate input text against a compiled grammar
//!
//! The engine is a backtracking recursive-descent evaluator. It borrows
//! an immutable [`Grammar`](crate::grammar::Grammar) and, per parse
//! call, owns its own cursor, match tree and diagnostic trail, so one
//! grammar can serve any number of sequential parses.

pub mod ast;
pub mod ast_treeviz;
pub mod charclass;
pub mod diagnostics;
pub mod engine;

pub use ast::AstNode;
pub use ast_treeviz::to_treeviz_str;
pub use diagnostics::Diagnostic;
pub use engine::{ParseError, Parser, DEFAULT_MAX_DEPTH, START_RULE};
