//! Grammar compilation: tokenizer, rule assembler, statement tree builder
//!
//! `Grammar::load` runs the full compile pipeline over grammar source
//! text and owns the resulting rule table. Loading fails closed: any
//! error in any rule aborts the whole load and no partial grammar is
//! retained.
//!
//! Rule references inside statement bodies are NOT validated here;
//! resolution is deferred to first use during parsing, so a grammar with
//! a dangling reference compiles and fails only when the reference is
//! actually evaluated.

pub mod error;
pub mod lexer;
pub mod rules;
pub mod statement;
pub mod tokens;

pub use error::CompileError;
pub use statement::{GroupKind, Operator, Statement};
pub use tokens::{Token, TokenKind};

use std::collections::HashMap;

/// A compiled grammar: the rule table the parse engine queries by name
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: HashMap<String, Statement>,
}

impl Grammar {
    /// Compile grammar source text into a rule table
    pub fn load(source: &str) -> Result<Grammar, CompileError> {
        let tokens = lexer::tokenize(source)?;
        let rule_sources = rules::assemble(&tokens)?;
        let mut table = HashMap::with_capacity(rule_sources.len());
        for rule in &rule_sources {
            let root = statement::build_rule_tree(rule)?;
            table.insert(rule.name.clone(), root);
        }
        Ok(Grammar { rules: table })
    }

    /// Look up a rule's compiled statement tree by name
    pub fn lookup(&self, name: &str) -> Option<&Statement> {
        self.rules.get(name)
    }

    /// Iterate over the defined rule names, in no particular order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
