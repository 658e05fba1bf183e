//! Compile errors for grammar loading
//!
//! Every variant names the offending 1-based source line. A compile
//! error aborts the whole load; no partial grammar is ever retained.

use std::fmt;

/// Errors raised while compiling grammar source into a rule table
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A string literal used an escape other than `\\`, `\n` or `\t`
    InvalidEscape { escape: char, line: usize },
    /// A character outside every token form appeared in the grammar
    UnhandledCharacter { character: char, line: usize },
    /// A second `=` appeared before the rule was closed with `;`
    DuplicateEquals { line: usize },
    /// A rule was closed without a name
    EmptyRuleName { line: usize },
    /// A rule was closed without any body tokens
    EmptyRuleBody { rule: String, line: usize },
    /// The same rule name was defined twice
    DuplicateRule { rule: String, line: usize },
    /// A token other than the rule name appeared before `=`
    UnexpectedToken { token: String, line: usize },
    /// The grammar ended inside an open rule definition
    MissingSemicolon { line: usize },
    /// A grouping was closed without any statements inside it
    EmptyGroup { group: &'static str, line: usize },
    /// A closing bracket did not match the innermost open grouping
    MismatchedBracket { character: char, line: usize },
    /// A grouping was opened but never closed
    UnclosedGroup { group: &'static str, line: usize },
    /// Two statements follow each other with no operator between them
    MissingOperator { line: usize },
    /// Two different operators were used inside one grouping
    OperatorConflict { first: char, second: char, line: usize },
}

impl CompileError {
    /// The 1-based grammar source line the error points at
    pub fn line(&self) -> usize {
        match self {
            CompileError::InvalidEscape { line, .. }
            | CompileError::UnhandledCharacter { line, .. }
            | CompileError::DuplicateEquals { line }
            | CompileError::EmptyRuleName { line }
            | CompileError::EmptyRuleBody { line, .. }
            | CompileError::DuplicateRule { line, .. }
            | CompileError::UnexpectedToken { line, .. }
            | CompileError::MissingSemicolon { line }
            | CompileError::EmptyGroup { line, .. }
            | CompileError::MismatchedBracket { line, .. }
            | CompileError::UnclosedGroup { line, .. }
            | CompileError::MissingOperator { line }
            | CompileError::OperatorConflict { line, .. } => *line,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidEscape { escape, line } => {
                write!(f, "line {}: invalid escape code '\\{}'", line, escape)
            }
            CompileError::UnhandledCharacter { character, line } => {
                write!(f, "line {}: unhandled character '{}'", line, character)
            }
            CompileError::DuplicateEquals { line } => {
                write!(f, "line {}: unexpected second '=' in rule definition", line)
            }
            CompileError::EmptyRuleName { line } => {
                write!(f, "line {}: rule name cannot be empty", line)
            }
            CompileError::EmptyRuleBody { rule, line } => {
                write!(f, "line {}: rule '{}' has an empty body", line, rule)
            }
            CompileError::DuplicateRule { rule, line } => {
                write!(f, "line {}: rule '{}' has already been defined", line, rule)
            }
            CompileError::UnexpectedToken { token, line } => {
                write!(f, "line {}: unexpected {} before '='", line, token)
            }
            CompileError::MissingSemicolon { line } => {
                write!(f, "line {}: missing closing ';'", line)
            }
            CompileError::EmptyGroup { group, line } => {
                write!(f, "line {}: no statements in grouping '{}'", line, group)
            }
            CompileError::MismatchedBracket { character, line } => {
                write!(f, "line {}: invalid character '{}'", line, character)
            }
            CompileError::UnclosedGroup { group, line } => {
                write!(f, "line {}: grouping '{}' is never closed", line, group)
            }
            CompileError::MissingOperator { line } => {
                write!(
                    f,
                    "line {}: statements must be joined by ',', '|' or '-'",
                    line
                )
            }
            CompileError::OperatorConflict { first, second, line } => {
                write!(
                    f,
                    "line {}: do not use both '{}' and '{}' in a single statement",
                    line, first, second
                )
            }
        }
    }
}

impl std::error::Error for CompileError {}
