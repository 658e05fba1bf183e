//! Rule assembler: group a token sequence into named rule definitions
//!
//! A rule has the form `name = body ;`. The assembler scans the token
//! stream once, collecting the name, the `=` marker and the body tokens,
//! and validates structural well-formedness: a rule must have a name and
//! a non-empty body, names must be unique, and the final rule must be
//! closed before the grammar ends.

use crate::grammar::error::CompileError;
use crate::grammar::tokens::{Token, TokenKind};

/// One tokenized rule definition, ready for statement-tree building
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSource {
    pub name: String,
    /// Line of the rule name token
    pub line: usize,
    pub body: Vec<Token>,
}

/// Group tokens into ordered `(name, body)` rule definitions
pub fn assemble(tokens: &[Token]) -> Result<Vec<RuleSource>, CompileError> {
    let mut rules: Vec<RuleSource> = Vec::new();
    let mut name: Option<(String, usize)> = None;
    let mut body: Vec<Token> = Vec::new();
    let mut seen_equals = false;

    for token in tokens {
        match (&token.kind, seen_equals) {
            (TokenKind::Command('='), false) => seen_equals = true,
            (TokenKind::Command('='), true) => {
                return Err(CompileError::DuplicateEquals { line: token.line });
            }
            (TokenKind::Command(';'), true) => {
                let (rule_name, name_line) = match name.take() {
                    Some(found) => found,
                    None => return Err(CompileError::EmptyRuleName { line: token.line }),
                };
                if body.is_empty() {
                    return Err(CompileError::EmptyRuleBody {
                        rule: rule_name,
                        line: token.line,
                    });
                }
                if rules.iter().any(|rule| rule.name == rule_name) {
                    return Err(CompileError::DuplicateRule {
                        rule: rule_name,
                        line: token.line,
                    });
                }
                rules.push(RuleSource {
                    name: rule_name,
                    line: name_line,
                    body: std::mem::take(&mut body),
                });
                seen_equals = false;
            }
            (_, true) => body.push(token.clone()),
            (TokenKind::Name(text), false) if name.is_none() => {
                name = Some((text.clone(), token.line));
            }
            (_, false) => {
                return Err(CompileError::UnexpectedToken {
                    token: token.kind.to_string(),
                    line: token.line,
                });
            }
        }
    }

    if name.is_some() || seen_equals || !body.is_empty() {
        let line = tokens.last().map(|token| token.line).unwrap_or(1);
        return Err(CompileError::MissingSemicolon { line });
    }

    Ok(rules)
}
