//! Backtracking recursive-descent evaluator over a compiled grammar
//!
//! Evaluation threads a byte cursor through the input and mutates the
//! current match node in place. Backtracking is snapshot-based: before
//! any combination that may partially apply, the node's text length and
//! child count are recorded and restored on failure, so a failed attempt
//! leaves no residue. Ordinary mismatches are values (`Ok(None)`);
//! only configuration problems (unknown rule, unknown character class,
//! recursion depth) travel on the error channel and abort the parse.

use crate::grammar::{Grammar, GroupKind, Operator, Statement};
use crate::location::SourceLocation;
use crate::parser::ast::AstNode;
use crate::parser::charclass;
use crate::parser::diagnostics::Diagnostic;
use std::fmt;

/// The distinguished rule every parse starts from
pub const START_RULE: &str = "program";

/// Default recursion-depth ceiling for rule references
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Why a parse did not produce a match tree
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input does not match the grammar. The diagnostic trail is
    /// ordered most-recent-first: it walks the failing caller chain from
    /// the top-level rule down to the innermost failure.
    Rejected { diagnostics: Vec<Diagnostic> },
    /// A rule reference named a rule absent from the grammar
    UnknownRule { rule: String, caller: Option<String> },
    /// A `?...?` reference named a class outside the built-in table
    UnknownClass { class: String, rule: String },
    /// Rule references nested deeper than the configured ceiling
    DepthLimit { rule: String, limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Rejected { diagnostics } => {
                write!(f, "input rejected ({} diagnostics)", diagnostics.len())
            }
            ParseError::UnknownRule { rule, caller } => {
                write!(f, "rule '{}' is not defined", rule)?;
                if let Some(caller) = caller {
                    write!(f, " (referenced from '{}')", caller)?;
                }
                Ok(())
            }
            ParseError::UnknownClass { class, rule } => {
                write!(
                    f,
                    "unknown character class '?{}?' in rule '{}'",
                    class, rule
                )
            }
            ParseError::DepthLimit { rule, limit } => {
                write!(
                    f,
                    "recursion limit of {} exceeded while evaluating rule '{}'",
                    limit, rule
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Fatal conditions that abort evaluation immediately
enum Halt {
    UnknownRule { rule: String, caller: Option<String> },
    UnknownClass { class: String, rule: String },
    DepthLimit { rule: String, limit: usize },
}

impl From<Halt> for ParseError {
    fn from(halt: Halt) -> ParseError {
        match halt {
            Halt::UnknownRule { rule, caller } => ParseError::UnknownRule { rule, caller },
            Halt::UnknownClass { class, rule } => ParseError::UnknownClass { class, rule },
            Halt::DepthLimit { rule, limit } => ParseError::DepthLimit { rule, limit },
        }
    }
}

/// `Some(cursor)` after a match, `None` on a backtrackable mismatch
type Step = Result<Option<usize>, Halt>;

/// Rollback point for one node: truncating back to these lengths undoes
/// every mutation made after the mark was taken
struct Mark {
    text_len: usize,
    children_len: usize,
}

impl Mark {
    fn of(node: &AstNode) -> Mark {
        Mark {
            text_len: node.text.len(),
            children_len: node.children.len(),
        }
    }

    fn rewind(&self, node: &mut AstNode) {
        node.text.truncate(self.text_len);
        node.children.truncate(self.children_len);
    }
}

/// Parse engine bound to one compiled grammar
pub struct Parser<'g> {
    grammar: &'g Grammar,
    max_depth: usize,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Parser::with_max_depth(grammar, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(grammar: &'g Grammar, max_depth: usize) -> Self {
        Parser { grammar, max_depth }
    }

    /// Parse input text against the grammar, starting at rule `program`.
    ///
    /// Success requires the whole input to be consumed; a match of a
    /// strict prefix is rejected. On rejection the diagnostic trail is
    /// returned inside [`ParseError::Rejected`], most-recent-first.
    /// The same parser (and grammar) can be reused across calls; every
    /// call gets a fresh cursor, tree and trail.
    pub fn parse(&self, input: &str) -> Result<AstNode, ParseError> {
        let mut eval = Evaluator {
            grammar: self.grammar,
            input,
            lines: SourceLocation::new(input),
            diagnostics: Vec::new(),
            depth: 0,
            max_depth: self.max_depth,
        };
        // The holder exists only to receive the start rule's node; its
        // empty rule name marks it as "no caller" in diagnostics.
        let mut holder = AstNode::new(String::new(), 1);

        // The entry invocation does not require net progress: totality
        // (cursor == input length) already rejects vacuous matches on
        // non-empty input, and empty input may legitimately match a
        // grammar built from repetitions and optionals.
        match eval.eval_rule(&mut holder, START_RULE, 0, false) {
            Err(halt) => Err(halt.into()),
            Ok(Some(end)) if end == input.len() => match holder.children.pop() {
                Some(tree) => Ok(tree),
                None => Err(ParseError::Rejected { diagnostics: eval.into_trail() }),
            },
            Ok(Some(end)) => {
                if let Some(found) = input[end..].chars().next() {
                    let line = eval.lines.line_of(end);
                    eval.diagnostics.push(Diagnostic::TrailingInput { line, found });
                }
                Err(ParseError::Rejected { diagnostics: eval.into_trail() })
            }
            Ok(None) => Err(ParseError::Rejected { diagnostics: eval.into_trail() }),
        }
    }
}

/// State for one parse call
struct Evaluator<'a> {
    grammar: &'a Grammar,
    input: &'a str,
    lines: SourceLocation,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    /// The diagnostic trail, most-recent-first
    fn into_trail(self) -> Vec<Diagnostic> {
        let mut trail = self.diagnostics;
        trail.reverse();
        trail
    }

    /// Evaluate a rule reference: look the rule up, run its root against
    /// a speculative candidate node, and attach the candidate to the
    /// parent only on success. References require net progress.
    fn eval_rule_ref(&mut self, parent: &mut AstNode, name: &str, at: usize) -> Step {
        self.eval_rule(parent, name, at, true)
    }

    fn eval_rule(
        &mut self,
        parent: &mut AstNode,
        name: &str,
        at: usize,
        require_progress: bool,
    ) -> Step {
        if self.depth >= self.max_depth {
            return Err(Halt::DepthLimit {
                rule: name.to_string(),
                limit: self.max_depth,
            });
        }
        let rule = match self.grammar.lookup(name) {
            Some(rule) => rule,
            // A dangling reference is a grammar configuration error,
            // never a backtrackable mismatch.
            None => {
                return Err(Halt::UnknownRule {
                    rule: name.to_string(),
                    caller: caller_of(parent),
                })
            }
        };

        let mut candidate = AstNode::new(name.to_string(), self.lines.line_of(at));
        self.depth += 1;
        let outcome = if require_progress {
            self.eval_statement(&mut candidate, rule, at)
        } else {
            match rule {
                Statement::RuleRoot { op, children, .. } => {
                    self.eval_combination(&mut candidate, *op, children, at)
                }
                other => self.eval_statement(&mut candidate, other, at),
            }
        };
        self.depth -= 1;

        match outcome? {
            Some(end) => {
                parent.text.push_str(&candidate.text);
                parent.children.push(candidate);
                // A success bounds the trail to the path ahead of it.
                self.diagnostics.clear();
                Ok(Some(end))
            }
            None => {
                self.diagnostics.push(Diagnostic::RuleMismatch {
                    rule: name.to_string(),
                    caller: caller_of(parent),
                    line: self.lines.line_of(at),
                    found: self.input[at..].chars().next(),
                });
                Ok(None)
            }
        }
    }

    fn eval_statement(&mut self, node: &mut AstNode, statement: &Statement, at: usize) -> Step {
        match statement {
            Statement::RuleRoot { op, children, .. }
            | Statement::Group { kind: GroupKind::Required, op, children } => {
                self.eval_required(node, *op, children, at)
            }
            Statement::Group { kind: GroupKind::Optional, op, children } => {
                let mark = Mark::of(node);
                match self.eval_combination(node, *op, children, at)? {
                    Some(end) if end > at => Ok(Some(end)),
                    _ => {
                        mark.rewind(node);
                        Ok(Some(at))
                    }
                }
            }
            Statement::Group { kind: GroupKind::Repeat, op, children } => {
                let mut cursor = at;
                loop {
                    let mark = Mark::of(node);
                    match self.eval_combination(node, *op, children, cursor)? {
                        Some(end) if end > cursor => cursor = end,
                        _ => {
                            mark.rewind(node);
                            return Ok(Some(cursor));
                        }
                    }
                }
            }
            Statement::Literal { text, .. } => {
                if self.input[at..].starts_with(text.as_str()) {
                    node.text.push_str(text);
                    Ok(Some(at + text.len()))
                } else {
                    Ok(None)
                }
            }
            Statement::ClassRef { name, .. } => {
                let matcher = match charclass::lookup(name) {
                    Some(matcher) => matcher,
                    None => {
                        return Err(Halt::UnknownClass {
                            class: name.clone(),
                            rule: node.rule.clone(),
                        })
                    }
                };
                match self.input[at..].chars().next() {
                    Some(c) if matcher(c) => {
                        node.text.push(c);
                        Ok(Some(at + c.len_utf8()))
                    }
                    _ => Ok(None),
                }
            }
            Statement::RuleRef { name, .. } => self.eval_rule_ref(node, name, at),
        }
    }

    /// Rule roots and `()` groups must both match and make progress;
    /// a match that consumed nothing counts as a failure.
    fn eval_required(
        &mut self,
        node: &mut AstNode,
        op: Operator,
        children: &[Statement],
        at: usize,
    ) -> Step {
        let mark = Mark::of(node);
        match self.eval_combination(node, op, children, at)? {
            Some(end) if end > at => Ok(Some(end)),
            _ => {
                mark.rewind(node);
                Ok(None)
            }
        }
    }

    /// Evaluate a group's children under its operator.
    ///
    /// On a mismatch the node is left exactly as it was on entry; the
    /// caller keeps its own cursor.
    fn eval_combination(
        &mut self,
        node: &mut AstNode,
        op: Operator,
        children: &[Statement],
        at: usize,
    ) -> Step {
        match op {
            Operator::None => match children.first() {
                Some(only) => self.eval_statement(node, only, at),
                None => Ok(Some(at)),
            },
            Operator::Sequence => {
                let mark = Mark::of(node);
                let mut cursor = at;
                for child in children {
                    match self.eval_statement(node, child, cursor)? {
                        Some(end) => cursor = end,
                        None => {
                            mark.rewind(node);
                            return Ok(None);
                        }
                    }
                }
                Ok(Some(cursor))
            }
            Operator::Choice => {
                for child in children {
                    if let Some(end) = self.eval_statement(node, child, at)? {
                        return Ok(Some(end));
                    }
                }
                Ok(None)
            }
            Operator::Exclude => {
                let (base, excluded) = match children.split_first() {
                    Some(split) => split,
                    None => return Ok(None),
                };
                let mark = Mark::of(node);
                let end = match self.eval_statement(node, base, at)? {
                    Some(end) => end,
                    None => return Ok(None),
                };
                // Each excluded pattern is a negative test at the same
                // starting cursor; any success rolls the base match back.
                for pattern in excluded {
                    if self.eval_statement(node, pattern, at)?.is_some() {
                        mark.rewind(node);
                        return Ok(None);
                    }
                }
                Ok(Some(end))
            }
        }
    }
}

fn caller_of(parent: &AstNode) -> Option<String> {
    if parent.rule.is_empty() {
        None
    } else {
        Some(parent.rule.clone())
    }
}
