//! Statement tree builder: nest one rule's flat token body
//!
//! A rule body is a flat token sequence; the compiled form is a tree of
//! grouping nodes with operator semantics. Construction keeps an explicit
//! stack of open groupings (pushed on `(`/`[`/`{`, popped on the matching
//! close bracket); the finished tree carries no parent links.

use crate::grammar::error::CompileError;
use crate::grammar::rules::RuleSource;
use crate::grammar::tokens::TokenKind;

/// How the children of one grouping combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Single child, no combination needed
    None,
    /// `,`: all children in order, all-or-nothing
    Sequence,
    /// `|`: first child that matches wins
    Choice,
    /// `-`: first child must match, the rest must not
    Exclude,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            ',' => Some(Operator::Sequence),
            '|' => Some(Operator::Choice),
            '-' => Some(Operator::Exclude),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::None => ' ',
            Operator::Sequence => ',',
            Operator::Choice => '|',
            Operator::Exclude => '-',
        }
    }
}

/// The three grouping kinds of the grammar notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `()`: must match and consume input
    Required,
    /// `[]`: matches or succeeds vacuously
    Optional,
    /// `{}`: matches zero or more times
    Repeat,
}

impl GroupKind {
    fn from_open_bracket(bracket: char) -> Option<GroupKind> {
        match bracket {
            '(' => Some(GroupKind::Required),
            '[' => Some(GroupKind::Optional),
            '{' => Some(GroupKind::Repeat),
            _ => None,
        }
    }

    fn close_bracket(&self) -> char {
        match self {
            GroupKind::Required => ')',
            GroupKind::Optional => ']',
            GroupKind::Repeat => '}',
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            GroupKind::Required => "()",
            GroupKind::Optional => "[]",
            GroupKind::Repeat => "{}",
        }
    }
}

/// One compiled grammar node
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// The root of one rule's compiled body
    RuleRoot {
        name: String,
        op: Operator,
        children: Vec<Statement>,
    },
    /// A `()`, `[]` or `{}` grouping
    Group {
        kind: GroupKind,
        op: Operator,
        children: Vec<Statement>,
    },
    /// Exact text to match
    Literal { text: String, line: usize },
    /// A `?...?` built-in character class
    ClassRef { name: String, line: usize },
    /// A reference to another rule, resolved lazily at parse time
    RuleRef { name: String, line: usize },
}

/// One open grouping during construction
struct Frame {
    /// `None` for the rule root
    kind: Option<GroupKind>,
    op: Operator,
    children: Vec<Statement>,
    open_line: usize,
}

impl Frame {
    /// Append a child, requiring an operator between consecutive children
    fn append(&mut self, statement: Statement, line: usize) -> Result<(), CompileError> {
        if self.op == Operator::None && !self.children.is_empty() {
            return Err(CompileError::MissingOperator { line });
        }
        self.children.push(statement);
        Ok(())
    }
}

/// Build the compiled `RuleRoot` statement for one rule definition
pub fn build_rule_tree(rule: &RuleSource) -> Result<Statement, CompileError> {
    let mut stack = vec![Frame {
        kind: None,
        op: Operator::None,
        children: Vec::new(),
        open_line: rule.line,
    }];

    for token in &rule.body {
        let line = token.line;
        match &token.kind {
            TokenKind::Command(c @ ('(' | '[' | '{')) => {
                let kind = GroupKind::from_open_bracket(*c)
                    .unwrap_or(GroupKind::Required);
                stack.push(Frame {
                    kind: Some(kind),
                    op: Operator::None,
                    children: Vec::new(),
                    open_line: line,
                });
            }
            TokenKind::Command(c @ (')' | ']' | '}')) => {
                let closes_top = matches!(
                    stack.last(),
                    Some(Frame { kind: Some(kind), .. }) if kind.close_bracket() == *c
                );
                if !closes_top {
                    return Err(CompileError::MismatchedBracket { character: *c, line });
                }
                // The matches! above guarantees a kinded frame on top.
                let frame = match stack.pop() {
                    Some(frame) => frame,
                    None => return Err(CompileError::MismatchedBracket { character: *c, line }),
                };
                let kind = frame.kind.unwrap_or(GroupKind::Required);
                if frame.children.is_empty() {
                    return Err(CompileError::EmptyGroup { group: kind.display(), line });
                }
                let group = Statement::Group {
                    kind,
                    op: frame.op,
                    children: frame.children,
                };
                if let Some(parent) = stack.last_mut() {
                    parent.append(group, line)?;
                }
            }
            TokenKind::Command(c @ (',' | '|' | '-')) => {
                let op = match Operator::from_symbol(*c) {
                    Some(op) => op,
                    None => continue,
                };
                if let Some(top) = stack.last_mut() {
                    if top.op == Operator::None {
                        top.op = op;
                    } else if top.op != op {
                        return Err(CompileError::OperatorConflict {
                            first: top.op.symbol(),
                            second: *c,
                            line,
                        });
                    }
                }
            }
            // `=` and `;` never reach the builder; the assembler consumes
            // or rejects them.
            TokenKind::Command(c) => {
                return Err(CompileError::MismatchedBracket { character: *c, line });
            }
            TokenKind::Name(name) => {
                let leaf = Statement::RuleRef { name: name.clone(), line };
                if let Some(top) = stack.last_mut() {
                    top.append(leaf, line)?;
                }
            }
            TokenKind::Literal(text) => {
                let leaf = Statement::Literal { text: text.clone(), line };
                if let Some(top) = stack.last_mut() {
                    top.append(leaf, line)?;
                }
            }
            TokenKind::ClassRef(name) => {
                let leaf = Statement::ClassRef { name: name.clone(), line };
                if let Some(top) = stack.last_mut() {
                    top.append(leaf, line)?;
                }
            }
        }
    }

    if stack.len() > 1 {
        let unclosed = &stack[stack.len() - 1];
        let group = unclosed.kind.unwrap_or(GroupKind::Required).display();
        return Err(CompileError::UnclosedGroup { group, line: unclosed.open_line });
    }

    let root = match stack.pop() {
        Some(frame) => frame,
        None => {
            return Err(CompileError::EmptyRuleBody {
                rule: rule.name.clone(),
                line: rule.line,
            })
        }
    };
    if root.children.is_empty() {
        // Body tokens existed but none of them produced a statement.
        return Err(CompileError::EmptyRuleBody {
            rule: rule.name.clone(),
            line: rule.line,
        });
    }

    Ok(Statement::RuleRoot {
        name: rule.name.clone(),
        op: root.op,
        children: root.children,
    })
}
