//! Match tree produced by the parse engine
//!
//! One node per successfully matched rule invocation. Nodes are built
//! speculatively during evaluation and attached to their parent only
//! when the attempt succeeds, so a finished tree never contains residue
//! from failed attempts.

use serde::{Deserialize, Serialize};

/// One matched rule invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstNode {
    /// Name of the rule that matched
    pub rule: String,
    /// 1-based input line where the match began
    pub line: usize,
    /// Text consumed by this match, in match order: literal and
    /// character-class text plus the text of every attached child
    pub text: String,
    /// Successfully matched sub-invocations, in match order
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(rule: String, line: usize) -> Self {
        AstNode {
            rule,
            line,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Collect every node in the subtree whose rule name matches, in
    /// depth-first match order (including this node itself)
    pub fn find_all<'a>(&'a self, rule: &str) -> Vec<&'a AstNode> {
        let mut found = Vec::new();
        self.collect_into(rule, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, rule: &str, found: &mut Vec<&'a AstNode>) {
        if self.rule == rule {
            found.push(self);
        }
        for child in &self.children {
            child.collect_into(rule, found);
        }
    }
}
