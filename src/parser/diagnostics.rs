//! Diagnostic trail entries collected while the parse engine backtracks
//!
//! Diagnostics are data, not raised errors: rule mismatches are normal
//! control flow, and the trail only becomes visible when the overall
//! parse is rejected. The trail resets whenever a rule reference
//! succeeds, so a rejected parse reports the path that led to the final
//! failure rather than every dead end explored along the way.

use std::fmt;

/// One entry on the diagnostic trail
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A rule reference failed to match
    RuleMismatch {
        /// The rule that failed
        rule: String,
        /// The rule whose body referenced it, if any
        caller: Option<String>,
        /// 1-based input line of the attempt
        line: usize,
        /// The input character at the failure point, or `None` at end of input
        found: Option<char>,
    },
    /// The top-level rule matched but input remained
    TrailingInput { line: usize, found: char },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RuleMismatch { rule, caller, line, found } => {
                write!(f, "line {}: rule '{}'", line, rule)?;
                if let Some(caller) = caller {
                    write!(f, " (called from '{}')", caller)?;
                }
                match found {
                    Some(c) => write!(f, " failed at '{}'", c.escape_debug()),
                    None => write!(f, " failed at end of input"),
                }
            }
            Diagnostic::TrailingInput { line, found } => {
                write!(
                    f,
                    "line {}: unconsumed input starting at '{}'",
                    line,
                    found.escape_debug()
                )
            }
        }
    }
}
