//! Treeviz formatter for match trees
//!
//! Renders a match tree as indented text for debugging: one line per
//! node with its rule name, matched text (escaped and truncated) and
//! input line.

use crate::parser::ast::AstNode;

const MAX_TEXT_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn printable(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    format!("'{}'", truncate(&escaped, MAX_TEXT_CHARS))
}

/// Render a match tree as indented text
pub fn to_treeviz_str(root: &AstNode) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "{}: {} (line {})\n",
        root.rule,
        printable(&root.text),
        root.line
    ));
    for (i, child) in root.children.iter().enumerate() {
        let is_last = i == root.children.len() - 1;
        append_node(&mut result, child, "", is_last);
    }
    result
}

fn append_node(result: &mut String, node: &AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {} (line {})\n",
        prefix,
        connector,
        node.rule,
        printable(&node.text),
        node.line
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i == node.children.len() - 1;
        append_node(result, child, &new_prefix, is_last);
    }
}
