//! Built-in character classes referenced as `?name?` in grammars
//!
//! The table is fixed; grammars cannot extend it. Every class matches
//! exactly one character. The whitespace and visible-character sets are
//! deliberately ASCII-only.

use once_cell::sync::Lazy;
use std::collections::HashMap;

type Matcher = fn(char) -> bool;

fn is_white_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_visible(c: char) -> bool {
    matches!(c, '\x20'..='\x7e')
}

fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

static CLASSES: Lazy<HashMap<&'static str, Matcher>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Matcher> = HashMap::new();
    table.insert("white space characters", is_white_space);
    table.insert("all visible characters", is_visible);
    table.insert("lowercase letters", is_lowercase);
    table.insert("uppercase letters", is_uppercase);
    table.insert("letters", is_letter);
    table.insert("digits", is_digit);
    table.insert("hex digits", is_hex_digit);
    table.insert("alphanumeric characters", is_alphanumeric);
    table
});

/// Look up a class matcher by its `?...?` name
pub fn lookup(name: &str) -> Option<Matcher> {
    CLASSES.get(name).copied()
}

/// All known class names, sorted for stable output
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CLASSES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_space_set() {
        let matcher = lookup("white space characters").unwrap();
        assert!(matcher(' '));
        assert!(matcher('\t'));
        assert!(matcher('\r'));
        assert!(matcher('\n'));
        assert!(!matcher('x'));
    }

    #[test]
    fn test_visible_set_is_printable_ascii() {
        let matcher = lookup("all visible characters").unwrap();
        assert!(matcher(' '));
        assert!(matcher('~'));
        assert!(matcher('a'));
        assert!(!matcher('\n'));
        assert!(!matcher('\x7f'));
        assert!(!matcher('é'));
    }

    #[test]
    fn test_digit_classes() {
        let digits = lookup("digits").unwrap();
        let hex = lookup("hex digits").unwrap();
        assert!(digits('7'));
        assert!(!digits('a'));
        assert!(hex('7'));
        assert!(hex('a'));
        assert!(hex('F'));
        assert!(!hex('g'));
    }

    #[test]
    fn test_letter_cases() {
        assert!(lookup("lowercase letters").unwrap()('q'));
        assert!(!lookup("lowercase letters").unwrap()('Q'));
        assert!(lookup("uppercase letters").unwrap()('Q'));
        assert!(lookup("letters").unwrap()('q'));
        assert!(lookup("alphanumeric characters").unwrap()('9'));
    }

    #[test]
    fn test_unknown_class() {
        assert!(lookup("small caps").is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let names = names();
        assert_eq!(names.len(), 8);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
