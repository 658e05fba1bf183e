//! Token definitions for grammar source text
//!
//! Tokenization is handled by the logos derive macro. Comments and
//! whitespace are skipped at the lexer level; string escapes and
//! class-reference trimming are resolved in callbacks, so the tokens
//! that come out already carry their final text.

use logos::{Lexer, Logos};
use std::fmt;

/// Lexer-level failures, carried by logos as the error type.
///
/// `UnhandledCharacter` doubles as the default error for input the token
/// definitions cannot match at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    #[default]
    UnhandledCharacter,
    InvalidEscape(char),
}

/// Raw tokens as produced by logos, before line stamping.
///
/// Comments `(* ... *)` and whitespace never surface as tokens. The
/// comment pattern accepts the degenerate `(*)` form, where the single
/// `*` both opens and closes the comment.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"\(\*(\)|([^*]|\*+[^*)])*\*+\))")]
pub enum RawToken {
    /// Quoted string with `\\`, `\n` and `\t` escapes resolved
    #[regex(r#""([^"\\]|\\[\s\S])*""#, resolve_escapes)]
    #[regex(r#"'([^'\\]|\\[\s\S])*'"#, resolve_escapes)]
    Literal(String),

    /// `?name?` character-class reference, trimmed of surrounding whitespace
    #[regex(r"\?[^?]*\?", |lex| lex.slice().trim_matches('?').trim().to_string())]
    ClassRef(String),

    /// Rule name: an alphanumeric run that may contain embedded spaces
    /// and tabs, trimmed of trailing whitespace
    #[regex(r"[0-9A-Za-z][0-9A-Za-z \t]*", |lex| lex.slice().trim_end().to_string())]
    Name(String),

    /// One of the punctuation characters `( ) { } , | - [ ] = ;`
    #[regex(r"[(){}\[\],|=;-]", |lex| lex.slice().as_bytes()[0] as char)]
    Command(char),
}

/// Resolve string escapes inside a quoted literal.
///
/// The surrounding quotes are stripped; `\\`, `\n` and `\t` are replaced
/// by their values, and any other escaped character is an error.
fn resolve_escapes(lex: &mut Lexer<RawToken>) -> Result<String, LexError> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => text.push('\\'),
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some(other) => return Err(LexError::InvalidEscape(other)),
            // The token pattern guarantees escapes come in pairs.
            None => return Err(LexError::UnhandledCharacter),
        }
    }
    Ok(text)
}

/// What a grammar token is, with its text where it carries any
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// One of `( ) { } , | - [ ] = ;`
    Command(char),
    /// Rule name or rule reference
    Name(String),
    /// Quoted string with escapes already resolved
    Literal(String),
    /// `?...?` character-class reference
    ClassRef(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Command(c) => write!(f, "command '{}'", c),
            TokenKind::Name(name) => write!(f, "name '{}'", name),
            TokenKind::Literal(text) => write!(f, "literal \"{}\"", text.escape_debug()),
            TokenKind::ClassRef(name) => write!(f, "class reference '?{}?'", name),
        }
    }
}

/// A grammar token, stamped with the 1-based line of its first character
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(raw: RawToken, line: usize) -> Self {
        let kind = match raw {
            RawToken::Command(c) => TokenKind::Command(c),
            RawToken::Name(name) => TokenKind::Name(name),
            RawToken::Literal(text) => TokenKind::Literal(text),
            RawToken::ClassRef(name) => TokenKind::ClassRef(name),
        };
        Token { kind, line }
    }
}
