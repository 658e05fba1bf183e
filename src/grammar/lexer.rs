//! Tokenize driver for grammar source text
//!
//! Runs the logos lexer over the whole grammar and stamps every token
//! with its 1-based source line. Lexer-level failures are promoted to
//! [`CompileError`]s naming the offending line.

use crate::grammar::error::CompileError;
use crate::grammar::tokens::{LexError, RawToken, Token};
use crate::location::SourceLocation;
use logos::Logos;

/// Tokenize grammar source text into an ordered token sequence
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let lines = SourceLocation::new(source);
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lines.line_of(span.start);
        match result {
            Ok(raw) => tokens.push(Token::new(raw, line)),
            Err(LexError::InvalidEscape(escape)) => {
                return Err(CompileError::InvalidEscape { escape, line });
            }
            Err(LexError::UnhandledCharacter) => {
                let character = source[span].chars().next().unwrap_or('\0');
                return Err(CompileError::UnhandledCharacter { character, line });
            }
        }
    }

    Ok(tokens)
}
