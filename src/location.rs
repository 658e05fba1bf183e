//! Source location utilities for converting byte offsets to line numbers
//!
//! Both the grammar compiler and the parse engine stamp their output with
//! 1-based source lines; this index makes that conversion cheap for
//! repeated lookups over the same text.

/// Provides fast conversion from byte offsets to 1-based line numbers
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based line number
    pub fn line_of(&self, byte_offset: usize) -> usize {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of_single_line() {
        let loc = SourceLocation::new("hello");
        assert_eq!(loc.line_of(0), 1);
        assert_eq!(loc.line_of(4), 1);
        assert_eq!(loc.line_of(5), 1);
    }

    #[test]
    fn test_line_of_multiple_lines() {
        let loc = SourceLocation::new("ab\ncd\nef");
        assert_eq!(loc.line_of(0), 1);
        assert_eq!(loc.line_of(2), 1);
        assert_eq!(loc.line_of(3), 2);
        assert_eq!(loc.line_of(5), 2);
        assert_eq!(loc.line_of(6), 3);
        assert_eq!(loc.line_of(8), 3);
    }

    #[test]
    fn test_line_of_offset_at_newline_start() {
        let loc = SourceLocation::new("x\ny");
        assert_eq!(loc.line_of(1), 1);
        assert_eq!(loc.line_of(2), 2);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("").line_count(), 1);
        assert_eq!(SourceLocation::new("a\nb\nc").line_count(), 3);
        assert_eq!(SourceLocation::new("a\n").line_count(), 2);
    }
}
