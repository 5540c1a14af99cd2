//! Mapping `char` positions back into the source text.

/// A source location (line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number, counted in `char`s.
    pub column: usize,
}

/// Compute line and column from a `char` index in source.
///
/// An index past the end maps to the position just after the last character.
#[must_use]
pub fn char_to_location(source: &str, position: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = 1;

    for c in source.chars().take(position) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    SourceLocation { line, column }
}

/// Convert a `char` index to a byte offset, clamped to the source length.
#[must_use]
pub fn char_to_byte(source: &str, position: usize) -> usize {
    source
        .char_indices()
        .nth(position)
        .map_or(source.len(), |(offset, _)| offset)
}

/// The text of a 1-indexed line, without its line ending.
pub fn line_text(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line - 1)
        .map_or("", |text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character() {
        assert_eq!(
            char_to_location("abc", 0),
            SourceLocation { line: 1, column: 1 }
        );
    }

    #[test]
    fn test_after_newline() {
        let source = "ab\ncd\nef";
        assert_eq!(
            char_to_location(source, 3),
            SourceLocation { line: 2, column: 1 }
        );
        assert_eq!(
            char_to_location(source, 7),
            SourceLocation { line: 3, column: 2 }
        );
    }

    #[test]
    fn test_columns_count_chars() {
        assert_eq!(
            char_to_location("äöü)", 3),
            SourceLocation { line: 1, column: 4 }
        );
    }

    #[test]
    fn test_char_to_byte() {
        let source = "ä(x";
        assert_eq!(char_to_byte(source, 0), 0);
        assert_eq!(char_to_byte(source, 1), 2);
        assert_eq!(char_to_byte(source, 2), 3);
        assert_eq!(char_to_byte(source, 10), source.len());
    }

    #[test]
    fn test_line_text() {
        let source = "one\r\ntwo\nthree";
        assert_eq!(line_text(source, 1), "one");
        assert_eq!(line_text(source, 2), "two");
        assert_eq!(line_text(source, 3), "three");
        assert_eq!(line_text(source, 4), "");
    }
}
