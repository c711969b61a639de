#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A cursor into a named source buffer.
///
/// `index` and `column` start at -1 so that the first `advance` lands on the
/// first character. The file name and text are shared, so `copy` only bumps
/// reference counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    index: i64,
    line: usize,
    column: i64,
    file_name: Rc<String>,
    file_text: Rc<String>,
}

impl Position {
    pub fn new(index: i64, line: usize, column: i64, file_name: Rc<String>, file_text: Rc<String>) -> Self {
        Position {
            index,
            line,
            column,
            file_name,
            file_text,
        }
    }

    pub fn start(file_name: Rc<String>, file_text: Rc<String>) -> Self {
        Position::new(-1, 0, -1, file_name, file_text)
    }

    /// Moves one character forward. `previous` is the character being left
    /// behind; stepping over a newline starts the next line at column 0.
    pub fn advance(&mut self, previous: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if previous == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    pub fn copy(&self) -> Position {
        self.clone()
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> i64 {
        self.column
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_text(&self) -> &str {
        &self.file_text
    }
}

/// Returns the 1-based line number, the text of that line and the column
/// inside it for a 0-based line of `source`.
pub fn get_line_at_position(source: &str, line: usize, column: i64) -> Option<(usize, String, usize)> {
    let text = source.split_inclusive('\n').nth(line)?;
    let line_pos = if column < 0 { 0 } else { column as usize };

    Some((line + 1, text.trim_end_matches(['\n', '\r']).to_string(), line_pos))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Position;

    fn position(text: &str) -> Position {
        Position::start(Rc::new("test.arith".to_string()), Rc::new(text.to_string()))
    }

    #[test]
    fn test_get_line_at_position() {
        let source = "1 + 2\n3 * 4\n(5)";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 0, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + 2");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 2, 1).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "(5)");
        assert_eq!(line_pos, 1);

        assert!(super::get_line_at_position(source, 3, 0).is_none());
    }

    #[test]
    fn test_first_advance_lands_on_origin() {
        let mut pos = position("12");
        pos.advance(None);

        assert_eq!(pos.index(), 0);
        assert_eq!(pos.line(), 0);
        assert_eq!(pos.column(), 0);
    }

    #[test]
    fn test_advance_over_newline_resets_column() {
        let mut pos = position("1\n2");
        pos.advance(None).advance(Some('1'));
        assert_eq!(pos.column(), 1);

        pos.advance(Some('\n'));
        assert_eq!(pos.index(), 2);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 0);

        pos.advance(Some('2'));
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut pos = position("abc");
        pos.advance(None);
        let snapshot = pos.copy();

        pos.advance(Some('a')).advance(Some('b'));

        assert_eq!(snapshot.index(), 0);
        assert_eq!(pos.index(), 2);
        assert_eq!(snapshot.file_name(), "test.arith");
        assert_eq!(snapshot.file_text(), "abc");
    }
}
