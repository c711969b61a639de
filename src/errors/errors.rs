use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position_start: Position,
    position_end: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position_start: Position, position_end: Position) -> Self {
        Error {
            internal_error: error_impl,
            position_start,
            position_end,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position_start(&self) -> &Position {
        &self.position_start
    }

    pub fn get_position_end(&self) -> &Position {
        &self.position_end
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "Illegal Character",
            ErrorImpl::InvalidNumber { .. } => "Invalid Number",
        }
    }

    pub fn get_details(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumber { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }

    /// `<name>: <details>` followed by the file and 1-based line of the start.
    pub fn as_string(&self) -> String {
        format!(
            "{}: {}\nFile {}, line {}",
            self.get_error_name(),
            self.get_details(),
            self.position_start.file_name(),
            self.position_start.line() + 1
        )
    }

    /// Draws the offending source line with a caret under the start column,
    /// using the text carried by the start position.
    pub fn render_snippet(&self) -> String {
        /*
            Error: Illegal Character
            -> calc.arith
               |
            1  | 5 $ 2
               | --^
        */

        let mut out = String::new();

        if let ErrorTip::None = self.get_tip() {
            out.push_str(&format!("Error: {}\n", self.get_error_name()));
        } else {
            out.push_str(&format!("Error: {} ({})\n", self.get_error_name(), self.get_tip()));
        }
        out.push_str(&format!("-> {}\n", self.position_start.file_name()));

        let Some((line, line_text, line_pos)) = get_line_at_position(
            self.position_start.file_text(),
            self.position_start.line(),
            self.position_start.column(),
        ) else {
            return out;
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

        out
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("'{character}'")]
    IllegalCharacter { character: char },
    #[error("'{literal}'")]
    InvalidNumber { literal: String },
}
