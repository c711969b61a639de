use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind, SYMBOL_LOOKUP};

lazy_static! {
    // At most one dot; a second one is left for the scan loop to reject.
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]*)?").expect("number pattern is valid");
}

const WHITESPACE: [char; 2] = [' ', '\t'];

/// Single-use scanner over one source buffer.
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    current_char: Option<char>,
    position: Position,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            chars: source.chars().collect(),
            current_char: None,
            position: Position::start(file_name, Rc::new(source)),
            tokens: vec![],
        };
        lexer.advance();

        lexer
    }

    pub fn advance(&mut self) {
        self.position.advance(self.current_char);
        self.current_char = usize::try_from(self.position.index())
            .ok()
            .and_then(|index| self.chars.get(index).copied());
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.current_char
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn at_eof(&self) -> bool {
        self.current_char.is_none()
    }

    /// Scans the whole buffer. The first illegal character ends the scan and
    /// discards every token produced so far.
    pub fn create_tokens(mut self) -> Result<Vec<Token>, Error> {
        while let Some(token) = self.next_token()? {
            self.push(token);
        }

        debug!(
            "lexed {} tokens from {}",
            self.tokens.len(),
            self.position.file_name()
        );
        Ok(self.tokens)
    }

    /// Skips whitespace and scans one token, or returns `None` at end of text.
    /// Every call that yields a token leaves the cursor past it.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(current) = self.current_char {
            let start = self.position.copy();

            let token = match current {
                c if WHITESPACE.contains(&c) => {
                    self.advance();
                    continue;
                }
                '0'..='9' => self.number_token()?,
                c => {
                    if let Some(kind) = SYMBOL_LOOKUP.get(&c) {
                        self.advance();
                        MK_TOKEN!(*kind)
                    } else {
                        return Err(self.illegal_character(c));
                    }
                }
            };

            trace!("{} at {}:{}", token, start.line() + 1, start.column() + 1);
            return Ok(Some(token));
        }

        Ok(None)
    }

    fn illegal_character(&mut self, character: char) -> Error {
        let position_start = self.position.copy();
        self.advance();

        let error = Error::new(
            ErrorImpl::IllegalCharacter { character },
            position_start,
            self.position.copy(),
        );
        debug!("{}", error);

        error
    }

    fn number_token(&mut self) -> Result<Token, Error> {
        let position_start = self.position.copy();
        let start = usize::try_from(position_start.index()).unwrap_or_default();
        let run = self.chars[start..]
            .iter()
            .take_while(|c| c.is_ascii_digit() || **c == '.')
            .collect::<String>();

        let literal = NUMBER_PATTERN
            .find(&run)
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_default();

        for _ in literal.chars() {
            self.advance();
        }

        let value = if literal.contains('.') {
            literal.parse::<f64>().ok().map(Literal::Float)
        } else {
            literal.parse::<i64>().ok().map(Literal::Int)
        };

        match value {
            Some(value @ Literal::Int(_)) => Ok(MK_TOKEN!(TokenKind::Int, value)),
            Some(value @ Literal::Float(_)) => Ok(MK_TOKEN!(TokenKind::Float, value)),
            None => {
                let error = Error::new(
                    ErrorImpl::InvalidNumber { literal },
                    position_start,
                    self.position.copy(),
                );
                debug!("{}", error);
                Err(error)
            }
        }
    }
}

/// Lexes `text` in one go. Any illegal character aborts the scan and no
/// tokens are returned.
pub fn tokenize(file_name: &str, text: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(text.to_string(), Some(file_name.to_string())).create_tokens()
}
