use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mul);
        map.insert('/', TokenKind::Div);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,

    Plus,
    Minus,
    Mul,
    Div,

    LParen,
    RParen,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric payload of an `INT` or `FLOAT` token.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal {
    Int(i64),
    Float(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<Literal>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: Option<Literal>) -> Self {
        Token { kind, value }
    }

    pub fn int(value: i64) -> Self {
        Token::new(TokenKind::Int, Some(Literal::Int(value)))
    }

    pub fn float(value: f64) -> Self {
        Token::new(TokenKind::Float, Some(Literal::Float(value)))
    }

    pub fn is_literal(&self) -> bool {
        self.value.is_some()
    }
}
