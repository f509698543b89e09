use lazy_static::lazy_static;
use std::fmt::Display;

use crate::MK_TOKEN;

/// Text carried by end-of-line tokens.
pub const EOL: &str = "\\n";

/// Line number carried by the end-of-file sentinel.
pub const EOF_LINE: u32 = 0;

lazy_static! {
    /// The shared end-of-file sentinel returned once the input is exhausted.
    pub static ref EOF: Token = MK_TOKEN!(TokenKind::EndOfFile, EOF_LINE);
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Identifier(String),
    Number(i32),
    String(String),
    EndOfLine,
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(_) => write!(f, "Identifier"),
            TokenKind::Number(_) => write!(f, "Number"),
            TokenKind::String(_) => write!(f, "String"),
            TokenKind::EndOfLine => write!(f, "EndOfLine"),
            TokenKind::EndOfFile => write!(f, "EndOfFile"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, TokenKind::String(_))
    }

    pub fn is_eol(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Numbers render in canonical decimal, strings unescaped, identifiers
    /// verbatim. End-of-line renders as [`EOL`], end-of-file as "".
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Identifier(text) | TokenKind::String(text) => text.clone(),
            TokenKind::Number(value) => value.to_string(),
            TokenKind::EndOfLine => String::from(EOL),
            TokenKind::EndOfFile => String::new(),
        }
    }

    /// The value of a number token, `None` for every other kind.
    pub fn number(&self) -> Option<i32> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }
}
