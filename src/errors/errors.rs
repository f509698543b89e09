use std::{fmt::Display, io, sync::Arc};

use thiserror::Error;

use crate::Position;

/// The single error type that crosses the tokenizer's API.
pub type LexicalError = Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    source_line: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            source_line: None,
        }
    }

    /// Attaches the text of the line the error was raised on, used when
    /// rendering a caret diagnostic.
    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } if token.starts_with('"') => {
                ErrorTip::Suggestion(String::from(
                    "Unterminated string literal, strings must close on the same line",
                ))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Io { source } => {
                ErrorTip::Suggestion(format!("Failed to read the input: {}", source))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("error reading input: {source}")]
    Io {
        #[source]
        source: Arc<io::Error>,
    },
}

impl From<io::Error> for ErrorImpl {
    fn from(error: io::Error) -> Self {
        ErrorImpl::Io {
            source: Arc::new(error),
        }
    }
}
