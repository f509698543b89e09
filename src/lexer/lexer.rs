use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use log::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    line_reader::{Line, LineReader},
    pattern::{self, Lexeme, LexemeKind},
    tokens::{Token, TokenKind, EOF},
};

/// Tokenizer pulling lines lazily from a buffered stream.
///
/// Tokens are matched one line at a time and kept in a queue until they are
/// consumed with [`Lexer::read`]. [`Lexer::peek`] looks ahead without
/// consuming. Once the stream is exhausted both return the end-of-file
/// sentinel forever.
///
/// ```
/// use line_lexer::Lexer;
///
/// let mut lexer = Lexer::new("x = 1".as_bytes());
/// assert_eq!(lexer.peek(2).unwrap().text(), "1");
/// assert_eq!(lexer.read().unwrap().text(), "x");
/// ```
pub struct Lexer<R> {
    reader: LineReader<R>,
    queue: VecDeque<Token>,
    has_more: bool,
    failed: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer {
            reader: LineReader::new(reader),
            queue: VecDeque::new(),
            has_more: true,
            failed: false,
        }
    }

    /// Removes and returns the next token, or the end-of-file sentinel.
    pub fn read(&mut self) -> Result<Token, Error> {
        if self.fill_queue(0)? {
            if let Some(token) = self.queue.pop_front() {
                return Ok(token);
            }
        }

        Ok(EOF.clone())
    }

    /// Returns the token `i` places ahead without consuming anything.
    pub fn peek(&mut self, i: usize) -> Result<&Token, Error> {
        if self.fill_queue(i)? {
            Ok(&self.queue[i])
        } else {
            Ok(&*EOF)
        }
    }

    /// Reads lines until the queue holds at least `i + 1` tokens. Returns
    /// `false` if the input ran out first.
    fn fill_queue(&mut self, i: usize) -> Result<bool, Error> {
        while i >= self.queue.len() {
            if self.has_more {
                self.read_line()?;
            } else {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn read_line(&mut self) -> Result<(), Error> {
        let line = match self.reader.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("input exhausted after {} lines", self.reader.line_number());
                self.has_more = false;
                return Ok(());
            }
            Err(error) => {
                // Undecodable lines are already counted by the reader.
                let number = match error.kind() {
                    io::ErrorKind::InvalidData => self.reader.line_number(),
                    _ => self.reader.line_number() + 1,
                };
                return Err(Error::new(error.into(), Position(number, 0)));
            }
        };

        trace!("line {}: {:?}", line.number, line.text);

        let mut pos = 0;
        while pos < line.text.len() {
            let Some(matched) = pattern::match_at(&line.text, pos) else {
                warn!("bad token at line {}, column {}", line.number, pos);

                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: line.text[pos..].to_string(),
                    },
                    Position(line.number, pos),
                )
                .with_source_line(line.text.as_str()));
            };

            if let Some(lexeme) = matched.lexeme {
                self.add_token(&line, lexeme)?;
            }
            pos = matched.end;
        }

        self.push(MK_TOKEN!(TokenKind::EndOfLine, line.number));
        Ok(())
    }

    fn add_token(&mut self, line: &Line, lexeme: Lexeme) -> Result<(), Error> {
        let kind = match lexeme.kind {
            LexemeKind::Comment => return Ok(()),
            LexemeKind::Integer => {
                let value = lexeme.text.parse::<i32>().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: lexeme.text.to_string(),
                        },
                        Position(line.number, lexeme.start),
                    )
                    .with_source_line(line.text.as_str())
                })?;
                TokenKind::Number(value)
            }
            LexemeKind::String => TokenKind::String(to_string_literal(lexeme.text)),
            LexemeKind::Other => TokenKind::Identifier(lexeme.text.to_string()),
        };

        self.push(MK_TOKEN!(kind, line.number));
        Ok(())
    }

    fn push(&mut self, token: Token) {
        trace!("token {} {:?} at line {}", token.kind, token.text(), token.line);
        self.queue.push_back(token);
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, but not including, end-of-file. Stops for good
    /// after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.read() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Strips the quotes off a string literal and resolves `\"`, `\\` and `\n`.
/// Any other backslash is kept as is.
pub fn to_string_literal(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal);

    let mut result = String::new();
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some(&'"') => {
                    result.push('"');
                    chars.next();
                }
                Some(&'\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some(&'n') => {
                    result.push('\n');
                    chars.next();
                }
                _ => result.push(ch),
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Tokenizes a whole in-memory source. The last token is always end-of-file.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source.as_bytes());
    let mut tokens = vec![];

    loop {
        let token = lexer.read()?;
        let at_eof = token.is_eof();
        tokens.push(token);

        if at_eof {
            return Ok(tokens);
        }
    }
}
