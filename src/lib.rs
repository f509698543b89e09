#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::LexicalError;
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// A source location: 1-based line number and 0-based column (in bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32, pub usize);

pub fn render_error(error: &Error) -> String {
    /*
        Error: message
          |
        3 | x = "abc
          | ----^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some(line_text) = error.get_source_line() else {
        output.push_str(&format!("-> line {}\n", position.0));
        return output;
    };

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.1.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

pub fn display_error(error: &Error) {
    print!("{}", render_error(error));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
