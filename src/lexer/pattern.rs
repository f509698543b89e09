use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading whitespace followed by at most one significant lexeme.
    ///
    /// The alternatives are tried in order: line comment, integer literal,
    /// string literal, identifier, two-character operator, single punctuation
    /// character. A double quote is never punctuation on its own, so an
    /// unterminated string fails to match.
    static ref TOKEN_PATTERN: Regex = Regex::new(concat!(
        r"^[[:space:]]*(?P<lexeme>",
        r"(?P<comment>//.*)",
        r"|(?P<integer>[0-9]+)",
        r#"|(?P<string>"(?:\\"|\\\\|\\n|[^"])*")"#,
        r"|[A-Z_a-z][A-Z_a-z0-9]*",
        r"|==|<=|>=|&&|\|\|",
        r#"|[[:punct:]&&[^"]]"#,
        r")?",
    ))
    .unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexemeKind {
    Comment,
    Integer,
    String,
    /// Identifier, operator or punctuation.
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    pub start: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct PatternMatch<'a> {
    pub lexeme: Option<Lexeme<'a>>,
    pub end: usize,
}

/// Matches the pattern anchored at byte offset `pos` of `line`.
///
/// Returns `None` when nothing can be consumed at `pos`.
pub fn match_at(line: &str, pos: usize) -> Option<PatternMatch<'_>> {
    let remainder = &line[pos..];
    let captures = TOKEN_PATTERN.captures(remainder)?;
    let whole = captures.get(0)?;

    if whole.end() == 0 && !remainder.is_empty() {
        return None;
    }

    let lexeme = captures.name("lexeme").map(|found| {
        let kind = if captures.name("comment").is_some() {
            LexemeKind::Comment
        } else if captures.name("integer").is_some() {
            LexemeKind::Integer
        } else if captures.name("string").is_some() {
            LexemeKind::String
        } else {
            LexemeKind::Other
        };

        Lexeme {
            kind,
            text: found.as_str(),
            start: pos + found.start(),
        }
    });

    Some(PatternMatch {
        lexeme,
        end: pos + whole.end(),
    })
}
