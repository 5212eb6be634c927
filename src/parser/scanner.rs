//! Token stream for SQL scripts.
//!
//! Wraps the sqlparser tokenizer and reduces its tokens to the handful of
//! kinds the splitter cares about. Keyword classification is dialect
//! specific, so the same word can be a keyword in one dialect and a plain
//! identifier in another.

use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer, Whitespace};

use crate::dialect::DialectRules;
use crate::error::SplitError;

/// Coarse classification of a script token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Terminator,
    Whitespace,
    Comment,
}

/// 1-based line and column of a token, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One lexical unit of a script.
///
/// Keyword text is uppercased; everything else keeps the text the tokenizer
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptToken {
    pub text: String,
    pub kind: TokenKind,
    pub start: Position,
}

impl ScriptToken {
    #[inline]
    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Keyword
    }

    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::Terminator
    }

    /// Whitespace and comments
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Tokenize a script and classify every token against the dialect's keywords.
///
/// Parts of a dotted name (`e.end`, `t.begin`) are always identifiers.
pub fn tokenize(sql: &str, rules: &DialectRules) -> Result<Vec<ScriptToken>, SplitError> {
    let dialect = GenericDialect {};
    let tokens = Tokenizer::new(&dialect, sql).tokenize_with_location()?;

    let is_period = |i: Option<usize>| {
        i.and_then(|i| tokens.get(i))
            .is_some_and(|t| matches!(t.token, Token::Period))
    };
    let qualified: Vec<bool> = (0..tokens.len())
        .map(|i| is_period(i.checked_sub(1)) || is_period(Some(i + 1)))
        .collect();

    Ok(tokens
        .into_iter()
        .zip(qualified)
        .filter(|(t, _)| !matches!(t.token, Token::EOF))
        .map(|(t, qualified)| classify(t, qualified, rules))
        .collect())
}

fn classify(token: TokenWithSpan, qualified: bool, rules: &DialectRules) -> ScriptToken {
    let start = Position::new(
        token.span.start.line as usize,
        token.span.start.column as usize,
    );

    let (text, kind) = match token.token {
        Token::Word(w) => {
            if !qualified && w.quote_style.is_none() && rules.is_keyword(&w.value) {
                (w.value.to_ascii_uppercase(), TokenKind::Keyword)
            } else {
                (w.value, TokenKind::Identifier)
            }
        }
        Token::SemiColon => (";".to_string(), TokenKind::Terminator),
        Token::Whitespace(ws) => {
            let kind = match ws {
                Whitespace::SingleLineComment { .. } | Whitespace::MultiLineComment(_) => {
                    TokenKind::Comment
                }
                _ => TokenKind::Whitespace,
            };
            (ws.to_string(), kind)
        }
        other @ (Token::Number(..)
        | Token::SingleQuotedString(_)
        | Token::DoubleQuotedString(_)
        | Token::NationalStringLiteral(_)
        | Token::EscapedStringLiteral(_)
        | Token::HexStringLiteral(_)
        | Token::SingleQuotedByteStringLiteral(_)
        | Token::DoubleQuotedByteStringLiteral(_)
        | Token::DollarQuotedString(_)) => (other.to_string(), TokenKind::Literal),
        other => (other.to_string(), TokenKind::Operator),
    };

    ScriptToken { text, kind, start }
}

/// Maps token positions back to byte offsets in the script.
///
/// Lookups are expected in roughly ascending order; the last resolved
/// position is cached so walking a long line stays linear.
pub struct SourceMap<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
    cursor: (Position, usize),
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 40 + 1);
        line_starts.push(0);
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
            cursor: (Position::new(1, 1), 0),
        }
    }

    /// Byte offset of a position, clamped to the end of the source
    pub fn offset(&mut self, position: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line.saturating_sub(1)) else {
            return self.source.len();
        };

        let (cached, cached_offset) = self.cursor;
        let (from_offset, from_column) =
            if cached.line == position.line && cached.column <= position.column {
                (cached_offset, cached.column)
            } else {
                (line_start, 1)
            };

        let offset = self.source[from_offset..]
            .char_indices()
            .nth(position.column.max(1) - from_column)
            .map(|(i, _)| from_offset + i);

        match offset {
            Some(offset) => {
                self.cursor = (position, offset);
                offset
            }
            None => self.source.len(),
        }
    }

    /// Source text between two positions (end exclusive)
    pub fn slice(&mut self, start: Position, end: Position) -> &'a str {
        let from = self.offset(start);
        let to = self.offset(end).max(from);
        &self.source[from..to]
    }

    /// Source text from a position to the end of the script
    pub fn slice_from(&mut self, start: Position) -> &'a str {
        &self.source[self.offset(start)..]
    }
}
