//! Statement splitting.
//!
//! Statements end at a `;` at nesting level zero. Nesting is tracked from
//! keywords only: `BEGIN`/`END` blocks, `CREATE` bodies with their
//! `DECLARE` sections, and control flow inside those bodies. After the
//! terminating `;` the splitter keeps whitespace up to the first line break
//! and a trailing single-line comment with the statement, so every input
//! character lands in exactly one statement.

use std::iter::FusedIterator;

use tracing::trace;

use crate::lexer::{Lexer, Span, Token, TokenKind};

/// Splits a token stream into statements.
#[derive(Debug, Clone)]
pub struct StatementSplitter<'a> {
    tokens: Lexer<'a>,
    /// A token that belongs to the next statement.
    pending: Option<Token<'a>>,
    level: i32,
    begin_depth: u32,
    is_create: bool,
    in_declare: bool,
}

impl<'a> StatementSplitter<'a> {
    /// Creates a splitter over the tokens of `lexer`.
    #[must_use]
    pub const fn new(lexer: Lexer<'a>) -> Self {
        Self {
            tokens: lexer,
            pending: None,
            level: 0,
            begin_depth: 0,
            is_create: false,
            in_declare: false,
        }
    }

    fn reset(&mut self) {
        self.level = 0;
        self.begin_depth = 0;
        self.is_create = false;
        self.in_declare = false;
    }

    fn take_next(&mut self) -> Option<Token<'a>> {
        self.pending.take().or_else(|| self.tokens.next())
    }

    /// Returns how `token` changes the nesting level.
    fn change_level(&mut self, token: &Token<'_>) -> i32 {
        if !token.is_keyword() {
            return 0;
        }
        let word = normalize_keyword(token.text);

        if token.kind == TokenKind::Ddl && word.starts_with("CREATE") {
            self.is_create = true;
            return 0;
        }
        if word == "DECLARE" && self.is_create && self.begin_depth == 0 {
            self.in_declare = true;
            return 1;
        }
        if word == "BEGIN" {
            self.begin_depth += 1;
            // the body of a declare section continues its level
            if self.in_declare {
                self.in_declare = false;
                return 0;
            }
            return i32::from(self.is_create);
        }
        if word == "END" {
            self.begin_depth = self.begin_depth.saturating_sub(1);
            return -1;
        }
        if self.is_create
            && self.begin_depth > 0
            && matches!(word.as_str(), "IF" | "FOR" | "WHILE")
        {
            return 1;
        }
        if matches!(word.as_str(), "END IF" | "END FOR" | "END WHILE") {
            return -1;
        }
        0
    }
}

impl<'a> Iterator for StatementSplitter<'a> {
    type Item = Vec<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reset();
        let mut statement = Vec::new();
        let mut terminated = false;

        while let Some(token) = self.take_next() {
            if terminated {
                match token.kind {
                    TokenKind::Whitespace => {
                        let cut = line_break_end(token.text);
                        match cut {
                            Some(cut) if cut < token.text.len() => {
                                let (head, tail) = split_token(token, cut);
                                statement.push(head);
                                self.pending = Some(tail);
                                break;
                            }
                            Some(_) => {
                                statement.push(token);
                                break;
                            }
                            None => statement.push(token),
                        }
                    }
                    TokenKind::SingleLineComment => {
                        let ends_line = token.text.ends_with(['\n', '\r']);
                        statement.push(token);
                        if ends_line {
                            break;
                        }
                    }
                    _ => {
                        self.pending = Some(token);
                        break;
                    }
                }
                continue;
            }

            self.level += self.change_level(&token);
            let is_terminator = token.kind == TokenKind::Punctuation && token.text == ";";
            statement.push(token);
            if is_terminator && self.level <= 0 {
                terminated = true;
            }
        }

        if statement.is_empty() {
            return None;
        }
        trace!(tokens = statement.len(), "split statement");
        Some(statement)
    }
}

impl FusedIterator for StatementSplitter<'_> {}

/// Upper-cases a keyword and collapses inner whitespace runs.
pub(crate) fn normalize_keyword(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Returns the byte offset just past the first line break in `text`.
fn line_break_end(text: &str) -> Option<usize> {
    let idx = text.find(['\n', '\r'])?;
    if text[idx..].starts_with("\r\n") {
        Some(idx + 2)
    } else {
        Some(idx + 1)
    }
}

fn split_token(token: Token<'_>, offset: usize) -> (Token<'_>, Token<'_>) {
    let (head, tail): (Span, Span) = token.span.split_at(offset);
    let (head_text, tail_text) = token.text.split_at(offset);
    (
        Token::new(token.kind, head_text, head),
        Token::new(token.kind, tail_text, tail),
    )
}
