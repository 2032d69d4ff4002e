//! SQL Tokenizer implementation.

use std::iter::FusedIterator;

use tracing::trace;

use super::{Span, Token, TokenKind};
use crate::dialect::{RuleAction, RuleTable};

/// A lexer that tokenizes SQL input.
///
/// At each position the rules of the table are tried in order and the first
/// that matches wins. A character no rule accepts becomes a one-character
/// [`TokenKind::Error`] token, so the concatenated token texts always equal
/// the input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The rules and keywords to scan with.
    table: RuleTable,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str, table: RuleTable) -> Self {
        Self {
            input,
            pos: 0,
            table,
        }
    }

    /// Returns the input being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Scans the token at the current position and returns its kind and
    /// length in bytes.
    fn scan_rule(&self) -> (TokenKind, usize) {
        for rule in self.table.rules() {
            if let Some(len) = rule.apply(self.input, self.pos) {
                let kind = match rule.action() {
                    RuleAction::Emit(kind) => kind,
                    RuleAction::Keyword => self
                        .table
                        .classify(&self.input[self.pos..self.pos + len]),
                    RuleAction::DollarQuoted => TokenKind::Literal,
                };
                return (kind, len);
            }
        }
        let len = self.input[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        trace!(offset = self.pos, "no scanning rule matched");
        (TokenKind::Error, len)
    }

    /// Scans the next token, or returns `None` at the end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let (kind, len) = self.scan_rule();
        let span = Span::new(self.pos, self.pos + len);
        self.pos = span.end;
        Some(Token::new(kind, span.slice(self.input), span))
    }

    /// Tokenizes the rest of the input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        self.by_ref().collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{lookup, RuleTable};

    fn tokenize(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input, RuleTable::default()).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn tsql_kinds(input: &str) -> Vec<TokenKind> {
        let table = RuleTable::new(lookup("TransactSQL").unwrap());
        Lexer::new(input, table).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(token_kinds(" \n\t "), vec![TokenKind::Whitespace]);
    }

    #[test]
    fn test_single_line_comment() {
        let tokens = tokenize("-- note\nselect");
        assert_eq!(tokens[0].as_pair(), (TokenKind::SingleLineComment, "-- note\n"));
        assert_eq!(tokens[1].as_pair(), (TokenKind::Dml, "select"));

        let tokens = tokenize("# note\r\n1");
        assert_eq!(tokens[0].text, "# note\r\n");
    }

    #[test]
    fn test_multi_line_comment() {
        let tokens = tokenize("/* a\n b */1");
        assert_eq!(tokens[0].as_pair(), (TokenKind::MultiLineComment, "/* a\n b */"));
        assert_eq!(tokens[1].kind, TokenKind::Integer);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("SELECT select SeLeCt"),
            vec![
                TokenKind::Dml,
                TokenKind::Whitespace,
                TokenKind::Dml,
                TokenKind::Whitespace,
                TokenKind::Dml,
            ]
        );
    }

    #[test]
    fn test_multi_word_keywords() {
        let tokens = tokenize("left outer join");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);

        assert_eq!(tokenize("union  all")[0].as_pair(), (TokenKind::Keyword, "union  all"));
        assert_eq!(tokenize("end if")[0].text, "end if");
        assert_eq!(tokenize("double precision")[0].kind, TokenKind::Builtin);
        assert_eq!(tokenize("create or replace")[0].kind, TokenKind::Ddl);
        assert_eq!(tokenize("ending")[0].as_pair(), (TokenKind::Name, "ending"));
    }

    #[test]
    fn test_names_before_dot_and_paren() {
        assert_eq!(
            token_kinds("select.key"),
            vec![TokenKind::Name, TokenKind::Punctuation, TokenKind::Name]
        );
        assert_eq!(
            token_kinds("max(1)"),
            vec![
                TokenKind::Name,
                TokenKind::Punctuation,
                TokenKind::Integer,
                TokenKind::Punctuation,
            ]
        );
        assert_eq!(token_kinds("in(1)")[0], TokenKind::Keyword);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokenize("42")[0].kind, TokenKind::Integer);
        assert_eq!(tokenize(".5")[0].kind, TokenKind::Float);
        assert_eq!(tokenize("1.5")[0].kind, TokenKind::Float);
        assert_eq!(tokenize("1.5e-3")[0].kind, TokenKind::Float);
        assert_eq!(tokenize("0xFF")[0].kind, TokenKind::Hexadecimal);
        assert_eq!(tokenize("1_data")[0].as_pair(), (TokenKind::Name, "1_data"));
    }

    #[test]
    fn test_strings_and_quoted_names() {
        assert_eq!(tokenize("'it''s'")[0].as_pair(), (TokenKind::Single, "'it''s'"));
        assert_eq!(tokenize(r"'a\'b'")[0].kind, TokenKind::Single);
        assert_eq!(tokenize("\"my col\"")[0].kind, TokenKind::Name);
        assert_eq!(tokenize("`my col`")[0].kind, TokenKind::Name);
        assert_eq!(tokenize("[my col]")[0].kind, TokenKind::Name);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("a<>b"),
            vec![TokenKind::Name, TokenKind::Comparison, TokenKind::Name]
        );
        assert_eq!(tokenize("||")[0].as_pair(), (TokenKind::Operator, "||"));
        assert_eq!(tokenize("*")[0].kind, TokenKind::Wildcard);
        assert_eq!(tokenize(":=")[0].kind, TokenKind::Assignment);
        assert_eq!(tokenize("::")[0].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_parameter_placeholder() {
        assert_eq!(
            token_kinds("? :a $1 %s %(name)s"),
            vec![
                TokenKind::Placeholder,
                TokenKind::Whitespace,
                TokenKind::Placeholder,
                TokenKind::Whitespace,
                TokenKind::Placeholder,
                TokenKind::Whitespace,
                TokenKind::Placeholder,
                TokenKind::Whitespace,
                TokenKind::Placeholder,
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let tokens = tokenize("a { b");
        assert_eq!(tokens[2].as_pair(), (TokenKind::Error, "{"));
        let tokens = tokenize("€");
        assert_eq!(tokens[0].as_pair(), (TokenKind::Error, "€"));
    }

    #[test]
    fn test_transact_sql_sigils() {
        assert_eq!(
            tsql_kinds("@@version @x N'a'"),
            vec![
                TokenKind::Builtin,
                TokenKind::Whitespace,
                TokenKind::Variable,
                TokenKind::Whitespace,
                TokenKind::Single,
            ]
        );
        assert_eq!(token_kinds("@x")[0], TokenKind::Name);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[2].span, Span::new(7, 9));
    }

    #[test]
    fn test_lossless() {
        let sql = "select 'a', \"b\" -- c\n/* d */ from [e] where f = $$g$$;";
        let text: String = tokenize(sql).iter().map(|t| t.text).collect();
        assert_eq!(text, sql);
    }
}
