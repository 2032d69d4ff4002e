//! Parse entry points.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::dialect::RuleTable;
use crate::error::{ConfigurationError, Result};
use crate::grouping;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::splitter::StatementSplitter;
use crate::tree::Statement;

/// SQL Parser.
///
/// Holds the rule table built from validated options. A parser is cheap to
/// clone and can be shared between threads; every call scans its own input
/// independently.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    table: RuleTable,
}

impl Parser {
    /// Creates a parser for `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the options name an unknown
    /// dialect.
    pub fn new(options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            table: options.rule_table()?,
        })
    }

    /// Creates a parser scanning with `table`.
    #[must_use]
    pub const fn with_table(table: RuleTable) -> Self {
        Self { table }
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns a lexer over `sql`.
    #[must_use]
    pub fn tokenize<'a>(&self, sql: &'a str) -> Lexer<'a> {
        Lexer::new(sql, self.table.clone())
    }

    /// Splits `sql` into statement substrings. Concatenating them gives
    /// back `sql`.
    #[must_use]
    pub fn split<'a>(&self, sql: &'a str) -> Vec<&'a str> {
        StatementSplitter::new(self.tokenize(sql))
            .filter_map(|tokens| {
                let start = tokens.first()?.span.start;
                let end = tokens.last()?.span.end;
                Some(&sql[start..end])
            })
            .collect()
    }

    /// Lazily parses the statements of `sql`, one at a time.
    pub fn statements<'a>(&self, sql: &'a str) -> impl Iterator<Item = Statement> + 'a {
        StatementSplitter::new(self.tokenize(sql)).map(|tokens| {
            let mut statement = Statement::new(tokens);
            grouping::group(&mut statement);
            trace!(nodes = statement.node_count(), "grouped statement");
            statement
        })
    }

    /// Parses every statement of `sql`.
    #[must_use]
    pub fn parse(&self, sql: &str) -> Vec<Statement> {
        let statements: Vec<_> = self.statements(sql).collect();
        debug!(
            dialect = self.table.dialect().name(),
            statements = statements.len(),
            "Parsed SQL"
        );
        statements
    }

    /// Decodes `bytes` with `encoding`, then parses them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownEncoding`] for an unsupported
    /// encoding and [`ConfigurationError::Decode`] if the bytes are not
    /// valid in it.
    pub fn parse_bytes(&self, bytes: &[u8], encoding: &str) -> Result<Vec<Statement>> {
        let sql = decode(bytes, encoding)?;
        Ok(self.parse(&sql))
    }
}

/// Decodes `bytes` as `utf-8` or `latin-1`. Encoding names ignore case and
/// accept the usual aliases.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownEncoding`] for other encodings and
/// [`ConfigurationError::Decode`] for invalid UTF-8.
pub fn decode<'a>(bytes: &'a [u8], encoding: &str) -> Result<Cow<'a, str>> {
    match encoding.to_ascii_lowercase().replace('_', "-").as_str() {
        "utf-8" | "utf8" => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|source| ConfigurationError::Decode {
                encoding: encoding.to_string(),
                source,
            }),
        "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => {
            Ok(Cow::Owned(bytes.iter().copied().map(char::from).collect()))
        }
        _ => Err(ConfigurationError::UnknownEncoding(encoding.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::GroupKind;

    #[test]
    fn test_split_preserves_input() {
        let sql = "select 1;\nselect 2; -- two\n\n  select 3";
        let parts = Parser::default().split(sql);
        assert_eq!(parts, vec!["select 1;\n", "select 2; -- two\n", "\n  select 3"]);
        assert_eq!(parts.concat(), sql);
    }

    #[test]
    fn test_parse_groups_statements() {
        let statements = Parser::default().parse("select a from t; update t set a = 1");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].statement_type().as_deref(), Some("SELECT"));
        assert_eq!(statements[1].statement_type().as_deref(), Some("UPDATE"));
        assert_eq!(
            statements[0].token(2).and_then(|t| t.kind()),
            Some(GroupKind::Identifier)
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(Parser::default().parse("").is_empty());
        assert!(Parser::default().split("").is_empty());
    }

    #[test]
    fn test_statements_is_lazy() {
        let parser = Parser::default();
        let mut statements = parser.statements("select 1; select 2;");
        assert_eq!(statements.next().map(|s| s.to_string()).as_deref(), Some("select 1; "));
        assert_eq!(statements.next().map(|s| s.to_string()).as_deref(), Some("select 2;"));
        assert!(statements.next().is_none());
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(b"select", "UTF-8").unwrap(), "select");
        assert_eq!(decode(&[0x27, 0xe9, 0x27], "latin-1").unwrap(), "'\u{e9}'");
        assert_eq!(decode(&[0xe9], "ISO_8859-1").unwrap(), "\u{e9}");
        assert!(matches!(
            decode(&[0xff, 0xfe], "utf-8"),
            Err(ConfigurationError::Decode { .. })
        ));
        assert_eq!(
            decode(b"x", "ebcdic").unwrap_err(),
            ConfigurationError::UnknownEncoding("ebcdic".into())
        );
    }

    #[test]
    fn test_parse_bytes() {
        let statements = Parser::default()
            .parse_bytes("select 'ä'".as_bytes(), "utf-8")
            .unwrap();
        assert_eq!(statements[0].to_string(), "select 'ä'");
    }
}
