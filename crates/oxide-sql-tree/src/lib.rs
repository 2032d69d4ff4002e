//! # oxide-sql-tree
//!
//! A non-validating SQL parser that turns SQL text into lossless token
//! trees.
//!
//! This crate provides:
//! - A rule-driven lexer with pluggable dialects
//! - A statement splitter aware of procedural blocks
//! - A grouping engine building identifiers, lists, clauses and calls
//! - Tree navigation: names, aliases, parents, offsets and pretty printing
//!
//! Parsing never fails on SQL content. Malformed input gives a best-effort
//! tree, and the text of every tree equals the text it was parsed from.
//! Only the options can be rejected.
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_sql_tree::{parse, GroupKind, ParseOptions};
//!
//! let statements = parse(r#"select x.y as "z" from foo"#, &ParseOptions::default())?;
//! let column = statements[0].token(2).unwrap();
//!
//! assert_eq!(column.kind(), Some(GroupKind::Identifier));
//! assert_eq!(column.name().as_deref(), Some("z"));
//! assert_eq!(column.real_name().as_deref(), Some("y"));
//! assert_eq!(column.parent_name().as_deref(), Some("x"));
//! # Ok::<(), oxide_sql_tree::ConfigurationError>(())
//! ```
//!
//! ## Splitting
//!
//! ```rust
//! use oxide_sql_tree::{split, ParseOptions};
//!
//! let parts = split("select 1; select 2;", &ParseOptions::default())?;
//! assert_eq!(parts, vec!["select 1; ", "select 2;"]);
//! # Ok::<(), oxide_sql_tree::ConfigurationError>(())
//! ```

pub mod dialect;
pub mod error;
pub mod grouping;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod splitter;
pub mod tree;

pub use dialect::{Dialect, RuleTable};
pub use error::{ConfigurationError, Result};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use options::ParseOptions;
pub use parser::Parser;
pub use splitter::StatementSplitter;
pub use tree::{GroupKind, Node, NodeId, Statement};

/// Parses every statement of `sql`.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if `options` are invalid.
pub fn parse(sql: &str, options: &ParseOptions) -> Result<Vec<Statement>> {
    Ok(Parser::new(options)?.parse(sql))
}

/// Decodes `bytes` with `encoding` and parses every statement.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if `options` are invalid, the encoding
/// is unknown, or the bytes do not decode.
pub fn parse_bytes(bytes: &[u8], encoding: &str, options: &ParseOptions) -> Result<Vec<Statement>> {
    Parser::new(options)?.parse_bytes(bytes, encoding)
}

/// Returns a lexer over `sql`.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if `options` are invalid.
pub fn tokenize<'a>(sql: &'a str, options: &ParseOptions) -> Result<Lexer<'a>> {
    Ok(Parser::new(options)?.tokenize(sql))
}

/// Splits `sql` into statement substrings.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if `options` are invalid.
pub fn split<'a>(sql: &'a str, options: &ParseOptions) -> Result<Vec<&'a str>> {
    Ok(Parser::new(options)?.split(sql))
}
