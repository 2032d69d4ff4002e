#![allow(dead_code)]

use oxide_sql_tree::{parse, tokenize, ParseOptions, Statement, Token};

/// Every registered dialect, for tests that must hold in all of them.
pub const DIALECTS: [&str; 2] = ["Default", "TransactSQL"];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn options(dialect: &str) -> ParseOptions {
    ParseOptions::new().dialect(dialect)
}

pub fn parse_in(sql: &str, dialect: &str) -> Vec<Statement> {
    parse(sql, &options(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

/// Parses `sql` with the default dialect and returns its only statement.
pub fn parse_one(sql: &str) -> Statement {
    parse_one_in(sql, "Default")
}

pub fn parse_one_in(sql: &str, dialect: &str) -> Statement {
    let mut statements = parse_in(sql, dialect);
    assert_eq!(statements.len(), 1, "Expected one statement in: {sql}");
    statements.remove(0)
}

pub fn tokens_in<'a>(sql: &'a str, dialect: &str) -> Vec<Token<'a>> {
    tokenize(sql, &options(dialect))
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"))
        .collect()
}

/// Asserts that the statements of `sql` reproduce it in every dialect.
pub fn round_trip(sql: &str) {
    for dialect in DIALECTS {
        let text: String = parse_in(sql, dialect)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(text, sql, "Round trip failed in {dialect}");
    }
}
