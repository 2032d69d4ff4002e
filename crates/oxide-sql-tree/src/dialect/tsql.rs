//! Transact-SQL: `@variables`, `@@builtins` and `N'...'` strings on top of
//! the default rules.

use std::sync::LazyLock;

use super::keywords::{self, KeywordMap};
use super::rules::{standard_rules, Rule};
use super::Dialect;
use crate::lexer::TokenKind;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    standard_rules(vec![
        Rule::emit(r"@@\w+", TokenKind::Builtin),
        Rule::emit(r"@\w+", TokenKind::Variable),
        Rule::emit(r"N'(?:''|[^'])*'", TokenKind::Single),
    ])
});

static KEYWORDS: LazyLock<KeywordMap> =
    LazyLock::new(|| keywords::build(&[keywords::COMMON, keywords::TRANSACT_SQL]));

/// The Microsoft SQL Server dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactSqlDialect;

impl TransactSqlDialect {
    /// Creates a new Transact-SQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for TransactSqlDialect {
    fn name(&self) -> &'static str {
        "TransactSQL"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["tsql", "mssql"]
    }

    fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    fn keywords(&self) -> &'static KeywordMap {
        &KEYWORDS
    }
}
