//! The default dialect: ANSI SQL with the common vendor extensions the
//! scanner tolerates.

use std::sync::LazyLock;

use super::keywords::{self, KeywordMap};
use super::rules::{standard_rules, Rule};
use super::Dialect;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| standard_rules(Vec::new()));

static KEYWORDS: LazyLock<KeywordMap> = LazyLock::new(|| keywords::build(&[keywords::COMMON]));

/// The default SQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiDialect;

impl AnsiDialect {
    /// Creates a new default dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for AnsiDialect {
    fn name(&self) -> &'static str {
        "Default"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ansi", "generic"]
    }

    fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    fn keywords(&self) -> &'static KeywordMap {
        &KEYWORDS
    }
}
