//! SQL dialect support.
//!
//! A dialect is an ordered list of scanning rules plus a keyword table.
//! Dialects are registered by name; a [`RuleTable`] pairs one with any
//! keywords added by the caller and is what the lexer scans with.

mod ansi;
mod keywords;
mod rules;
mod tsql;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use ansi::AnsiDialect;
pub use keywords::KeywordMap;
pub use rules::{Guard, Rule, RuleAction};
pub use tsql::TransactSqlDialect;

use crate::error::{ConfigurationError, Result};
use crate::lexer::TokenKind;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: fmt::Debug + Sync {
    /// Returns the name the dialect is registered under.
    fn name(&self) -> &'static str;

    /// Returns alternative names accepted by [`lookup`].
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns the scanning rules in precedence order.
    fn rules(&self) -> &'static [Rule];

    /// Returns the keyword table.
    fn keywords(&self) -> &'static KeywordMap;

    /// Classifies an upper-cased word, or returns `None` for plain names.
    fn classify(&self, upper: &str) -> Option<TokenKind> {
        self.keywords().get(upper).copied()
    }
}

static REGISTRY: &[&dyn Dialect] = &[&AnsiDialect, &TransactSqlDialect];

/// Returns every registered dialect.
pub fn registered() -> impl Iterator<Item = &'static dyn Dialect> {
    REGISTRY.iter().copied()
}

/// Finds a dialect by name or alias, ignoring case.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownDialect`] if nothing is registered
/// under `name`.
pub fn lookup(name: &str) -> Result<&'static dyn Dialect> {
    registered()
        .find(|dialect| {
            dialect.name().eq_ignore_ascii_case(name)
                || dialect
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| ConfigurationError::UnknownDialect(name.to_string()))
}

/// A dialect together with caller-supplied keywords.
///
/// Additional keywords take precedence over the dialect table and classify
/// as [`TokenKind::Keyword`]. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct RuleTable {
    dialect: &'static dyn Dialect,
    additional: Arc<HashMap<String, TokenKind>>,
}

impl RuleTable {
    /// Creates a table for `dialect` with no additional keywords.
    #[must_use]
    pub fn new(dialect: &'static dyn Dialect) -> Self {
        Self {
            dialect,
            additional: Arc::new(HashMap::new()),
        }
    }

    /// Adds keywords on top of the dialect table.
    #[must_use]
    pub fn with_additional_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let additional = Arc::make_mut(&mut self.additional);
        for keyword in keywords {
            additional.insert(keyword.as_ref().to_uppercase(), TokenKind::Keyword);
        }
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// Returns the scanning rules.
    #[must_use]
    pub fn rules(&self) -> &'static [Rule] {
        self.dialect.rules()
    }

    /// Returns the number of caller-supplied keywords.
    #[must_use]
    pub fn additional_len(&self) -> usize {
        self.additional.len()
    }

    /// Classifies a scanned word: additional keywords first, then the
    /// dialect table, otherwise a name.
    #[must_use]
    pub fn classify(&self, word: &str) -> TokenKind {
        let upper = word.to_uppercase();
        self.additional
            .get(&upper)
            .copied()
            .or_else(|| self.dialect.classify(&upper))
            .unwrap_or(TokenKind::Name)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(&AnsiDialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_alias() {
        assert_eq!(lookup("Default").map(|d| d.name()), Ok("Default"));
        assert_eq!(lookup("default").map(|d| d.name()), Ok("Default"));
        assert_eq!(lookup("TransactSQL").map(|d| d.name()), Ok("TransactSQL"));
        assert_eq!(lookup("TSQL").map(|d| d.name()), Ok("TransactSQL"));
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("Oracle").unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownDialect("Oracle".into()));
    }

    #[test]
    fn test_registered_names() {
        let names: Vec<_> = registered().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Default", "TransactSQL"]);
    }

    #[test]
    fn test_classify() {
        let table = RuleTable::default();
        assert_eq!(table.classify("select"), TokenKind::Dml);
        assert_eq!(table.classify("Asc"), TokenKind::Order);
        assert_eq!(table.classify("foo"), TokenKind::Name);
    }

    #[test]
    fn test_additional_keywords_take_precedence() {
        let table = RuleTable::default().with_additional_keywords(["bacon", "Select"]);
        assert_eq!(table.additional_len(), 2);
        assert_eq!(table.classify("BACON"), TokenKind::Keyword);
        assert_eq!(table.classify("select"), TokenKind::Keyword);
        assert_eq!(RuleTable::default().classify("bacon"), TokenKind::Name);
    }
}
