//! Parse options.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dialect::{self, RuleTable};
use crate::error::{ConfigurationError, Result};

/// Name of the dialect used when none is given.
pub const DEFAULT_DIALECT: &str = "Default";

/// Options controlling how SQL text is scanned.
///
/// ```rust
/// use oxide_sql_tree::ParseOptions;
///
/// let options = ParseOptions::new()
///     .dialect("TransactSQL")
///     .additional_keywords(["BACON"]);
/// assert!(options.rule_table().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Name or alias of a registered dialect, matched case-insensitively.
    pub sql_dialect: String,

    /// Words classified as keywords on top of the dialect table.
    pub additional_keywords: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sql_dialect: DEFAULT_DIALECT.to_string(),
            additional_keywords: Vec::new(),
        }
    }
}

impl ParseOptions {
    /// Creates options for the default dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dialect.
    #[must_use]
    pub fn dialect(mut self, name: impl Into<String>) -> Self {
        self.sql_dialect = name.into();
        self
    }

    /// Sets the additional keywords.
    #[must_use]
    pub fn additional_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Reads options from a dynamic JSON value.
    ///
    /// Missing keys take their defaults and a `null` keyword list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidOptions`] if `value` is not an
    /// object or has an unknown key, [`ConfigurationError::UnknownDialect`]
    /// if the dialect is not a registered name, and
    /// [`ConfigurationError::InvalidKeywords`] if the keywords are not a
    /// list of strings.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ConfigurationError::InvalidOptions(format!(
                "expected an object, got {value}"
            )));
        };

        let mut options = Self::default();
        for (key, field) in map {
            match key.as_str() {
                "sql_dialect" => {
                    let Value::String(name) = field else {
                        return Err(ConfigurationError::UnknownDialect(field.to_string()));
                    };
                    options.sql_dialect.clone_from(name);
                }
                "additional_keywords" => {
                    options.additional_keywords = keyword_list(field)?;
                }
                other => {
                    return Err(ConfigurationError::InvalidOptions(format!(
                        "unknown option '{other}'"
                    )));
                }
            }
        }

        dialect::lookup(&options.sql_dialect)?;
        Ok(options)
    }

    /// Validates the options and builds the rule table for one parse call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownDialect`] if the dialect is not
    /// registered.
    pub fn rule_table(&self) -> Result<RuleTable> {
        let dialect = dialect::lookup(&self.sql_dialect)?;
        let table = RuleTable::new(dialect).with_additional_keywords(&self.additional_keywords);
        debug!(
            dialect = dialect.name(),
            additional_keywords = table.additional_len(),
            "Built rule table"
        );
        Ok(table)
    }
}

fn keyword_list(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(word) => Ok(word.clone()),
                other => Err(ConfigurationError::InvalidKeywords(format!(
                    "expected a string, got {other}"
                ))),
            })
            .collect(),
        other => Err(ConfigurationError::InvalidKeywords(format!(
            "expected a list of strings, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default() {
        let options = ParseOptions::default();
        assert_eq!(options.sql_dialect, "Default");
        assert!(options.additional_keywords.is_empty());
        assert_eq!(options.rule_table().unwrap().dialect().name(), "Default");
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new().dialect("tsql").additional_keywords(["a", "b"]);
        let table = options.rule_table().unwrap();
        assert_eq!(table.dialect().name(), "TransactSQL");
        assert_eq!(table.additional_len(), 2);
    }

    #[test]
    fn test_rule_table_unknown_dialect() {
        let err = ParseOptions::new().dialect("Oracle").rule_table().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownDialect("Oracle".into()));
    }

    #[test]
    fn test_from_json() {
        let options = ParseOptions::from_json(&json!({
            "sql_dialect": "TransactSQL",
            "additional_keywords": ["BACON"],
        }))
        .unwrap();
        assert_eq!(options.sql_dialect, "TransactSQL");
        assert_eq!(options.additional_keywords, vec!["BACON".to_string()]);

        let empty = ParseOptions::from_json(&json!({})).unwrap();
        assert_eq!(empty, ParseOptions::default());

        let null = ParseOptions::from_json(&json!({ "additional_keywords": null })).unwrap();
        assert!(null.additional_keywords.is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            ParseOptions::from_json(&json!([1])),
            Err(ConfigurationError::InvalidOptions(_))
        ));
        assert!(matches!(
            ParseOptions::from_json(&json!({ "reindent": true })),
            Err(ConfigurationError::InvalidOptions(_))
        ));
        assert!(matches!(
            ParseOptions::from_json(&json!({ "sql_dialect": "Oracle" })),
            Err(ConfigurationError::UnknownDialect(_))
        ));
        assert!(matches!(
            ParseOptions::from_json(&json!({ "sql_dialect": 3 })),
            Err(ConfigurationError::UnknownDialect(_))
        ));
        assert!(matches!(
            ParseOptions::from_json(&json!({ "additional_keywords": { "a": 1 } })),
            Err(ConfigurationError::InvalidKeywords(_))
        ));
        assert!(matches!(
            ParseOptions::from_json(&json!({ "additional_keywords": ["a", 1] })),
            Err(ConfigurationError::InvalidKeywords(_))
        ));
    }

    #[test]
    fn test_serde() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"sql_dialect":"tsql"}"#).unwrap();
        assert_eq!(options.sql_dialect, "tsql");
        assert!(serde_json::from_str::<ParseOptions>(r#"{"bogus":1}"#).is_err());
        let json = serde_json::to_value(ParseOptions::default()).unwrap();
        assert_eq!(json, json!({ "sql_dialect": "Default", "additional_keywords": [] }));
    }
}
