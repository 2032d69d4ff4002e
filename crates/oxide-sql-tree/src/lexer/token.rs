//! Token types for the SQL lexer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Span;

/// Hierarchical classification of a lexed token.
///
/// Every kind has at most one parent, so `Literal.Number.Float` is a
/// `Literal.Number` which is a `Literal`. Queries that ask for a broad kind
/// use [`TokenKind::is_a`] and match every specialization below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Layout
    /// Generic text.
    Text,
    /// A run of whitespace, line breaks included.
    Whitespace,
    /// A character no scanning rule accepts.
    Error,

    // Keywords
    /// Any SQL keyword.
    Keyword,
    /// Data manipulation keyword (`SELECT`, `INSERT`, ...).
    Dml,
    /// Data definition keyword (`CREATE`, `DROP`, ...).
    Ddl,
    /// Common table expression keyword (`WITH`).
    Cte,
    /// Ordering keyword (`ASC`, `DESC`).
    Order,

    // Names
    /// An identifier-like name, quoted or bare.
    Name,
    /// A builtin type or function name (`INT`, `DOUBLE PRECISION`, `@@VERSION`).
    Builtin,
    /// A bind parameter marker (`?`, `:name`, `%s`).
    Placeholder,
    /// A session variable (`@name`).
    Variable,

    // Literals
    /// A literal whose content is not tokenized (dollar-quoted blocks).
    Literal,
    /// Any string literal.
    String,
    /// A single-quoted string.
    Single,
    /// A quoted symbol.
    Symbol,
    /// Any number.
    Number,
    /// An integer number.
    Integer,
    /// A decimal or scientific number.
    Float,
    /// A hexadecimal number.
    Hexadecimal,

    // Punctuation and operators
    /// `;`, `:`, `(`, `)`, `[`, `]`, `,`, `.`, `::`.
    Punctuation,
    /// Arithmetic, bitwise and other symbolic operators.
    Operator,
    /// Comparison operators (`=`, `<>`, `>=`, ...).
    Comparison,
    /// `*` in a select list.
    Wildcard,

    // Comments
    /// Any comment.
    Comment,
    /// `-- ...` or `# ...` up to the end of the line.
    SingleLineComment,
    /// `/* ... */`.
    MultiLineComment,

    /// `:=`.
    Assignment,
}

impl TokenKind {
    /// Returns the parent kind in the hierarchy.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Whitespace => Some(Self::Text),
            Self::Dml | Self::Ddl | Self::Cte | Self::Order => Some(Self::Keyword),
            Self::Builtin | Self::Placeholder | Self::Variable => Some(Self::Name),
            Self::String | Self::Number => Some(Self::Literal),
            Self::Single | Self::Symbol => Some(Self::String),
            Self::Integer | Self::Float | Self::Hexadecimal => Some(Self::Number),
            Self::Comparison => Some(Self::Operator),
            Self::SingleLineComment | Self::MultiLineComment => Some(Self::Comment),
            _ => None,
        }
    }

    /// Returns true if this kind is `other` or a specialization of it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns true if this is any kind of keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        self.is_a(Self::Keyword)
    }

    /// Returns the last component of the kind's path, e.g. `Float`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Whitespace => "Whitespace",
            Self::Error => "Error",
            Self::Keyword => "Keyword",
            Self::Dml => "DML",
            Self::Ddl => "DDL",
            Self::Cte => "CTE",
            Self::Order => "Order",
            Self::Name => "Name",
            Self::Builtin => "Builtin",
            Self::Placeholder => "Placeholder",
            Self::Variable => "Variable",
            Self::Literal => "Literal",
            Self::String => "String",
            Self::Single => "Single",
            Self::Symbol => "Symbol",
            Self::Number => "Number",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Hexadecimal => "Hexadecimal",
            Self::Punctuation => "Punctuation",
            Self::Operator => "Operator",
            Self::Comparison => "Comparison",
            Self::Wildcard => "Wildcard",
            Self::Comment => "Comment",
            Self::SingleLineComment => "Single",
            Self::MultiLineComment => "Multiline",
            Self::Assignment => "Assignment",
        }
    }
}

impl fmt::Display for TokenKind {
    /// Writes the dotted path from the root, e.g. `Literal.Number.Float`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent() {
            write!(f, "{parent}.")?;
        }
        f.write_str(self.name())
    }
}

/// A lexed token: its kind, the exact source text and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched text, byte for byte.
    pub text: &'a str,
    /// The location in the source code.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if this is whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// Returns the token as a `(kind, text)` pair.
    #[must_use]
    pub const fn as_pair(&self) -> (TokenKind, &'a str) {
        (self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_a_matches_ancestors() {
        assert!(TokenKind::Float.is_a(TokenKind::Number));
        assert!(TokenKind::Integer.is_a(TokenKind::Number));
        assert!(TokenKind::Float.is_a(TokenKind::Literal));
        assert!(TokenKind::Float.is_a(TokenKind::Float));
        assert!(!TokenKind::Number.is_a(TokenKind::Float));
        assert!(!TokenKind::Name.is_a(TokenKind::Keyword));
    }

    #[test]
    fn test_keyword_family() {
        assert!(TokenKind::Dml.is_keyword());
        assert!(TokenKind::Order.is_keyword());
        assert!(!TokenKind::Builtin.is_keyword());
    }

    #[test]
    fn test_display_path() {
        assert_eq!(TokenKind::Float.to_string(), "Literal.Number.Float");
        assert_eq!(TokenKind::Placeholder.to_string(), "Name.Placeholder");
        assert_eq!(TokenKind::Keyword.to_string(), "Keyword");
        assert_eq!(TokenKind::SingleLineComment.to_string(), "Comment.Single");
    }

    #[test]
    fn test_name_is_last_component() {
        assert_eq!(TokenKind::Dml.name(), "DML");
        assert_eq!(TokenKind::Comparison.name(), "Comparison");
        assert_eq!(TokenKind::Single.name(), "Single");
    }

    #[test]
    fn test_token_helpers() {
        let ws = Token::new(TokenKind::Whitespace, " ", Span::new(6, 7));
        let select = Token::new(TokenKind::Dml, "select", Span::new(0, 6));
        assert!(ws.is_whitespace());
        assert!(!ws.is_keyword());
        assert!(select.is_keyword());
        assert_eq!(select.as_pair(), (TokenKind::Dml, "select"));
    }
}
