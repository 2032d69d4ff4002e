//! Kinds of composite nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structural role of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// The root of one statement.
    Statement,
    /// A name, possibly qualified, indexed, cast, ordered or aliased.
    Identifier,
    /// Comma separated items.
    IdentifierList,
    /// `( ... )`.
    Parenthesis,
    /// `[ ... ]`.
    SquareBrackets,
    /// A name applied to a parenthesized argument list.
    Function,
    /// `WHERE` up to the end of the clause.
    Where,
    /// Two operands around a comparison operator.
    Comparison,
    /// `CASE ... END`.
    Case,
    /// Adjacent comments.
    Comment,
    /// Two operands around an arithmetic operator.
    Operation,
    /// `target := value`.
    Assignment,
}

impl GroupKind {
    /// Returns the kind's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Statement => "Statement",
            Self::Identifier => "Identifier",
            Self::IdentifierList => "IdentifierList",
            Self::Parenthesis => "Parenthesis",
            Self::SquareBrackets => "SquareBrackets",
            Self::Function => "Function",
            Self::Where => "Where",
            Self::Comparison => "Comparison",
            Self::Case => "Case",
            Self::Comment => "Comment",
            Self::Operation => "Operation",
            Self::Assignment => "Assignment",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
