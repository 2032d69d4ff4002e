//! SQL Lexer/Tokenizer
//!
//! This module turns SQL text into a flat stream of classified tokens using
//! the scanning rules of a [`RuleTable`](crate::dialect::RuleTable).

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
