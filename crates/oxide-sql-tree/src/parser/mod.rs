//! SQL Parser
//!
//! Splits input into statements and groups each one into a tree.

#[allow(clippy::module_inception)]
mod parser;

pub use parser::{decode, Parser};
