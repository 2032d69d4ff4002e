//! Statement trees.
//!
//! A [`Statement`] owns all of its nodes in an arena. Leaves are lexed
//! tokens; composites group a contiguous run of children under a
//! [`GroupKind`]. The concatenated leaf texts of any node reproduce the
//! source it covers.

mod kind;
mod node;
mod statement;

pub use kind::GroupKind;
pub use node::{Ancestors, Children, Flatten, Node};
pub use statement::{NodeId, Statement};
