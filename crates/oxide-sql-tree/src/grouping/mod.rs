//! Grouping engine.
//!
//! Turns the flat token list of a [`Statement`] into a tree by running a
//! fixed sequence of passes. Each pass rewrites one level at a time and
//! descends into composites of other kinds, so later passes see the groups
//! built by earlier ones. Running the passes again on a grouped statement
//! changes nothing.

mod infix;
mod matching;
mod passes;

use tracing::trace;

use crate::lexer::TokenKind;
use crate::tree::{Node, NodeId, Statement};

type Pass = fn(&mut Statement, NodeId);

/// The passes in the order they run.
const PASSES: &[(&str, Pass)] = &[
    ("comments", passes::group_comments),
    ("brackets", |t, l| matching::group_matching(t, l, &matching::BRACKETS)),
    ("parentheses", |t, l| matching::group_matching(t, l, &matching::PARENTHESES)),
    ("case", |t, l| matching::group_matching(t, l, &matching::CASE)),
    ("functions", passes::group_functions),
    ("where", passes::group_where),
    ("period", |t, l| infix::group(t, l, &infix::PERIOD)),
    ("arrays", |t, l| infix::group(t, l, &infix::ARRAYS)),
    ("identifiers", passes::group_identifiers),
    ("typecasts", |t, l| infix::group(t, l, &infix::TYPECAST)),
    ("order", passes::group_order),
    ("operators", |t, l| infix::group(t, l, &infix::OPERATOR)),
    ("as", |t, l| infix::group(t, l, &infix::AS)),
    ("aliased", passes::group_aliased),
    ("assignments", |t, l| infix::group(t, l, &infix::ASSIGNMENT)),
    ("comparisons", |t, l| infix::group(t, l, &infix::COMPARISON)),
    ("lists", |t, l| infix::group(t, l, &infix::LIST)),
];

/// Groups a statement in place.
pub fn group(statement: &mut Statement) {
    for (name, pass) in PASSES {
        pass(statement, NodeId::ROOT);
        trace!(pass = *name, nodes = statement.node_count(), "grouping pass done");
    }
}

/// Snapshot of the children of `list`, for passes that recurse while the
/// level is being rewritten.
fn level_ids(tree: &Statement, list: NodeId) -> Vec<NodeId> {
    tree.children(list).to_vec()
}

/// Leaves that can stand as a value: literals and names. Builtin type names
/// are not values, so `x int, y int` is not a list.
fn is_value_leaf(node: &Node<'_>) -> bool {
    node.is_a(TokenKind::Literal)
        || (node.is_a(TokenKind::Name) && node.token_kind() != Some(TokenKind::Builtin))
}
