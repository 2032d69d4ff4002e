//! Grouping passes that are not plain infix operators.

use super::level_ids;
use crate::lexer::TokenKind;
use crate::tree::{GroupKind, NodeId, Statement};

/// Keywords that end a `WHERE` clause.
const WHERE_CLOSERS: &[&str] = &[
    "ORDER",
    "GROUP",
    "LIMIT",
    "UNION",
    "UNION ALL",
    "EXCEPT",
    "HAVING",
    "RETURNING",
    "INTO",
];

/// Recurses into every composite child of `list` whose kind is not `skip`.
fn descend(
    tree: &mut Statement,
    list: NodeId,
    skip: Option<GroupKind>,
    pass: fn(&mut Statement, NodeId),
) {
    for child in level_ids(tree, list) {
        if tree.group_kind(child).is_some_and(|kind| Some(kind) != skip) {
            pass(tree, child);
        }
    }
}

fn is_comment_leaf(tree: &Statement, id: NodeId) -> bool {
    tree.token_kind(id).is_some_and(|kind| kind.is_a(TokenKind::Comment))
}

/// Comments followed by more tokens, with the whitespace between them.
pub(super) fn group_comments(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Comment), group_comments);

    let mut idx = 0;
    while idx < tree.children(list).len() {
        let children = tree.children(list);
        if is_comment_leaf(tree, children[idx]) {
            let end = (idx + 1..children.len()).find(|&i| {
                !is_comment_leaf(tree, children[i]) && !tree.is_whitespace(children[i])
            });
            let Some(end) = end else {
                break;
            };
            let last = tree.prev_index(list, end).unwrap_or(idx);
            tree.group_tokens(list, GroupKind::Comment, idx, last, false);
        }
        idx += 1;
    }
}

/// A name immediately followed by a parenthesis becomes a call.
pub(super) fn group_functions(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Function), group_functions);

    let level = tree.node(list);
    let has_create = level.tokens().any(|t| {
        t.token_kind() == Some(TokenKind::Ddl) && t.normalized().starts_with("CREATE")
    });
    if has_create && level.tokens().any(|t| t.is_keyword_in(&["TABLE"])) {
        return;
    }

    let mut idx = 0;
    while idx < tree.children(list).len() {
        let id = tree.children(list)[idx];
        let is_name = tree.token_kind(id).is_some_and(|kind| kind.is_a(TokenKind::Name));
        let call = tree
            .children(list)
            .get(idx + 1)
            .is_some_and(|&next| tree.group_kind(next) == Some(GroupKind::Parenthesis));
        if is_name && call {
            tree.group_tokens(list, GroupKind::Function, idx, idx + 1, false);
        }
        idx += 1;
    }
}

/// End of the groupable area of a level: brackets keep their closer
/// outside any clause.
fn groupable_len(tree: &Statement, list: NodeId) -> usize {
    let len = tree.children(list).len();
    match tree.group_kind(list) {
        Some(GroupKind::Parenthesis | GroupKind::SquareBrackets) => len.saturating_sub(1),
        _ => len,
    }
}

/// `WHERE` up to the next clause keyword.
pub(super) fn group_where(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Where), group_where);

    let mut idx = 0;
    while idx < groupable_len(tree, list) {
        let level = tree.node(list);
        let is_where = level.token(idx).is_some_and(|t| t.is_keyword_in(&["WHERE"]));
        if is_where {
            let closer = level
                .tokens()
                .skip(idx + 1)
                .position(|t| t.is_keyword_in(WHERE_CLOSERS))
                .map(|offset| idx + offset);
            let end = closer.unwrap_or_else(|| groupable_len(tree, list).saturating_sub(1));
            tree.group_tokens(list, GroupKind::Where, idx, end.max(idx), false);
        }
        idx += 1;
    }
}

/// Every bare name becomes an identifier.
pub(super) fn group_identifiers(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Identifier), group_identifiers);

    for idx in 0..tree.children(list).len() {
        let id = tree.children(list)[idx];
        if tree.token_kind(id) == Some(TokenKind::Name) {
            tree.group_tokens(list, GroupKind::Identifier, idx, idx, false);
        }
    }
}

/// `ASC`/`DESC` join the identifier or number they follow.
pub(super) fn group_order(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Identifier), group_order);

    let mut idx = 0;
    while idx < tree.children(list).len() {
        let id = tree.children(list)[idx];
        if tree.token_kind(id) == Some(TokenKind::Order) {
            if let Some(prev) = tree.prev_index(list, idx) {
                let prev_id = tree.children(list)[prev];
                let orderable = tree.group_kind(prev_id) == Some(GroupKind::Identifier)
                    || tree
                        .token_kind(prev_id)
                        .is_some_and(|kind| kind.is_a(TokenKind::Number));
                if orderable {
                    tree.group_tokens(list, GroupKind::Identifier, prev, idx, true);
                    idx = prev;
                }
            }
        }
        idx += 1;
    }
}

/// An expression followed by an identifier takes it as its alias.
pub(super) fn group_aliased(tree: &mut Statement, list: NodeId) {
    descend(tree, list, Some(GroupKind::Identifier), group_aliased);

    let mut idx = 0;
    while idx < tree.children(list).len() {
        let id = tree.children(list)[idx];
        let aliasable = matches!(
            tree.group_kind(id),
            Some(
                GroupKind::Parenthesis
                    | GroupKind::Function
                    | GroupKind::Case
                    | GroupKind::Identifier
                    | GroupKind::Operation
            )
        ) || tree.token_kind(id).is_some_and(|kind| kind.is_a(TokenKind::Number));
        if aliasable {
            if let Some(next) = tree.next_index(list, idx) {
                let next_id = tree.children(list)[next];
                if tree.group_kind(next_id) == Some(GroupKind::Identifier) {
                    tree.group_tokens(list, GroupKind::Identifier, idx, next, true);
                    // the merged node may now alias the one before it
                    idx = tree.prev_index(list, idx).unwrap_or(idx);
                    continue;
                }
            }
        }
        idx += 1;
    }
}
