//! Delimiter matching for brackets, parentheses and `CASE ... END`.

use super::level_ids;
use crate::tree::{GroupKind, Node, NodeId, Statement};

/// An opening and closing token pair and the composite they produce.
pub(super) struct Delimiters {
    kind: GroupKind,
    open: fn(&Node<'_>) -> bool,
    close: fn(&Node<'_>) -> bool,
}

pub(super) const BRACKETS: Delimiters = Delimiters {
    kind: GroupKind::SquareBrackets,
    open: |t| t.is_punctuation("["),
    close: |t| t.is_punctuation("]"),
};

pub(super) const PARENTHESES: Delimiters = Delimiters {
    kind: GroupKind::Parenthesis,
    open: |t| t.is_punctuation("("),
    close: |t| t.is_punctuation(")"),
};

pub(super) const CASE: Delimiters = Delimiters {
    kind: GroupKind::Case,
    open: |t| t.is_keyword_in(&["CASE"]),
    close: |t| t.is_keyword_in(&["END"]),
};

/// Groups balanced delimiter pairs, innermost first. Unmatched closers are
/// left as they are; unmatched openers stay ungrouped.
pub(super) fn group_matching(tree: &mut Statement, list: NodeId, delimiters: &Delimiters) {
    for child in level_ids(tree, list) {
        if tree
            .group_kind(child)
            .is_some_and(|kind| kind != delimiters.kind)
        {
            group_matching(tree, child, delimiters);
        }
    }

    let mut opens: Vec<usize> = Vec::new();
    let mut idx = 0;
    while idx < tree.children(list).len() {
        let token = tree.node(tree.children(list)[idx]);
        if (delimiters.open)(&token) {
            opens.push(idx);
        } else if (delimiters.close)(&token) {
            if let Some(start) = opens.pop() {
                tree.group_tokens(list, delimiters.kind, start, idx, false);
                idx = start;
            }
        }
        idx += 1;
    }
}
