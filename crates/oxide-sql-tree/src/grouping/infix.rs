//! Infix grouping: an operator token joined with its neighbours.
//!
//! Each pass is an [`InfixRule`]. The scan walks the children of a level,
//! skipping whitespace; when an operator has a valid token before and after
//! it, the rule decides the range to group and the scan resumes right after
//! the start of the new group, so chains like `a.b.c` or `a, b, c` collapse
//! into one composite.

use super::{is_value_leaf, level_ids};
use crate::lexer::TokenKind;
use crate::tree::{GroupKind, Node, NodeId, Statement};

/// Positions of an operator and its neighbours among the children of the
/// level being grouped.
#[derive(Debug, Clone, Copy)]
pub(super) struct Match {
    prev: usize,
    op: usize,
    next: Option<usize>,
}

pub(super) struct InfixRule {
    kind: GroupKind,
    is_operator: fn(&Node<'_>) -> bool,
    valid_prev: fn(&Node<'_>) -> bool,
    valid_next: fn(Option<&Node<'_>>) -> bool,
    /// Returns the inclusive range to group.
    span: fn(&mut Statement, NodeId, Match) -> (usize, usize),
    extend: bool,
    /// The operator must directly follow the previous token.
    adjacent: bool,
}

/// Applies `rule` to every level below `list`, innermost first, then to
/// `list` itself. Composites of the rule's own kind are not entered.
pub(super) fn group(tree: &mut Statement, list: NodeId, rule: &InfixRule) {
    for child in level_ids(tree, list) {
        if tree.group_kind(child).is_some_and(|kind| kind != rule.kind) {
            group(tree, child, rule);
        }
    }

    let mut idx = 0;
    let mut prev: Option<usize> = None;
    while idx < tree.children(list).len() {
        let id = tree.children(list)[idx];
        if tree.is_whitespace(id) {
            idx += 1;
            continue;
        }
        if (rule.is_operator)(&tree.node(id)) {
            if let Some(found) = matched(tree, list, rule, prev, idx) {
                let (from, to) = (rule.span)(tree, list, found);
                tree.group_tokens(list, rule.kind, from, to, rule.extend);
                prev = Some(from);
                idx = from + 1;
                continue;
            }
        }
        prev = Some(idx);
        idx += 1;
    }
}

fn matched(
    tree: &Statement,
    list: NodeId,
    rule: &InfixRule,
    prev: Option<usize>,
    op: usize,
) -> Option<Match> {
    let prev = prev?;
    if rule.adjacent && prev + 1 != op {
        return None;
    }
    let children = tree.children(list);
    let next = tree.next_index(list, op);
    let valid = (rule.valid_prev)(&tree.node(children[prev]))
        && (rule.valid_next)(next.map(|n| tree.node(children[n])).as_ref());
    valid.then_some(Match { prev, op, next })
}

fn any_next(next: Option<&Node<'_>>) -> bool {
    next.is_some()
}

fn always(_: Option<&Node<'_>>) -> bool {
    true
}

fn any_token(_: &Node<'_>) -> bool {
    true
}

fn through_next(_: &mut Statement, _: NodeId, m: Match) -> (usize, usize) {
    (m.prev, m.next.unwrap_or(m.op))
}

fn through_op(_: &mut Statement, _: NodeId, m: Match) -> (usize, usize) {
    (m.prev, m.op)
}

fn is_exact(node: &Node<'_>, kind: TokenKind) -> bool {
    node.token_kind() == Some(kind)
}

fn is_group_of(node: &Node<'_>, kinds: &[GroupKind]) -> bool {
    node.kind().is_some_and(|kind| kinds.contains(&kind))
}

// Dotted names: `schema.table`, `t.*`, `a."b"`.

pub(super) const PERIOD: InfixRule = InfixRule {
    kind: GroupKind::Identifier,
    is_operator: |t| t.is_punctuation("."),
    valid_prev: |t| {
        is_group_of(t, &[GroupKind::SquareBrackets, GroupKind::Identifier])
            || is_exact(t, TokenKind::Name)
    },
    valid_next: always,
    span: period_span,
    extend: true,
    adjacent: false,
};

fn period_span(tree: &mut Statement, list: NodeId, m: Match) -> (usize, usize) {
    let follows = m.next.is_some_and(|n| {
        let next = tree.node(tree.children(list)[n]);
        is_group_of(&next, &[GroupKind::SquareBrackets, GroupKind::Function])
            || is_exact(&next, TokenKind::Name)
            || is_exact(&next, TokenKind::Wildcard)
    });
    if follows {
        through_next(tree, list, m)
    } else {
        through_op(tree, list, m)
    }
}

// Array indices: `col[1]`, `f()[1][2]`.

pub(super) const ARRAYS: InfixRule = InfixRule {
    kind: GroupKind::Identifier,
    is_operator: |t| t.kind() == Some(GroupKind::SquareBrackets),
    valid_prev: |t| {
        is_group_of(
            t,
            &[
                GroupKind::SquareBrackets,
                GroupKind::Identifier,
                GroupKind::Function,
            ],
        ) || is_exact(t, TokenKind::Name)
    },
    valid_next: always,
    span: through_op,
    extend: true,
    adjacent: true,
};

// Arithmetic: `a + b`, `2 * 3`.

fn is_operand(t: &Node<'_>) -> bool {
    is_group_of(
        t,
        &[
            GroupKind::SquareBrackets,
            GroupKind::Parenthesis,
            GroupKind::Function,
            GroupKind::Identifier,
            GroupKind::Operation,
        ],
    ) || is_value_leaf(t)
}

pub(super) const OPERATOR: InfixRule = InfixRule {
    kind: GroupKind::Operation,
    is_operator: |t| is_exact(t, TokenKind::Operator) || is_exact(t, TokenKind::Wildcard),
    valid_prev: is_operand,
    valid_next: |t| t.is_some_and(is_operand),
    span: operation_span,
    extend: false,
    adjacent: false,
};

fn operation_span(tree: &mut Statement, list: NodeId, m: Match) -> (usize, usize) {
    let op = tree.children(list)[m.op];
    tree.set_token_kind(op, TokenKind::Operator);
    through_next(tree, list, m)
}

// Casts: `x::int`.

pub(super) const TYPECAST: InfixRule = InfixRule {
    kind: GroupKind::Identifier,
    is_operator: |t| t.is_punctuation("::"),
    valid_prev: any_token,
    valid_next: any_next,
    span: through_next,
    extend: true,
    adjacent: false,
};

// Aliases: `x AS y`.

pub(super) const AS: InfixRule = InfixRule {
    kind: GroupKind::Identifier,
    is_operator: |t| t.is_keyword_in(&["AS"]),
    valid_prev: |t| t.is_keyword_in(&["NULL"]) || !t.is_keyword(),
    valid_next: |t| {
        t.is_some_and(|t| !is_exact(t, TokenKind::Dml) && !is_exact(t, TokenKind::Ddl))
    },
    span: through_next,
    extend: true,
    adjacent: false,
};

// Assignments: `x := expr`, up to the end of the statement.

pub(super) const ASSIGNMENT: InfixRule = InfixRule {
    kind: GroupKind::Assignment,
    is_operator: |t| is_exact(t, TokenKind::Assignment),
    valid_prev: any_token,
    valid_next: any_next,
    span: assignment_span,
    extend: true,
    adjacent: false,
};

fn assignment_span(tree: &mut Statement, list: NodeId, m: Match) -> (usize, usize) {
    let next = m.next.unwrap_or(m.op);
    let children = tree.children(list);
    let end = (next + 1..children.len())
        .find(|&i| tree.node(children[i]).is_punctuation(";"))
        .map_or(next, |semicolon| semicolon - 1);
    (m.prev, end)
}

// Comparisons: `a = b`, `x <> (select ...)`.

fn is_comparable(t: &Node<'_>) -> bool {
    is_group_of(
        t,
        &[
            GroupKind::Parenthesis,
            GroupKind::Function,
            GroupKind::Identifier,
            GroupKind::Operation,
        ],
    ) || is_value_leaf(t)
        || t.is_keyword_in(&["NULL"])
}

pub(super) const COMPARISON: InfixRule = InfixRule {
    kind: GroupKind::Comparison,
    is_operator: |t| is_exact(t, TokenKind::Comparison),
    valid_prev: is_comparable,
    valid_next: |t| t.is_some_and(is_comparable),
    span: through_next,
    extend: false,
    adjacent: false,
};

// Lists: `a, b, c`.

fn is_list_item(t: &Node<'_>) -> bool {
    is_group_of(
        t,
        &[
            GroupKind::Function,
            GroupKind::Case,
            GroupKind::Identifier,
            GroupKind::Comparison,
            GroupKind::IdentifierList,
            GroupKind::Operation,
        ],
    ) || is_value_leaf(t)
        || t.is_keyword()
        || t.is_a(TokenKind::Comment)
        || is_exact(t, TokenKind::Wildcard)
}

pub(super) const LIST: InfixRule = InfixRule {
    kind: GroupKind::IdentifierList,
    is_operator: |t| t.is_punctuation(","),
    valid_prev: is_list_item,
    valid_next: |t| t.is_some_and(is_list_item),
    span: through_next,
    extend: true,
    adjacent: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::RuleTable;
    use crate::lexer::Lexer;

    fn flat(sql: &str) -> Statement {
        Statement::new(Lexer::new(sql, RuleTable::default()))
    }

    fn kinds(tree: &Statement) -> Vec<Option<GroupKind>> {
        tree.tokens().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_period_chain_extends() {
        let mut tree = flat("a.b.c");
        group(&mut tree, NodeId::ROOT, &PERIOD);
        assert_eq!(kinds(&tree), vec![Some(GroupKind::Identifier)]);
        assert_eq!(tree.token(0).unwrap().len(), 5);
    }

    #[test]
    fn test_period_without_name_keeps_dot() {
        let mut tree = flat("a. from");
        group(&mut tree, NodeId::ROOT, &PERIOD);
        let ident = tree.token(0).unwrap();
        assert_eq!(ident.kind(), Some(GroupKind::Identifier));
        assert_eq!(ident.to_string(), "a.");
    }

    #[test]
    fn test_operator_retags_wildcard() {
        let mut tree = flat("2 * 3");
        group(&mut tree, NodeId::ROOT, &OPERATOR);
        let op = tree.token(0).unwrap();
        assert_eq!(op.kind(), Some(GroupKind::Operation));
        assert_eq!(op.token(2).unwrap().token_kind(), Some(TokenKind::Operator));
    }

    #[test]
    fn test_operator_needs_operands() {
        let mut tree = flat("select *");
        group(&mut tree, NodeId::ROOT, &OPERATOR);
        assert_eq!(kinds(&tree), vec![None, None, None]);
        assert_eq!(tree.token(2).unwrap().token_kind(), Some(TokenKind::Wildcard));
    }

    #[test]
    fn test_comparison_does_not_chain() {
        let mut tree = flat("1 = 2 = 3");
        group(&mut tree, NodeId::ROOT, &COMPARISON);
        assert_eq!(tree.token(0).unwrap().kind(), Some(GroupKind::Comparison));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_list_extends() {
        let mut tree = flat("1, 2, 3");
        group(&mut tree, NodeId::ROOT, &LIST);
        assert_eq!(kinds(&tree), vec![Some(GroupKind::IdentifierList)]);
        assert_eq!(tree.token(0).unwrap().identifiers().count(), 3);
    }

    #[test]
    fn test_assignment_stops_before_semicolon() {
        let mut tree = flat("x := 1 + 2;");
        group(&mut tree, NodeId::ROOT, &ASSIGNMENT);
        let assignment = tree.token(0).unwrap();
        assert_eq!(assignment.kind(), Some(GroupKind::Assignment));
        assert_eq!(assignment.to_string(), "x := 1 + 2");
        assert_eq!(tree.token(1).unwrap().text(), ";");
    }
}
