//! The statement arena.
//!
//! Every node of a statement tree lives in one `Vec` owned by the
//! [`Statement`]. Nodes refer to each other by [`NodeId`]; the root is
//! always the first slot.

use std::fmt;

use super::{Children, Flatten, GroupKind, Node};
use crate::lexer::{Token, TokenKind};

/// Index of a node in its statement's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every statement.
    pub const ROOT: Self = Self(0);

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeData {
    Leaf {
        kind: TokenKind,
        text: String,
    },
    Group {
        kind: GroupKind,
        children: Vec<NodeId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    data: NodeData,
    parent: Option<NodeId>,
}

/// One parsed statement.
///
/// Two statements compare equal when their arenas are identical, which is
/// the case for the same input parsed with the same options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    slots: Vec<Slot>,
}

impl Statement {
    /// Creates an ungrouped statement whose root holds `tokens` in order.
    #[must_use]
    pub fn new<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut slots = vec![Slot {
            data: NodeData::Group {
                kind: GroupKind::Statement,
                children: Vec::new(),
            },
            parent: None,
        }];
        let mut children = Vec::new();
        for token in tokens {
            children.push(NodeId(slots.len()));
            slots.push(Slot {
                data: NodeData::Leaf {
                    kind: token.kind,
                    text: token.text.to_string(),
                },
                parent: Some(NodeId::ROOT),
            });
        }
        if let NodeData::Group { children: root, .. } = &mut slots[0].data {
            *root = children;
        }
        Self { slots }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> Node<'_> {
        Node::new(self, NodeId::ROOT)
    }

    /// Returns a handle for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this statement.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.0 < self.slots.len(), "node id out of range");
        Node::new(self, id)
    }

    /// Returns the number of nodes in the arena, leaves included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the top-level children.
    #[must_use]
    pub fn tokens(&self) -> Children<'_> {
        self.root().tokens()
    }

    /// Returns the top-level child at `idx`.
    #[must_use]
    pub fn token(&self, idx: usize) -> Option<Node<'_>> {
        self.root().token(idx)
    }

    /// Returns the number of top-level children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root().len()
    }

    /// Returns true if the statement has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all leaves in source order.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'_> {
        self.root().flatten()
    }

    /// Returns the top-level child covering character `offset`.
    #[must_use]
    pub fn token_at_offset(&self, offset: usize) -> Option<Node<'_>> {
        self.root().token_at_offset(offset)
    }

    /// Returns the leaf covering character `offset`.
    #[must_use]
    pub fn leaf_at_offset(&self, offset: usize) -> Option<Node<'_>> {
        self.root().leaf_at_offset(offset)
    }

    /// Returns the top-level composites.
    pub fn sublists(&self) -> impl Iterator<Item = Node<'_>> {
        self.root().sublists()
    }

    /// Renders the tree in the indented debug format.
    #[must_use]
    pub fn tree_string(&self) -> String {
        self.root().tree_string()
    }

    /// Returns the statement type: the first DML or DDL keyword, upper
    /// cased. A leading `WITH` is skipped over to the statement it
    /// introduces.
    #[must_use]
    pub fn statement_type(&self) -> Option<String> {
        let mut tokens = self
            .tokens()
            .filter(|t| !t.is_whitespace() && !t.is_comment());
        let first = tokens.next()?;
        match first.token_kind()? {
            TokenKind::Dml | TokenKind::Ddl => Some(first.normalized()),
            TokenKind::Cte => tokens
                .find(|t| {
                    t.token_kind()
                        .is_some_and(|k| matches!(k, TokenKind::Dml | TokenKind::Ddl))
                })
                .map(|t| t.normalized()),
            _ => None,
        }
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.slots[id.0].data
    }

    pub(crate) fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    /// Children of `id`; empty for leaves.
    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.slots[id.0].data {
            NodeData::Group { children, .. } => children,
            NodeData::Leaf { .. } => &[],
        }
    }

    pub(crate) fn group_kind(&self, id: NodeId) -> Option<GroupKind> {
        match &self.slots[id.0].data {
            NodeData::Group { kind, .. } => Some(*kind),
            NodeData::Leaf { .. } => None,
        }
    }

    pub(crate) fn token_kind(&self, id: NodeId) -> Option<TokenKind> {
        match &self.slots[id.0].data {
            NodeData::Leaf { kind, .. } => Some(*kind),
            NodeData::Group { .. } => None,
        }
    }

    /// Retags a leaf. Composites are left alone.
    pub(crate) fn set_token_kind(&mut self, id: NodeId, new_kind: TokenKind) {
        if let NodeData::Leaf { kind, .. } = &mut self.slots[id.0].data {
            *kind = new_kind;
        }
    }

    /// Index of the first non-whitespace child of `list` after `idx`.
    pub(crate) fn next_index(&self, list: NodeId, idx: usize) -> Option<usize> {
        let children = self.children(list);
        (idx + 1..children.len()).find(|&i| !self.is_whitespace(children[i]))
    }

    /// Index of the last non-whitespace child of `list` before `idx`.
    pub(crate) fn prev_index(&self, list: NodeId, idx: usize) -> Option<usize> {
        let children = self.children(list);
        (0..idx).rev().find(|&i| !self.is_whitespace(children[i]))
    }

    pub(crate) fn is_whitespace(&self, id: NodeId) -> bool {
        self.token_kind(id) == Some(TokenKind::Whitespace)
    }

    /// Groups the children `start..=end` of `list` under a new composite of
    /// `kind` placed at `start`, and returns it.
    ///
    /// With `extend`, a child at `start` that already is a composite of
    /// `kind` absorbs the following children instead.
    pub(crate) fn group_tokens(
        &mut self,
        list: NodeId,
        kind: GroupKind,
        start: usize,
        end: usize,
        extend: bool,
    ) -> NodeId {
        let first = self.children(list)[start];
        if extend && self.group_kind(first) == Some(kind) {
            let moved = self.drain_children(list, start + 1..=end);
            self.adopt(first, moved);
            return first;
        }
        let moved = self.drain_children(list, start..=end);
        let group = NodeId(self.slots.len());
        self.slots.push(Slot {
            data: NodeData::Group {
                kind,
                children: Vec::new(),
            },
            parent: Some(list),
        });
        self.adopt(group, moved);
        if let NodeData::Group { children, .. } = &mut self.slots[list.0].data {
            children.insert(start, group);
        }
        group
    }

    fn drain_children(
        &mut self,
        list: NodeId,
        range: std::ops::RangeInclusive<usize>,
    ) -> Vec<NodeId> {
        match &mut self.slots[list.0].data {
            NodeData::Group { children, .. } => children.drain(range).collect(),
            NodeData::Leaf { .. } => Vec::new(),
        }
    }

    /// Appends `moved` to the children of `group` and re-parents them.
    fn adopt(&mut self, group: NodeId, moved: Vec<NodeId>) {
        for &id in &moved {
            self.slots[id.0].parent = Some(group);
        }
        if let NodeData::Group { children, .. } = &mut self.slots[group.0].data {
            children.extend(moved);
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}
