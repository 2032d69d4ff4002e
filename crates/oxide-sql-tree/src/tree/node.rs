//! Borrowed node handles and tree navigation.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::statement::NodeData;
use super::{GroupKind, NodeId, Statement};
use crate::lexer::TokenKind;
use crate::splitter::normalize_keyword;

/// A node of a statement tree: a leaf token or a composite.
///
/// Handles are cheap to copy. Two handles are equal when they point at the
/// same node of the same statement.
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t Statement,
    id: NodeId,
}

impl<'t> Node<'t> {
    pub(crate) const fn new(tree: &'t Statement, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns the arena id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the statement this node belongs to.
    #[must_use]
    pub const fn statement(&self) -> &'t Statement {
        self.tree
    }

    /// Returns the composite kind, or `None` for leaves.
    #[must_use]
    pub fn kind(&self) -> Option<GroupKind> {
        self.tree.group_kind(self.id)
    }

    /// Returns the token kind, or `None` for composites.
    #[must_use]
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.tree.token_kind(self.id)
    }

    /// Returns true if this is a composite.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind().is_some()
    }

    /// Returns true if this leaf's kind is `kind` or a specialization of it.
    #[must_use]
    pub fn is_a(&self, kind: TokenKind) -> bool {
        self.token_kind().is_some_and(|k| k.is_a(kind))
    }

    /// Returns true if this is a whitespace leaf.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.token_kind() == Some(TokenKind::Whitespace)
    }

    /// Returns true if this is a keyword leaf of any kind.
    #[must_use]
    pub fn is_keyword(&self) -> bool {
        self.is_a(TokenKind::Keyword)
    }

    /// Returns true if this is a comment leaf or a comment group.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.is_a(TokenKind::Comment) || self.kind() == Some(GroupKind::Comment)
    }

    /// Returns true if this is a keyword leaf whose normalized text is one
    /// of `words`.
    #[must_use]
    pub fn is_keyword_in(&self, words: &[&str]) -> bool {
        self.is_keyword() && {
            let normalized = self.normalized();
            words.iter().any(|w| *w == normalized)
        }
    }

    /// Returns true if this is a punctuation leaf with exactly `text`.
    #[must_use]
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.token_kind() == Some(TokenKind::Punctuation) && self.text() == text
    }

    /// Returns the source text covered by this node.
    #[must_use]
    pub fn text(&self) -> Cow<'t, str> {
        match self.tree.data(self.id) {
            NodeData::Leaf { text, .. } => Cow::Borrowed(text.as_str()),
            NodeData::Group { .. } => Cow::Owned(self.to_string()),
        }
    }

    /// Returns the text with keywords upper cased and their inner
    /// whitespace collapsed. Other nodes return their text unchanged.
    #[must_use]
    pub fn normalized(&self) -> String {
        if self.is_keyword() {
            normalize_keyword(&self.text())
        } else {
            self.text().into_owned()
        }
    }

    /// Returns the length of the covered text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.flatten().map(|leaf| leaf.text().chars().count()).sum()
    }

    /// Returns the direct children. Leaves have none.
    #[must_use]
    pub fn tokens(&self) -> Children<'t> {
        Children {
            tree: self.tree,
            ids: self.tree.children(self.id).iter(),
        }
    }

    /// Returns the direct child at `idx`.
    #[must_use]
    pub fn token(&self, idx: usize) -> Option<Self> {
        self.tree
            .children(self.id)
            .get(idx)
            .map(|&id| Self::new(self.tree, id))
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.children(self.id).len()
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of `child` among the direct children.
    #[must_use]
    pub fn index_of(&self, child: &Self) -> Option<usize> {
        if !ptr::eq(self.tree, child.tree) {
            return None;
        }
        self.tree.children(self.id).iter().position(|&id| id == child.id)
    }

    /// Returns the enclosing composite, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.tree
            .parent_id(self.id)
            .map(|id| Self::new(self.tree, id))
    }

    /// Iterates over the enclosing composites, innermost first.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'t> {
        Ancestors {
            tree: self.tree,
            next: self.tree.parent_id(self.id),
        }
    }

    /// Returns true if this node is a composite of `kind` or sits below one.
    #[must_use]
    pub fn within(&self, kind: GroupKind) -> bool {
        self.kind() == Some(kind) || self.ancestors().any(|a| a.kind() == Some(kind))
    }

    /// Returns true if `other` is the direct parent of this node.
    #[must_use]
    pub fn is_child_of(&self, other: &Self) -> bool {
        self.parent().is_some_and(|parent| parent == *other)
    }

    /// Returns true if `other` is a proper ancestor of this node.
    #[must_use]
    pub fn has_ancestor(&self, other: &Self) -> bool {
        self.ancestors().any(|ancestor| ancestor == *other)
    }

    /// Iterates over the leaves below this node in source order. A leaf
    /// yields itself.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'t> {
        if self.is_group() {
            Flatten {
                tree: self.tree,
                pending: None,
                stack: vec![(self.id, 0)],
            }
        } else {
            Flatten {
                tree: self.tree,
                pending: Some(self.id),
                stack: Vec::new(),
            }
        }
    }

    /// Returns the direct child covering character `offset` of this node's
    /// text. Offsets past the end resolve to the last child.
    #[must_use]
    pub fn token_at_offset(&self, offset: usize) -> Option<Self> {
        let mut end = 0;
        let mut last = None;
        for token in self.tokens() {
            end += token.char_len();
            if offset < end {
                return Some(token);
            }
            last = Some(token);
        }
        last
    }

    /// Returns the leaf covering character `offset` of this node's text.
    /// Offsets past the end resolve to the last leaf.
    #[must_use]
    pub fn leaf_at_offset(&self, offset: usize) -> Option<Self> {
        let mut end = 0;
        let mut last = None;
        for leaf in self.flatten() {
            end += leaf.text().chars().count();
            if offset < end {
                return Some(leaf);
            }
            last = Some(leaf);
        }
        last
    }

    /// Returns the first child matching `pred` at or after `start`.
    fn position_from(&self, start: usize, pred: impl Fn(&Self) -> bool) -> Option<usize> {
        self.tokens().skip(start).position(|t| pred(&t)).map(|i| i + start)
    }

    fn last_dot(&self) -> Option<usize> {
        self.tokens().rposition(|t| t.is_punctuation("."))
    }

    /// Returns the first name-like token among the children from `start`,
    /// descending into identifiers and functions.
    fn first_name(&self, start: usize, reverse: bool, keywords: bool) -> Option<String> {
        let mut candidates: Vec<Self> = self.tokens().skip(start).collect();
        if reverse {
            candidates.reverse();
        }
        for token in candidates {
            match token.token_kind() {
                Some(TokenKind::Name | TokenKind::Wildcard | TokenKind::Symbol) => {
                    return Some(remove_quotes(&token.text()).to_string());
                }
                Some(TokenKind::Keyword) if keywords => {
                    return Some(remove_quotes(&token.text()).to_string());
                }
                None if matches!(
                    token.kind(),
                    Some(GroupKind::Identifier | GroupKind::Function)
                ) =>
                {
                    return token.name();
                }
                _ => {}
            }
        }
        None
    }

    /// Returns the alias: the name after `AS`, or a trailing name separated
    /// by whitespace.
    #[must_use]
    pub fn alias(&self) -> Option<String> {
        let last = self.tokens().filter(|t| !t.is_whitespace()).next_back();
        if last.is_some_and(|t| t.token_kind() == Some(TokenKind::Order)) {
            return None;
        }
        if let Some(idx) = self.position_from(0, |t| t.is_keyword_in(&["AS"])) {
            return self.first_name(idx + 1, false, true);
        }
        if self.len() > 2 && self.tokens().any(|t| t.is_whitespace()) {
            return self.first_name(0, true, false);
        }
        None
    }

    /// Returns true if this node carries an alias.
    #[must_use]
    pub fn has_alias(&self) -> bool {
        self.alias().is_some()
    }

    /// Returns the name without qualifier: the first name after the last
    /// dot, or the first name at all.
    #[must_use]
    pub fn real_name(&self) -> Option<String> {
        let start = self.last_dot().map_or(0, |dot| dot + 1);
        self.first_name(start, false, false)
    }

    /// Returns the qualifier: the name before the last dot.
    #[must_use]
    pub fn parent_name(&self) -> Option<String> {
        let dot = self.last_dot()?;
        let prev = self.tree.prev_index(self.id, dot)?;
        self.token(prev)
            .map(|token| remove_quotes(&token.text()).to_string())
    }

    /// Returns the alias if present, otherwise the real name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.alias().or_else(|| self.real_name())
    }

    /// Iterates over the contents of each `[...]` child, brackets excluded.
    pub fn array_indices(&self) -> impl Iterator<Item = Vec<Self>> + 't {
        self.tokens()
            .filter(|t| t.kind() == Some(GroupKind::SquareBrackets))
            .map(|brackets| {
                let len = brackets.len();
                brackets
                    .tokens()
                    .skip(1)
                    .take(len.saturating_sub(2))
                    .collect()
            })
    }

    /// Returns the arguments of a function call.
    #[must_use]
    pub fn parameters(&self) -> Vec<Self> {
        if self.kind() != Some(GroupKind::Function) {
            return Vec::new();
        }
        let Some(parenthesis) = self.tokens().next_back() else {
            return Vec::new();
        };
        for token in parenthesis.tokens() {
            if token.kind() == Some(GroupKind::IdentifierList) {
                return token.identifiers().collect();
            }
            if matches!(
                token.kind(),
                Some(GroupKind::Function | GroupKind::Identifier)
            ) || token.is_a(TokenKind::Literal)
            {
                return vec![token];
            }
        }
        Vec::new()
    }

    /// Returns the children that are neither whitespace nor commas.
    pub fn identifiers(&self) -> impl Iterator<Item = Self> + 't {
        self.tokens()
            .filter(|t| !t.is_whitespace() && !t.is_punctuation(","))
    }

    /// Returns the children that are composites.
    pub fn sublists(&self) -> impl Iterator<Item = Self> + 't {
        self.tokens().filter(Self::is_group)
    }

    /// Renders the subtree below this node in the indented debug format.
    #[must_use]
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_tree(&mut out, None);
        out
    }

    /// Writes the subtree below this node, one line per node, descending at
    /// most `max_depth` levels when given.
    ///
    /// # Errors
    ///
    /// Returns any error of the underlying writer.
    pub fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        max_depth: Option<usize>,
    ) -> fmt::Result {
        self.write_level(out, max_depth, 0)
    }

    fn write_level<W: fmt::Write>(
        &self,
        out: &mut W,
        max_depth: Option<usize>,
        depth: usize,
    ) -> fmt::Result {
        let indent = " | ".repeat(depth);
        for (idx, token) in self.tokens().enumerate() {
            let preview = token.preview();
            let quote = if preview.starts_with('\'') && preview.ends_with('\'') {
                '"'
            } else {
                '\''
            };
            writeln!(
                out,
                "{indent}{idx:2} {} {quote}{preview}{quote}",
                token.type_name()
            )?;
            if token.is_group() && !matches!(max_depth, Some(max) if depth >= max) {
                token.write_level(out, max_depth, depth + 1)?;
            }
        }
        Ok(())
    }

    /// Returns the composite kind name or the last component of the token
    /// kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.tree.data(self.id) {
            NodeData::Leaf { kind, .. } => kind.name(),
            NodeData::Group { kind, .. } => kind.name(),
        }
    }

    /// Short single-line excerpt of the text.
    fn preview(&self) -> String {
        let text = self.text();
        let raw: String = if text.chars().count() > 7 {
            text.chars().take(6).chain("...".chars()).collect()
        } else {
            text.into_owned()
        };
        let mut preview = String::with_capacity(raw.len());
        let mut in_space = false;
        for c in raw.chars() {
            if c.is_whitespace() {
                if !in_space {
                    preview.push(' ');
                }
                in_space = true;
            } else {
                preview.push(c);
                in_space = false;
            }
        }
        preview
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for leaf in self.flatten() {
            if let NodeData::Leaf { text, .. } = self.tree.data(leaf.id) {
                f.write_str(text)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} {:?} at {}>",
            self.type_name(),
            self.preview(),
            self.id.index()
        )
    }
}

/// Strips one level of `"`, `'` or backtick quoting.
fn remove_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && matches!(first, '"' | '\'' | '`') => {
            &text[1..text.len() - 1]
        }
        _ => text,
    }
}

/// Iterator over the direct children of a node.
#[derive(Debug, Clone)]
pub struct Children<'t> {
    tree: &'t Statement,
    ids: std::slice::Iter<'t, NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| Node::new(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| Node::new(self.tree, id))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

/// Iterator over the enclosing composites of a node.
#[derive(Debug, Clone)]
pub struct Ancestors<'t> {
    tree: &'t Statement,
    next: Option<NodeId>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.parent_id(id);
        Some(Node::new(self.tree, id))
    }
}

impl FusedIterator for Ancestors<'_> {}

/// Depth-first iterator over the leaves below a node. Call
/// [`Node::flatten`] again for a fresh traversal.
#[derive(Debug, Clone)]
pub struct Flatten<'t> {
    tree: &'t Statement,
    pending: Option<NodeId>,
    /// Composite ids with the index of the next child to visit.
    stack: Vec<(NodeId, usize)>,
}

impl<'t> Iterator for Flatten<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(id) = self.pending.take() {
            return Some(Node::new(self.tree, id));
        }
        loop {
            let (group, idx) = *self.stack.last()?;
            let children = self.tree.children(group);
            let Some(&child) = children.get(idx) else {
                self.stack.pop();
                continue;
            };
            if let Some(top) = self.stack.last_mut() {
                top.1 += 1;
            }
            if self.tree.group_kind(child).is_some() {
                self.stack.push((child, 0));
            } else {
                return Some(Node::new(self.tree, child));
            }
        }
    }
}

impl FusedIterator for Flatten<'_> {}
