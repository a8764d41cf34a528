// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed element tree.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use understory_dom_inspector::{EventKind, StyleProperty};

use crate::selector::{Selector, SelectorError};

/// Handle of an element in a [`MemoryDocument`].
///
/// Handles are only meaningful for the document that created them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creation-order index of the element.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Attributes of an element to insert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementDesc {
    /// Tag name, in any case.
    pub tag: String,
    /// `id` attribute; empty when absent.
    pub id: String,
    /// Raw `class` attribute; empty when absent.
    pub class: String,
}

impl ElementDesc {
    /// An element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the raw `class` attribute.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// Where a listener is registered in a [`MemoryDocument`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// On the document itself.
    Document,
    /// On an element used as key context.
    Element(NodeId),
}

#[derive(Clone, Debug)]
struct Node {
    desc: ElementDesc,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A headless document: an element tree plus the listener registrations and
/// inline styles an inspector applies to it.
///
/// Elements are appended, never removed. Top-level elements (usually a single
/// `html`) are children of the document itself.
///
/// Methods taking a [`NodeId`] panic if it was not created by this document.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    pub(crate) listeners: HashMap<(Listener, EventKind), usize>,
    pub(crate) styles: HashMap<(NodeId, StyleProperty), String>,
    pub(crate) refused: HashSet<EventKind>,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level element.
    pub fn append_root(&mut self, desc: ElementDesc) -> NodeId {
        let id = self.push(desc, None);
        self.roots.push(id);
        id
    }

    /// Appends `desc` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, desc: ElementDesc) -> NodeId {
        let id = self.push(desc, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, desc: ElementDesc, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            desc,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attributes of `node`.
    #[must_use]
    pub fn element(&self, node: NodeId) -> &ElementDesc {
        &self.nodes[node.0].desc
    }

    /// Mutable attributes of `node`.
    pub fn element_mut(&mut self, node: NodeId) -> &mut ElementDesc {
        &mut self.nodes[node.0].desc
    }

    /// Parent element of `node`; `None` for top-level elements.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children of `node`, in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Top-level elements, in order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// `node` and its siblings, in order.
    pub(crate) fn siblings(&self, node: NodeId) -> &[NodeId] {
        match self.parent(node) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    /// One-based position of `node` among its siblings.
    #[must_use]
    pub fn sibling_position(&self, node: NodeId) -> usize {
        self.siblings(node)
            .iter()
            .position(|n| *n == node)
            .map_or(0, |at| at + 1)
    }

    /// All elements in document (pre-)order.
    #[must_use]
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector: Selector = selector.parse()?;
        Ok(self
            .document_order()
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect())
    }

    /// Number of `kind` listeners registered on `listener`.
    #[must_use]
    pub fn listener_count(&self, listener: Listener, kind: EventKind) -> usize {
        self.listeners.get(&(listener, kind)).copied().unwrap_or(0)
    }

    /// Returns `true` if at least one `kind` listener is registered on `listener`.
    #[must_use]
    pub fn is_listening(&self, listener: Listener, kind: EventKind) -> bool {
        self.listener_count(listener, kind) > 0
    }

    /// Total number of registered listeners, over all targets and kinds.
    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.listeners.values().sum()
    }

    /// Makes later subscriptions of `kind` fail, the way a host that cannot
    /// observe an event type would.
    pub fn refuse_listeners(&mut self, kind: EventKind) {
        self.refused.insert(kind);
    }

    /// Inline value of `property` on `node`, if set.
    #[must_use]
    pub fn style(&self, node: NodeId, property: StyleProperty) -> Option<&str> {
        self.styles.get(&(node, property)).map(String::as_str)
    }
}
