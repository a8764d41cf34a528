// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ElementTree`] and [`DocumentAdapter`] for [`MemoryDocument`].

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use tracing::{trace, warn};
use understory_css_path::ElementTree;
use understory_dom_inspector::{
    ConfigurationError, DocumentAdapter, EventKind, InputEvent, ListenerTarget, StyleProperty,
};

use crate::document::{Listener, MemoryDocument, NodeId};

impl ElementTree for MemoryDocument {
    type Element = NodeId;

    fn tag_name(&self, element: &NodeId) -> Cow<'_, str> {
        Cow::Borrowed(&self.element(*element).tag)
    }

    fn id(&self, element: &NodeId) -> Cow<'_, str> {
        Cow::Borrowed(&self.element(*element).id)
    }

    fn class_name(&self, element: &NodeId) -> Cow<'_, str> {
        Cow::Borrowed(&self.element(*element).class)
    }

    fn parent_element(&self, element: &NodeId) -> Option<NodeId> {
        self.parent(*element)
    }

    fn previous_element_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let siblings = self.siblings(*element);
        let at = siblings.iter().position(|n| n == element)?;
        at.checked_sub(1).map(|prev| siblings[prev])
    }

    fn next_element_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let siblings = self.siblings(*element);
        let at = siblings.iter().position(|n| n == element)?;
        siblings.get(at + 1).copied()
    }

    fn count_matches(&self, selector: &str) -> usize {
        match self.query_selector_all(selector) {
            Ok(matches) => matches.len(),
            Err(err) => {
                warn!(selector, %err, "unparseable selector");
                0
            }
        }
    }
}

/// An input event delivered to a [`MemoryDocument`] inspector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEvent {
    /// Key name (as in `KeyboardEvent.key`) for key events.
    pub key: Option<String>,
    /// Set once the inspector suppressed the default action.
    pub default_prevented: bool,
}

impl MemoryEvent {
    /// A pointer event.
    #[must_use]
    pub fn pointer() -> Self {
        Self::default()
    }

    /// A key event for `key`.
    #[must_use]
    pub fn key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            default_prevented: false,
        }
    }

    /// An Escape key event.
    #[must_use]
    pub fn escape() -> Self {
        Self::key("Escape")
    }
}

impl InputEvent for MemoryEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn is_escape(&self) -> bool {
        self.key.as_deref() == Some("Escape")
    }
}

fn listener(target: ListenerTarget<'_, NodeId>) -> Listener {
    match target {
        ListenerTarget::Document => Listener::Document,
        ListenerTarget::KeyContext(node) => Listener::Element(*node),
    }
}

impl DocumentAdapter for MemoryDocument {
    type KeyContext = NodeId;
    type Event = MemoryEvent;

    fn subscribe(
        &mut self,
        target: ListenerTarget<'_, NodeId>,
        kind: EventKind,
    ) -> Result<(), ConfigurationError> {
        if self.refused.contains(&kind) {
            return Err(ConfigurationError::ListenerRejected {
                event: kind.dom_name(),
            });
        }
        let key = (listener(target), kind);
        *self.listeners.entry(key).or_insert(0) += 1;
        trace!(?key, "listener added");
        Ok(())
    }

    fn unsubscribe(&mut self, target: ListenerTarget<'_, NodeId>, kind: EventKind) {
        let key = (listener(target), kind);
        if let Some(count) = self.listeners.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.listeners.remove(&key);
            }
            trace!(?key, "listener removed");
        }
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: &str) {
        if value.is_empty() {
            self.styles.remove(&(*element, property));
        } else {
            self.styles
                .insert((*element, property), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementDesc;

    #[test]
    fn sibling_lookups_cover_top_level_elements() {
        let mut doc = MemoryDocument::new();
        let a = doc.append_root(ElementDesc::new("a"));
        let b = doc.append_root(ElementDesc::new("b"));
        assert_eq!(doc.previous_element_sibling(&a), None);
        assert_eq!(doc.next_element_sibling(&a), Some(b));
        assert_eq!(doc.previous_element_sibling(&b), Some(a));
        assert_eq!(doc.parent_element(&b), None);
    }

    #[test]
    fn unparseable_selector_counts_zero() {
        let mut doc = MemoryDocument::new();
        doc.append_root(ElementDesc::new("div"));
        assert_eq!(doc.count_matches("div"), 1);
        assert_eq!(doc.count_matches("div >"), 0);
    }

    #[test]
    fn listener_counts_balance() {
        let mut doc = MemoryDocument::new();
        let el = doc.append_root(ElementDesc::new("div"));
        doc.subscribe(ListenerTarget::KeyContext(&el), EventKind::KeyDown)
            .unwrap();
        doc.subscribe(ListenerTarget::KeyContext(&el), EventKind::KeyDown)
            .unwrap();
        assert_eq!(doc.listener_count(Listener::Element(el), EventKind::KeyDown), 2);
        doc.unsubscribe(ListenerTarget::KeyContext(&el), EventKind::KeyDown);
        doc.unsubscribe(ListenerTarget::KeyContext(&el), EventKind::KeyDown);
        doc.unsubscribe(ListenerTarget::KeyContext(&el), EventKind::KeyDown);
        assert_eq!(doc.total_listeners(), 0);
    }

    #[test]
    fn refused_kinds_are_not_registered() {
        let mut doc = MemoryDocument::new();
        doc.refuse_listeners(EventKind::Click);
        assert_eq!(
            doc.subscribe(ListenerTarget::Document, EventKind::Click),
            Err(ConfigurationError::ListenerRejected { event: "click" })
        );
        assert_eq!(doc.total_listeners(), 0);
        assert!(
            doc.subscribe(ListenerTarget::Document, EventKind::KeyDown)
                .is_ok()
        );
    }

    #[test]
    fn empty_style_value_removes_property() {
        let mut doc = MemoryDocument::new();
        let el = doc.append_root(ElementDesc::new("div"));
        doc.set_style(&el, StyleProperty::Outline, "1px solid red");
        assert_eq!(doc.style(el, StyleProperty::Outline), Some("1px solid red"));
        doc.set_style(&el, StyleProperty::Outline, "");
        assert_eq!(doc.style(el, StyleProperty::Outline), None);
    }

    #[test]
    fn escape_is_recognised_by_key_name() {
        assert!(MemoryEvent::escape().is_escape());
        assert!(!MemoryEvent::key("Enter").is_escape());
        assert!(!MemoryEvent::pointer().is_escape());
    }
}
