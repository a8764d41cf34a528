// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability surface an inspector needs from its host document.
//!
//! An [`Inspector`](crate::Inspector) never touches a concrete DOM. The host
//! implements [`DocumentAdapter`] for its document type: element lookups come
//! from the [`ElementTree`] supertrait, listener (un)registration and inline
//! styling from this module. The host is also responsible for forwarding the
//! events it receives to the inspector's `handle_*` methods.

use understory_css_path::ElementTree;

use crate::error::ConfigurationError;

/// Kinds of events an inspection session listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// The pointer entered an element (`mouseover`).
    PointerEnter,
    /// The pointer left an element (`mouseout`).
    PointerLeave,
    /// An element was clicked.
    Click,
    /// A key was pressed.
    KeyDown,
}

impl EventKind {
    /// Event kinds observed on the document itself.
    pub const POINTER: [Self; 3] = [Self::PointerEnter, Self::PointerLeave, Self::Click];

    /// The DOM event type name a browser host registers for this kind.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::PointerEnter => "mouseover",
            Self::PointerLeave => "mouseout",
            Self::Click => "click",
            Self::KeyDown => "keydown",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug)]
pub enum ListenerTarget<'a, K> {
    /// The observed document.
    Document,
    /// A separately configured key context (for example a focused frame or
    /// an editor element).
    KeyContext(&'a K),
}

impl<K> Copy for ListenerTarget<'_, K> {}

impl<K> Clone for ListenerTarget<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

/// Inline style properties an inspector writes while highlighting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    /// The `outline` property.
    Outline,
    /// The `cursor` property.
    Cursor,
}

impl StyleProperty {
    /// The CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Cursor => "cursor",
        }
    }
}

/// Minimal view of a host input event.
pub trait InputEvent {
    /// Suppresses the host's default action, where the host supports it.
    fn prevent_default(&mut self) {}

    /// Returns `true` if this is a key event for the Escape key.
    fn is_escape(&self) -> bool;
}

/// A document an inspector can observe.
pub trait DocumentAdapter: ElementTree {
    /// Context key events may be observed on instead of the document.
    type KeyContext;

    /// The host's event payload, passed through to callbacks untouched.
    type Event: InputEvent;

    /// The document observed when none is configured.
    ///
    /// Hosts with an ambient document (a browser window) return it here; the
    /// default has none.
    fn ambient() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }

    /// Starts delivering `kind` events observed on `target`.
    ///
    /// Returns [`ConfigurationError::ListenerRejected`] if no listener could be
    /// attached; the inspector then stays idle.
    fn subscribe(
        &mut self,
        target: ListenerTarget<'_, Self::KeyContext>,
        kind: EventKind,
    ) -> Result<(), ConfigurationError>;

    /// Stops delivering `kind` events observed on `target`.
    ///
    /// Unsubscribing a listener that is not registered is a no-op.
    fn unsubscribe(&mut self, target: ListenerTarget<'_, Self::KeyContext>, kind: EventKind);

    /// Sets an inline style property on `element`; an empty `value` removes it.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);
}
