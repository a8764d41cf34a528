// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-style event delivery for [`MemoryDocument`] inspectors.
//!
//! A browser only calls an inspector's handlers while its listeners are
//! registered. These helpers play the browser: each one looks at the listener
//! registrations on the inspector's document and forwards the event only if a
//! matching listener would fire. Events bubble from their target through its
//! ancestors up to the document.
//!
//! Every helper returns `true` if the event was delivered.

use understory_dom_inspector::{EventKind, Inspector};

use crate::adapter::MemoryEvent;
use crate::document::{Listener, MemoryDocument, NodeId};

/// Returns `true` if a `kind` event targeting `target` reaches a listener.
#[must_use]
pub fn would_deliver(doc: &MemoryDocument, target: NodeId, kind: EventKind) -> bool {
    let mut cursor = Some(target);
    while let Some(node) = cursor {
        if doc.is_listening(Listener::Element(node), kind) {
            return true;
        }
        cursor = doc.parent(node);
    }
    doc.is_listening(Listener::Document, kind)
}

fn delivers(inspector: &Inspector<MemoryDocument>, target: NodeId, kind: EventKind) -> bool {
    inspector
        .document()
        .is_some_and(|doc| would_deliver(doc, target, kind))
}

/// Moves the pointer onto `element`.
pub fn pointer_enter(inspector: &mut Inspector<MemoryDocument>, element: NodeId) -> bool {
    let delivered = delivers(inspector, element, EventKind::PointerEnter);
    if delivered {
        inspector.handle_pointer_enter(element);
    }
    delivered
}

/// Moves the pointer off `element`.
pub fn pointer_leave(inspector: &mut Inspector<MemoryDocument>, element: NodeId) -> bool {
    let delivered = delivers(inspector, element, EventKind::PointerLeave);
    if delivered {
        inspector.handle_pointer_leave(&element);
    }
    delivered
}

/// Clicks `element` with `event`.
pub fn click(
    inspector: &mut Inspector<MemoryDocument>,
    element: NodeId,
    event: &mut MemoryEvent,
) -> bool {
    let delivered = delivers(inspector, element, EventKind::Click);
    if delivered {
        inspector.handle_click(element, event);
    }
    delivered
}

/// Presses a key while `focus` has focus.
pub fn key_down(
    inspector: &mut Inspector<MemoryDocument>,
    focus: NodeId,
    event: &MemoryEvent,
) -> bool {
    let delivered = delivers(inspector, focus, EventKind::KeyDown);
    if delivered {
        inspector.handle_key_down(event);
    }
    delivered
}

/// Moves the pointer from `from` (if any) onto `to`, as a browser does on
/// `mouseout` followed by `mouseover`.
pub fn hover(
    inspector: &mut Inspector<MemoryDocument>,
    from: Option<NodeId>,
    to: NodeId,
) -> bool {
    if let Some(from) = from {
        pointer_leave(inspector, from);
    }
    pointer_enter(inspector, to)
}
