// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspection sessions driven against a headless document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use understory_dom_inspector::{
    ConfigurationError, EventKind, Inspector, InspectorOptions, SessionState, StyleProperty,
};
use understory_dom_tree::dispatch::{click, hover, key_down, pointer_enter, pointer_leave};
use understory_dom_tree::{ElementDesc, Listener, MemoryDocument, MemoryEvent, NodeId};

struct Page {
    doc: MemoryDocument,
    body: NodeId,
    items: [NodeId; 3],
    editor: NodeId,
}

/// `html > body > (div#app > ul > li.item * 3, div.editor > p)`.
fn page() -> Page {
    let mut doc = MemoryDocument::new();
    let html = doc.append_root(ElementDesc::new("html"));
    let body = doc.append_child(html, ElementDesc::new("body"));
    let app = doc.append_child(body, ElementDesc::new("div").with_id("app"));
    let list = doc.append_child(app, ElementDesc::new("ul"));
    let items = [
        doc.append_child(list, ElementDesc::new("li").with_class("item")),
        doc.append_child(list, ElementDesc::new("li").with_class("item")),
        doc.append_child(list, ElementDesc::new("li").with_class("item")),
    ];
    let editor = doc.append_child(body, ElementDesc::new("div").with_class("editor"));
    doc.append_child(editor, ElementDesc::new("p"));
    Page {
        doc,
        body,
        items,
        editor,
    }
}

fn doc_of(inspector: &Inspector<MemoryDocument>) -> &MemoryDocument {
    inspector.document().unwrap()
}

#[test_log::test]
fn click_reports_path_and_element() {
    let Page { doc, items, .. } = page();
    let seen: Rc<RefCell<Vec<(String, NodeId, bool)>>> = Rc::default();
    let sink = seen.clone();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc).on_click(
        move |data| {
            sink.borrow_mut()
                .push((data.path.to_owned(), *data.element, data.event.default_prevented));
        },
    ))
    .unwrap();

    let mut event = MemoryEvent::pointer();
    assert!(click(&mut inspector, items[1], &mut event));

    assert!(event.default_prevented);
    assert_eq!(
        *seen.borrow(),
        [("div#app ul li.item:nth-child(2)".to_owned(), items[1], true)]
    );
    assert_eq!(inspector.path(), Some("div#app ul li.item:nth-child(2)"));
    assert_eq!(inspector.element(), Some(&items[1]));
    assert!(inspector.is_inspecting());
}

#[test_log::test]
fn default_click_handler_only_records() {
    let Page { doc, items, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();
    click(&mut inspector, items[0], &mut MemoryEvent::pointer());
    assert_eq!(inspector.path(), Some("div#app ul li.item:nth-child(1)"));
}

#[test_log::test]
fn path_options_reach_the_builder() {
    let Page { doc, items, .. } = page();
    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .full_path(true)
            .use_nth_child(false),
    )
    .unwrap();
    click(&mut inspector, items[2], &mut MemoryEvent::pointer());
    assert_eq!(inspector.path(), Some("html body div#app ul li.item"));
}

#[test_log::test]
fn start_subscribes_once_and_stop_unsubscribes_everything() {
    let Page { doc, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();
    assert_eq!(inspector.state(), SessionState::Inspecting);

    inspector.start().unwrap();
    let doc = doc_of(&inspector);
    for kind in EventKind::POINTER {
        assert_eq!(doc.listener_count(Listener::Document, kind), 1);
    }
    assert_eq!(doc.listener_count(Listener::Document, EventKind::KeyDown), 1);
    assert_eq!(doc.total_listeners(), 4);

    inspector.stop();
    assert_eq!(inspector.state(), SessionState::Idle);
    assert_eq!(doc_of(&inspector).total_listeners(), 0);
}

#[test_log::test]
fn stopping_twice_runs_on_stop_once() {
    let Page { doc, .. } = page();
    let stops = Rc::new(Cell::new(0));
    let counter = stops.clone();
    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .on_stop(move || counter.set(counter.get() + 1)),
    )
    .unwrap();

    inspector.stop();
    inspector.stop();
    assert_eq!(stops.get(), 1);
    assert_eq!(doc_of(&inspector).total_listeners(), 0);
}

#[test_log::test]
fn start_without_a_document_is_an_error() {
    let mut inspector = Inspector::<MemoryDocument>::new(InspectorOptions::new()).unwrap();
    assert!(!inspector.is_inspecting());
    assert_eq!(inspector.start(), Err(ConfigurationError::DocumentRequired));
    assert!(inspector.document().is_none());
}

#[test_log::test]
fn reinitialise_resets_the_session() {
    let Page { doc, items, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc.clone())).unwrap();
    click(&mut inspector, items[0], &mut MemoryEvent::pointer());
    assert!(inspector.path().is_some());

    inspector
        .reinitialise(InspectorOptions::new().document(doc).start_on_initialise(false))
        .unwrap();
    assert_eq!(inspector.path(), None);
    assert_eq!(inspector.element(), None);
    assert!(!inspector.is_inspecting());
    assert_eq!(doc_of(&inspector).total_listeners(), 0);

    // Idle sessions ignore events, even when called directly.
    inspector.handle_click(items[0], &mut MemoryEvent::pointer());
    assert_eq!(inspector.path(), None);

    inspector.start().unwrap();
    assert_eq!(doc_of(&inspector).total_listeners(), 4);
}

#[test_log::test]
fn reinitialise_detaches_the_previous_document() {
    let Page { doc, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();
    let stops = Rc::new(Cell::new(0));
    let counter = stops.clone();
    inspector
        .reinitialise(
            InspectorOptions::new()
                .document(MemoryDocument::new())
                .on_stop(move || counter.set(counter.get() + 1)),
        )
        .unwrap();
    // The old session's stop callback was the default, so nothing counted.
    assert_eq!(stops.get(), 0);
    assert!(inspector.is_inspecting());
    assert!(doc_of(&inspector).is_empty());
}

#[test_log::test]
fn escape_stops_and_removes_listeners() {
    let Page { doc, body, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();
    assert!(key_down(&mut inspector, body, &MemoryEvent::escape()));
    assert_eq!(inspector.state(), SessionState::Idle);
    assert_eq!(doc_of(&inspector).total_listeners(), 0);
    assert!(!key_down(&mut inspector, body, &MemoryEvent::escape()));
}

#[test_log::test]
fn escape_is_ignored_when_disabled() {
    let Page { doc, body, .. } = page();
    let mut inspector =
        Inspector::new(InspectorOptions::new().document(doc).stop_on_escape(false)).unwrap();
    key_down(&mut inspector, body, &MemoryEvent::escape());
    assert!(inspector.is_inspecting());
}

#[test_log::test]
fn key_down_callback_sees_every_key() {
    let Page { doc, body, .. } = page();
    let keys: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = keys.clone();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc).on_key_down(
        move |event: &MemoryEvent| sink.borrow_mut().push(event.key.clone().unwrap_or_default()),
    ))
    .unwrap();

    key_down(&mut inspector, body, &MemoryEvent::key("a"));
    key_down(&mut inspector, body, &MemoryEvent::escape());
    assert_eq!(*keys.borrow(), ["a", "Escape"]);
    assert!(!inspector.is_inspecting());
}

#[test_log::test]
fn key_context_receives_key_listener() {
    let Page {
        doc, editor, body, ..
    } = page();
    let mut inspector =
        Inspector::new(InspectorOptions::new().document(doc).key_context(editor)).unwrap();

    let doc = doc_of(&inspector);
    assert!(doc.is_listening(Listener::Element(editor), EventKind::KeyDown));
    assert!(!doc.is_listening(Listener::Document, EventKind::KeyDown));
    assert!(doc.is_listening(Listener::Document, EventKind::Click));

    assert!(!key_down(&mut inspector, body, &MemoryEvent::escape()));
    assert!(inspector.is_inspecting());

    inspector.stop();
    assert_eq!(doc_of(&inspector).total_listeners(), 0);
}

#[test_log::test]
fn stop_on_click_ends_the_session() {
    let Page { doc, items, .. } = page();
    let stops = Rc::new(Cell::new(0));
    let counter = stops.clone();
    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .stop_on_click(true)
            .on_stop(move || counter.set(counter.get() + 1)),
    )
    .unwrap();

    click(&mut inspector, items[0], &mut MemoryEvent::pointer());
    assert!(!inspector.is_inspecting());
    assert_eq!(stops.get(), 1);
    assert_eq!(inspector.path(), Some("div#app ul li.item:nth-child(1)"));
    assert!(!click(&mut inspector, items[1], &mut MemoryEvent::pointer()));
    assert_eq!(inspector.element(), Some(&items[0]));
}

#[test_log::test]
fn hover_highlights_and_leave_clears() {
    let Page { doc, items, .. } = page();
    let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();

    pointer_enter(&mut inspector, items[0]);
    let doc = doc_of(&inspector);
    assert_eq!(doc.style(items[0], StyleProperty::Outline), Some("1px solid red"));
    assert_eq!(doc.style(items[0], StyleProperty::Cursor), Some("pointer"));
    assert_eq!(inspector.last_hovered(), Some(&items[0]));

    hover(&mut inspector, Some(items[0]), items[1]);
    let doc = doc_of(&inspector);
    assert_eq!(doc.style(items[0], StyleProperty::Outline), None);
    assert_eq!(doc.style(items[0], StyleProperty::Cursor), None);
    assert_eq!(doc.style(items[1], StyleProperty::Outline), Some("1px solid red"));

    pointer_leave(&mut inspector, items[1]);
    assert_eq!(doc_of(&inspector).style(items[1], StyleProperty::Outline), None);
}

#[test_log::test]
fn custom_highlight_and_cleanup_on_stop() {
    let Page { doc, items, .. } = page();
    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .outline("2px dashed blue")
            .cursor("crosshair"),
    )
    .unwrap();

    pointer_enter(&mut inspector, items[2]);
    let doc = doc_of(&inspector);
    assert_eq!(doc.style(items[2], StyleProperty::Outline), Some("2px dashed blue"));
    assert_eq!(doc.style(items[2], StyleProperty::Cursor), Some("crosshair"));

    inspector.stop();
    let doc = doc_of(&inspector);
    assert_eq!(doc.style(items[2], StyleProperty::Outline), None);
    assert_eq!(doc.style(items[2], StyleProperty::Cursor), None);
}

#[test_log::test]
fn merged_options_keep_nested_defaults() {
    let Page { doc, items, .. } = page();
    let base = InspectorOptions::new().document(doc).full_path(true);
    let overlay = InspectorOptions::new().outline("3px solid green");
    let mut inspector = Inspector::new(base.merge(overlay)).unwrap();

    let options = inspector.path_options();
    assert!(options.full_path);
    assert!(options.use_nth_child);

    pointer_enter(&mut inspector, items[0]);
    let doc = doc_of(&inspector);
    assert_eq!(doc.style(items[0], StyleProperty::Outline), Some("3px solid green"));
    assert_eq!(doc.style(items[0], StyleProperty::Cursor), Some("pointer"));
}

#[test_log::test]
fn rejected_listener_keeps_the_session_idle() {
    let Page { mut doc, items, .. } = page();
    doc.refuse_listeners(EventKind::KeyDown);

    let mut inspector = Inspector::default();
    let result = inspector.initialise(InspectorOptions::new().document(doc));
    assert_eq!(
        result,
        Err(ConfigurationError::ListenerRejected { event: "keydown" })
    );
    assert_eq!(inspector.state(), SessionState::Idle);
    assert_eq!(doc_of(&inspector).total_listeners(), 0);

    assert!(!click(&mut inspector, items[0], &mut MemoryEvent::pointer()));
    assert_eq!(
        inspector.start(),
        Err(ConfigurationError::ListenerRejected { event: "keydown" })
    );
    assert!(!inspector.is_inspecting());
}
