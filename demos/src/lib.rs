// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Understory DOM inspector demos.

use tracing_subscriber::EnvFilter;
use understory_dom_tree::{ElementDesc, MemoryDocument, NodeId};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`
/// for the inspector crates.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_dom_inspector=debug,info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Named elements of [`demo_page`].
#[derive(Copy, Clone, Debug)]
pub struct DemoPage {
    /// `body`.
    pub body: NodeId,
    /// The `nav` links, in order.
    pub links: [NodeId; 3],
    /// The `li.todo` entries, in order.
    pub todos: [NodeId; 3],
    /// A `div.editor` used as key context.
    pub editor: NodeId,
    /// The text area inside the editor.
    pub textarea: NodeId,
}

/// A small page with a navigation bar, a to-do list and an editor.
pub fn demo_page() -> (MemoryDocument, DemoPage) {
    let mut doc = MemoryDocument::new();
    let html = doc.append_root(ElementDesc::new("html"));
    doc.append_child(html, ElementDesc::new("head"));
    let body = doc.append_child(html, ElementDesc::new("body"));

    let nav = doc.append_child(body, ElementDesc::new("nav").with_class("top bar"));
    let links = [
        doc.append_child(nav, ElementDesc::new("a")),
        doc.append_child(nav, ElementDesc::new("a")),
        doc.append_child(nav, ElementDesc::new("a").with_class("active")),
    ];

    let app = doc.append_child(body, ElementDesc::new("div").with_id("app"));
    let list = doc.append_child(app, ElementDesc::new("ul"));
    let todos = [
        doc.append_child(list, ElementDesc::new("li").with_class("todo")),
        doc.append_child(list, ElementDesc::new("li").with_class("todo done")),
        doc.append_child(list, ElementDesc::new("li").with_class("todo")),
    ];

    let editor = doc.append_child(body, ElementDesc::new("div").with_class("editor"));
    let textarea = doc.append_child(editor, ElementDesc::new("textarea"));

    (
        doc,
        DemoPage {
            body,
            links,
            todos,
            editor,
            textarea,
        },
    )
}
