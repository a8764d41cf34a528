// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing key events through a key context.
//!
//! The inspector listens for key-down on an editor element instead of the
//! document, so Escape only ends the session while the editor has focus.
//!
//! Run:
//! - `cargo run -p understory_demos --example key_context`

use understory_dom_inspector::{Inspector, InspectorOptions};
use understory_dom_tree::MemoryEvent;
use understory_dom_tree::dispatch::key_down;
use understory_demos::{demo_page, init_logging};

fn main() {
    init_logging();
    let (doc, page) = demo_page();

    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .key_context(page.editor)
            .on_key_down(|event: &MemoryEvent| {
                println!("key: {}", event.key.as_deref().unwrap_or("?"));
            }),
    )
    .expect("a document is configured");

    let delivered = key_down(&mut inspector, page.body, &MemoryEvent::escape());
    println!(
        "Escape on body delivered: {delivered}, inspecting: {}",
        inspector.is_inspecting()
    );

    let delivered = key_down(&mut inspector, page.textarea, &MemoryEvent::escape());
    println!(
        "Escape in editor delivered: {delivered}, inspecting: {}",
        inspector.is_inspecting()
    );
}
