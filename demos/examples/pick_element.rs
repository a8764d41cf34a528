// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking elements with an inspector.
//!
//! Hover over a few elements of a headless page, click some of them and print
//! the selector paths the inspector computes.
//!
//! Run:
//! - `cargo run -p understory_demos --example pick_element`
//! - `RUST_LOG=trace cargo run -p understory_demos --example pick_element`

use std::cell::RefCell;
use std::rc::Rc;

use understory_dom_inspector::{Inspector, InspectorOptions};
use understory_dom_tree::MemoryEvent;
use understory_dom_tree::dispatch::{click, hover};
use understory_demos::{demo_page, init_logging};

fn main() {
    init_logging();
    let (doc, page) = demo_page();

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = picked.clone();
    let mut inspector = Inspector::new(
        InspectorOptions::new()
            .document(doc)
            .on_click(move |data| sink.borrow_mut().push(data.path.to_owned()))
            .on_stop(|| println!("inspection stopped")),
    )
    .expect("a document is configured");

    let mut previous = None;
    for element in [page.links[0], page.links[2], page.todos[1], page.textarea] {
        hover(&mut inspector, previous, element);
        previous = Some(element);
        click(&mut inspector, element, &mut MemoryEvent::pointer());
    }

    for path in picked.borrow().iter() {
        println!("picked: {path}");
    }

    // Paths without positional qualifiers are shorter but can be ambiguous.
    inspector
        .reinitialise(
            InspectorOptions::new()
                .document(demo_page().0)
                .use_nth_child(false)
                .stop_on_click(true),
        )
        .expect("a document is configured");
    click(&mut inspector, page.todos[2], &mut MemoryEvent::pointer());
    println!(
        "without :nth-child(): {}",
        inspector.path().unwrap_or("<none>")
    );
    println!("still inspecting: {}", inspector.is_inspecting());
}
