// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_css_path::{PathOptions, css_path};
use understory_dom_tree::{ElementDesc, MemoryDocument, NodeId};

/// A page of `sections` sections, each holding a list of `items` entries.
///
/// Every third item carries a shared class so some paths need positional
/// qualifiers and some do not. Returns the deepest last element.
fn build_page(sections: usize, items: usize) -> (MemoryDocument, NodeId) {
    let mut doc = MemoryDocument::new();
    let html = doc.append_root(ElementDesc::new("html"));
    let body = doc.append_child(html, ElementDesc::new("body"));
    let main = doc.append_child(body, ElementDesc::new("main").with_class("content"));
    let mut last = main;
    for _ in 0..sections {
        let section = doc.append_child(main, ElementDesc::new("section").with_class("card"));
        let list = doc.append_child(section, ElementDesc::new("ul"));
        for i in 0..items {
            let desc = if i % 3 == 0 {
                ElementDesc::new("li").with_class("row")
            } else {
                ElementDesc::new("li")
            };
            let item = doc.append_child(list, desc);
            last = doc.append_child(item, ElementDesc::new("span"));
        }
    }
    (doc, last)
}

fn bench_css_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_css_path");
    group.sample_size(50);

    for &(sections, items) in &[(4_usize, 8_usize), (16, 32), (64, 64)] {
        let (doc, target) = build_page(sections, items);

        group.bench_function(format!("css_path(s={sections},i={items})"), |b| {
            b.iter(|| black_box(css_path(&doc, black_box(&target), PathOptions::default())));
        });

        let plain = PathOptions {
            full_path: true,
            use_nth_child: false,
        };
        group.bench_function(
            format!("css_path_no_nth(s={sections},i={items})"),
            |b| {
                b.iter(|| black_box(css_path(&doc, black_box(&target), plain)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_css_path);
criterion_main!(benches);
