// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_dom_inspector::{Inspector, InspectorOptions};
use understory_dom_tree::dispatch::{click, hover};
use understory_dom_tree::{ElementDesc, MemoryDocument, MemoryEvent, NodeId};

fn build_grid(rows: usize, cols: usize) -> (MemoryDocument, Vec<NodeId>) {
    let mut doc = MemoryDocument::new();
    let html = doc.append_root(ElementDesc::new("html"));
    let body = doc.append_child(html, ElementDesc::new("body"));
    let table = doc.append_child(body, ElementDesc::new("table").with_id("grid"));
    let mut cells = Vec::with_capacity(rows * cols);
    for _ in 0..rows {
        let row = doc.append_child(table, ElementDesc::new("tr"));
        for _ in 0..cols {
            cells.push(doc.append_child(row, ElementDesc::new("td").with_class("cell")));
        }
    }
    (doc, cells)
}

fn bench_inspector(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_dom_inspector");
    group.sample_size(30);

    let (doc, cells) = build_grid(32, 16);

    group.bench_function("hover_sweep(cells=512)", |b| {
        b.iter_batched(
            || Inspector::new(InspectorOptions::new().document(doc.clone())).unwrap(),
            |mut inspector| {
                let mut previous = None;
                for &cell in &cells {
                    hover(&mut inspector, previous, cell);
                    previous = Some(cell);
                }
                black_box(inspector);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("click_pick(cells=512)", |b| {
        b.iter_batched(
            || Inspector::new(InspectorOptions::new().document(doc.clone()).on_click(|_| {})).unwrap(),
            |mut inspector| {
                for &cell in cells.iter().step_by(37) {
                    click(&mut inspector, cell, &mut MemoryEvent::pointer());
                }
                black_box(inspector.path().map(str::len));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_inspector);
criterion_main!(benches);
