// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_inspector::config::InspectorConfig;
use understory_inspector::inspector::InspectionController;
use understory_inspector::overlay::{Highlight, Overlay};
use understory_inspector::types::{InputEvent, Key};
use understory_view_tree::{LocalNode, NodeFlags, NodeId, PixelRect, Tree};

/// Discards everything it is told to draw.
struct Sink;

impl Overlay for Sink {
    fn set_visible(&mut self, _visible: bool) {}
    fn highlight_primary(&mut self, highlight: Option<Highlight>) {
        black_box(highlight);
    }
    fn highlight_secondary(&mut self, highlight: Option<Highlight>) {
        black_box(highlight);
    }
    fn request_redraw(&mut self) {}
}

/// A column of `depth` nested containers, each inset by one pixel, ending in
/// a focusable leaf, plus the overlay node on top.
fn nested_tree(depth: i32) -> (Tree, NodeId) {
    let size = 2 * depth + 100;
    let mut tree = Tree::new();
    let root = tree.insert(None, LocalNode::container("Root", PixelRect::new(0, 0, size, size)));
    let mut parent = root;
    for d in 0..depth {
        let inner = size - 2 * (d + 1);
        parent = tree.insert(
            Some(parent),
            LocalNode::container("Frame", PixelRect::new(1, 1, 1 + inner, 1 + inner)),
        );
    }
    tree.insert(
        Some(parent),
        LocalNode::leaf("Button", PixelRect::new(0, 0, 100, 100))
            .with_flags(NodeFlags::VISIBLE | NodeFlags::FOCUSABLE),
    );
    let overlay = tree.insert(
        Some(root),
        LocalNode::leaf("Overlay", PixelRect::new(0, 0, size, size))
            .with_flags(NodeFlags::VISIBLE | NodeFlags::OVERLAY),
    );
    (tree, overlay)
}

fn armed(tree: &Tree, overlay: NodeId) -> InspectionController<NodeId, Sink> {
    let mut ctl = InspectionController::new(Sink, InspectorConfig::default());
    ctl.attach(overlay);
    ctl.set_bounds(tree.local(overlay).map(|l| l.local_bounds).unwrap_or_default());
    for d in [9, 5, 2, 7] {
        ctl.handle_input(tree, InputEvent::release(Key::Digit(d)));
    }
    ctl
}

fn bench_select_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspector_select");
    for &depth in &[4_i32, 32] {
        let (tree, overlay) = nested_tree(depth);
        group.bench_function(format!("cycle_depth{depth}"), |b| {
            b.iter_batched(
                || armed(&tree, overlay),
                |mut ctl| {
                    for _ in 0..=depth {
                        ctl.handle_input(&tree, InputEvent::release(Key::Select));
                    }
                    black_box(ctl.current_node())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_passthrough(c: &mut Criterion) {
    let (tree, overlay) = nested_tree(4);
    let mut ctl = InspectionController::new(Sink, InspectorConfig::default());
    ctl.attach(overlay);
    c.bench_function("inspector_passthrough", |b| {
        b.iter(|| {
            for key in [Key::Up, Key::Digit(3), Key::Select, Key::Other(42)] {
                black_box(ctl.handle_input(&tree, InputEvent::release(black_box(key))));
            }
        });
    });
}

criterion_group!(benches, bench_select_cycle, bench_passthrough);
criterion_main!(benches);
