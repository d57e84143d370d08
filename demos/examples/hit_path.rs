// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit paths over a host-owned tree.
//!
//! Implements [`ViewTree`] for a fixed table of nodes (no arena), including a
//! scrolled list, then compares the shallow and leaf-seeking policies at a
//! few points.
//!
//! Run:
//! - `cargo run -p understory_demos --example hit_path`

use understory_view_tree::{
    HitTestEngine, NodeKind, Offset, PixelRect, ScreenPoint, TraversalPolicy, ViewTree,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(usize);

struct Row {
    name: &'static str,
    parent: Option<usize>,
    kind: NodeKind,
    bounds: PixelRect,
    scroll: Offset,
}

/// A header, a list scrolled down by 30 pixels, and a footer container whose
/// only child sits outside the point being tested.
struct Table {
    rows: Vec<Row>,
}

impl Table {
    fn new() -> Self {
        let row = |name, parent, kind, bounds| Row {
            name,
            parent,
            kind,
            bounds,
            scroll: Offset::default(),
        };
        let mut rows = vec![
            row("Window", None, NodeKind::Container, PixelRect::new(0, 0, 200, 200)),
            row("Header", Some(0), NodeKind::Leaf, PixelRect::new(0, 0, 200, 40)),
            row("List", Some(0), NodeKind::Container, PixelRect::new(0, 40, 200, 160)),
            row("Item0", Some(2), NodeKind::Leaf, PixelRect::new(0, 0, 200, 40)),
            row("Item1", Some(2), NodeKind::Leaf, PixelRect::new(0, 40, 200, 80)),
            row("Item2", Some(2), NodeKind::Leaf, PixelRect::new(0, 80, 200, 120)),
            row("Footer", Some(0), NodeKind::Container, PixelRect::new(0, 160, 200, 200)),
            row("Badge", Some(6), NodeKind::Leaf, PixelRect::new(160, 0, 200, 40)),
        ];
        rows[2].scroll = Offset::new(0, 30);
        Self { rows }
    }

    fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.parent == Some(node.0))
            .map(|(i, _)| Node(i))
    }
}

impl ViewTree for Table {
    type Node = Node;

    fn kind(&self, node: Node) -> NodeKind {
        self.rows[node.0].kind
    }

    fn child_count(&self, node: Node) -> usize {
        self.children(node).count()
    }

    fn child_at(&self, node: Node, index: usize) -> Option<Node> {
        self.children(node).nth(index)
    }

    fn parent(&self, node: Node) -> Option<Node> {
        self.rows[node.0].parent.map(Node)
    }

    fn local_bounds(&self, node: Node) -> PixelRect {
        self.rows[node.0].bounds
    }

    fn is_visible(&self, _node: Node) -> bool {
        true
    }

    fn is_overlay(&self, _node: Node) -> bool {
        false
    }

    fn scroll_offset(&self, node: Node) -> Offset {
        self.rows[node.0].scroll
    }

    fn screen_origin(&self, node: Node) -> ScreenPoint {
        let mut origin = self.rows[node.0].bounds.origin();
        let mut cur = self.rows[node.0].parent;
        while let Some(p) = cur {
            let row = &self.rows[p];
            origin = ScreenPoint::new(
                origin.x + row.bounds.left - row.scroll.x,
                origin.y + row.bounds.top - row.scroll.y,
            );
            cur = row.parent;
        }
        origin
    }

    fn type_name(&self, node: Node) -> &str {
        self.rows[node.0].name
    }
}

fn main() {
    let table = Table::new();
    let root = Node(0);
    let points = [
        ("header", ScreenPoint::new(10, 10)),
        ("list (scrolled)", ScreenPoint::new(10, 60)),
        ("footer gap", ScreenPoint::new(10, 180)),
        ("badge", ScreenPoint::new(180, 180)),
    ];

    for policy in [TraversalPolicy::Shallow, TraversalPolicy::LeafSeeking] {
        println!("== {policy:?} ==");
        let engine = HitTestEngine::new(policy);
        for (label, point) in points {
            let path = engine.hit_test(&table, root, point);
            let names: Vec<&str> = path.nodes().map(|n| table.type_name(n)).collect();
            println!("{label:>16} {point}: [{}]", names.join(" > "));
            if let Some(deepest) = path.deepest() {
                println!("{:>16} on screen {}", "", table.screen_rect(deepest));
            }
        }
    }
}
