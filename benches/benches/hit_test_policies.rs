// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_view_tree::{
    HitTestEngine, LocalNode, NodeId, PixelRect, ScreenPoint, TraversalPolicy, Tree,
};

/// `n * n` containers in a grid of `cell` pixels, each holding a 2x2 grid of
/// leaves that covers its top-left three quarters only.
fn grid_tree(n: i32, cell: i32) -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let root = tree.insert(
        None,
        LocalNode::container("Root", PixelRect::new(0, 0, n * cell, n * cell)),
    );
    let half = cell / 2;
    let leaf = half * 3 / 4;
    for y in 0..n {
        for x in 0..n {
            let c = tree.insert(
                Some(root),
                LocalNode::container(
                    "Cell",
                    PixelRect::from_origin_size(ScreenPoint::new(x * cell, y * cell), cell, cell),
                ),
            );
            for ly in 0..2 {
                for lx in 0..2 {
                    tree.insert(
                        Some(c),
                        LocalNode::leaf(
                            "Leaf",
                            PixelRect::from_origin_size(ScreenPoint::new(lx * half, ly * half), leaf, leaf),
                        ),
                    );
                }
            }
        }
    }
    (tree, root)
}

/// `depth` nested full-size containers over one sibling leaf; every query
/// descends the chain, finds nothing, and backtracks to the leaf.
fn dead_end_tree(depth: usize, size: i32) -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let bounds = PixelRect::new(0, 0, size, size);
    let root = tree.insert(None, LocalNode::container("Root", bounds));
    tree.insert(Some(root), LocalNode::leaf("Target", bounds));
    let mut parent = root;
    for _ in 0..depth {
        parent = tree.insert(Some(parent), LocalNode::container("Wrapper", bounds));
    }
    (tree, root)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_coord(&mut self, max: i32) -> i32 {
        (self.next_u64() % max as u64) as i32
    }
}

fn gen_points(count: usize, max: i32, seed: u64) -> Vec<ScreenPoint> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| ScreenPoint::new(rng.next_coord(max), rng.next_coord(max)))
        .collect()
}

const POLICIES: [(&str, TraversalPolicy); 2] = [
    ("shallow", TraversalPolicy::Shallow),
    ("leaf_seeking", TraversalPolicy::LeafSeeking),
];

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_grid");
    for &n in &[8_i32, 32] {
        let cell = 64;
        let (tree, root) = grid_tree(n, cell);
        let points = gen_points(1024, n * cell, 0x9E37_79B9_7F4A_7C15);
        group.throughput(Throughput::Elements(points.len() as u64));
        for (name, policy) in POLICIES {
            let engine = HitTestEngine::new(policy);
            group.bench_function(format!("{name}_n{n}"), |b| {
                b.iter(|| {
                    let mut hits = 0_usize;
                    for &p in &points {
                        hits += engine.hit_test(&tree, root, black_box(p)).len();
                    }
                    black_box(hits)
                });
            });
        }
    }
    group.finish();
}

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_backtrack");
    for &depth in &[4_usize, 64] {
        let (tree, root) = dead_end_tree(depth, 100);
        for (name, policy) in POLICIES {
            let engine = HitTestEngine::new(policy);
            group.bench_function(format!("{name}_depth{depth}"), |b| {
                b.iter(|| engine.hit_test(&tree, root, black_box(ScreenPoint::new(50, 50))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_backtracking);
criterion_main!(benches);
