// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View Tree: read-only view trees and draw-order aware hit testing.
//!
//! This crate is the geometric half of a UI inspector.
//!
//! - [`ViewTree`] is the narrow, read-only interface a host exposes over its
//!   own visual tree: ordered children, local bounds, visibility, scroll
//!   offsets, screen origins, and a directional neighbor query.
//! - [`HitTestEngine`] walks a [`ViewTree`] from a root container to the
//!   nodes under a point, preferring the sibling drawn last, and can backtrack
//!   out of containers that have nothing under the point
//!   ([`TraversalPolicy::LeafSeeking`]).
//! - [`Tree`] is an arena-backed reference tree implementing [`ViewTree`],
//!   handy for tests, demos, and hosts that mirror their scene into it.
//!
//! ## Coordinates
//!
//! Geometry is integer pixels. Rectangles are half-open ([`PixelRect`]).
//! Each node's bounds live in its parent's space; descending into a container
//! subtracts the child's origin and adds the container's scroll offset
//! ([`to_child_local`]).
//!
//! ## Not a scene graph
//!
//! Nothing here mutates the host tree or caches across calls. Each hit test
//! reads the tree as it is at call time; the caller must not mutate the tree
//! while a single traversal runs.
//!
//! ## Example
//!
//! ```
//! use understory_view_tree::{HitTestEngine, LocalNode, PixelRect, ScreenPoint, Tree, ViewTree};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, LocalNode::container("Root", PixelRect::new(0, 0, 100, 100)));
//! let c = tree.insert(Some(root), LocalNode::container("C", PixelRect::new(0, 0, 100, 100)));
//! let l1 = tree.insert(Some(c), LocalNode::leaf("L1", PixelRect::new(0, 0, 50, 50)));
//! let l2 = tree.insert(Some(c), LocalNode::leaf("L2", PixelRect::new(50, 50, 100, 100)));
//!
//! let engine = HitTestEngine::default();
//! let path = engine.hit_test(&tree, root, ScreenPoint::new(60, 60));
//! assert_eq!(path.nodes().collect::<Vec<_>>(), vec![c, l2]);
//! assert_eq!(tree.screen_rect(l2), PixelRect::new(50, 50, 100, 100));
//!
//! // Nothing under (40, 60): C is dropped and the result is empty.
//! assert!(engine.hit_test(&tree, root, ScreenPoint::new(40, 60)).is_empty());
//! # let _ = l1;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focus;
mod geometry;
mod hit_test;
mod tree;
mod types;
mod view;

pub use geometry::{Offset, PixelRect, ScreenPoint, contains_in_child, to_child_local};
pub use hit_test::{HitEntry, HitPath, HitTestEngine, TraversalPolicy};
pub use tree::Tree;
pub use types::{Direction, LocalNode, NodeFlags, NodeId, NodeKind};
pub use view::ViewTree;
