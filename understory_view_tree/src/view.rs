// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a host's visual tree.
//!
//! ## Overview
//!
//! Hosts own and mutate their tree; the inspector only walks it. [`ViewTree`]
//! is the narrow capability interface the walk needs: ordered children, local
//! bounds, visibility, scroll offsets, screen origins, and a directional
//! neighbor query.
//!
//! Node handles are small `Copy` keys compared by identity. They are only
//! required to stay valid for the duration of one call into the inspector;
//! the tree may change shape between two input events, but callers must not
//! mutate it while a traversal is running.

use crate::geometry::{Offset, PixelRect, ScreenPoint};
use crate::types::{Direction, NodeKind};

/// Read-only access to a host visual tree.
pub trait ViewTree {
    /// Node handle. Equality is identity.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Container or leaf.
    fn kind(&self, node: Self::Node) -> NodeKind;

    /// Number of children, in insertion order. Zero for leaves.
    fn child_count(&self, node: Self::Node) -> usize;

    /// Child at `index`; `index == 0` is the first added (bottom of paint order).
    fn child_at(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

    /// Parent of `node`, or `None` for a root or detached node.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Bounds in the parent's coordinate space.
    fn local_bounds(&self, node: Self::Node) -> PixelRect;

    /// Scroll offset this node applies to its children.
    fn scroll_offset(&self, node: Self::Node) -> Offset {
        let _ = node;
        Offset::ZERO
    }

    /// Whether the node is currently visible.
    fn is_visible(&self, node: Self::Node) -> bool;

    /// Whether the node is the inspector overlay itself.
    fn is_overlay(&self, node: Self::Node) -> bool;

    /// Position of the node's top-left corner in screen space.
    fn screen_origin(&self, node: Self::Node) -> ScreenPoint;

    /// Short type name, e.g. `"FrameLayout"`.
    fn type_name(&self, node: Self::Node) -> &str;

    /// Symbolic identifier, if one is assigned and resolvable.
    ///
    /// Resolution failures are reported as `None`.
    fn symbolic_id(&self, node: Self::Node) -> Option<&str> {
        let _ = node;
        None
    }

    /// The node focus would move to from `node` in `direction`, if any.
    fn find_neighbor(&self, node: Self::Node, direction: Direction) -> Option<Self::Node> {
        let _ = (node, direction);
        None
    }

    /// The node's rectangle in screen space.
    fn screen_rect(&self, node: Self::Node) -> PixelRect {
        let size = self.local_bounds(node);
        PixelRect::from_origin_size(self.screen_origin(node), size.width(), size.height())
    }
}
