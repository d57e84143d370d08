// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference tree implementation: structure, updates, and the [`ViewTree`] impl.

use alloc::string::String;
use alloc::vec::Vec;

use crate::focus::spatial_neighbor;
use crate::geometry::{Offset, PixelRect, ScreenPoint};
use crate::types::{Direction, LocalNode, NodeFlags, NodeId, NodeKind};
use crate::view::ViewTree;

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// An arena-backed visual tree.
///
/// Children keep insertion order; a child inserted later is drawn above its
/// earlier siblings.
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalNode,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// Inserting under a stale or leaf `parent` leaves the node detached.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        let parent = node.parent;
        let children = node.children.clone();
        if let Some(parent) = parent {
            self.unlink_parent(id, parent);
        }
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` as the last child of `new_parent`, or detach it with `None`.
    ///
    /// Moving a node under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        let Some(old_parent) = self.node_opt(id).map(|n| n.parent) else {
            return;
        };
        if new_parent.is_some_and(|p| self.is_in_subtree(id, p)) {
            return;
        }
        if let Some(parent) = old_parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: NodeId, bounds: PixelRect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_bounds = bounds;
        }
    }

    /// Update the scroll offset applied to `id`'s children.
    pub fn set_scroll_offset(&mut self, id: NodeId, scroll: Offset) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.scroll = scroll;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Update the symbolic identifier.
    pub fn set_symbolic_id(&mut self, id: NodeId, symbolic_id: Option<String>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.symbolic_id = symbolic_id;
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Local data of a live node.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node_opt(id).map(|n| &n.local)
    }

    /// Children of a live node in insertion order (empty for stale ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Iterate all live nodes.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| {
            let n = n.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            Some(NodeId::new(i as u32, n.generation))
        })
    }

    /// Returns true if `id` and every ancestor are visible.
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            match self.node_opt(c) {
                Some(n) if n.local.flags.contains(NodeFlags::VISIBLE) => cur = n.parent,
                _ => return false,
            }
        }
        true
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let Some(parent_node) = self.node_opt_mut(parent) else {
            return;
        };
        if parent_node.local.kind != NodeKind::Container {
            return;
        }
        parent_node.children.push(id);
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    /// Whether `node` is `root` or one of its descendants.
    fn is_in_subtree(&self, root: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == root {
                return true;
            }
            cur = self.node_opt(id).and_then(|n| n.parent);
        }
        false
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = None;
        }
    }
}

impl ViewTree for Tree {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> NodeKind {
        self.node_opt(node)
            .map(|n| n.local.kind)
            .unwrap_or(NodeKind::Leaf)
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }

    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.children(node).get(index).copied()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node_opt(node)?.parent
    }

    fn local_bounds(&self, node: NodeId) -> PixelRect {
        self.node_opt(node)
            .map(|n| n.local.local_bounds)
            .unwrap_or(PixelRect::ZERO)
    }

    fn scroll_offset(&self, node: NodeId) -> Offset {
        self.node_opt(node)
            .map(|n| n.local.scroll)
            .unwrap_or(Offset::ZERO)
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.node_opt(node)
            .is_some_and(|n| n.local.flags.contains(NodeFlags::VISIBLE))
    }

    fn is_overlay(&self, node: NodeId) -> bool {
        self.node_opt(node)
            .is_some_and(|n| n.local.flags.contains(NodeFlags::OVERLAY))
    }

    /// Sum of the origins of `node` and its ancestors, minus each ancestor's
    /// scroll offset.
    fn screen_origin(&self, node: NodeId) -> ScreenPoint {
        let mut origin = ScreenPoint::ZERO;
        let mut cur = self.node_opt(node);
        while let Some(n) = cur {
            let b = n.local.local_bounds;
            origin = origin.offset(b.left, b.top);
            cur = n.parent.and_then(|p| self.node_opt(p));
            if let Some(p) = cur {
                origin = origin.offset(-p.local.scroll.x, -p.local.scroll.y);
            }
        }
        origin
    }

    fn type_name(&self, node: NodeId) -> &str {
        self.node_opt(node)
            .map(|n| n.local.type_name.as_str())
            .unwrap_or("")
    }

    fn symbolic_id(&self, node: NodeId) -> Option<&str> {
        self.node_opt(node)?.local.symbolic_id.as_deref()
    }

    fn find_neighbor(&self, node: NodeId, direction: Direction) -> Option<NodeId> {
        spatial_neighbor(self, node, direction)
    }
}
