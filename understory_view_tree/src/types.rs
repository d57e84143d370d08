// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the reference tree: node identifiers, flags, node kinds,
//! directions, and per-node local data.

use alloc::string::String;

use crate::geometry::{Offset, PixelRect};

/// Identifier for a node in the [`Tree`](crate::Tree).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility, focus, and self-exclusion.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in hit testing).
        const VISIBLE   = 0b0000_0001;
        /// Node can take focus (participates in neighbor search).
        const FOCUSABLE = 0b0000_0010;
        /// Node is the inspector overlay itself; never hit.
        const OVERLAY   = 0b0000_0100;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Capability set of a node.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Owns an ordered list of children and a nested coordinate space.
    ///
    /// A container with no children is still a container.
    Container,
    /// Has no children.
    #[default]
    Leaf,
}

/// A direction for focus navigation and cursor movement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Direction {
    /// Unit step for this direction as `(dx, dy)`.
    pub const fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Upper-case name, as used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// Local data for a node of the reference tree.
#[derive(Clone, Debug, Default)]
pub struct LocalNode {
    /// Human-readable type name, e.g. `"Button"`.
    pub type_name: String,
    /// Optional symbolic identifier, e.g. `"id/ok_button"`.
    pub symbolic_id: Option<String>,
    /// Container or leaf.
    pub kind: NodeKind,
    /// Bounds in the parent's coordinate space.
    pub local_bounds: PixelRect,
    /// Scroll offset applied to this node's children (containers only).
    pub scroll: Offset,
    /// Visibility, focus, and overlay flags.
    pub flags: NodeFlags,
}

impl LocalNode {
    /// A visible container with the given type name and bounds.
    pub fn container(type_name: &str, local_bounds: PixelRect) -> Self {
        Self {
            type_name: type_name.into(),
            kind: NodeKind::Container,
            local_bounds,
            ..Default::default()
        }
    }

    /// A visible leaf with the given type name and bounds.
    pub fn leaf(type_name: &str, local_bounds: PixelRect) -> Self {
        Self {
            type_name: type_name.into(),
            kind: NodeKind::Leaf,
            local_bounds,
            ..Default::default()
        }
    }

    /// Set the symbolic identifier.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.symbolic_id = Some(id.into());
        self
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the scroll offset.
    #[must_use]
    pub fn with_scroll(mut self, scroll: Offset) -> Self {
        self.scroll = scroll;
        self
    }
}
