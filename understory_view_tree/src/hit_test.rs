// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-order aware hit testing over a [`ViewTree`].
//!
//! ## Overview
//!
//! Starting from a root container, the engine descends toward the point,
//! testing siblings from the last added to the first added (top of paint
//! order first). Each level converts the working point into the matched
//! child's local space before testing the next level.
//!
//! ## Policies
//!
//! - [`TraversalPolicy::Shallow`]: take the first matching child at every
//!   level and stop when a level has no match. The result may end on a
//!   container.
//! - [`TraversalPolicy::LeafSeeking`] (default): the same descent, but a
//!   container with no matching child is dropped from the path and the search
//!   resumes with its next lower sibling, backing out one more level when a
//!   level is exhausted. A non-empty result always ends on a leaf.
//!
//! Traversal is iterative: an explicit stack of frames holds, per level, the
//! container, the index to resume from, and the point in that container's
//! space. Both policies share the frames and differ only in what happens when
//! a level runs dry.
//!
//! Every call re-reads the tree; nothing is cached between calls.

use alloc::vec::Vec;

use crate::geometry::{ScreenPoint, contains_in_child, to_child_local};
use crate::types::NodeKind;
use crate::view::ViewTree;

/// How far the engine searches.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TraversalPolicy {
    /// Descend into the first match per level; stop at the first empty level.
    Shallow,
    /// Backtrack out of containers without a matching child until a leaf is found.
    #[default]
    LeafSeeking,
}

/// One step of a [`HitPath`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HitEntry<K> {
    /// The matched node.
    pub node: K,
    /// The point, in the matched node's parent space, that selected it.
    pub point_in_parent: ScreenPoint,
}

/// Nodes under a point, ordered root→leaf, excluding the root itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HitPath<K> {
    entries: Vec<HitEntry<K>>,
}

impl<K> Default for HitPath<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy> HitPath<K> {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was hit below the root.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Node at depth `index` (0 is the root's child).
    pub fn node(&self, index: usize) -> Option<K> {
        self.entries.get(index).map(|e| e.node)
    }

    /// The deepest matched node.
    pub fn deepest(&self) -> Option<K> {
        self.entries.last().map(|e| e.node)
    }

    /// All entries, root→leaf.
    pub fn entries(&self) -> &[HitEntry<K>] {
        &self.entries
    }

    /// Iterate matched nodes, root→leaf.
    pub fn nodes(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|e| e.node)
    }
}

/// A traversal level: the container being searched, how many of its children
/// are still untested (children `0..remaining`), and the working point in the
/// container's space.
#[derive(Copy, Clone, Debug)]
struct Frame<K> {
    container: K,
    remaining: usize,
    point: ScreenPoint,
}

/// Finds the nodes under a point.
#[derive(Copy, Clone, Debug, Default)]
pub struct HitTestEngine {
    policy: TraversalPolicy,
}

impl HitTestEngine {
    /// Create an engine with the given policy.
    pub const fn new(policy: TraversalPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    pub const fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    /// Change the policy.
    pub fn set_policy(&mut self, policy: TraversalPolicy) {
        self.policy = policy;
    }

    /// Hit test `point` (in `root`'s space) against `root`'s subtree.
    ///
    /// Invisible nodes and overlay nodes are skipped. The returned path
    /// excludes `root` and is empty if nothing matches.
    pub fn hit_test<T: ViewTree>(
        &self,
        tree: &T,
        root: T::Node,
        point: ScreenPoint,
    ) -> HitPath<T::Node> {
        let mut path = HitPath::new();
        let mut frames = Vec::new();
        frames.push(Frame {
            container: root,
            remaining: tree.child_count(root),
            point,
        });

        while let Some(frame) = frames.last_mut() {
            if let Some(child) = next_match(tree, frame) {
                let parent_point = frame.point;
                path.entries.push(HitEntry {
                    node: child,
                    point_in_parent: parent_point,
                });
                match tree.kind(child) {
                    NodeKind::Leaf => break,
                    NodeKind::Container => {
                        let local = to_child_local(
                            parent_point,
                            tree.scroll_offset(frame.container),
                            tree.local_bounds(child),
                        );
                        frames.push(Frame {
                            container: child,
                            remaining: tree.child_count(child),
                            point: local,
                        });
                    }
                }
                continue;
            }

            // This level has no (further) match.
            match self.policy {
                TraversalPolicy::Shallow => break,
                TraversalPolicy::LeafSeeking => {
                    frames.pop();
                    if frames.is_empty() {
                        break;
                    }
                    // Drop the container that led nowhere; its parent frame
                    // resumes below it with the point stored for that level.
                    let dead_end = path.entries.pop();
                    tracing::debug!(
                        container = ?dead_end.map(|e| e.node),
                        "no leaf under container, trying lower siblings"
                    );
                }
            }
        }

        tracing::debug!(
            x = point.x,
            y = point.y,
            depth = path.len(),
            nodes = ?path.entries.iter().map(|e| e.node).collect::<Vec<_>>(),
            "hit path at point"
        );
        path
    }
}

/// Scan the frame's untested children from the top of paint order down,
/// returning the first visible, non-overlay child containing the point.
/// On a match, `remaining` is left pointing below it so a later resume
/// continues with the next lower sibling.
fn next_match<T: ViewTree>(tree: &T, frame: &mut Frame<T::Node>) -> Option<T::Node> {
    let scroll = tree.scroll_offset(frame.container);
    while frame.remaining > 0 {
        frame.remaining -= 1;
        let Some(child) = tree.child_at(frame.container, frame.remaining) else {
            continue;
        };
        if tree.is_overlay(child) || !tree.is_visible(child) {
            continue;
        }
        if contains_in_child(frame.point, scroll, tree.local_bounds(child)) {
            return Some(child);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Offset, PixelRect};
    use crate::tree::Tree;
    use crate::types::{LocalNode, NodeFlags, NodeId};
    use alloc::vec;

    fn nodes(path: &HitPath<NodeId>) -> Vec<NodeId> {
        path.nodes().collect()
    }

    fn root_100() -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let root = tree.insert(
            None,
            LocalNode::container("Root", PixelRect::new(0, 0, 100, 100)),
        );
        (tree, root)
    }

    #[test]
    fn later_sibling_wins_when_overlapping() {
        let (mut tree, root) = root_100();
        let _a = tree.insert(Some(root), LocalNode::leaf("A", PixelRect::new(0, 0, 60, 60)));
        let b = tree.insert(Some(root), LocalNode::leaf("B", PixelRect::new(40, 40, 100, 100)));

        let engine = HitTestEngine::default();
        let path = engine.hit_test(&tree, root, ScreenPoint::new(50, 50));
        assert_eq!(nodes(&path), vec![b], "topmost (last added) sibling should win");
    }

    #[test]
    fn descends_with_local_coordinates() {
        let (mut tree, root) = root_100();
        let c = tree.insert(
            Some(root),
            LocalNode::container("C", PixelRect::new(20, 20, 80, 80)),
        );
        // In C's space; screen (25..35, 25..35).
        let leaf = tree.insert(Some(c), LocalNode::leaf("L", PixelRect::new(5, 5, 15, 15)));

        let engine = HitTestEngine::default();
        let path = engine.hit_test(&tree, root, ScreenPoint::new(30, 30));
        assert_eq!(nodes(&path), vec![c, leaf]);
        assert_eq!(path.entries()[0].point_in_parent, ScreenPoint::new(30, 30));
        assert_eq!(
            path.entries()[1].point_in_parent,
            ScreenPoint::new(10, 10),
            "entries record the point in the parent's space"
        );

        let miss = engine.hit_test(&tree, root, ScreenPoint::new(50, 50));
        assert!(miss.is_empty(), "C has no leaf at (50, 50)");
    }

    #[test]
    fn leaf_seeking_backtracks_into_lower_sibling() {
        let (mut tree, root) = root_100();
        let low = tree.insert(Some(root), LocalNode::leaf("Low", PixelRect::new(0, 0, 100, 100)));
        // Topmost container covers the point but has nothing under it.
        let top = tree.insert(
            Some(root),
            LocalNode::container("Top", PixelRect::new(0, 0, 100, 100)),
        );
        let _elsewhere = tree.insert(Some(top), LocalNode::leaf("Far", PixelRect::new(80, 80, 90, 90)));

        let leafy = HitTestEngine::new(TraversalPolicy::LeafSeeking);
        assert_eq!(
            nodes(&leafy.hit_test(&tree, root, ScreenPoint::new(10, 10))),
            vec![low]
        );

        let shallow = HitTestEngine::new(TraversalPolicy::Shallow);
        assert_eq!(
            nodes(&shallow.hit_test(&tree, root, ScreenPoint::new(10, 10))),
            vec![top],
            "shallow policy stops on the empty container"
        );
    }

    #[test]
    fn leaf_seeking_backtracks_several_levels() {
        let (mut tree, root) = root_100();
        let a = tree.insert(Some(root), LocalNode::container("A", PixelRect::new(0, 0, 100, 100)));
        let target = tree.insert(Some(a), LocalNode::leaf("Target", PixelRect::new(0, 0, 50, 50)));
        let b = tree.insert(Some(root), LocalNode::container("B", PixelRect::new(0, 0, 100, 100)));
        let b1 = tree.insert(Some(b), LocalNode::container("B1", PixelRect::new(0, 0, 50, 50)));
        let _b1_empty = tree.insert(Some(b1), LocalNode::container("B1a", PixelRect::new(0, 0, 50, 50)));
        let _b2 = tree.insert(Some(b), LocalNode::container("B2", PixelRect::new(0, 0, 50, 50)));

        let path = HitTestEngine::default().hit_test(&tree, root, ScreenPoint::new(10, 10));
        assert_eq!(nodes(&path), vec![a, target]);
    }

    #[test]
    fn backtracking_restores_the_level_point() {
        let (mut tree, root) = root_100();
        let outer = tree.insert(
            Some(root),
            LocalNode::container("Outer", PixelRect::new(10, 10, 90, 90)),
        );
        // In Outer's space: point (40, 40) on screen is (30, 30) here.
        let leaf = tree.insert(Some(outer), LocalNode::leaf("Leaf", PixelRect::new(25, 25, 35, 35)));
        let _inner = tree.insert(
            Some(outer),
            LocalNode::container("Inner", PixelRect::new(20, 20, 60, 60)),
        );

        let path = HitTestEngine::default().hit_test(&tree, root, ScreenPoint::new(40, 40));
        assert_eq!(
            nodes(&path),
            vec![outer, leaf],
            "after leaving Inner, siblings are tested with Outer's point"
        );
    }

    #[test]
    fn invisible_and_overlay_nodes_are_skipped() {
        let (mut tree, root) = root_100();
        let visible = tree.insert(Some(root), LocalNode::leaf("V", PixelRect::new(0, 0, 100, 100)));
        let _hidden = tree.insert(
            Some(root),
            LocalNode::leaf("H", PixelRect::new(0, 0, 100, 100)).with_flags(NodeFlags::empty()),
        );
        let overlay = tree.insert(
            Some(root),
            LocalNode::leaf("Overlay", PixelRect::new(0, 0, 100, 100))
                .with_flags(NodeFlags::VISIBLE | NodeFlags::OVERLAY),
        );

        let path = HitTestEngine::default().hit_test(&tree, root, ScreenPoint::new(5, 5));
        assert_eq!(nodes(&path), vec![visible]);
        assert!(path.nodes().all(|n| n != overlay));
    }

    #[test]
    fn scrolled_container_offsets_children() {
        let (mut tree, root) = root_100();
        let list = tree.insert(
            Some(root),
            LocalNode::container("List", PixelRect::new(0, 0, 100, 100))
                .with_scroll(Offset::new(0, 200)),
        );
        let row0 = tree.insert(Some(list), LocalNode::leaf("Row0", PixelRect::new(0, 0, 100, 20)));
        let row10 = tree.insert(Some(list), LocalNode::leaf("Row10", PixelRect::new(0, 200, 100, 220)));

        let path = HitTestEngine::default().hit_test(&tree, root, ScreenPoint::new(5, 5));
        assert_eq!(nodes(&path), vec![list, row10]);
        assert!(path.nodes().all(|n| n != row0));
    }

    #[test]
    fn empty_root_yields_empty_path() {
        let (tree, root) = root_100();
        for policy in [TraversalPolicy::Shallow, TraversalPolicy::LeafSeeking] {
            let path = HitTestEngine::new(policy).hit_test(&tree, root, ScreenPoint::new(1, 1));
            assert!(path.is_empty(), "{policy:?} on a childless root");
        }
    }

    #[test]
    fn leaf_seeking_reports_nothing_when_no_leaf_exists() {
        let (mut tree, root) = root_100();
        let c = tree.insert(Some(root), LocalNode::container("C", PixelRect::new(0, 0, 100, 100)));
        let _ = tree.insert(Some(c), LocalNode::container("D", PixelRect::new(0, 0, 100, 100)));
        let path = HitTestEngine::default().hit_test(&tree, root, ScreenPoint::new(1, 1));
        assert!(path.is_empty());
    }
}
