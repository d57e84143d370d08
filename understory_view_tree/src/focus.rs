// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial focus search for the reference [`Tree`].
//!
//! Candidates are the live, focusable, effectively visible nodes other than
//! the origin. A candidate qualifies when its screen-space center lies strictly
//! on the requested side of the origin's center; among those, the lowest
//! `primary + 0.3 × orthogonal` center distance wins. Equal scores keep the
//! earlier node in slot order, so the same layout always yields the same
//! answer.
//!
//! Hosts with their own focus rules implement
//! [`ViewTree::find_neighbor`](crate::ViewTree::find_neighbor) themselves.

use kurbo::Point;

use crate::tree::Tree;
use crate::types::{Direction, NodeFlags, NodeId, NodeKind};
use crate::view::ViewTree;

const ORTHOGONAL_WEIGHT: f64 = 0.3;

/// Find the best focus target from `origin` in `direction`.
pub(crate) fn spatial_neighbor(tree: &Tree, origin: NodeId, direction: Direction) -> Option<NodeId> {
    if !tree.is_alive(origin) {
        return None;
    }
    let oc = tree.screen_rect(origin).to_kurbo().center();

    let mut best: Option<(NodeId, f64)> = None;
    for candidate in tree.iter() {
        if candidate == origin || !is_focus_candidate(tree, candidate) {
            continue;
        }
        let cc = tree.screen_rect(candidate).to_kurbo().center();
        let Some(score) = score(oc, cc, direction) else {
            continue;
        };
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((candidate, score));
        }
    }
    best.map(|(id, _)| id)
}

fn is_focus_candidate(tree: &Tree, id: NodeId) -> bool {
    let Some(local) = tree.local(id) else {
        return false;
    };
    local.kind == NodeKind::Leaf
        && local.flags.contains(NodeFlags::FOCUSABLE)
        && !local.flags.contains(NodeFlags::OVERLAY)
        && !local.local_bounds.is_empty()
        && tree.is_effectively_visible(id)
}

/// Score a candidate center, or `None` if it is not on the requested side.
fn score(origin: Point, candidate: Point, direction: Direction) -> Option<f64> {
    let d = candidate - origin;
    let (primary, ortho) = match direction {
        Direction::Up => (-d.y, d.x),
        Direction::Down => (d.y, d.x),
        Direction::Left => (-d.x, d.y),
        Direction::Right => (d.x, d.y),
    };
    let ortho = if ortho < 0.0 { -ortho } else { ortho };
    (primary > 0.0).then(|| primary + ORTHOGONAL_WEIGHT * ortho)
}
