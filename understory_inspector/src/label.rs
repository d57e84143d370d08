// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element labels.

use alloc::string::String;
use core::fmt::Write;

use understory_view_tree::{PixelRect, ViewTree};

/// Screen rectangle and label for `node`.
///
/// The label reads `TypeName[ id], Rect(0, 0 - w, h), Rect(l, t - r, b)`:
/// the type name, the symbolic identifier when it resolves, the node's
/// rectangle in its own space, then its rectangle on screen.
pub fn describe<T: ViewTree>(tree: &T, node: T::Node) -> (PixelRect, String) {
    let screen = tree.screen_rect(node);
    let local = tree.local_bounds(node).at_origin();

    let mut label = String::new();
    label.push_str(tree.type_name(node));
    if let Some(id) = tree.symbolic_id(node).filter(|id| !id.is_empty()) {
        label.push(' ');
        label.push_str(id);
    }
    // Writing into a String cannot fail.
    let _ = write!(label, ", {local}, {screen}");
    (screen, label)
}
