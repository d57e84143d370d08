// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering collaborator.
//!
//! The inspector never draws. It pushes state into an [`Overlay`] and asks
//! for a redraw; the overlay decides how a crosshair, a readout, and two
//! highlight boxes look.

use alloc::string::String;

use understory_view_tree::{PixelRect, ScreenPoint};

use crate::color::Rgb;

/// A box to draw around an element, with its label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Highlight {
    /// Screen-space rectangle of the element.
    pub rect: PixelRect,
    /// Text to draw at the rectangle's top-left corner.
    pub label: String,
    /// Stroke color, from [`InspectorConfig`](crate::config::InspectorConfig).
    pub color: Rgb,
}

/// Receives what the inspector wants drawn.
///
/// All methods are notifications except [`pixel_color_at`](Overlay::pixel_color_at).
/// The cursor methods mirror the inspector's own cursor, which stays the
/// source of truth.
pub trait Overlay {
    /// Show or hide the whole overlay (arm / disarm).
    fn set_visible(&mut self, visible: bool);

    /// The cursor moved by `(dx, dy)`; `position` is the clamped result.
    fn move_cursor(&mut self, dx: i32, dy: i32, position: ScreenPoint) {
        let _ = (dx, dy, position);
    }

    /// The cursor returned to the overlay's midpoint.
    fn move_cursor_to_origin(&mut self, position: ScreenPoint) {
        let _ = position;
    }

    /// Set (`Some`) or clear (`None`) the selected element's box.
    fn highlight_primary(&mut self, highlight: Option<Highlight>);

    /// Set (`Some`) or clear (`None`) the focus neighbor's box.
    fn highlight_secondary(&mut self, highlight: Option<Highlight>);

    /// Color of the rendered pixel at `point`, if the renderer can tell.
    fn pixel_color_at(&self, point: ScreenPoint) -> Option<Rgb> {
        let _ = point;
        None
    }

    /// Something visible changed. Idempotent; sent at most once per input event.
    fn request_redraw(&mut self);
}
