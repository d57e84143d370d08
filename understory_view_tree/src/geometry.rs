// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry: points, offsets, half-open rectangles, and the
//! parent→child coordinate conversion used by hit testing.
//!
//! All rectangles are half-open: a rectangle contains `x` when
//! `left <= x < right` (and likewise for `y`).

use core::fmt;

/// A point in pixel space.
///
/// Depending on context this is either a screen point (root coordinate space)
/// or a point local to some container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScreenPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl ScreenPoint {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Convert to a Kurbo point for float-based renderers.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A scroll offset of a container, in pixels.
///
/// Positive values mean the content has been scrolled right/down, so a point
/// in the container's frame maps to `point + offset` in its content space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Offset {
    /// Horizontal scroll.
    pub x: i32,
    /// Vertical scroll.
    pub y: i32,
}

impl Offset {
    /// No scroll.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create an offset.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A half-open, axis-aligned pixel rectangle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl PixelRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_origin_size(origin: ScreenPoint, width: i32, height: i32) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x.saturating_add(width),
            origin.y.saturating_add(height),
        )
    }

    /// Top-left corner.
    pub const fn origin(&self) -> ScreenPoint {
        ScreenPoint::new(self.left, self.top)
    }

    /// Width; zero for inverted rectangles.
    pub const fn width(&self) -> i32 {
        let w = self.right.saturating_sub(self.left);
        if w < 0 { 0 } else { w }
    }

    /// Height; zero for inverted rectangles.
    pub const fn height(&self) -> i32 {
        let h = self.bottom.saturating_sub(self.top);
        if h < 0 { 0 } else { h }
    }

    /// Returns `true` if the rectangle covers no pixel.
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Midpoint, rounded toward the top-left.
    pub const fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// Half-open containment test.
    pub const fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// The same size, placed at `(0, 0)`.
    ///
    /// For a node's local bounds this is the node's rectangle in its own space.
    #[must_use]
    pub const fn at_origin(&self) -> Self {
        Self::new(0, 0, self.width(), self.height())
    }

    /// Return this rectangle translated by `(dx, dy)`.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Clamp a point into the rectangle, axis by axis.
    ///
    /// The result satisfies [`contains`](Self::contains) unless the rectangle
    /// is empty, in which case the top-left corner is returned.
    pub fn clamp(&self, p: ScreenPoint) -> ScreenPoint {
        if self.is_empty() {
            return self.origin();
        }
        ScreenPoint::new(
            p.x.clamp(self.left, self.right - 1),
            p.y.clamp(self.top, self.bottom - 1),
        )
    }

    /// Convert to a Kurbo rectangle for float-based renderers.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Convert a point from a parent's coordinate space into a child's local space.
///
/// `parent_scroll` is the scroll offset of the parent container and
/// `child_bounds` are the child's bounds in the parent's space.
pub const fn to_child_local(
    point: ScreenPoint,
    parent_scroll: Offset,
    child_bounds: PixelRect,
) -> ScreenPoint {
    point.offset(
        parent_scroll.x.saturating_sub(child_bounds.left),
        parent_scroll.y.saturating_sub(child_bounds.top),
    )
}

/// Returns `true` if `point` (in the parent's space) falls within the child.
pub const fn contains_in_child(
    point: ScreenPoint,
    parent_scroll: Offset,
    child_bounds: PixelRect,
) -> bool {
    let local = to_child_local(point, parent_scroll, child_bounds);
    child_bounds.at_origin().contains(local)
}
