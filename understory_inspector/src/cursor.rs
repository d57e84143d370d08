// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor position, step size, and clamping.

use understory_view_tree::{Direction, PixelRect, ScreenPoint};

/// Step sizes selectable with digits `1..=6`.
pub const DEFAULT_STEP_SIZES: [i32; 6] = [1, 5, 10, 20, 50, 100];

/// Initial step size.
pub const DEFAULT_STEP: i32 = 10;

/// Owns the cursor position and keeps it inside the overlay bounds.
///
/// The position always satisfies `left <= x < right` and `top <= y < bottom`
/// for non-empty bounds; with empty bounds it is pinned to the top-left corner.
#[derive(Clone, Debug)]
pub struct CursorController {
    bounds: PixelRect,
    position: ScreenPoint,
    step: i32,
    step_sizes: [i32; 6],
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(PixelRect::ZERO)
    }
}

impl CursorController {
    /// A cursor centered in `bounds`, with the default step sizes.
    pub fn new(bounds: PixelRect) -> Self {
        Self::with_steps(bounds, DEFAULT_STEP_SIZES, DEFAULT_STEP)
    }

    /// A cursor centered in `bounds`, with custom step sizes.
    pub fn with_steps(bounds: PixelRect, step_sizes: [i32; 6], initial_step: i32) -> Self {
        Self {
            bounds,
            position: bounds.clamp(bounds.center()),
            step: initial_step,
            step_sizes,
        }
    }

    /// Current position.
    pub fn position(&self) -> ScreenPoint {
        self.position
    }

    /// Bounds the cursor is clamped to.
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Midpoint of the bounds; where [`move_to_origin`](Self::move_to_origin) goes.
    pub fn origin(&self) -> ScreenPoint {
        self.bounds.clamp(self.bounds.center())
    }

    /// Current step size in pixels.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Replace the bounds and recenter.
    pub fn set_bounds(&mut self, bounds: PixelRect) {
        self.bounds = bounds;
        self.position = self.origin();
    }

    /// Select the step size at `index` (0-based); out-of-range indices are ignored.
    ///
    /// Returns `true` if the step changed.
    pub fn set_step_index(&mut self, index: usize) -> bool {
        match self.step_sizes.get(index) {
            Some(&step) if step != self.step => {
                self.step = step;
                true
            }
            _ => false,
        }
    }

    /// Move by `(dx, dy)` and clamp each axis independently.
    ///
    /// Returns `true` if the position changed.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        let next = self.bounds.clamp(self.position.offset(dx, dy));
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// Move one step in `direction`. Returns `true` if the position changed.
    pub fn step_toward(&mut self, direction: Direction) -> bool {
        let (ux, uy) = direction.unit();
        self.move_by(ux.saturating_mul(self.step), uy.saturating_mul(self.step))
    }

    /// Recenter. Returns `true` if the position changed.
    pub fn move_to_origin(&mut self) -> bool {
        let origin = self.origin();
        let moved = origin != self.position;
        self.position = origin;
        moved
    }
}
