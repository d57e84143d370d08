// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inspection controller.
//!
//! ## Overview
//!
//! [`InspectionController`] takes one [`InputEvent`] at a time. While
//! disarmed it only feeds the [`ActivationDetector`] and lets every event
//! through. Once armed it consumes everything:
//!
//! | Input | Not showing | Showing |
//! |---|---|---|
//! | direction press | move cursor one step, drop selection | show focus neighbor in that direction |
//! | direction release | – | clear focus neighbor |
//! | `Select` release | hit test at cursor, show deepest | show next shallower (wraps to deepest) |
//! | `Back` release | disarm | drop selection |
//! | `Digit(1..=6)` release | set step size | set step size |
//! | `Digit(0)` release | recenter cursor, drop selection | recenter cursor, drop selection |
//!
//! ## Sessions
//!
//! The first `Select` runs a fresh hit test at the cursor and, if anything
//! was hit, opens a session on that path. Each `Select` shows one entry,
//! starting at the deepest and walking toward the root, then wrapping. The
//! session lasts until the cursor moves, the selection is dropped, or the
//! inspector is disarmed.
//!
//! ## Host obligations
//!
//! Events must arrive one at a time, in order. The tree passed to
//! [`handle_input`](InspectionController::handle_input) may change between
//! calls but must not change during one.

use alloc::format;
use alloc::string::String;

use understory_view_tree::{Direction, HitPath, HitTestEngine, PixelRect, ScreenPoint, ViewTree};

use crate::activation::ActivationDetector;
use crate::color::Rgb;
use crate::config::InspectorConfig;
use crate::cursor::CursorController;
use crate::label::describe;
use crate::overlay::{Highlight, Overlay};
use crate::types::{InputEvent, InputOutcome, Key, KeyAction};

/// An open selection: the hit path under the cursor and the entry the next
/// `Select` will show.
#[derive(Clone, Debug)]
struct InspectionSession<K> {
    path: HitPath<K>,
    next: usize,
}

/// Drives the inspector from input events.
///
/// `K` is the host's node handle and `O` the rendering collaborator.
pub struct InspectionController<K, O> {
    config: InspectorConfig,
    detector: ActivationDetector,
    cursor: CursorController,
    engine: HitTestEngine,
    overlay: O,
    /// The overlay's own node; its parent is the hit test root.
    attachment: Option<K>,
    session: Option<InspectionSession<K>>,
    current: Option<K>,
    neighbor_active: bool,
    redraw_pending: bool,
}

impl<K: core::fmt::Debug, O> core::fmt::Debug for InspectionController<K, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InspectionController")
            .field("armed", &self.detector.is_armed())
            .field("cursor", &self.cursor.position())
            .field("attachment", &self.attachment)
            .field("current", &self.current)
            .field("neighbor_active", &self.neighbor_active)
            .finish_non_exhaustive()
    }
}

impl<K, O> InspectionController<K, O>
where
    K: Copy + Eq + core::fmt::Debug,
    O: Overlay,
{
    /// Create a disarmed controller with empty bounds and no attachment.
    pub fn new(overlay: O, config: InspectorConfig) -> Self {
        Self {
            detector: ActivationDetector::new(config.secret_sequences.clone()),
            cursor: CursorController::with_steps(
                PixelRect::ZERO,
                config.step_sizes,
                config.initial_step,
            ),
            engine: HitTestEngine::new(config.policy),
            config,
            overlay,
            attachment: None,
            session: None,
            current: None,
            neighbor_active: false,
            redraw_pending: false,
        }
    }

    /// Name the overlay's own node in the host tree.
    ///
    /// Hit tests start at that node's parent.
    pub fn attach(&mut self, overlay_node: K) {
        self.attachment = Some(overlay_node);
    }

    /// Forget the attachment and drop any selection.
    pub fn detach(&mut self) {
        self.attachment = None;
        self.clear_selection();
        self.flush_redraw();
    }

    /// The overlay was laid out at `bounds`; recenter the cursor there.
    ///
    /// If that moves the cursor, any selection is dropped.
    pub fn set_bounds(&mut self, bounds: PixelRect) {
        let before = self.cursor.position();
        self.cursor.set_bounds(bounds);
        self.overlay.move_cursor_to_origin(self.cursor.position());
        if self.cursor.position() != before {
            self.clear_selection();
        }
        self.redraw_pending = true;
        self.flush_redraw();
    }

    /// Handle one input event.
    pub fn handle_input<T>(&mut self, tree: &T, event: InputEvent) -> InputOutcome
    where
        T: ViewTree<Node = K>,
    {
        let outcome = if self.detector.is_armed() {
            self.handle_armed(tree, event);
            InputOutcome::Consumed
        } else {
            if self.detector.feed(event) {
                self.overlay.set_visible(true);
                self.redraw_pending = true;
            }
            InputOutcome::PassThrough
        };
        self.flush_redraw();
        outcome
    }

    /// Whether the inspector is armed.
    pub fn is_armed(&self) -> bool {
        self.detector.is_armed()
    }

    /// Whether a selection session is open.
    pub fn is_showing(&self) -> bool {
        self.session.is_some()
    }

    /// The element shown as the primary selection.
    pub fn current_node(&self) -> Option<K> {
        self.current
    }

    /// Whether a direction key is held and its neighbor query is active.
    pub fn is_showing_neighbor(&self) -> bool {
        self.neighbor_active
    }

    /// The hit path of the open session.
    pub fn hit_path(&self) -> Option<&HitPath<K>> {
        self.session.as_ref().map(|s| &s.path)
    }

    /// Index into [`hit_path`](Self::hit_path) that the next `Select` shows.
    pub fn path_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.next)
    }

    /// Cursor position.
    pub fn cursor_position(&self) -> ScreenPoint {
        self.cursor.position()
    }

    /// Current step size.
    pub fn step(&self) -> i32 {
        self.cursor.step()
    }

    /// The configuration in use.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The rendering collaborator.
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// The rendering collaborator, mutably.
    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    /// Text for the cursor readout: `(x, y)`, plus `  #RRGGBB` when the
    /// overlay can sample the pixel under the cursor.
    pub fn cursor_readout(&self) -> String {
        let p = self.cursor.position();
        match self.overlay.pixel_color_at(p) {
            Some(color) => format!("{p}  {color}"),
            None => format!("{p}"),
        }
    }

    fn handle_armed<T>(&mut self, tree: &T, event: InputEvent)
    where
        T: ViewTree<Node = K>,
    {
        if let Some(direction) = event.key.direction() {
            match (self.session.is_some(), event.action) {
                (true, KeyAction::Press) => self.show_neighbor(tree, direction),
                (true, KeyAction::Release) => self.hide_neighbor(),
                (false, KeyAction::Press) => self.step_cursor(direction),
                (false, KeyAction::Release) => {}
            }
            return;
        }

        if event.action != KeyAction::Release {
            return;
        }
        match event.key {
            Key::Digit(0) => self.recenter(),
            Key::Digit(d @ 1..=6) => {
                self.cursor.set_step_index(usize::from(d - 1));
            }
            Key::Select => self.show_at_cursor(tree),
            Key::Back => {
                if self.session.is_some() {
                    self.clear_selection();
                } else {
                    self.disarm();
                }
            }
            _ => {}
        }
    }

    fn show_at_cursor<T>(&mut self, tree: &T)
    where
        T: ViewTree<Node = K>,
    {
        if self.session.is_none() {
            let Some(root) = self.attachment.and_then(|a| tree.parent(a)) else {
                tracing::warn!("overlay is not attached under a container; nothing to inspect");
                return;
            };
            let path = self.engine.hit_test(tree, root, self.cursor.position());
            if let Some(deepest) = path.len().checked_sub(1) {
                self.session = Some(InspectionSession {
                    path,
                    next: deepest,
                });
            }
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(node) = session.path.node(session.next) else {
            return;
        };
        session.next = match session.next {
            0 => session.path.len() - 1,
            n => n - 1,
        };

        self.current = Some(node);
        let highlight = highlight(tree, node, self.config.primary_color);
        tracing::debug!(?node, rect = %highlight.rect, "showing element");
        self.overlay.highlight_primary(Some(highlight));
        self.redraw_pending = true;
    }

    fn show_neighbor<T>(&mut self, tree: &T, direction: Direction)
    where
        T: ViewTree<Node = K>,
    {
        if self.neighbor_active {
            return;
        }
        self.neighbor_active = true;
        let Some(current) = self.current else {
            return;
        };
        let neighbor = tree.find_neighbor(current, direction);
        tracing::debug!(direction = direction.as_str(), ?neighbor, "focus neighbor");
        if let Some(neighbor) = neighbor {
            let highlight = highlight(tree, neighbor, self.config.secondary_color);
            self.overlay.highlight_secondary(Some(highlight));
            self.redraw_pending = true;
        }
    }

    fn hide_neighbor(&mut self) {
        self.neighbor_active = false;
        self.overlay.highlight_secondary(None);
        self.redraw_pending = true;
    }

    fn step_cursor(&mut self, direction: Direction) {
        let (ux, uy) = direction.unit();
        let step = self.cursor.step();
        let (dx, dy) = (ux.saturating_mul(step), uy.saturating_mul(step));
        if self.cursor.move_by(dx, dy) {
            self.overlay.move_cursor(dx, dy, self.cursor.position());
            self.redraw_pending = true;
        }
        self.clear_selection();
    }

    fn recenter(&mut self) {
        if self.cursor.move_to_origin() {
            self.redraw_pending = true;
        }
        self.overlay.move_cursor_to_origin(self.cursor.position());
        self.clear_selection();
    }

    fn disarm(&mut self) {
        self.clear_selection();
        self.detector.disarm();
        self.overlay.set_visible(false);
        self.redraw_pending = true;
        tracing::info!("inspector disarmed");
    }

    fn clear_selection(&mut self) {
        let had_session = self.session.take().is_some();
        let had_current = self.current.take().is_some();
        if had_session || had_current {
            self.overlay.highlight_primary(None);
            self.redraw_pending = true;
        }
        if self.neighbor_active {
            self.hide_neighbor();
        }
    }

    fn flush_redraw(&mut self) {
        if core::mem::take(&mut self.redraw_pending) {
            self.overlay.request_redraw();
        }
    }
}

fn highlight<T: ViewTree>(tree: &T, node: T::Node, color: Rgb) -> Highlight {
    let (rect, label) = describe(tree, node);
    Highlight { rect, label, color }
}
