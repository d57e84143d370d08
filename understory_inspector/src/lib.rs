// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Inspector: a hidden, keyboard-driven UI inspector.
//!
//! ## Overview
//!
//! The inspector sits in a transparent overlay on top of a host's view tree.
//! It stays dormant until the user types a secret key sequence, then takes
//! over the keyboard: direction keys move a crosshair cursor, `Select` picks
//! the element under it, repeated `Select` walks up toward the root, and
//! holding a direction while something is selected shows which element focus
//! would move to. `Back` drops the selection, and a second `Back` puts the
//! inspector to sleep again.
//!
//! ## Pieces
//!
//! - [`ActivationDetector`](crate::activation::ActivationDetector) watches key
//!   releases for any configured [`SecretSequence`](crate::activation::SecretSequence).
//! - [`CursorController`](crate::cursor::CursorController) owns the crosshair
//!   position, the step size, and clamping to the overlay's bounds.
//! - [`InspectionController`](crate::inspector::InspectionController) turns input
//!   into hit tests on an [`understory_view_tree::ViewTree`] and pushes what to
//!   draw into an [`Overlay`](crate::overlay::Overlay).
//! - [`InspectorConfig`](crate::config::InspectorConfig) carries colors, step
//!   sizes, the hit test policy, and the secret sequences.
//!
//! ## Input contract
//!
//! While disarmed every event is reported as
//! [`PassThrough`](crate::types::InputOutcome::PassThrough), including the
//! one that completes a secret sequence. Once armed every event is
//! [`Consumed`](crate::types::InputOutcome::Consumed).
//!
//! ## Example
//!
//! ```
//! use understory_inspector::config::InspectorConfig;
//! use understory_inspector::inspector::InspectionController;
//! use understory_inspector::overlay::{Highlight, Overlay};
//! use understory_inspector::types::{InputEvent, Key};
//! use understory_view_tree::{LocalNode, NodeFlags, PixelRect, Tree};
//!
//! #[derive(Default)]
//! struct Screen {
//!     selected: Option<Highlight>,
//! }
//!
//! impl Overlay for Screen {
//!     fn set_visible(&mut self, _visible: bool) {}
//!     fn highlight_primary(&mut self, h: Option<Highlight>) {
//!         self.selected = h;
//!     }
//!     fn highlight_secondary(&mut self, _h: Option<Highlight>) {}
//!     fn request_redraw(&mut self) {}
//! }
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, LocalNode::container("Root", PixelRect::new(0, 0, 100, 100)));
//! let ok = tree.insert(Some(root), LocalNode::leaf("Button", PixelRect::new(40, 40, 60, 60)).with_id("id/ok"));
//! let overlay = tree.insert(
//!     Some(root),
//!     LocalNode::leaf("Overlay", PixelRect::new(0, 0, 100, 100))
//!         .with_flags(NodeFlags::VISIBLE | NodeFlags::OVERLAY),
//! );
//!
//! let mut inspector = InspectionController::new(Screen::default(), InspectorConfig::default());
//! inspector.attach(overlay);
//! inspector.set_bounds(PixelRect::new(0, 0, 100, 100));
//!
//! for digit in [9, 5, 2, 7] {
//!     inspector.handle_input(&tree, InputEvent::release(Key::Digit(digit)));
//! }
//! assert!(inspector.is_armed());
//!
//! inspector.handle_input(&tree, InputEvent::release(Key::Select));
//! assert_eq!(inspector.current_node(), Some(ok));
//! let label = &inspector.overlay().selected.as_ref().unwrap().label;
//! assert_eq!(label, "Button id/ok, Rect(0, 0 - 20, 20), Rect(40, 40 - 60, 60)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod activation;
pub mod color;
pub mod config;
pub mod cursor;
pub mod inspector;
pub mod label;
pub mod overlay;
pub mod types;
