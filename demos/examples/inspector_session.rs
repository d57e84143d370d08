// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector session.
//!
//! Builds a small settings screen, arms the inspector with the digit
//! sequence, walks the cursor onto a button, cycles the selection up to the
//! root, peeks at a focus neighbor, then backs out.
//!
//! Highlight colors come from `INSPECTOR_PRIMARY_COLOR` and
//! `INSPECTOR_SECONDARY_COLOR` when set (e.g. `#FF00FF`).
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example inspector_session`

use tracing_subscriber::EnvFilter;
use understory_inspector::color::Rgb;
use understory_inspector::config::{InspectorConfig, PRIMARY_COLOR_KEY, SECONDARY_COLOR_KEY};
use understory_inspector::inspector::InspectionController;
use understory_inspector::overlay::{Highlight, Overlay};
use understory_inspector::types::{InputEvent, Key};
use understory_view_tree::{LocalNode, NodeFlags, NodeId, PixelRect, ScreenPoint, Tree};

/// Prints what a real overlay would draw.
#[derive(Default)]
struct Console {
    redraws: usize,
}

impl Overlay for Console {
    fn set_visible(&mut self, visible: bool) {
        println!("  overlay {}", if visible { "shown" } else { "hidden" });
    }

    fn move_cursor(&mut self, dx: i32, dy: i32, position: ScreenPoint) {
        println!("  cursor {dx:+} {dy:+} -> {position}");
    }

    fn move_cursor_to_origin(&mut self, position: ScreenPoint) {
        println!("  cursor recentered at {position}");
    }

    fn highlight_primary(&mut self, highlight: Option<Highlight>) {
        match highlight {
            Some(h) => println!("  select [{}] {}", h.color, h.label),
            None => println!("  select cleared"),
        }
    }

    fn highlight_secondary(&mut self, highlight: Option<Highlight>) {
        match highlight {
            Some(h) => println!("  neighbor [{}] {}", h.color, h.label),
            None => println!("  neighbor cleared"),
        }
    }

    fn pixel_color_at(&self, point: ScreenPoint) -> Option<Rgb> {
        // A fake gradient stands in for sampling the framebuffer.
        let r = u8::try_from(point.x.clamp(0, 255)).ok()?;
        let g = u8::try_from(point.y.clamp(0, 255)).ok()?;
        Some(Rgb::new(r, g, 0x40))
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

fn settings_screen() -> (Tree, NodeId) {
    let focusable = NodeFlags::VISIBLE | NodeFlags::FOCUSABLE;
    let mut tree = Tree::new();
    let root = tree.insert(None, LocalNode::container("DecorView", PixelRect::new(0, 0, 320, 240)));
    let list = tree.insert(
        Some(root),
        LocalNode::container("LinearLayout", PixelRect::new(0, 40, 320, 200)).with_id("id/settings"),
    );
    tree.insert(
        Some(root),
        LocalNode::leaf("TextView", PixelRect::new(0, 0, 320, 40)).with_id("id/title"),
    );
    for (row, name) in ["id/wifi", "id/bluetooth", "id/display"].into_iter().enumerate() {
        let top = i32::try_from(row).unwrap_or(0) * 50 + 10;
        tree.insert(
            Some(list),
            LocalNode::leaf("Switch", PixelRect::new(20, top, 300, top + 40))
                .with_id(name)
                .with_flags(focusable),
        );
    }
    let overlay = tree.insert(
        Some(root),
        LocalNode::leaf("InspectorOverlay", PixelRect::new(0, 0, 320, 240))
            .with_flags(NodeFlags::VISIBLE | NodeFlags::OVERLAY),
    );
    (tree, overlay)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let primary = std::env::var("INSPECTOR_PRIMARY_COLOR").ok();
    let secondary = std::env::var("INSPECTOR_SECONDARY_COLOR").ok();
    let config = InspectorConfig::from_lookup(|key| match key {
        PRIMARY_COLOR_KEY => primary.as_deref(),
        SECONDARY_COLOR_KEY => secondary.as_deref(),
        _ => None,
    });

    let (tree, overlay) = settings_screen();
    let mut inspector = InspectionController::new(Console::default(), config);
    inspector.attach(overlay);
    inspector.set_bounds(PixelRect::new(0, 0, 320, 240));

    let taps = |keys: &[Key]| -> Vec<InputEvent> {
        keys.iter()
            .flat_map(|&k| [InputEvent::press(k), InputEvent::release(k)])
            .collect()
    };

    let script: Vec<(&str, Vec<InputEvent>)> = vec![
        ("type 9 5 2 7", taps(&[Key::Digit(9), Key::Digit(5), Key::Digit(2), Key::Digit(7)])),
        ("step 50, move up", taps(&[Key::Digit(5), Key::Up])),
        ("select, then walk up", taps(&[Key::Select, Key::Select])),
        ("wrap back to the switch", taps(&[Key::Select])),
        ("hold down", vec![InputEvent::press(Key::Down)]),
        ("release down", vec![InputEvent::release(Key::Down)]),
        ("back", taps(&[Key::Back])),
        ("recenter", taps(&[Key::Digit(0)])),
        ("back again", taps(&[Key::Back])),
    ];

    for (label, events) in script {
        println!("== {label} ==");
        for event in events {
            let outcome = inspector.handle_input(&tree, event);
            if !outcome.is_consumed() {
                println!("  {:?} {:?} passed through", event.action, event.key);
            }
        }
        println!("  readout {}", inspector.cursor_readout());
    }
    println!("redraws requested: {}", inspector.overlay().redraws);
}
