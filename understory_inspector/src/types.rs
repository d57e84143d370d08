// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core input types: keys, actions, events, and outcomes.
//!
//! ## Overview
//!
//! The inspector consumes a strictly sequential stream of [`InputEvent`]s.
//! Hosts translate their native key codes into [`Key`]; anything the
//! inspector has no binding for maps to [`Key::Other`].

use understory_view_tree::Direction;

/// A key, as far as the inspector is concerned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Directional pad up.
    Up,
    /// Directional pad down.
    Down,
    /// Directional pad left.
    Left,
    /// Directional pad right.
    Right,
    /// Center / select; shows the element under the cursor.
    Select,
    /// Back / cancel.
    Back,
    /// Channel up (used by the default secret sequences).
    ChannelUp,
    /// Channel down (used by the default secret sequences).
    ChannelDown,
    /// A digit key, `0..=9`.
    Digit(u8),
    /// Any other host key code.
    Other(u32),
}

impl Key {
    /// The direction bound to this key, if it is directional.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Whether a key went down or came up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyAction {
    /// Key down.
    Press,
    /// Key up.
    Release,
}

/// One input event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputEvent {
    /// The key.
    pub key: Key,
    /// Press or release.
    pub action: KeyAction,
}

impl InputEvent {
    /// A key-down event.
    pub const fn press(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Press,
        }
    }

    /// A key-up event.
    pub const fn release(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Release,
        }
    }
}

/// What the host should do with an event after the inspector saw it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputOutcome {
    /// The inspector used the event; do not deliver it to the UI.
    Consumed,
    /// Deliver the event to the UI as usual.
    PassThrough,
}

impl InputOutcome {
    /// Returns `true` for [`InputOutcome::Consumed`].
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
