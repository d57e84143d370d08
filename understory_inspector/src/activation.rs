// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hidden key-sequence detection.
//!
//! ## Overview
//!
//! [`ActivationDetector`] watches key releases while the inspector is
//! disarmed and arms it once any registered [`SecretSequence`] has been typed
//! in full. Presses are ignored.
//!
//! ## Matching
//!
//! - With nothing in progress, a key that equals the first key of a sequence
//!   selects that sequence (the first registered one wins).
//! - Each further key must equal the next expected key. Completing the
//!   sequence arms the detector and clears the match state.
//! - A wrong key abandons the attempt and is immediately tried again as the
//!   first key of a new attempt, so it can start a different (or the same)
//!   sequence without being dropped.
//!
//! ```
//! use understory_inspector::activation::ActivationDetector;
//! use understory_inspector::types::{InputEvent, Key};
//!
//! let mut detector = ActivationDetector::default();
//! for d in [9, 5, 2, 7] {
//!     detector.feed(InputEvent::release(Key::Digit(d)));
//! }
//! assert!(detector.is_armed());
//! ```

use alloc::vec::Vec;

use crate::types::{InputEvent, Key, KeyAction};

/// A fixed, non-empty key sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretSequence {
    keys: Vec<Key>,
}

impl SecretSequence {
    /// Create a sequence; returns `None` if `keys` is empty.
    pub fn new(keys: &[Key]) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }
        Some(Self {
            keys: keys.to_vec(),
        })
    }

    /// The keys, in order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; sequences are non-empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn first(&self) -> Key {
        self.keys[0]
    }
}

/// The two built-in sequences: `CH+ CH- CH- CH+` and `9 5 2 7`.
pub fn default_sequences() -> Vec<SecretSequence> {
    let channels = SecretSequence {
        keys: alloc::vec![Key::ChannelUp, Key::ChannelDown, Key::ChannelDown, Key::ChannelUp],
    };
    let digits = SecretSequence {
        keys: alloc::vec![Key::Digit(9), Key::Digit(5), Key::Digit(2), Key::Digit(7)],
    };
    alloc::vec![channels, digits]
}

/// Arms the inspector when a secret sequence is typed.
#[derive(Clone, Debug)]
pub struct ActivationDetector {
    sequences: Vec<SecretSequence>,
    /// Index into `sequences` of the attempt in progress.
    active: Option<usize>,
    /// Keys of the active sequence matched so far; `0` whenever `active` is `None`.
    matched: usize,
    armed: bool,
}

impl Default for ActivationDetector {
    fn default() -> Self {
        Self::new(default_sequences())
    }
}

impl ActivationDetector {
    /// Create a disarmed detector for the given sequences.
    pub fn new(sequences: Vec<SecretSequence>) -> Self {
        Self {
            sequences,
            active: None,
            matched: 0,
            armed: false,
        }
    }

    /// Whether the inspector is armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Registered sequences.
    pub fn sequences(&self) -> &[SecretSequence] {
        &self.sequences
    }

    /// Number of keys matched in the attempt in progress.
    pub fn progress(&self) -> usize {
        self.matched
    }

    /// Disarm and clear any partial match.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.reset();
    }

    /// Feed one event while disarmed.
    ///
    /// Returns `true` if this event armed the detector. Events fed while
    /// already armed are ignored; the caller routes those elsewhere.
    pub fn feed(&mut self, event: InputEvent) -> bool {
        if self.armed || event.action != KeyAction::Release {
            return false;
        }
        let key = event.key;

        // At most two passes: a key that breaks an attempt in progress is
        // retried once against fresh state, where `matched == 0`.
        loop {
            if self.matched == 0 {
                self.active = self.sequences.iter().position(|s| s.first() == key);
            }
            let Some(active) = self.active else {
                return false;
            };
            let sequence = &self.sequences[active];

            if sequence.keys[self.matched] == key {
                self.matched += 1;
                if self.matched >= sequence.len() {
                    self.armed = true;
                    self.reset();
                    tracing::info!(sequence = active, "inspector armed");
                    return true;
                }
                return false;
            }

            let retry = self.matched > 0;
            self.reset();
            if !retry {
                return false;
            }
        }
    }

    fn reset(&mut self) {
        self.active = None;
        self.matched = 0;
    }
}
