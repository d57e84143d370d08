// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector configuration.
//!
//! ## Options
//!
//! | Key | Field | Default | Affects |
//! |---|---|---|---|
//! | `inspector.primary_color` | [`InspectorConfig::primary_color`] | `#FFFFFF` | stroke of the selected element's box |
//! | `inspector.secondary_color` | [`InspectorConfig::secondary_color`] | `#0000FF` | stroke of the focus-neighbor box |
//!
//! Only the two colors are read from process-wide configuration, via
//! [`InspectorConfig::from_lookup`]. Everything else is set in code.
//!
//! Hosts migrating from the `debug.view_debugger.color` and
//! `debug.view_debugger.focus_color` properties can map those names onto the
//! two keys above inside their lookup closure.

use alloc::vec::Vec;

use understory_view_tree::TraversalPolicy;

use crate::activation::{SecretSequence, default_sequences};
use crate::color::Rgb;
use crate::cursor::{DEFAULT_STEP, DEFAULT_STEP_SIZES};

/// Configuration key for the primary highlight color.
pub const PRIMARY_COLOR_KEY: &str = "inspector.primary_color";

/// Configuration key for the secondary highlight color.
pub const SECONDARY_COLOR_KEY: &str = "inspector.secondary_color";

/// A configuration value could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The value was blank.
    #[error("empty value")]
    Empty,
    /// A `#`/`0x` value had bad digits or too many of them.
    #[error("invalid hexadecimal color")]
    InvalidHex,
    /// A plain value was not an integer.
    #[error("invalid decimal color")]
    InvalidDecimal,
    /// A decimal value does not fit in 32 bits.
    #[error("color value out of range")]
    OutOfRange,
}

/// Everything the inspector can be configured with.
#[derive(Clone, Debug)]
pub struct InspectorConfig {
    /// Color of the selected element's highlight.
    pub primary_color: Rgb,
    /// Color of the focus-neighbor highlight.
    pub secondary_color: Rgb,
    /// Step sizes bound to digits `1..=6`.
    pub step_sizes: [i32; 6],
    /// Step size before any digit is pressed.
    pub initial_step: i32,
    /// Hit test policy.
    pub policy: TraversalPolicy,
    /// Sequences that arm the inspector.
    pub secret_sequences: Vec<SecretSequence>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            primary_color: Rgb::WHITE,
            secondary_color: Rgb::BLUE,
            step_sizes: DEFAULT_STEP_SIZES,
            initial_step: DEFAULT_STEP,
            policy: TraversalPolicy::LeafSeeking,
            secret_sequences: default_sequences(),
        }
    }
}

impl InspectorConfig {
    /// Defaults, with the highlight colors taken from `lookup` where present.
    ///
    /// `lookup` maps a configuration key to its raw value. Missing keys keep
    /// the default; unparsable values keep the default and log a warning.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        Self {
            primary_color: color_or(&lookup, PRIMARY_COLOR_KEY, defaults.primary_color),
            secondary_color: color_or(&lookup, SECONDARY_COLOR_KEY, defaults.secondary_color),
            ..defaults
        }
    }
}

fn color_or<'a, F>(lookup: &F, key: &str, default: Rgb) -> Rgb
where
    F: Fn(&str) -> Option<&'a str>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.parse() {
        Ok(color) => color,
        Err(error) => {
            tracing::warn!(key, raw, %error, "ignoring configured color");
            default
        }
    }
}
