// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque 24-bit colors.

use core::fmt;
use core::str::FromStr;

use crate::config::ConfigError;

/// An opaque RGB color, `0xRRGGBB`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// `#FFFFFF`.
    pub const WHITE: Self = Self(0x00FF_FFFF);
    /// `#0000FF`.
    pub const BLUE: Self = Self(0x0000_00FF);
    /// `#FF0000`.
    pub const RED: Self = Self(0x00FF_0000);

    /// From channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// From a packed value; any alpha byte is dropped.
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// Packed `0xRRGGBB`.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `0xAARRGGBB`, or a decimal integer
/// (negative values are read as two's-complement ARGB).
impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::Empty);
        }
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));
        if let Some(digits) = hex {
            if digits.is_empty() || digits.len() > 8 {
                return Err(ConfigError::InvalidHex);
            }
            let value = u32::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidHex)?;
            return Ok(Self::from_packed(value));
        }
        let value: i64 = s.parse().map_err(|_| ConfigError::InvalidDecimal)?;
        let packed = if value < 0 {
            u32::try_from(value + (1_i64 << 32)).map_err(|_| ConfigError::OutOfRange)?
        } else {
            u32::try_from(value).map_err(|_| ConfigError::OutOfRange)?
        };
        Ok(Self::from_packed(packed))
    }
}
