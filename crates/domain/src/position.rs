//! Position — where a shutter sits along its travel.
//!
//! `0` is fully open (top end stop), `100` fully closed. The firmware this
//! replaces tracked the same scale and clamped everything into that range.

use serde::{Deserialize, Serialize};

/// Clamped shutter position, `0` (top) to `100` (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Fully open, at the top end stop.
    pub const TOP: Self = Self(0);
    /// Fully closed.
    pub const BOTTOM: Self = Self(100);

    /// Build a position, clamping into `0..=100`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        // clamp guarantees the range, so the conversion cannot fail
        Self(u8::try_from(value.clamp(0, 100)).unwrap_or(100))
    }

    /// Lenient parse of a scale field: the leading integer (optionally
    /// signed) is taken, anything trailing is ignored, garbage reads as 0.
    /// The result is clamped. Mirrors the tolerant integer parse the
    /// receiving firmware applied to the raw query value.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let digits: &str = {
            let mut end = 0;
            for (idx, ch) in trimmed.char_indices() {
                if ch == '-' && idx == 0 {
                    end = 1;
                } else if ch.is_ascii_digit() {
                    end = idx + ch.len_utf8();
                } else {
                    break;
                }
            }
            &trimmed[..end]
        };
        Self::new(digits.parse::<i64>().unwrap_or(0))
    }

    /// The raw value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Signed travel from `self` to `target`, in scale units.
    /// Positive means moving down.
    #[must_use]
    pub fn delta_to(self, target: Self) -> i16 {
        i16::from(target.0) - i16::from(self.0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
