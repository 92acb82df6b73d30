//! Instruction — the three motions a shutter motor understands.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Direction word transmitted to a shutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    Up,
    Down,
    Stop,
}

impl Instruction {
    /// The direction byte of the RF frame.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Up => 0b0001_0001,
            Self::Down => 0b0011_0011,
            Self::Stop => 0b0101_0101,
        }
    }

    /// Decode a direction word from the panel's command string.
    ///
    /// Only the first letter is significant (`u`, `d`, `s`), matching the
    /// remote-control links on the panel page (`up`, `down`, `stop`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownInstruction`] for anything else.
    pub fn parse(word: &str) -> Result<Self, DecodeError> {
        match word.chars().next() {
            Some('u') => Ok(Self::Up),
            Some('d') => Ok(Self::Down),
            Some('s') => Ok(Self::Stop),
            _ => Err(DecodeError::UnknownInstruction(word.to_string())),
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Stop => f.write_str("stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_full_direction_words() {
        assert_eq!(Instruction::parse("up").unwrap(), Instruction::Up);
        assert_eq!(Instruction::parse("down").unwrap(), Instruction::Down);
        assert_eq!(Instruction::parse("stop").unwrap(), Instruction::Stop);
    }

    #[test]
    fn should_parse_by_first_letter_only() {
        assert_eq!(Instruction::parse("u").unwrap(), Instruction::Up);
        assert_eq!(Instruction::parse("sideways").unwrap(), Instruction::Stop);
    }

    #[test]
    fn should_reject_unknown_direction() {
        let err = Instruction::parse("left").unwrap_err();
        assert_eq!(err, DecodeError::UnknownInstruction("left".to_string()));
    }

    #[test]
    fn should_reject_empty_direction() {
        assert!(Instruction::parse("").is_err());
    }

    #[test]
    fn should_encode_direction_bytes() {
        assert_eq!(Instruction::Up.code(), 0x11);
        assert_eq!(Instruction::Down.code(), 0x33);
        assert_eq!(Instruction::Stop.code(), 0x55);
    }

    #[test]
    fn should_display_lowercase_word() {
        assert_eq!(Instruction::Down.to_string(), "down");
    }
}
