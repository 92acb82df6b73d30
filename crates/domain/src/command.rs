//! Command — one unit of work for a single shutter.
//!
//! Commands arrive over two wire shapes:
//! - the manual-control links send `command=<digit>,<direction>`;
//! - the multi-select form sends `shutter_scale=<scale>` plus device
//!   tokens, which decode into one absolute command per named device.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::id::CommandId;
use crate::instruction::Instruction;
use crate::position::Position;
use crate::shutter::ShutterId;

/// What a command asks the shutter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    /// Start moving in a direction (or stop).
    Relative(Instruction),
    /// Move to an absolute position using the timed-travel estimate.
    MoveTo(Position),
    /// Drive to the top end stop to re-establish a known position.
    Calibrate,
}

/// A command addressed to one shutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutterCommand {
    pub id: CommandId,
    pub shutter: ShutterId,
    pub action: CommandAction,
}

impl ShutterCommand {
    /// Build a relative command.
    #[must_use]
    pub fn relative(shutter: ShutterId, instruction: Instruction) -> Self {
        Self {
            id: CommandId::new(),
            shutter,
            action: CommandAction::Relative(instruction),
        }
    }

    /// Build an absolute command.
    #[must_use]
    pub fn move_to(shutter: ShutterId, position: Position) -> Self {
        Self {
            id: CommandId::new(),
            shutter,
            action: CommandAction::MoveTo(position),
        }
    }

    /// Build a calibration command.
    #[must_use]
    pub fn calibrate(shutter: ShutterId) -> Self {
        Self {
            id: CommandId::new(),
            shutter,
            action: CommandAction::Calibrate,
        }
    }

    /// Decode a manual-control command string such as `3,up`.
    ///
    /// The first character selects the device, the second must be a comma,
    /// the rest is the direction word.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedCommand`] when the shape is wrong,
    /// or the device/instruction errors from the inner decoders.
    pub fn parse_relative(input: &str) -> Result<Self, DecodeError> {
        let Some((device, direction)) = input.split_once(',') else {
            return Err(DecodeError::MalformedCommand(input.to_string()));
        };
        if device.len() != 1 {
            return Err(DecodeError::MalformedCommand(input.to_string()));
        }
        let shutter = ShutterId::from_digit(device)?;
        let instruction = Instruction::parse(direction)?;
        Ok(Self::relative(shutter, instruction))
    }

    /// Decode an absolute command from a device token and the raw scale
    /// field. The scale is parsed leniently and clamped.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownShutter`] when the token names no
    /// installed device.
    pub fn parse_absolute(token: &str, scale: &str) -> Result<Self, DecodeError> {
        let shutter = ShutterId::from_token(token)?;
        Ok(Self::move_to(shutter, Position::parse_lenient(scale)))
    }
}
