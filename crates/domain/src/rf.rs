//! RF frame codec for the 433 MHz shutter link.
//!
//! A frame is five bytes: a fixed three-byte header, the device select
//! byte, and the direction byte. On air each frame is OOK-modulated as a
//! sync pulse followed by 40 bit pulses, and the whole packet is repeated
//! [`timing::REPEATS`] times with a gap in between.
//!
//! ```text
//! ________ HEAD ___ HEAD ___ HEAD __ SELECT__ DIR __
//! stop 4   11001011 01111010 01010001 00000100 01010101
//! up 4     11001011 01111010 01010001 00000100 00010001
//! down 4   11001011 01111010 01010001 00000100 00110011
//! ```

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;
use crate::shutter::ShutterId;

/// Pulse timings for the OOK link, in microseconds.
pub mod timing {
    /// High time of a `0` bit.
    pub const ZERO_HIGH_US: u32 = 350;
    /// Low time of a `0` bit.
    pub const ZERO_LOW_US: u32 = 700;
    /// High time of a `1` bit.
    pub const ONE_HIGH_US: u32 = 630;
    /// Low time of a `1` bit.
    pub const ONE_LOW_US: u32 = 300;
    /// High time of the synchronization pulse.
    pub const SYNC_HIGH_US: u32 = 4_700;
    /// Low time of the synchronization pulse.
    pub const SYNC_LOW_US: u32 = 1_500;
    /// Idle gap between two repeated packets.
    pub const PACKET_GAP_US: u32 = 7_400;
    /// How many times each frame is repeated on air.
    pub const REPEATS: usize = 5;
}

/// Fixed frame header shared by every command.
pub const HEADER: [u8; 3] = [0b1100_1011, 0b0111_1010, 0b0101_0001];

/// One on/off keying pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Carrier-on time in microseconds.
    pub high_us: u32,
    /// Carrier-off time in microseconds.
    pub low_us: u32,
}

/// A complete five-byte command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame([u8; 5]);

impl Frame {
    /// Encode the frame commanding `shutter` to perform `instruction`.
    #[must_use]
    pub fn encode(shutter: ShutterId, instruction: Instruction) -> Self {
        Self([
            HEADER[0],
            HEADER[1],
            HEADER[2],
            shutter.select_id(),
            instruction.code(),
        ])
    }

    /// The raw frame bytes, header first.
    #[must_use]
    pub fn bytes(&self) -> [u8; 5] {
        self.0
    }

    /// The device select byte.
    #[must_use]
    pub fn select(&self) -> u8 {
        self.0[3]
    }

    /// The direction byte.
    #[must_use]
    pub fn direction(&self) -> u8 {
        self.0[4]
    }

    /// The on-air pulse schedule for a single packet: one sync pulse, then
    /// 40 bit pulses, most significant bit of each byte first. The caller
    /// repeats the packet [`timing::REPEATS`] times, inserting
    /// [`timing::PACKET_GAP_US`] of idle between repetitions.
    #[must_use]
    pub fn pulse_train(&self) -> Vec<Pulse> {
        let mut pulses = Vec::with_capacity(1 + 40);
        pulses.push(Pulse {
            high_us: timing::SYNC_HIGH_US,
            low_us: timing::SYNC_LOW_US,
        });
        for byte in self.0 {
            for bit in (0..8).rev() {
                pulses.push(if (byte >> bit) & 1 == 1 {
                    Pulse {
                        high_us: timing::ONE_HIGH_US,
                        low_us: timing::ONE_LOW_US,
                    }
                } else {
                    Pulse {
                        high_us: timing::ZERO_HIGH_US,
                        low_us: timing::ZERO_LOW_US,
                    }
                });
            }
        }
        pulses
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, select, direction] = self.0;
        write!(f, "{a:02x}{b:02x}{c:02x} sel={select:02x} dir={direction:02x}")
    }
}
