//! # shutterhub-adapter-virtual
//!
//! Virtual transmitter for demo and test runs.
//!
//! The production device keys a 433 MHz OOK transmitter from a GPIO pin,
//! which only exists on the target hardware. This adapter implements the
//! same [`Transmitter`] port by recording every frame in memory and
//! logging it, so the full stack can run anywhere.
//!
//! ## Dependency rule
//!
//! Depends on `shutterhub-app` (port traits) and `shutterhub-domain` only.

use std::sync::{Mutex, PoisonError};

use shutterhub_app::ports::Transmitter;
use shutterhub_domain::error::ShutterHubError;
use shutterhub_domain::rf::{Frame, timing};

/// Transmitter that records frames instead of keying a radio.
#[derive(Default)]
pub struct VirtualTransmitter {
    frames: Mutex<Vec<Frame>>,
}

impl VirtualTransmitter {
    /// Create an empty virtual transmitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame transmitted so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transmitter for VirtualTransmitter {
    async fn transmit(&self, frame: Frame) -> Result<(), ShutterHubError> {
        tracing::info!(
            frame = %frame,
            pulses = frame.pulse_train().len(),
            repeats = timing::REPEATS,
            "transmitting"
        );
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame);
        Ok(())
    }
}
