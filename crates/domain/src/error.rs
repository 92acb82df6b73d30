//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Adapters map [`ShutterHubError`] onto their own surface (HTTP status
//! codes, log records) without inspecting message strings.

/// Top-level error for the shutterhub workspace.
#[derive(Debug, thiserror::Error)]
pub enum ShutterHubError {
    /// A wire-format command could not be decoded.
    #[error("decode error")]
    Decode(#[from] DecodeError),
    /// The RF transmitter failed to send a frame.
    #[error("transmit error")]
    Transmit(#[from] TransmitError),
}

/// Failure to decode a command from its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The shutter token or digit does not name a known device.
    #[error("unknown shutter `{0}`")]
    UnknownShutter(String),
    /// The direction word does not name a known instruction.
    #[error("unknown instruction `{0}`")]
    UnknownInstruction(String),
    /// The command string does not match the `<digit>,<direction>` shape.
    #[error("malformed command `{0}`")]
    MalformedCommand(String),
}

/// Failure reported by a transmitter adapter.
#[derive(Debug, thiserror::Error)]
#[error("transmitter failure: {reason}")]
pub struct TransmitError {
    /// Adapter-specific description of what went wrong.
    pub reason: String,
}

impl TransmitError {
    /// Build a transmit error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_decode_error_via_from() {
        let err: ShutterHubError = DecodeError::UnknownShutter("attic".into()).into();
        assert!(matches!(err, ShutterHubError::Decode(_)));
    }

    #[test]
    fn should_wrap_transmit_error_via_from() {
        let err: ShutterHubError = TransmitError::new("pin busy").into();
        assert!(matches!(err, ShutterHubError::Transmit(_)));
    }

    #[test]
    fn should_include_offending_token_in_message() {
        let err = DecodeError::UnknownShutter("attic".into());
        assert_eq!(err.to_string(), "unknown shutter `attic`");
    }
}
