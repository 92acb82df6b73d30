//! Transmitter port — sending command frames over the RF link.

use std::future::Future;

use shutterhub_domain::error::ShutterHubError;
use shutterhub_domain::rf::Frame;

/// Sends a command frame to the shutters.
///
/// Implementations own the physical repetition of the packet
/// ([`timing::REPEATS`](shutterhub_domain::rf::timing::REPEATS) times with
/// the inter-packet gap); callers hand over one logical frame.
pub trait Transmitter {
    /// Transmit one frame.
    fn transmit(&self, frame: Frame) -> impl Future<Output = Result<(), ShutterHubError>> + Send;
}

impl<T: Transmitter + Send + Sync> Transmitter for std::sync::Arc<T> {
    fn transmit(&self, frame: Frame) -> impl Future<Output = Result<(), ShutterHubError>> + Send {
        (**self).transmit(frame)
    }
}
