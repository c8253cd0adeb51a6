//! Delivery outcome reporting for TX notifications
//!
//! Notification delivery is best-effort with no acknowledgement channel back
//! to the writer, so the outcome of each attempt is surfaced to an injected
//! observer instead of being dropped on the floor.

use tracing::{info, warn};

/// Receives the outcome of every TX notification attempt.
pub trait DeliveryObserver: Send + Sync {
    /// The frame was handed to the peer's notification stream.
    fn frame_sent(&self, frame: &[u8]);

    /// The frame could not be delivered.
    fn delivery_failed(&self, frame: &[u8], reason: &str);
}

/// Default observer that records outcomes through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl DeliveryObserver for LogObserver {
    fn frame_sent(&self, frame: &[u8]) {
        info!("sent message: {}", String::from_utf8_lossy(frame));
    }

    fn delivery_failed(&self, frame: &[u8], reason: &str) {
        warn!(
            "failed to deliver notification ({} bytes): {}",
            frame.len(),
            reason
        );
    }
}
