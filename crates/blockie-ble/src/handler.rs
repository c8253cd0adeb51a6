//! RX characteristic write handling
//!
//! This is the event-handler half of the service: every peer write to the RX
//! characteristic is decoded against the current identity and the framed
//! result is queued for notification on TX. Kept free of any `bluer` types
//! so the relay logic is testable without a Bluetooth stack.

use std::sync::Arc;

use blockie_core::{decode, Identity};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use crate::observer::DeliveryObserver;

/// Shared state driven by RX write events.
pub(crate) struct RxState {
    /// Current sender identity. The RX handler is the single writer; the
    /// handle is shared so a future socket-to-BLE wiring can consult it.
    pub identity: Arc<Mutex<Identity>>,
    /// Most recent framed message, served on TX reads.
    pub last_frame: Arc<Mutex<Vec<u8>>>,
    /// Queue towards the TX notification loop.
    pub frames: mpsc::Sender<Vec<u8>>,
    pub observer: Arc<dyn DeliveryObserver>,
}

/// Handle one write to the RX characteristic.
///
/// Decodes the payload, stores the updated identity (last-write-wins) and
/// queues the framed text. Delivery is best-effort: the handler never waits
/// on queue capacity, so a full queue (no subscriber draining TX yet) drops
/// the frame and reports it to the delivery observer. Actual notification
/// outcomes are reported by the TX loop.
pub(crate) async fn handle_rx_write(state: &RxState, data: Vec<u8>) {
    let framed = {
        let mut identity = state.identity.lock().await;
        let (next, framed) = decode(&data, &identity);
        *identity = next;
        framed
    };
    debug!("framed message: {}", String::from_utf8_lossy(&framed));

    *state.last_frame.lock().await = framed.clone();

    match state.frames.try_send(framed.clone()) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            state
                .observer
                .delivery_failed(&framed, "notification queue full");
        }
        Err(TrySendError::Closed(_)) => {
            state
                .observer
                .delivery_failed(&framed, "notification task not running");
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
