//! Blockie Talkie core protocol
//!
//! Pure message transformation shared by the BLE and socket paths: the
//! sender [`Identity`], the in-band naming command, and display framing.
//! This crate does no I/O; the transports in `blockie-ble` and
//! `blockie-broker` drive it.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod protocol;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use protocol::{decode, frame, Identity, NAME_MARKER, SEPARATOR};
