//! Error types for the BLE UART service

use thiserror::Error;

// ----------------------------------------------------------------------------
// Error Types
// ----------------------------------------------------------------------------

/// Errors raised while bringing up the UART service.
///
/// All of these are fatal startup conditions: nothing here is retried, the
/// caller is expected to report the failure and exit.
#[derive(Error, Debug)]
pub enum BleUartError {
    #[error("failed to open BlueZ session: {0}")]
    Session(#[source] bluer::Error),

    #[error("no usable Bluetooth adapter: {0}")]
    Adapter(#[source] bluer::Error),

    #[error("failed to power on adapter: {0}")]
    PowerOn(#[source] bluer::Error),

    #[error("failed to register GATT application: {0}")]
    ServiceRegistration(#[source] bluer::Error),

    #[error("failed to start advertising: {0}")]
    Advertise(#[source] bluer::Error),
}

/// Result type for UART service operations
pub type Result<T> = std::result::Result<T, BleUartError>;
