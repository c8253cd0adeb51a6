//! Error handling for the bridge CLI

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("BLE service error: {0}")]
    Ble(#[from] blockie_ble::BleUartError),

    #[error("broker error: {0}")]
    Broker(#[from] blockie_broker::BrokerError),

    #[error("probe error: {0}")]
    Probe(String),

    #[error("bluetoothctl error: {0}")]
    Bluetoothctl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
