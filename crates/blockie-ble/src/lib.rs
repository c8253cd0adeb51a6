//! BLE UART GATT service for the Blockie Talkie bridge
//!
//! Exposes a Nordic UART Service to one wireless peer via BlueZ: the RX
//! characteristic accepts peer writes, which are run through the naming/
//! decode protocol from `blockie-core`, and the framed result is delivered
//! back as a notification on the TX characteristic.
//!
//! ## Architecture
//!
//! - [`protocol`] - Nordic UART service and characteristic UUIDs
//! - [`config`] - Service configuration
//! - [`error`] - Error types for service startup
//! - [`observer`] - Delivery outcome reporting
//! - [`handler`] - RX write event handling
//! - [`uart`] - GATT registration and advertising against BlueZ
//!
//! Linux only: the service registers against bluetoothd through `bluer`.

mod handler;
mod uart;

pub mod config;
pub mod error;
pub mod observer;
pub mod protocol;

// Public API exports
pub use config::UartServiceConfig;
pub use error::{BleUartError, Result};
pub use observer::{DeliveryObserver, LogObserver};
pub use protocol::{UART_RX_CHARACTERISTIC_UUID, UART_SERVICE_UUID, UART_TX_CHARACTERISTIC_UUID};
pub use uart::UartService;
