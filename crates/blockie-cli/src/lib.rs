//! Blockie Talkie bridge CLI
//!
//! Wires the BLE UART service and the socket broker into one process and
//! exposes the small diagnostic subcommands around them.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
