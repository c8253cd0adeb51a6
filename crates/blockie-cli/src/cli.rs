//! Command-line interface definitions and parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockie", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bridge: BLE UART service plus socket broker
    Run {
        /// Initial sender display name
        #[arg(short, long)]
        name: Option<String>,

        /// Advertised BLE local name
        #[arg(short, long)]
        local_name: Option<String>,

        /// Socket path to listen on
        #[arg(short, long)]
        socket: Option<PathBuf>,
    },
    /// Send test messages to a running bridge's socket
    Probe {
        /// Socket path to connect to
        #[arg(short, long)]
        socket: Option<PathBuf>,

        /// Messages to send (defaults to a short canned exchange)
        messages: Vec<String>,
    },
    /// List Bluetooth adapters via bluetoothctl
    Adapters,
}
