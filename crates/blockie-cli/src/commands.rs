//! Subcommand dispatch and the diagnostic helpers

use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::process::Command;

use crate::app::BridgeApp;
use crate::cli::{Cli, Commands};
use crate::config::BridgeConfig;
use crate::error::{CliError, Result};

pub struct CommandDispatcher;

impl CommandDispatcher {
    pub async fn execute(cli: Cli, mut config: BridgeConfig) -> Result<()> {
        match cli.command {
            Commands::Run {
                name,
                local_name,
                socket,
            } => {
                if let Some(name) = name {
                    config.identity = name;
                }
                if let Some(local_name) = local_name {
                    config.local_name = local_name;
                }
                if let Some(socket) = socket {
                    config.socket_path = socket;
                }
                BridgeApp::new(config).run().await
            }
            Commands::Probe { socket, messages } => {
                let path = socket.unwrap_or(config.socket_path);
                let messages = if messages.is_empty() {
                    default_probe_messages()
                } else {
                    messages
                };
                probe(&path, &messages).await
            }
            Commands::Adapters => adapters().await,
        }
    }
}

fn default_probe_messages() -> Vec<String> {
    vec![
        "Sup from the other side of the socket".to_string(),
        "Anotha one".to_string(),
    ]
}

/// Connect to a running bridge's socket, send each message and print the
/// acknowledgement it returns.
pub async fn probe(path: &Path, messages: &[String]) -> Result<()> {
    let mut stream = UnixStream::connect(path).await.map_err(|e| {
        CliError::Probe(format!(
            "could not connect to {} (is the bridge running?): {e}",
            path.display()
        ))
    })?;

    let mut buf = [0u8; 1024];
    for message in messages {
        stream.write_all(message.as_bytes()).await?;
        println!("sent: {message}");

        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Err(CliError::Probe("connection closed by the bridge".into()));
        }
        print!("received: {}", String::from_utf8_lossy(&buf[..n]));
    }
    Ok(())
}

/// Informational adapter listing via the system Bluetooth CLI.
pub async fn adapters() -> Result<()> {
    let output = Command::new("bluetoothctl")
        .arg("list")
        .output()
        .await
        .map_err(|e| CliError::Bluetoothctl(format!("could not execute bluetoothctl: {e}")))?;

    if !output.status.success() {
        return Err(CliError::Bluetoothctl(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    print!("{}", String::from_utf8_lossy(&output.stdout));
    Ok(())
}
