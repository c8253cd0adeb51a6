//! Bridge application wiring

use std::sync::Arc;

use blockie_ble::{LogObserver, UartService, UartServiceConfig};
use blockie_broker::Broker;
use tracing::info;

use crate::config::BridgeConfig;
use crate::error::Result;

/// The bridge process: one BLE UART service and one socket broker.
pub struct BridgeApp {
    config: BridgeConfig,
}

impl BridgeApp {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Bring up both halves and run until interrupted.
    ///
    /// Any BLE or bind failure here is fatal; after startup the two paths
    /// are independent fault domains and only a signal stops the process.
    pub async fn run(self) -> Result<()> {
        let uart_config = UartServiceConfig::new()
            .with_local_name(self.config.local_name.clone())
            .with_initial_identity(self.config.identity.clone());

        let mut uart = UartService::new(uart_config, Arc::new(LogObserver)).await?;
        uart.start().await?;

        let broker = Broker::new(&self.config.socket_path);

        tokio::select! {
            result = broker.run() => result?,
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
            }
        }
        Ok(())
    }
}
