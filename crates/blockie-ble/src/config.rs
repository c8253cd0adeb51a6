//! UART service configuration

// ----------------------------------------------------------------------------
// Configuration
// ----------------------------------------------------------------------------

/// Configuration for the BLE UART service
#[derive(Debug, Clone)]
pub struct UartServiceConfig {
    /// Local name carried in the advertisement
    pub local_name: String,
    /// Initial sender identity used for framing until a naming command arrives
    pub initial_identity: String,
    /// Capacity of the queue between the RX handler and the TX notifier
    pub notify_queue: usize,
}

impl Default for UartServiceConfig {
    fn default() -> Self {
        Self {
            local_name: "Clock".to_string(),
            initial_identity: "User".to_string(),
            notify_queue: 32,
        }
    }
}

impl UartServiceConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the advertised local name
    pub fn with_local_name(mut self, name: String) -> Self {
        self.local_name = name;
        self
    }

    /// Set the initial sender identity
    pub fn with_initial_identity(mut self, identity: String) -> Self {
        self.initial_identity = identity;
        self
    }

    /// Set the notification queue capacity
    pub fn with_notify_queue(mut self, capacity: usize) -> Self {
        self.notify_queue = capacity;
        self
    }
}
