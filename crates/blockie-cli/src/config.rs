//! Bridge configuration

use std::path::PathBuf;

use blockie_broker::Broker;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the bridge process.
///
/// Loaded from a TOML file when one is given on the command line; every
/// field falls back to its default otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Local name carried in the BLE advertisement
    pub local_name: String,
    /// Initial sender display name
    pub identity: String,
    /// Filesystem path of the broker socket
    pub socket_path: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            local_name: "Clock".to_string(),
            identity: "User".to_string(),
            socket_path: Broker::default_socket_path(),
        }
    }
}

impl BridgeConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.local_name, "Clock");
        assert_eq!(config.identity, "User");
        assert_eq!(config.socket_path, Broker::default_socket_path());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: BridgeConfig = toml::from_str(r#"identity = "Alice""#).unwrap();
        assert_eq!(config.identity, "Alice");
        assert_eq!(config.local_name, "Clock");
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.toml");
        std::fs::write(
            &path,
            "local_name = \"Walkie\"\nsocket_path = \"/tmp/walkie.sock\"\n",
        )
        .unwrap();

        let config = BridgeConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.local_name, "Walkie");
        assert_eq!(config.socket_path, PathBuf::from("/tmp/walkie.sock"));
        assert_eq!(config.identity, "User");
    }
}
