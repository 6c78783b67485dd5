//! # Network Configuration
//!
//! Which Sui networks the app can talk to, and which one it uses by default.
//! A [`NetworkConfig`] maps a network name to its fullnode JSON-RPC endpoint.
//!
//! ```rust
//! use shared::network::NetworkConfig;
//!
//! let config = NetworkConfig::sui_defaults();
//! assert_eq!(config.default_network(), "devnet");
//! assert_eq!(config.url_for("mainnet").unwrap(), "https://fullnode.mainnet.sui.io:443");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

pub const DEFAULT_NETWORK: &str = "devnet";

/// Fullnode URL for one of the well-known Sui networks.
pub fn fullnode_url(network: &str) -> Result<&'static str> {
    match network {
        "mainnet" => Ok("https://fullnode.mainnet.sui.io:443"),
        "testnet" => Ok("https://fullnode.testnet.sui.io:443"),
        "devnet" => Ok("https://fullnode.devnet.sui.io:443"),
        "localnet" => Ok("http://127.0.0.1:9000"),
        other => Err(SharedError::UnknownNetwork(other.to_string())),
    }
}

/// A single configured endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    pub url: String,
}

/// Network name → endpoint, plus the network selected when nothing else is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    networks: BTreeMap<String, NetworkEndpoint>,
    default_network: String,
}

impl NetworkConfig {
    /// Build and validate a config.
    pub fn new(
        networks: BTreeMap<String, NetworkEndpoint>,
        default_network: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            networks,
            default_network: default_network.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// `devnet` and `mainnet`, defaulting to `devnet`.
    pub fn sui_defaults() -> Self {
        let networks = ["devnet", "mainnet"]
            .into_iter()
            .filter_map(|name| {
                fullnode_url(name).ok().map(|url| {
                    (name.to_string(), NetworkEndpoint { url: url.to_string() })
                })
            })
            .collect();

        Self {
            networks,
            default_network: DEFAULT_NETWORK.to_string(),
        }
    }

    /// Parse a JSON object of `name → url` strings.
    ///
    /// Empty URLs are filled in from [`fullnode_url`] when the name is well known.
    pub fn from_json(json: &str, default_network: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut networks = BTreeMap::new();
        for (name, url) in raw {
            let url = if url.is_empty() {
                fullnode_url(&name)?.to_string()
            } else {
                url
            };
            networks.insert(name, NetworkEndpoint { url });
        }
        Self::new(networks, default_network)
    }

    pub fn validate(&self) -> Result<()> {
        if self.networks.is_empty() {
            return Err(SharedError::InvalidConfig(
                "at least one network must be configured".to_string(),
            ));
        }

        if !self.networks.contains_key(&self.default_network) {
            return Err(SharedError::InvalidConfig(format!(
                "default network '{}' is not configured",
                self.default_network
            )));
        }

        for (name, endpoint) in &self.networks {
            if !(endpoint.url.starts_with("http://") || endpoint.url.starts_with("https://")) {
                return Err(SharedError::InvalidConfig(format!(
                    "network '{}' has non-http url '{}'",
                    name, endpoint.url
                )));
            }
        }

        Ok(())
    }

    /// Same networks with a different default.
    pub fn with_default(self, default_network: impl Into<String>) -> Result<Self> {
        Self::new(self.networks, default_network)
    }

    pub fn default_network(&self) -> &str {
        &self.default_network
    }

    pub fn url_for(&self, network: &str) -> Result<&str> {
        self.networks
            .get(network)
            .map(|endpoint| endpoint.url.as_str())
            .ok_or_else(|| SharedError::UnknownNetwork(network.to_string()))
    }

    /// Configured network names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Pick the requested network if configured, the default otherwise.
    ///
    /// Returns the chosen name and whether the request was honoured.
    pub fn select<'a>(&'a self, requested: Option<&str>) -> (&'a str, bool) {
        match requested {
            Some(name) => match self.networks.get_key_value(name) {
                Some((key, _)) => (key.as_str(), true),
                None => (self.default_network.as_str(), false),
            },
            None => (self.default_network.as_str(), true),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::sui_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sui_defaults() {
        let config = NetworkConfig::sui_defaults();
        assert_eq!(config.default_network(), "devnet");
        assert_eq!(config.names().collect::<Vec<_>>(), vec!["devnet", "mainnet"]);
        assert_eq!(config.url_for("devnet").unwrap(), "https://fullnode.devnet.sui.io:443");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_network() {
        let config = NetworkConfig::sui_defaults();
        assert!(matches!(
            config.url_for("testnet"),
            Err(SharedError::UnknownNetwork(name)) if name == "testnet"
        ));
        assert!(fullnode_url("moonnet").is_err());
        assert_eq!(fullnode_url("localnet").unwrap(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_default_must_be_configured() {
        let mut networks = BTreeMap::new();
        networks.insert(
            "mainnet".to_string(),
            NetworkEndpoint { url: "https://fullnode.mainnet.sui.io:443".to_string() },
        );
        assert!(matches!(
            NetworkConfig::new(networks, "devnet"),
            Err(SharedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_with_default() {
        let config = NetworkConfig::sui_defaults().with_default("mainnet").unwrap();
        assert_eq!(config.default_network(), "mainnet");
        assert!(NetworkConfig::sui_defaults().with_default("testnet").is_err());
    }

    #[test]
    fn test_empty_config_rejected() {
        assert!(NetworkConfig::new(BTreeMap::new(), "devnet").is_err());
    }

    #[test]
    fn test_from_json() {
        let config = NetworkConfig::from_json(
            r#"{"testnet": "", "custom": "http://localhost:9123"}"#,
            "custom",
        )
        .unwrap();
        assert_eq!(config.url_for("testnet").unwrap(), "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.url_for("custom").unwrap(), "http://localhost:9123");
        assert_eq!(config.default_network(), "custom");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            NetworkConfig::from_json("not json", "devnet"),
            Err(SharedError::Json(_))
        ));
        assert!(matches!(
            NetworkConfig::from_json(r#"{"devnet": "ftp://x"}"#, "devnet"),
            Err(SharedError::InvalidConfig(_))
        ));
        assert!(matches!(
            NetworkConfig::from_json(r#"{"moonnet": ""}"#, "moonnet"),
            Err(SharedError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_select() {
        let config = NetworkConfig::sui_defaults();
        assert_eq!(config.select(Some("mainnet")), ("mainnet", true));
        assert_eq!(config.select(Some("testnet")), ("devnet", false));
        assert_eq!(config.select(None), ("devnet", true));
    }
}
