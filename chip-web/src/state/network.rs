//! Selected Sui network

use leptos::prelude::*;
use shared::network::NetworkConfig;

use crate::error::Result;

#[derive(Clone, Copy)]
pub struct NetworkContext {
    config: StoredValue<NetworkConfig>,
    selected: RwSignal<String>,
}

impl NetworkContext {
    /// Start on `requested` if it is configured, on the default network otherwise.
    pub fn new(config: NetworkConfig, requested: Option<&str>) -> Self {
        let (name, honoured) = config.select(requested);
        if !honoured {
            log::warn!(
                "Network '{}' is not configured, using '{}'",
                requested.unwrap_or_default(),
                name
            );
        }
        log::info!("Selected network: {}", name);

        Self {
            selected: RwSignal::new(name.to_string()),
            config: StoredValue::new(config),
        }
    }

    pub fn selected(&self) -> String {
        self.selected.get()
    }

    pub fn selected_untracked(&self) -> String {
        self.selected.get_untracked()
    }

    /// Switch networks. Unknown names leave the selection unchanged.
    pub fn select(&self, name: &str) -> Result<()> {
        self.config.with_value(|config| config.url_for(name).map(|_| ()))?;
        log::info!("Switching network to {}", name);
        self.selected.set(name.to_string());
        Ok(())
    }

    /// Fullnode URL of the selected network
    pub fn url(&self) -> Result<String> {
        let name = self.selected.get();
        let url = self
            .config
            .with_value(|config| config.url_for(&name).map(str::to_string))?;
        Ok(url)
    }

    pub fn names(&self) -> Vec<String> {
        self.config
            .with_value(|config| config.names().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_network_is_honoured() {
        Owner::new().with(|| {
            let ctx = NetworkContext::new(NetworkConfig::sui_defaults(), Some("mainnet"));
            assert_eq!(ctx.selected_untracked(), "mainnet");
            assert_eq!(ctx.url().unwrap(), "https://fullnode.mainnet.sui.io:443");
        });
    }

    #[test]
    fn test_unknown_request_falls_back_to_default() {
        Owner::new().with(|| {
            let ctx = NetworkContext::new(NetworkConfig::sui_defaults(), Some("testnet"));
            assert_eq!(ctx.selected_untracked(), "devnet");
        });
    }

    #[test]
    fn test_select() {
        Owner::new().with(|| {
            let ctx = NetworkContext::new(NetworkConfig::sui_defaults(), None);
            assert!(ctx.select("mainnet").is_ok());
            assert_eq!(ctx.selected_untracked(), "mainnet");
            assert!(ctx.select("testnet").is_err());
            assert_eq!(ctx.selected_untracked(), "mainnet");
            assert_eq!(ctx.names(), vec!["devnet", "mainnet"]);
        });
    }
}
