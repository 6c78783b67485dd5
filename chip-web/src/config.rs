//! # Application Configuration
//!
//! The app is a static bundle, so configuration is fixed at build time:
//!
//! - `CHIP_NETWORKS_JSON` - JSON object of network name → fullnode URL
//!   (an empty URL means the well-known Sui URL for that name)
//! - `CHIP_DEFAULT_NETWORK` - network used when the page URL does not pick one
//!
//! Both are optional. Without them the app talks to Sui `devnet` and `mainnet`,
//! defaulting to `devnet`. A bad build-time value is logged and replaced by the
//! defaults rather than stopping the app.

use shared::network::{NetworkConfig, DEFAULT_NETWORK};
use shared::query::DEFAULT_STALE_TIME_MS;

use crate::error::{Result, WebError};

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub networks: NetworkConfig,

    /// How long fetched data is served from cache
    pub query_stale_time_ms: f64,
}

impl AppConfig {
    /// Build from optional `networks_json` / `default_network` values.
    pub fn from_values(networks_json: Option<&str>, default_network: Option<&str>) -> Result<Self> {
        let networks = match (networks_json, default_network) {
            (Some(json), default) => {
                NetworkConfig::from_json(json, default.unwrap_or(DEFAULT_NETWORK))?
            }
            (None, Some(default)) => NetworkConfig::sui_defaults()
                .with_default(default)
                .map_err(|_| {
                    WebError::Config(format!(
                        "CHIP_DEFAULT_NETWORK '{}' is not a configured network",
                        default
                    ))
                })?,
            (None, None) => NetworkConfig::sui_defaults(),
        };

        let config = Self {
            networks,
            query_stale_time_ms: DEFAULT_STALE_TIME_MS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read the compile-time environment.
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            option_env!("CHIP_NETWORKS_JSON"),
            option_env!("CHIP_DEFAULT_NETWORK"),
        )
    }

    /// Build-time config, or the defaults if it is invalid.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            log::warn!("Ignoring build-time network config: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.networks.validate()?;

        if self.query_stale_time_ms.is_nan() || self.query_stale_time_ms <= 0.0 {
            return Err(WebError::Config(
                "query stale time must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            networks: NetworkConfig::sui_defaults(),
            query_stale_time_ms: DEFAULT_STALE_TIME_MS,
        }
    }
}
