//! # Provider Chain
//!
//! Everything below the root that is not passed as a prop lives in one
//! [`AppContext`]: the selected network, the query cache and the wallet
//! session. The root builds it once with [`provide_app_context`]; components
//! that need it call [`use_app_context`]. The chip and the root view never do.

use leptos::prelude::*;

use crate::config::AppConfig;

pub mod network;
pub mod query;
pub mod wallet;

pub use network::NetworkContext;
pub use query::QueryClient;
pub use wallet::WalletContext;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub network: NetworkContext,
    pub query: QueryClient,
    pub wallet: WalletContext,
}

impl AppContext {
    /// Build the context; `requested_network` is the page's `?network=` value.
    pub fn new(config: &AppConfig, requested_network: Option<&str>) -> Self {
        Self {
            network: NetworkContext::new(config.networks.clone(), requested_network),
            query: QueryClient::new(config.query_stale_time_ms),
            wallet: WalletContext::new(),
        }
    }
}

/// Build the app context and make it available to descendants.
pub fn provide_app_context(config: &AppConfig, requested_network: Option<&str>) -> AppContext {
    let context = AppContext::new(config, requested_network);
    provide_context(context);
    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
