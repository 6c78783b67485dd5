//! Chip Table Web App - Leptos Frontend
//!
//! [`App`] builds the provider chain and renders [`RootView`]: one wallet
//! connect button and one $100 chip, whatever the page path.

use leptos::prelude::*;

use crate::components::{Chip, ConnectButton};
use crate::config::AppConfig;
use crate::state::provide_app_context;
use crate::utils::constants::{NETWORK_QUERY_PARAM, ROOT_CHIP_VALUE};
use crate::utils::url::get_query_param;

/// Click handler for the root view's chip.
pub fn on_root_chip_click() {
    log::info!("Chip clicked");
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let requested_network = get_query_param(NETWORK_QUERY_PARAM);
    provide_app_context(&config, requested_network.as_deref());

    view! { <RootView/> }
}

/// Connect button in the header, one chip below it. Stateless.
#[component]
pub fn RootView() -> impl IntoView {
    view! {
        <div class="App">
            <header class="App-header">
                <ConnectButton class="connect-button"/>
            </header>
            <Chip value=ROOT_CHIP_VALUE on_click=Callback::new(|_| on_root_chip_click())/>
        </div>
    }
}
