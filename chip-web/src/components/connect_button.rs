//! Wallet connect button
//!
//! Disconnected it offers the detected Sui wallets; connected it shows the
//! shortened address, the SUI balance on the selected network, a network
//! picker and a disconnect action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::truncate_address;

use crate::error::WebError;
use crate::services::sui_rpc::get_balance;
use crate::services::wallet::{
    connect_wallet, disconnect_wallet, get_available_wallets, init_wallet_registry,
    DetectedWallet, WalletState,
};
use crate::state::query::balance_key;
use crate::state::{use_app_context, AppContext};
use crate::utils::format::format_mist_to_sui;

/// Balance of the connected account: `None` while loading, `Err` once the query failed.
type BalanceState = Option<Result<String, String>>;

fn balance_text(balance: BalanceState) -> String {
    match balance {
        Some(Ok(sui)) => format!("{} SUI", sui),
        Some(Err(message)) => format!("Balance unavailable: {}", message),
        None => "-- SUI".to_string(),
    }
}

/// Forget every cached balance of `address`.
fn forget_balances(ctx: AppContext, address: &str) {
    for network in ctx.network.names() {
        ctx.query.invalidate(&balance_key(&network, address));
    }
}

/// Fetch the connected account's balance whenever the address or network changes.
fn track_balance(ctx: AppContext, set_balance: WriteSignal<BalanceState>) {
    Effect::new(move |_| {
        let address = ctx.wallet.address();
        let network = ctx.network.selected();
        set_balance.set(None);

        let Some(address) = address else {
            return;
        };

        let url = match ctx.network.url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("No endpoint for network {}: {}", network, e);
                return;
            }
        };

        spawn_local(async move {
            let key = balance_key(&network, &address);
            let result = ctx
                .query
                .fetch_query(key, || get_balance(&url, &address))
                .await;

            // The user may have switched network or account meanwhile.
            let still_current = ctx.network.selected_untracked() == network
                && ctx.wallet.wallet.with_untracked(|state| state.address() == Some(address.as_str()));
            if !still_current {
                return;
            }

            let balance = result.and_then(|balance| {
                balance.total_mist().map(format_mist_to_sui).ok_or_else(|| {
                    WebError::Rpc(format!("unreadable balance '{}'", balance.total_balance))
                })
            });
            if let Err(e) = &balance {
                log::error!("Balance query failed: {}", e);
            }
            set_balance.set(Some(balance.map_err(|e| e.to_string())));
        });
    });
}

#[component]
pub fn ConnectButton(#[prop(optional, into)] class: String) -> impl IntoView {
    let ctx = use_app_context();
    let wallet_ctx = ctx.wallet;
    let network_ctx = ctx.network;

    let (show_picker, set_show_picker) = signal(false);
    let (available, set_available) = signal(Vec::<DetectedWallet>::new());
    let (balance, set_balance) = signal(BalanceState::None);

    init_wallet_registry();
    track_balance(ctx, set_balance);

    let toggle_picker = move |_: leptos::ev::MouseEvent| {
        set_available.set(get_available_wallets());
        set_show_picker.update(|open| *open = !*open);
    };

    let connect = move |name: String| {
        set_show_picker.set(false);
        wallet_ctx.set_connecting();
        spawn_local(async move {
            match connect_wallet(&name).await {
                Ok(address) => wallet_ctx.set_connected(address, name),
                Err(e) => wallet_ctx.set_error(e.to_string()),
            }
        });
    };

    let disconnect = move |_: leptos::ev::MouseEvent| {
        let name = wallet_ctx.wallet_name();
        if let Some(address) = wallet_ctx.address() {
            forget_balances(ctx, &address);
        }
        wallet_ctx.disconnect();
        if let Some(name) = name {
            spawn_local(async move {
                if let Err(e) = disconnect_wallet(&name).await {
                    log::warn!("Disconnect from {} failed: {}", name, e);
                }
            });
        }
    };

    let switch_network = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        if let Err(e) = network_ctx.select(&name) {
            log::warn!("{}", e);
        }
    };

    view! {
        <div class=format!("connect-widget {}", class)>
            {move || match wallet_ctx.state() {
                WalletState::Connected { address, .. } => {
                    let short_address = truncate_address(&address);
                    view! {
                        <div class="wallet-connected">
                            <span class="wallet-address" title=address>
                                {short_address}
                            </span>
                            <span class="wallet-balance">{move || balance_text(balance.get())}</span>
                            <select class="network-select" on:change=switch_network>
                                {network_ctx
                                    .names()
                                    .into_iter()
                                    .map(|name| {
                                        let option_name = name.clone();
                                        let label = name.clone();
                                        view! {
                                            <option
                                                value=name
                                                selected=move || network_ctx.selected() == option_name
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <button class="btn" on:click=disconnect>"Disconnect"</button>
                        </div>
                    }
                    .into_any()
                }
                WalletState::Connecting => view! {
                    <button class="btn" disabled=true>"Connecting..."</button>
                }
                .into_any(),
                state => {
                    let error = state.error().map(str::to_string);
                    view! {
                        <button class="btn" on:click=toggle_picker>"Connect Wallet"</button>
                        {error.map(|message| view! { <p class="wallet-error">{message}</p> })}
                    }
                    .into_any()
                }
            }}
            <Show when=move || show_picker.get()>
                <ul class="wallet-list">
                    <Show
                        when=move || !available.get().is_empty()
                        fallback=|| view! { <li class="wallet-empty">"No Sui wallets detected"</li> }
                    >
                        <For
                            each=move || available.get()
                            key=|wallet| wallet.name.clone()
                            children=move |wallet: DetectedWallet| {
                                let DetectedWallet { name, icon } = wallet;
                                let label = name.clone();
                                view! {
                                    <li>
                                        <button class="wallet-option" on:click=move |_| connect(name.clone())>
                                            {icon.map(|icon| view! { <img class="wallet-icon" src=icon alt=""/> })}
                                            {label}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </Show>
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_balance_text() {
        assert_eq!(balance_text(Some(Ok("1.5000".to_string()))), "1.5000 SUI");
        assert_eq!(balance_text(None), "-- SUI");
    }

    #[test]
    fn test_failed_balance_is_not_shown_as_loading() {
        let failed = balance_text(Some(Err("RPC error: Invalid params (code -32602)".to_string())));
        assert_eq!(failed, "Balance unavailable: RPC error: Invalid params (code -32602)");
        assert_ne!(failed, balance_text(None));
    }

    #[test]
    fn test_forget_balances_on_every_network() {
        Owner::new().with(|| {
            let ctx = AppContext::new(&AppConfig::default(), None);
            ctx.query.store(balance_key("devnet", "0x1"), &"1.0000", 0.0);
            ctx.query.store(balance_key("mainnet", "0x1"), &"2.0000", 0.0);
            ctx.query.store(balance_key("devnet", "0x2"), &"3.0000", 0.0);

            forget_balances(ctx, "0x1");

            assert_eq!(ctx.query.cached::<String>(&balance_key("devnet", "0x1"), 1.0), None);
            assert_eq!(ctx.query.cached::<String>(&balance_key("mainnet", "0x1"), 1.0), None);
            assert_eq!(
                ctx.query.cached::<String>(&balance_key("devnet", "0x2"), 1.0),
                Some("3.0000".to_string())
            );
        });
    }
}
