//! Sui Wallet Integration via wasm-bindgen
//!
//! Browser wallets announce themselves through the Wallet Standard events
//! (`wallet-standard:register-wallet` / `wallet-standard:app-ready`). The
//! inline JS below keeps a registry of those wallets and exposes connect and
//! disconnect for the ones that support a `sui:` chain.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::{js_error_message, Result, WebError};

// ============================================================================
// WALLET STANDARD REGISTRY (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
const registry = [];
let initialized = false;

function register(...wallets) {
    for (const wallet of wallets) {
        if (!registry.includes(wallet)) {
            registry.push(wallet);
        }
    }
    return () => {
        for (const wallet of wallets) {
            const index = registry.indexOf(wallet);
            if (index >= 0) registry.splice(index, 1);
        }
    };
}

function isSuiWallet(wallet) {
    return Array.isArray(wallet.chains)
        && wallet.chains.some((chain) => chain.startsWith('sui:'))
        && wallet.features
        && wallet.features['standard:connect'];
}

function findWallet(name) {
    return registry.find((wallet) => wallet.name === name && isSuiWallet(wallet));
}

export function initWalletRegistry() {
    if (initialized) return;
    initialized = true;

    window.addEventListener('wallet-standard:register-wallet', (event) => {
        try {
            event.detail({ register });
        } catch (error) {
            console.error('Wallet registration failed', error);
        }
    });

    try {
        window.dispatchEvent(new CustomEvent('wallet-standard:app-ready', {
            detail: { register },
        }));
    } catch (error) {
        console.error('Failed to announce app-ready', error);
    }
}

export function detectSuiWallets() {
    initWalletRegistry();
    return registry
        .filter(isSuiWallet)
        .map((wallet) => ({ name: wallet.name, icon: wallet.icon || null }));
}

export async function connectSuiWallet(name) {
    const wallet = findWallet(name);
    if (!wallet) {
        throw new Error('Wallet not found: ' + name);
    }

    const result = await wallet.features['standard:connect'].connect();
    const accounts = (result && result.accounts) || wallet.accounts || [];
    if (accounts.length === 0) {
        throw new Error('Wallet returned no accounts');
    }
    return accounts[0].address;
}

export async function disconnectSuiWallet(name) {
    const wallet = findWallet(name);
    if (!wallet) return;

    const feature = wallet.features['standard:disconnect'];
    if (feature) {
        await feature.disconnect();
    }
}
")]
extern "C" {
    /// Start listening for wallet registrations and announce the app
    fn initWalletRegistry();

    /// Wallets registered so far that support a Sui chain
    fn detectSuiWallets() -> JsValue;

    /// Connect and return the first account address
    #[wasm_bindgen(catch)]
    async fn connectSuiWallet(name: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn disconnectSuiWallet(name: &str) -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet session state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, wallet: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn wallet_name(&self) -> Option<&str> {
        match self {
            WalletState::Connected { wallet, .. } => Some(wallet),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Wallet announced through the Wallet Standard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Begin collecting wallet registrations. Safe to call more than once.
pub fn init_wallet_registry() {
    initWalletRegistry();
}

/// Sui wallets registered so far
pub fn get_available_wallets() -> Vec<DetectedWallet> {
    serde_wasm_bindgen::from_value(detectSuiWallets()).unwrap_or_else(|e| {
        log::warn!("Could not read detected wallets: {}", e);
        vec![]
    })
}

/// Connect to the named wallet, returning the first account address
pub async fn connect_wallet(name: &str) -> Result<String> {
    let address = connectSuiWallet(name)
        .await
        .map_err(|e| WebError::Wallet(js_error_message(&e)))?;

    address
        .as_string()
        .ok_or_else(|| WebError::Wallet("Account address is not a string".to_string()))
}

pub async fn disconnect_wallet(name: &str) -> Result<()> {
    disconnectSuiWallet(name)
        .await
        .map(|_| ())
        .map_err(|e| WebError::Wallet(js_error_message(&e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_accessors() {
        let state = WalletState::Connected {
            address: "0xabc".to_string(),
            wallet: "Sui Wallet".to_string(),
        };
        assert!(state.is_connected());
        assert_eq!(state.address(), Some("0xabc"));
        assert_eq!(state.wallet_name(), Some("Sui Wallet"));
        assert_eq!(state.error(), None);

        let failed = WalletState::Error("rejected".to_string());
        assert!(!failed.is_connected());
        assert_eq!(failed.address(), None);
        assert_eq!(failed.error(), Some("rejected"));

        assert!(!WalletState::Connecting.is_connected());
    }

    #[test]
    fn test_detected_wallet_without_icon() {
        let wallet: DetectedWallet = serde_json::from_str(r#"{"name":"Suiet"}"#).unwrap();
        assert_eq!(wallet.icon, None);
    }
}
