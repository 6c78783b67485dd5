//! Wallet session state

use leptos::prelude::*;

use crate::services::wallet::WalletState;

#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn state(&self) -> WalletState {
        self.wallet.get()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(str::to_string))
    }

    pub fn wallet_name(&self) -> Option<String> {
        self.wallet.with(|state| state.wallet_name().map(str::to_string))
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, wallet: String) {
        log::info!("Wallet connected: {} via {}", shared::utils::truncate_address(&address), wallet);
        self.wallet.set(WalletState::Connected { address, wallet });
    }

    pub fn set_error(&self, error: String) {
        log::error!("Wallet error: {}", error);
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        Owner::new().with(|| {
            let ctx = WalletContext::new();
            assert!(!ctx.is_connected());

            ctx.set_connecting();
            assert_eq!(ctx.wallet.get_untracked(), WalletState::Connecting);

            ctx.set_connected("0xabc".to_string(), "Sui Wallet".to_string());
            assert!(ctx.is_connected());
            assert_eq!(ctx.address().as_deref(), Some("0xabc"));
            assert_eq!(ctx.wallet_name().as_deref(), Some("Sui Wallet"));

            ctx.disconnect();
            assert_eq!(ctx.address(), None);
        });
    }

    #[test]
    fn test_error_state() {
        Owner::new().with(|| {
            let ctx = WalletContext::new();
            ctx.set_error("User rejected the request".to_string());
            assert_eq!(
                ctx.wallet.get_untracked(),
                WalletState::Error("User rejected the request".to_string())
            );
        });
    }
}
