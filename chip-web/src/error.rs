//! # Web App Errors
//!
//! [`WebError`] covers everything that can go wrong between the browser,
//! injected wallets and the Sui fullnode. JS exceptions arrive as `JsValue`
//! and are flattened to strings with [`js_error_message`].

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WebError {
    /// The wallet rejected or failed a request (connect, disconnect).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The fullnode answered with a JSON-RPC error.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The request never produced a usable HTTP response.
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Shared(String),
}

impl From<shared::SharedError> for WebError {
    fn from(err: shared::SharedError) -> Self {
        match err {
            shared::SharedError::InvalidConfig(msg) => WebError::Config(msg),
            other => WebError::Shared(other.to_string()),
        }
    }
}

impl From<gloo_net::Error> for WebError {
    fn from(err: gloo_net::Error) -> Self {
        WebError::Http(err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }

    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
