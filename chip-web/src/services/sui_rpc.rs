//! Sui fullnode JSON-RPC client over `gloo-net`.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::dto::rpc::{Balance, RpcRequest, RpcResponse};

use crate::error::{Result, WebError};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

async fn call<T: DeserializeOwned>(url: &str, request: &RpcRequest) -> Result<T> {
    log::debug!("RPC {} -> {}", request.method, url);

    let response = Request::post(url).json(request)?.send().await?;

    if !response.ok() {
        return Err(WebError::Http(format!(
            "{} returned status {}",
            request.method,
            response.status()
        )));
    }

    let body: RpcResponse<T> = response.json().await?;
    body.into_result().map_err(WebError::Rpc)
}

/// SUI balance of `owner` on the fullnode at `url`
pub async fn get_balance(url: &str, owner: &str) -> Result<Balance> {
    call(url, &RpcRequest::get_balance(next_id(), owner)).await
}
