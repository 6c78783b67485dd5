use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Coin type of native SUI.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// JSON-RPC request envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }

    /// `suix_getBalance` for the SUI coin owned by `owner`.
    pub fn get_balance(id: u64, owner: &str) -> Self {
        Self::new(
            id,
            "suix_getBalance",
            vec![Value::from(owner), Value::from(SUI_COIN_TYPE)],
        )
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    /// Result payload, or the server's error message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.result, self.error) {
            (Some(result), None) => Ok(result),
            (_, Some(error)) => Err(format!("{} (code {})", error.message, error.code)),
            (None, None) => Err("response carried neither result nor error".to_string()),
        }
    }
}

/// `suix_getBalance` result. Amounts are decimal strings in MIST.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin_type: String,
    pub coin_object_count: u64,
    pub total_balance: String,
}

impl Balance {
    pub fn total_mist(&self) -> Option<u128> {
        self.total_balance.parse().ok()
    }
}
