//! # Data Transfer Objects (DTOs)
//!
//! Wire types exchanged with a Sui fullnode.
//!
//! - [`rpc`] - JSON-RPC 2.0 envelopes and the `suix_getBalance` result
//!
//! All types implement both `Serialize` and `Deserialize`. Sui returns
//! camelCase field names, which the DTOs map with `#[serde(rename_all = "camelCase")]`.

pub mod rpc;

pub use rpc::*;
