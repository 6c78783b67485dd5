//! Browser-facing services: wallet interop and fullnode RPC

pub mod sui_rpc;
pub mod wallet;
