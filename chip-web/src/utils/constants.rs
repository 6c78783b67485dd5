//! Application constants

/// Face value of the chip on the root view.
pub const ROOT_CHIP_VALUE: i64 = 100;

/// URL query parameter that selects the Sui network at startup.
pub const NETWORK_QUERY_PARAM: &str = "network";

/// Element shown by `index.html` until the wasm module mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

pub const MIST_PER_SUI: u128 = 1_000_000_000;
