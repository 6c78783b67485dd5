//! # Shared Chip Table Library
//!
//! Platform-independent pieces of the chip table app. Nothing here touches
//! the browser, so all of it is unit-tested on the host.
//!
//! ## Structure
//!
//! - **[`chip`]**: denominations and the denomination → image lookup
//! - **[`network`]**: Sui network names, fullnode URLs and the default network
//! - **[`query`]**: keyed cache for fetched JSON data
//! - **[`dto`]**: Sui JSON-RPC wire types
//! - **[`utils`]**: address formatting
//! - **[`error`]**: [`SharedError`] and its `Result` alias
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::chip::{resolve, Denomination};
//! use shared::network::NetworkConfig;
//!
//! let chip = Denomination::new(100);
//! let asset = resolve(chip);
//! let style = format!("background-image: {}", asset.css_url());
//!
//! let networks = NetworkConfig::sui_defaults();
//! let (selected, _) = networks.select(Some("mainnet"));
//! assert_eq!(selected, "mainnet");
//! # let _ = style;
//! ```

pub mod chip;
pub mod dto;
pub mod error;
pub mod network;
pub mod query;
pub mod utils;

pub use chip::{resolve, AssetRef, AssetResolver, Denomination};
pub use error::{Result, SharedError};
pub use network::NetworkConfig;
pub use query::{QueryCache, QueryKey};
pub use utils::*;
