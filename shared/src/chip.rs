//! # Chip Denominations and Asset Resolution
//!
//! A chip shows its face value over a static image. The image is picked by
//! looking the denomination up in an [`AssetResolver`] table; anything not in
//! the table falls back to the resolver's default asset.
//!
//! Every recognized denomination currently points at the same black chip
//! image. Giving a denomination its own artwork is a one-line change to
//! [`DEFAULT_CHIP_TABLE`].
//!
//! ## Usage
//!
//! ```rust
//! use shared::chip::{resolve, Denomination, BLACK_CHIP_ASSET};
//!
//! assert_eq!(resolve(100).as_str(), BLACK_CHIP_ASSET);
//! assert_eq!(Denomination::new(100).label(), "$100");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Path of the black chip image, relative to the served `dist/` root.
pub const BLACK_CHIP_ASSET: &str = "assets/black_chip.svg";

/// Denomination → asset table used by [`resolve`].
pub const DEFAULT_CHIP_TABLE: &[(i64, &str)] = &[
    (1, BLACK_CHIP_ASSET),
    (5, BLACK_CHIP_ASSET),
    (10, BLACK_CHIP_ASSET),
    (25, BLACK_CHIP_ASSET),
    (100, BLACK_CHIP_ASSET),
];

/// Face value of a chip.
///
/// No range is enforced: zero and negative values are valid denominations
/// and simply resolve to the fallback asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denomination(i64);

impl Denomination {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Text overlaid on the chip, e.g. `$100`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl From<i64> for Denomination {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Opaque reference to a chip image. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS `background-image` value for this asset.
    pub fn css_url(&self) -> String {
        format!("url({})", self.0)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup table from denomination to chip image, with a fallback.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    table: BTreeMap<i64, AssetRef>,
    fallback: AssetRef,
}

impl AssetResolver {
    /// Build a resolver from `(denomination, asset)` pairs.
    ///
    /// Later pairs win on duplicate keys. Empty asset paths are replaced by
    /// the fallback so that resolution never yields an empty reference.
    pub fn new<'a>(entries: impl IntoIterator<Item = (i64, &'a str)>, fallback: &str) -> Self {
        let fallback = if fallback.is_empty() {
            AssetRef(BLACK_CHIP_ASSET.to_string())
        } else {
            AssetRef(fallback.to_string())
        };

        let table = entries
            .into_iter()
            .map(|(value, asset)| {
                let asset = if asset.is_empty() {
                    fallback.clone()
                } else {
                    AssetRef(asset.to_string())
                };
                (value, asset)
            })
            .collect();

        Self { table, fallback }
    }

    /// Resolve a denomination. Total over all integers.
    pub fn resolve(&self, denomination: impl Into<Denomination>) -> &AssetRef {
        self.table
            .get(&denomination.into().value())
            .unwrap_or(&self.fallback)
    }

    pub fn is_recognized(&self, denomination: impl Into<Denomination>) -> bool {
        self.table.contains_key(&denomination.into().value())
    }

    /// Recognized denominations in ascending order.
    pub fn recognized(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.table.keys().copied().map(Denomination)
    }

    pub fn fallback(&self) -> &AssetRef {
        &self.fallback
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CHIP_TABLE.iter().copied(), BLACK_CHIP_ASSET)
    }
}

static DEFAULT_RESOLVER: OnceLock<AssetResolver> = OnceLock::new();

/// Process-wide resolver built from [`DEFAULT_CHIP_TABLE`].
pub fn default_resolver() -> &'static AssetResolver {
    DEFAULT_RESOLVER.get_or_init(AssetResolver::default)
}

/// Resolve a denomination against the default table.
pub fn resolve(denomination: impl Into<Denomination>) -> AssetRef {
    default_resolver().resolve(denomination).clone()
}
