//! The immutable set of assets backing a pool.

use super::Asset;
use crate::error::{PoolError, Result};

/// The ordered, immutable-after-construction list of assets a pool holds.
///
/// Construction enforces the set-level invariants once, so every later
/// operation can trust them:
///
/// - at least two assets,
/// - at most one [`Asset::Native`] sentinel,
/// - no duplicate entries.
///
/// Assets are addressed by position; indices are stable for the pool's
/// lifetime.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Asset, AssetSet};
///
/// let set = AssetSet::new(vec![Asset::token([1u8; 32]), Asset::Native])
///     .expect("valid asset set");
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(1), Some(&Asset::Native));
/// assert!(set.contains_index(0));
/// assert!(!set.contains_index(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    assets: Vec<Asset>,
}

impl AssetSet {
    /// Creates a new `AssetSet` from the requested asset sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if fewer than two
    /// assets are supplied, more than one entry is the native sentinel,
    /// or any asset appears twice.
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        if assets.len() < 2 {
            return Err(PoolError::InvalidConfiguration(
                "a pool requires at least two assets",
            ));
        }
        let native_count = assets.iter().filter(|a| a.is_native()).count();
        if native_count > 1 {
            return Err(PoolError::InvalidConfiguration(
                "at most one native-currency asset is allowed",
            ));
        }
        for (i, asset) in assets.iter().enumerate() {
            if assets[..i].contains(asset) {
                return Err(PoolError::InvalidConfiguration(
                    "duplicate asset in requested set",
                ));
            }
        }
        Ok(Self { assets })
    }

    /// Returns the number of assets in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the set holds no assets. Construction guarantees
    /// at least two, so this is always `false` for a built set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Ordered lookup by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    /// Returns `true` if `index` addresses an asset in this set.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.assets.len()
    }

    /// Returns the full ordered slice of assets.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }
}
