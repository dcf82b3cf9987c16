//! Declarative pool configuration.

use crate::domain::{AssetSet, BasisPoints};
use crate::error::{PoolError, Result};

/// Immutable blueprint for a multi-asset pool: the asset set and the
/// initial trading fee rate.
///
/// Set-level invariants are proven by [`AssetSet`] construction; this
/// struct adds the fee-rate bound. A successfully constructed config is
/// guaranteed valid, so pool construction from it is infallible.
///
/// # Examples
///
/// ```
/// use basin_amm::config::PoolConfig;
/// use basin_amm::domain::{Asset, AssetSet, BasisPoints};
///
/// let assets = AssetSet::new(vec![Asset::token([1u8; 32]), Asset::token([2u8; 32])])
///     .expect("valid asset set");
/// let config = PoolConfig::new(assets, BasisPoints::STANDARD_FEE)
///     .expect("valid config");
/// assert_eq!(config.fee_rate().get(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    assets: AssetSet,
    fee_rate: BasisPoints,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the fee rate is
    /// 100% or more.
    pub fn new(assets: AssetSet, fee_rate: BasisPoints) -> Result<Self> {
        if !fee_rate.is_valid_fee() {
            return Err(PoolError::InvalidConfiguration(
                "fee rate must be below 100%",
            ));
        }
        Ok(Self { assets, fee_rate })
    }

    /// Returns the asset set.
    #[must_use]
    pub const fn assets(&self) -> &AssetSet {
        &self.assets
    }

    /// Returns the initial fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Consumes the config, yielding its parts for pool construction.
    #[must_use]
    pub fn into_parts(self) -> (AssetSet, BasisPoints) {
        (self.assets, self.fee_rate)
    }
}
