//! Liquidity provision trait extending [`SwapPool`].

use super::SwapPool;
use crate::domain::{AccountId, Amount, DepositQuote, Liquidity};
use crate::error::Result;

/// Trait for pools that issue and redeem fungible liquidity claims.
///
/// # Accounting Invariants
///
/// - The total reported by [`total_liquidity`](Self::total_liquidity)
///   changes only through [`add_liquidity`](Self::add_liquidity) and
///   [`remove_liquidity`](Self::remove_liquidity), and always equals the
///   sum of all holders' claims.
/// - The total is zero exactly when every reserve is zero.
///
/// # Rounding Contract
///
/// Required deposit amounts round **up** and redemption payouts round
/// **down**, so no deposit/redeem sequence can extract more than its
/// proportional share: rounding error always accrues to the pool.
pub trait LiquidityPool: SwapPool {
    /// Deposits assets and mints a proportional liquidity claim.
    ///
    /// `amounts` is indexed like the pool's asset set. For the first
    /// deposit into an empty pool every amount must be positive and the
    /// minted claim is the integer geometric mean of the amounts. For
    /// later deposits the claim is priced off `amounts[0]` against the
    /// reserve of asset 0, and only the required proportional amount of
    /// each asset — not the full offer — is pulled.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`](crate::error::PoolError::InvalidInput)
    ///   if the amounts length does not match the asset count, or a
    ///   bootstrap amount is zero.
    /// - [`PoolError::InsufficientInput`](crate::error::PoolError::InsufficientInput)
    ///   if an offered amount is below the required proportional amount.
    /// - [`PoolError::ArithmeticInvariant`](crate::error::PoolError::ArithmeticInvariant)
    ///   if the computed claim is zero.
    /// - [`PoolError::PoolPaused`](crate::error::PoolError::PoolPaused)
    ///   while the pool is paused.
    fn add_liquidity(&mut self, provider: &AccountId, amounts: &[Amount]) -> Result<Liquidity>;

    /// Burns `liquidity` of the provider's claim and pays out the
    /// proportional share of every reserve, rounded down.
    ///
    /// Redeeming the entire outstanding total drains every reserve to
    /// exactly zero.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`](crate::error::PoolError::InvalidInput)
    ///   if `liquidity` is zero.
    /// - [`PoolError::InsufficientBalance`](crate::error::PoolError::InsufficientBalance)
    ///   if the provider's claim is smaller than `liquidity`.
    /// - [`PoolError::PoolPaused`](crate::error::PoolError::PoolPaused)
    ///   while the pool is paused.
    fn remove_liquidity(&mut self, provider: &AccountId, liquidity: Liquidity)
        -> Result<Vec<Amount>>;

    /// Previews a proportional deposit without mutating state: the claim
    /// minted for `reference_amount` of asset 0 and the required amount
    /// of every asset.
    ///
    /// # Errors
    ///
    /// - [`PoolError::EmptyPool`](crate::error::PoolError::EmptyPool)
    ///   if the pool holds no liquidity (bootstrap pricing applies
    ///   instead).
    /// - [`PoolError::ArithmeticInvariant`](crate::error::PoolError::ArithmeticInvariant)
    ///   if the reference amount is too small to mint any claim.
    fn required_amounts(&self, reference_amount: Amount) -> Result<DepositQuote>;

    /// Returns the total outstanding liquidity.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;

    /// Returns `holder`'s liquidity claim; unknown holders read as zero.
    #[must_use]
    fn liquidity_of(&self, holder: &AccountId) -> Liquidity;
}
