//! Core swap trait: pricing and executing exchanges between pooled assets.

use crate::domain::{AccountId, Amount, AssetSet, BasisPoints};
use crate::error::Result;

/// Trait for pools that price exchanges between two of their assets with
/// a constant-product curve.
///
/// # Pricing Contract
///
/// Implementations must deduct the trading fee from the input amount
/// before applying the pricing formula:
///
/// ```text
/// net_input  = floor(amount_in × (10_000 − fee_bps) / 10_000)
/// amount_out = floor(net_input × reserve_out / (reserve_in + net_input))
/// ```
///
/// where `reserve_in`/`reserve_out` are the reserves recorded before the
/// swap. After the swap the full `amount_in` is credited to the input
/// reserve and `amount_out` debited from the output reserve, so the
/// product of the two touched reserves never decreases (strictly grows
/// whenever the fee is non-zero).
///
/// # Atomicity
///
/// A swap either completes fully or returns an error with no state
/// mutation observable; partial fills are forbidden.
pub trait SwapPool {
    /// Exchanges `amount_in` of the asset at `asset_in` for the asset at
    /// `asset_out`, crediting the caller with the computed output.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`](crate::error::PoolError::InvalidInput)
    ///   if `amount_in` is zero, the two indices are equal, or either
    ///   index is out of range.
    /// - [`PoolError::InsufficientLiquidity`](crate::error::PoolError::InsufficientLiquidity)
    ///   if either touched reserve is zero.
    /// - [`PoolError::SlippageExceeded`](crate::error::PoolError::SlippageExceeded)
    ///   if the computed output falls below `min_amount_out`.
    /// - [`PoolError::PoolPaused`](crate::error::PoolError::PoolPaused)
    ///   while the pool is paused.
    /// - [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
    ///   if the value-transport collaborator rejects a transfer.
    fn swap(
        &mut self,
        caller: &AccountId,
        asset_in: usize,
        asset_out: usize,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<Amount>;

    /// Returns the current trading fee rate.
    #[must_use]
    fn fee_rate(&self) -> BasisPoints;

    /// Returns the ordered asset set this pool trades over.
    #[must_use]
    fn asset_set(&self) -> &AssetSet;
}
