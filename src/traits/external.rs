//! External collaborator traits: value transport, access control, and
//! the pause gate.
//!
//! These concerns live outside the engine. The pool consumes them
//! through the traits below and treats every implementation as
//! untrusted: collaborator calls happen under the pool's reentrancy
//! latch, and a transfer failure aborts the whole operation.

use crate::domain::{AccountId, Amount, Asset};
use crate::error::Result;

/// Moves asset value between external accounts and pool custody.
///
/// # Contract
///
/// - Each call is atomic: it either moves the full amount or fails with
///   [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
///   having moved nothing.
/// - For [`Asset::Native`], `pull` verifies the value attached to the
///   surrounding call instead of executing a token transfer; the engine
///   does not distinguish the two cases.
/// - [`pool_balance`](Self::pool_balance) reports the asset balance
///   currently held in pool custody. It may exceed the pool's recorded
///   reserve — that surplus is the withdrawable fee overage — but must
///   never fall below it.
pub trait AssetTransfer {
    /// Moves `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
    /// on insufficient balance or allowance.
    fn pull(&mut self, asset: &Asset, from: &AccountId, amount: Amount) -> Result<()>;

    /// Moves `amount` of `asset` out of pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
    /// on transport error.
    fn push(&mut self, asset: &Asset, to: &AccountId, amount: Amount) -> Result<()>;

    /// Returns the observed custody balance of `asset`.
    #[must_use]
    fn pool_balance(&self, asset: &Asset) -> Amount;
}

/// Role checks for administrative operations.
///
/// Gates fee withdrawal, fee-rate changes, and pausing/unpausing.
pub trait AccessControl {
    /// Returns `true` if `caller` holds the admin role.
    #[must_use]
    fn has_admin_role(&self, caller: &AccountId) -> bool;
}

/// Emergency-stop state.
///
/// Deposits, redemptions and swaps are rejected while the gate reports
/// inactive; fee withdrawal is unaffected.
pub trait PauseGate {
    /// Returns `true` while the pool accepts ledger-affecting operations.
    #[must_use]
    fn is_active(&self) -> bool;

    /// Flips the gate. Called only by the pool's admin-gated
    /// `pause`/`unpause` operations.
    fn set_active(&mut self, active: bool);
}
