//! The authoritative reserve and liquidity ledger.
//!
//! [`ReserveLedger`] is the single source of truth for per-asset
//! reserves, the total outstanding liquidity, and per-holder claims.
//! Higher-level operations compose its four mutators — `credit`,
//! `debit`, `mint`, `burn` — and nothing else writes this state.
//!
//! # Invariants
//!
//! Held after every mutator call:
//!
//! - every reserve, the total, and every holder balance is non-negative
//!   (enforced by the unsigned types and checked arithmetic);
//! - the sum of all holder balances equals the recorded total — `mint`
//!   and `burn` move both in lockstep;
//! - a holder with no entry holds zero; entries burned to zero are
//!   removed.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Liquidity};
use crate::error::{PoolError, Result};

/// Per-asset reserve counters plus the liquidity claim book.
///
/// Reserves are indexed by asset position; the index space is fixed at
/// construction and validated on every access.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{AccountId, Amount, Liquidity};
/// use basin_amm::ledger::ReserveLedger;
///
/// let mut ledger = ReserveLedger::new(2);
/// let alice = AccountId::from_bytes([1u8; 32]);
///
/// ledger.credit(0, Amount::new(1_000)).expect("in range");
/// ledger.mint(&alice, Liquidity::new(1_000)).expect("no overflow");
///
/// assert_eq!(ledger.reserve(0), Ok(Amount::new(1_000)));
/// assert_eq!(ledger.balance_of(&alice), Liquidity::new(1_000));
/// assert_eq!(ledger.total_liquidity(), Liquidity::new(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveLedger {
    reserves: Vec<Amount>,
    total: Liquidity,
    holders: BTreeMap<AccountId, Liquidity>,
}

impl ReserveLedger {
    /// Creates an empty ledger tracking `asset_count` reserves.
    #[must_use]
    pub fn new(asset_count: usize) -> Self {
        Self {
            reserves: vec![Amount::ZERO; asset_count],
            total: Liquidity::ZERO,
            holders: BTreeMap::new(),
        }
    }

    /// Returns the recorded reserve for the asset at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if `index` is out of range.
    pub fn reserve(&self, index: usize) -> Result<Amount> {
        self.reserves
            .get(index)
            .copied()
            .ok_or(PoolError::InvalidInput("asset index out of range"))
    }

    /// Returns all reserves, indexed like the pool's asset set.
    #[must_use]
    pub fn reserves(&self) -> &[Amount] {
        &self.reserves
    }

    /// Returns the total outstanding liquidity.
    #[must_use]
    pub fn total_liquidity(&self) -> Liquidity {
        self.total
    }

    /// Returns `holder`'s claim; absent holders read as zero.
    #[must_use]
    pub fn balance_of(&self, holder: &AccountId) -> Liquidity {
        self.holders.get(holder).copied().unwrap_or(Liquidity::ZERO)
    }

    /// Increases the reserve at `index` by `amount`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`] if `index` is out of range.
    /// - [`PoolError::Overflow`] if the reserve would exceed `u128::MAX`.
    pub fn credit(&mut self, index: usize, amount: Amount) -> Result<()> {
        let reserve = self
            .reserves
            .get_mut(index)
            .ok_or(PoolError::InvalidInput("asset index out of range"))?;
        *reserve = reserve
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("reserve credit overflow"))?;
        Ok(())
    }

    /// Decreases the reserve at `index` by `amount`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInput`] if `index` is out of range.
    /// - [`PoolError::InsufficientReserve`] if the debit would drive the
    ///   reserve negative.
    pub fn debit(&mut self, index: usize, amount: Amount) -> Result<()> {
        let reserve = self
            .reserves
            .get_mut(index)
            .ok_or(PoolError::InvalidInput("asset index out of range"))?;
        *reserve = reserve
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientReserve)?;
        Ok(())
    }

    /// Mints `amount` of liquidity to `holder`, growing the total by the
    /// same amount.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if either the holder balance or
    /// the total would exceed `u128::MAX`; nothing is mutated on error.
    pub fn mint(&mut self, holder: &AccountId, amount: Liquidity) -> Result<()> {
        let balance = self.balance_of(holder);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("holder balance overflow"))?;
        let new_total = self
            .total
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("total liquidity overflow"))?;
        self.holders.insert(*holder, new_balance);
        self.total = new_total;
        Ok(())
    }

    /// Burns `amount` of liquidity from `holder`, shrinking the total by
    /// the same amount.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientBalance`] if the holder's claim
    /// is smaller than `amount`; nothing is mutated on error.
    pub fn burn(&mut self, holder: &AccountId, amount: Liquidity) -> Result<()> {
        let balance = self.balance_of(holder);
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientBalance)?;
        // The total cannot underflow while claim conservation holds.
        let new_total = self
            .total
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientBalance)?;
        if new_balance.is_zero() {
            self.holders.remove(holder);
        } else {
            self.holders.insert(*holder, new_balance);
        }
        self.total = new_total;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([2u8; 32])
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_ledger_is_empty() {
        let ledger = ReserveLedger::new(3);
        assert_eq!(ledger.reserves(), &[Amount::ZERO; 3]);
        assert_eq!(ledger.total_liquidity(), Liquidity::ZERO);
        assert_eq!(ledger.balance_of(&alice()), Liquidity::ZERO);
    }

    // -- credit / debit -----------------------------------------------------

    #[test]
    fn credit_then_debit() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.credit(0, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.debit(0, Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.reserve(0), Ok(Amount::new(600)));
        assert_eq!(ledger.reserve(1), Ok(Amount::ZERO));
    }

    #[test]
    fn debit_below_zero_rejected() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.credit(0, Amount::new(100)) else {
            panic!("expected Ok");
        };
        let result = ledger.debit(0, Amount::new(101));
        assert_eq!(result, Err(PoolError::InsufficientReserve));
        // reserve untouched on failure
        assert_eq!(ledger.reserve(0), Ok(Amount::new(100)));
    }

    #[test]
    fn credit_overflow_rejected() {
        let mut ledger = ReserveLedger::new(1);
        let Ok(()) = ledger.credit(0, Amount::new(u128::MAX)) else {
            panic!("expected Ok");
        };
        let result = ledger.credit(0, Amount::new(1));
        assert!(matches!(result, Err(PoolError::Overflow(_))));
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut ledger = ReserveLedger::new(2);
        assert!(matches!(
            ledger.credit(2, Amount::new(1)),
            Err(PoolError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.debit(5, Amount::new(1)),
            Err(PoolError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.reserve(2),
            Err(PoolError::InvalidInput(_))
        ));
    }

    // -- mint / burn --------------------------------------------------------

    #[test]
    fn mint_updates_holder_and_total() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.mint(&alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.mint(&bob(), Liquidity::new(300)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Liquidity::new(500));
        assert_eq!(ledger.balance_of(&bob()), Liquidity::new(300));
        assert_eq!(ledger.total_liquidity(), Liquidity::new(800));
    }

    #[test]
    fn burn_updates_holder_and_total() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.mint(&alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.burn(&alice(), Liquidity::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Liquidity::new(300));
        assert_eq!(ledger.total_liquidity(), Liquidity::new(300));
    }

    #[test]
    fn burn_to_zero_removes_entry() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.mint(&alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.burn(&alice(), Liquidity::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Liquidity::ZERO);
        assert_eq!(ledger.total_liquidity(), Liquidity::ZERO);
    }

    #[test]
    fn burn_more_than_balance_rejected() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.mint(&alice(), Liquidity::new(100)) else {
            panic!("expected Ok");
        };
        let result = ledger.burn(&alice(), Liquidity::new(101));
        assert_eq!(result, Err(PoolError::InsufficientBalance));
        assert_eq!(ledger.balance_of(&alice()), Liquidity::new(100));
        assert_eq!(ledger.total_liquidity(), Liquidity::new(100));
    }

    #[test]
    fn burn_from_unknown_holder_rejected() {
        let mut ledger = ReserveLedger::new(2);
        let result = ledger.burn(&alice(), Liquidity::new(1));
        assert_eq!(result, Err(PoolError::InsufficientBalance));
    }

    // -- Claim conservation -------------------------------------------------

    #[test]
    fn holder_claims_sum_to_total() {
        let mut ledger = ReserveLedger::new(2);
        let Ok(()) = ledger.mint(&alice(), Liquidity::new(700)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.mint(&bob(), Liquidity::new(300)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.burn(&alice(), Liquidity::new(250)) else {
            panic!("expected Ok");
        };
        let sum = ledger.balance_of(&alice()).get() + ledger.balance_of(&bob()).get();
        assert_eq!(sum, ledger.total_liquidity().get());
    }
}
