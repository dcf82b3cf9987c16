//! Reference collaborator implementations.
//!
//! In-memory implementations of the external collaborator traits, used
//! by the examples, the doctests, and the test suites. They model the
//! transport contract exactly: per-call atomic transfers, a custody
//! balance observable by the pool, and a single admin role.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Asset};
use crate::error::{PoolError, Result};
use crate::traits::{AccessControl, AssetTransfer, PauseGate};

/// An in-memory asset bank: per-account balances plus a pool custody
/// balance per asset.
///
/// `pull` moves value from an account into custody, `push` moves it back
/// out; both are atomic per call. [`donate`](Self::donate) adds value to
/// custody without touching any account, modeling value that arrives
/// outside ledger operations — the source of withdrawable fee surplus.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{AccountId, Amount, Asset};
/// use basin_amm::support::InMemoryVault;
/// use basin_amm::traits::AssetTransfer;
///
/// let asset = Asset::token([1u8; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let mut vault = InMemoryVault::new().with_balance(asset, alice, Amount::new(1_000));
///
/// vault.pull(&asset, &alice, Amount::new(400)).expect("funded");
/// assert_eq!(vault.pool_balance(&asset), Amount::new(400));
/// assert_eq!(vault.balance_of(&asset, &alice), Amount::new(600));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    accounts: BTreeMap<(Asset, AccountId), Amount>,
    custody: BTreeMap<Asset, Amount>,
}

impl InMemoryVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seeds `account` with `amount` of `asset`.
    #[must_use]
    pub fn with_balance(mut self, asset: Asset, account: AccountId, amount: Amount) -> Self {
        self.accounts.insert((asset, account), amount);
        self
    }

    /// Returns `account`'s balance of `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: &Asset, account: &AccountId) -> Amount {
        self.accounts
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Adds `amount` of `asset` directly to pool custody, bypassing any
    /// account. Models donations and natively attached value.
    pub fn donate(&mut self, asset: Asset, amount: Amount) {
        let held = self.pool_balance(&asset);
        if let Some(sum) = held.checked_add(&amount) {
            self.custody.insert(asset, sum);
        }
    }
}

impl AssetTransfer for InMemoryVault {
    fn pull(&mut self, asset: &Asset, from: &AccountId, amount: Amount) -> Result<()> {
        let remaining = self
            .balance_of(asset, from)
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("insufficient balance or allowance"))?;
        let held = self
            .pool_balance(asset)
            .checked_add(&amount)
            .ok_or(PoolError::TransferFailed("custody balance overflow"))?;
        self.accounts.insert((*asset, *from), remaining);
        self.custody.insert(*asset, held);
        Ok(())
    }

    fn push(&mut self, asset: &Asset, to: &AccountId, amount: Amount) -> Result<()> {
        let remaining = self
            .pool_balance(asset)
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("pool custody balance exhausted"))?;
        let credited = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or(PoolError::TransferFailed("recipient balance overflow"))?;
        self.custody.insert(*asset, remaining);
        self.accounts.insert((*asset, *to), credited);
        Ok(())
    }

    fn pool_balance(&self, asset: &Asset) -> Amount {
        self.custody.get(asset).copied().unwrap_or(Amount::ZERO)
    }
}

/// Access control with a single fixed admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAdmin {
    admin: AccountId,
}

impl StaticAdmin {
    /// Creates an access controller recognizing `admin` as the only
    /// admin.
    #[must_use]
    pub const fn new(admin: AccountId) -> Self {
        Self { admin }
    }
}

impl AccessControl for StaticAdmin {
    fn has_admin_role(&self, caller: &AccountId) -> bool {
        *caller == self.admin
    }
}

/// A plain boolean pause gate, active by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseSwitch {
    active: bool,
}

impl PauseSwitch {
    /// Creates a gate in the active (unpaused) state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: true }
    }
}

impl Default for PauseSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseGate for PauseSwitch {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
