//! Multi-asset constant-product pool.
//!
//! The pool tracks one reserve per asset and issues a single fungible
//! liquidity claim against all of them. Any two assets can be exchanged
//! pairwise under the constant-product rule.
//!
//! # Swap Algorithm (asset `i` → asset `j`)
//!
//! 1. `net_input = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(net_input × reserve_j / (reserve_i + net_input))`
//! 3. `reserve_i += amount_in` (the fee component stays in the pool)
//! 4. `reserve_j -= amount_out`
//!
//! # Invariants
//!
//! After every operation:
//!
//! - reserves, the total claim, and every holder claim are non-negative;
//! - holder claims sum to the total;
//! - the total is zero exactly when every reserve is zero;
//! - for the two reserves a swap touches, `reserve_i × reserve_j` never
//!   decreases (strict growth whenever the fee is non-zero);
//! - observed custody balances never fall below recorded reserves.
//!
//! # Execution Model
//!
//! The pool is a sequential state machine: every operation takes
//! `&mut self`, so the borrow checker enforces the single-writer rule
//! statically. A reentrancy latch additionally rejects nested entry for
//! collaborator implementations that reach the pool through interior
//! mutability. Every failure aborts the whole operation with no ledger
//! mutation observable.

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, Asset, AssetSet, BasisPoints, DepositQuote, Liquidity, PoolEvent, Rounding,
};
use crate::error::{PoolError, Result};
use crate::ledger::ReserveLedger;
use crate::math;
use crate::traits::{AccessControl, AssetTransfer, LiquidityPool, PauseGate, SwapPool};

/// A pool holding an arbitrary fixed set of assets, priced pairwise by
/// the constant-product curve.
///
/// Construction takes a validated [`PoolConfig`] plus the three external
/// collaborators; the asset set and collaborator wiring are immutable
/// for the pool's lifetime, while the fee rate can be changed by an
/// admin.
///
/// # Example
///
/// ```
/// use basin_amm::config::PoolConfig;
/// use basin_amm::domain::{AccountId, Amount, Asset, AssetSet, BasisPoints};
/// use basin_amm::pools::MultiAssetPool;
/// use basin_amm::support::{InMemoryVault, PauseSwitch, StaticAdmin};
/// use basin_amm::traits::{LiquidityPool, SwapPool};
///
/// let a = Asset::token([1u8; 32]);
/// let b = Asset::token([2u8; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let admin = AccountId::from_bytes([0xAD; 32]);
///
/// let assets = AssetSet::new(vec![a, b]).expect("valid set");
/// let config = PoolConfig::new(assets, BasisPoints::STANDARD_FEE).expect("valid config");
/// let vault = InMemoryVault::new()
///     .with_balance(a, alice, Amount::new(10_000))
///     .with_balance(b, alice, Amount::new(10_000));
///
/// let mut pool = MultiAssetPool::new(config, vault, StaticAdmin::new(admin), PauseSwitch::new());
///
/// // Bootstrap: the first deposit is priced by the geometric mean.
/// let minted = pool
///     .add_liquidity(&alice, &[Amount::new(1_000), Amount::new(1_000)])
///     .expect("bootstrap deposit");
/// assert_eq!(minted.get(), 1_000);
///
/// // Swap 500 of A for B at a 0.30% fee.
/// let out = pool
///     .swap(&alice, 0, 1, Amount::new(500), Amount::new(1))
///     .expect("swap");
/// assert_eq!(out.get(), 332);
/// assert_eq!(pool.reserve(0), Ok(Amount::new(1_500)));
/// assert_eq!(pool.reserve(1), Ok(Amount::new(668)));
/// ```
#[derive(Debug, Clone)]
pub struct MultiAssetPool<T, A, P> {
    assets: AssetSet,
    fee_rate: BasisPoints,
    ledger: ReserveLedger,
    transfer: T,
    access: A,
    gate: P,
    events: Vec<PoolEvent>,
    entered: bool,
}

impl<T, A, P> MultiAssetPool<T, A, P>
where
    T: AssetTransfer,
    A: AccessControl,
    P: PauseGate,
{
    /// Creates a new pool from a validated configuration and the three
    /// external collaborators.
    #[must_use]
    pub fn new(config: PoolConfig, transfer: T, access: A, gate: P) -> Self {
        let (assets, fee_rate) = config.into_parts();
        let ledger = ReserveLedger::new(assets.len());
        Self {
            assets,
            fee_rate,
            ledger,
            transfer,
            access,
            gate,
            events: Vec::new(),
            entered: false,
        }
    }

    // -- queries ------------------------------------------------------------

    /// Returns all recorded reserves, indexed like the asset set.
    #[must_use]
    pub fn reserves(&self) -> &[Amount] {
        self.ledger.reserves()
    }

    /// Returns the recorded reserve for the asset at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if `index` is out of range.
    pub fn reserve(&self, index: usize) -> Result<Amount> {
        self.ledger.reserve(index)
    }

    /// Returns `true` while ledger-affecting operations are rejected.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.gate.is_active()
    }

    /// Returns a view of the value-transport collaborator.
    #[must_use]
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Drains and returns the event log in emission order.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    // -- admin operations ---------------------------------------------------

    /// Stops deposits, redemptions and swaps. Fee withdrawal stays
    /// available.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Unauthorized`] if `caller` lacks the admin
    /// role.
    pub fn pause(&mut self, caller: &AccountId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.gate.set_active(false);
        Ok(())
    }

    /// Re-enables deposits, redemptions and swaps.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Unauthorized`] if `caller` lacks the admin
    /// role.
    pub fn unpause(&mut self, caller: &AccountId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.gate.set_active(true);
        Ok(())
    }

    /// Changes the trading fee rate and emits
    /// [`PoolEvent::FeeRateUpdated`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` lacks the admin role.
    /// - [`PoolError::InvalidInput`] if `rate` is 100% or more.
    pub fn set_fee_rate(&mut self, caller: &AccountId, rate: BasisPoints) -> Result<()> {
        self.ensure_admin(caller)?;
        if !rate.is_valid_fee() {
            return Err(PoolError::InvalidInput("fee rate must be below 100%"));
        }
        self.fee_rate = rate;
        self.events.push(PoolEvent::FeeRateUpdated { rate });
        Ok(())
    }

    /// Withdraws the fee surplus of one asset — the observed custody
    /// balance above the recorded reserve — to `to`. Never touches the
    /// reserve, and is unaffected by pause state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` lacks the admin role.
    /// - [`PoolError::InvalidInput`] if `asset` is out of range.
    /// - [`PoolError::NoFeesAvailable`] if there is no surplus.
    /// - [`PoolError::ArithmeticInvariant`] if the observed balance is
    ///   below the recorded reserve.
    /// - [`PoolError::TransferFailed`] if the transport rejects the
    ///   transfer.
    pub fn withdraw_fees(
        &mut self,
        caller: &AccountId,
        asset: usize,
        to: &AccountId,
    ) -> Result<Amount> {
        self.enter()?;
        let result = self.withdraw_fees_inner(caller, asset, to);
        self.leave();
        result
    }

    // -- guarded operation bodies -------------------------------------------

    fn withdraw_fees_inner(
        &mut self,
        caller: &AccountId,
        asset: usize,
        to: &AccountId,
    ) -> Result<Amount> {
        self.ensure_admin(caller)?;
        let asset_id = self.asset_at(asset)?;
        let reserve = self.ledger.reserve(asset)?;
        let observed = self.transfer.pool_balance(&asset_id);
        let surplus = observed.checked_sub(&reserve).ok_or(PoolError::ArithmeticInvariant(
            "observed balance below recorded reserve",
        ))?;
        if surplus.is_zero() {
            return Err(PoolError::NoFeesAvailable);
        }
        self.transfer.push(&asset_id, to, surplus)?;
        self.events.push(PoolEvent::FeesWithdrawn {
            asset,
            amount: surplus,
            to: *to,
        });
        Ok(surplus)
    }

    fn add_liquidity_inner(
        &mut self,
        provider: &AccountId,
        amounts: &[Amount],
    ) -> Result<Liquidity> {
        self.ensure_active()?;
        if amounts.len() != self.assets.len() {
            return Err(PoolError::InvalidInput(
                "amounts length must match asset count",
            ));
        }
        let total = self.ledger.total_liquidity();
        let (minted, pulled) = if total.is_zero() {
            self.compute_bootstrap(amounts)?
        } else {
            self.compute_proportional(amounts, total)?
        };

        // Validate the ledger writes up front so nothing after the pulls
        // can fail.
        for (index, amount) in pulled.iter().enumerate() {
            if self.ledger.reserve(index)?.checked_add(amount).is_none() {
                return Err(PoolError::Overflow("reserve credit overflow"));
            }
        }
        if total.checked_add(&minted).is_none() {
            return Err(PoolError::Overflow("total liquidity overflow"));
        }

        self.pull_all(provider, &pulled)?;
        for (index, amount) in pulled.iter().enumerate() {
            self.ledger.credit(index, *amount)?;
        }
        self.ledger.mint(provider, minted)?;
        self.events.push(PoolEvent::LiquidityAdded {
            provider: *provider,
            amounts: pulled,
            liquidity_minted: minted,
        });
        Ok(minted)
    }

    fn remove_liquidity_inner(
        &mut self,
        provider: &AccountId,
        liquidity: Liquidity,
    ) -> Result<Vec<Amount>> {
        self.ensure_active()?;
        if liquidity.is_zero() {
            return Err(PoolError::InvalidInput("liquidity must be non-zero"));
        }
        if self.ledger.balance_of(provider) < liquidity {
            return Err(PoolError::InsufficientBalance);
        }
        let total = self.ledger.total_liquidity();

        let mut payouts = Vec::with_capacity(self.assets.len());
        for index in 0..self.assets.len() {
            let reserve = self.ledger.reserve(index)?;
            // Payouts round down so the pool never over-pays.
            payouts.push(reserve.mul_div(
                Amount::new(liquidity.get()),
                Amount::new(total.get()),
                Rounding::Down,
            )?);
        }

        // Ledger first, transfers after: a reentrant observer can never
        // see claims that are still backed by released reserves.
        for (index, amount) in payouts.iter().enumerate() {
            self.ledger.debit(index, *amount)?;
        }
        self.ledger.burn(provider, liquidity)?;

        if let Err(err) = self.push_all(provider, &payouts) {
            // Restores reinstate the exact prior values and cannot fail.
            for (index, amount) in payouts.iter().enumerate() {
                let _ = self.ledger.credit(index, *amount);
            }
            let _ = self.ledger.mint(provider, liquidity);
            return Err(err);
        }

        self.events.push(PoolEvent::LiquidityRemoved {
            provider: *provider,
            amounts: payouts.clone(),
            liquidity_burned: liquidity,
        });
        Ok(payouts)
    }

    fn swap_inner(
        &mut self,
        caller: &AccountId,
        asset_in: usize,
        asset_out: usize,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<Amount> {
        self.ensure_active()?;
        if amount_in.is_zero() {
            return Err(PoolError::InvalidInput("swap input must be non-zero"));
        }
        if asset_in == asset_out {
            return Err(PoolError::InvalidInput("swap requires two distinct assets"));
        }
        let asset_in_id = self.asset_at(asset_in)?;
        let asset_out_id = self.asset_at(asset_out)?;

        let reserve_in = self.ledger.reserve(asset_in)?;
        let reserve_out = self.ledger.reserve(asset_out)?;
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let amount_out = self.compute_swap_output(amount_in, reserve_in, reserve_out)?;
        if amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded);
        }
        // Structurally impossible given the formula; checked anyway.
        if amount_out > reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }
        if reserve_in.checked_add(&amount_in).is_none() {
            return Err(PoolError::Overflow("reserve credit overflow"));
        }

        self.transfer.pull(&asset_in_id, caller, amount_in)?;
        self.ledger.credit(asset_in, amount_in)?;
        self.ledger.debit(asset_out, amount_out)?;

        if let Err(err) = self.transfer.push(&asset_out_id, caller, amount_out) {
            // Restores reinstate the exact prior values and cannot fail.
            let _ = self.ledger.credit(asset_out, amount_out);
            let _ = self.ledger.debit(asset_in, amount_in);
            let _ = self.transfer.push(&asset_in_id, caller, amount_in);
            return Err(err);
        }

        self.events.push(PoolEvent::Swap {
            user: *caller,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        });
        Ok(amount_out)
    }

    // -- pricing ------------------------------------------------------------

    /// Bootstrap issuance: the claim is the integer geometric mean of the
    /// deposited amounts, and the full amounts become the reserves.
    fn compute_bootstrap(&self, amounts: &[Amount]) -> Result<(Liquidity, Vec<Amount>)> {
        if amounts.iter().any(Amount::is_zero) {
            return Err(PoolError::InvalidInput(
                "bootstrap deposit requires every amount to be positive",
            ));
        }
        let raw: Vec<u128> = amounts.iter().map(Amount::get).collect();
        let mean = math::geometric_mean(&raw)?;
        if mean == 0 {
            return Err(PoolError::ArithmeticInvariant(
                "bootstrap liquidity computed as zero",
            ));
        }
        Ok((Liquidity::new(mean), amounts.to_vec()))
    }

    /// Proportional issuance: the claim is priced off `amounts[0]`
    /// against the reserve of asset 0, and each required amount is the
    /// ceiling of the proportional share so the pool never under-collects.
    fn compute_proportional(
        &self,
        amounts: &[Amount],
        total: Liquidity,
    ) -> Result<(Liquidity, Vec<Amount>)> {
        let reference_reserve = self.ledger.reserve(0)?;
        let minted = math::mul_div(
            total.get(),
            amounts[0].get(),
            reference_reserve.get(),
            Rounding::Down,
        )?;
        if minted == 0 {
            return Err(PoolError::ArithmeticInvariant(
                "deposit too small to mint liquidity",
            ));
        }

        let mut required = Vec::with_capacity(amounts.len());
        for (index, offered) in amounts.iter().enumerate() {
            let reserve = self.ledger.reserve(index)?;
            let need = reserve.mul_div(
                Amount::new(minted),
                Amount::new(total.get()),
                Rounding::Up,
            )?;
            if *offered < need {
                return Err(PoolError::InsufficientInput(
                    "offered amount below required deposit",
                ));
            }
            required.push(need);
        }
        Ok((Liquidity::new(minted), required))
    }

    /// Constant-product output for a fee-reduced input against the
    /// pre-swap reserves.
    fn compute_swap_output(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        let net_input = self.fee_rate.retain_after_fee(amount_in)?;
        let denominator = reserve_in
            .checked_add(&net_input)
            .ok_or(PoolError::Overflow("swap denominator overflow"))?;
        net_input.mul_div(reserve_out, denominator, Rounding::Down)
    }

    // -- transfer batching --------------------------------------------------

    /// Pulls one amount per asset from `provider`; on a mid-sequence
    /// failure, refunds what was already pulled and reports the original
    /// error. Per-call transfer atomicity bounds the claw-back.
    fn pull_all(&mut self, provider: &AccountId, amounts: &[Amount]) -> Result<()> {
        for (index, amount) in amounts.iter().enumerate() {
            let asset = self.asset_at(index)?;
            if let Err(err) = self.transfer.pull(&asset, provider, *amount) {
                for (refunded, refund) in amounts[..index].iter().enumerate() {
                    if let Ok(refund_asset) = self.asset_at(refunded) {
                        let _ = self.transfer.push(&refund_asset, provider, *refund);
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// Pushes one amount per asset to `provider`; on a mid-sequence
    /// failure, claws back what was already pushed and reports the
    /// original error.
    fn push_all(&mut self, provider: &AccountId, amounts: &[Amount]) -> Result<()> {
        for (index, amount) in amounts.iter().enumerate() {
            let asset = self.asset_at(index)?;
            if let Err(err) = self.transfer.push(&asset, provider, *amount) {
                for (returned, claw) in amounts[..index].iter().enumerate() {
                    if let Ok(claw_asset) = self.asset_at(returned) {
                        let _ = self.transfer.pull(&claw_asset, provider, *claw);
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    // -- shared checks ------------------------------------------------------

    fn asset_at(&self, index: usize) -> Result<Asset> {
        self.assets
            .get(index)
            .copied()
            .ok_or(PoolError::InvalidInput("asset index out of range"))
    }

    fn ensure_active(&self) -> Result<()> {
        if self.gate.is_active() {
            Ok(())
        } else {
            Err(PoolError::PoolPaused)
        }
    }

    fn ensure_admin(&self, caller: &AccountId) -> Result<()> {
        if self.access.has_admin_role(caller) {
            Ok(())
        } else {
            Err(PoolError::Unauthorized)
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Err(PoolError::Reentrancy);
        }
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) {
        self.entered = false;
    }
}

impl<T, A, P> SwapPool for MultiAssetPool<T, A, P>
where
    T: AssetTransfer,
    A: AccessControl,
    P: PauseGate,
{
    fn swap(
        &mut self,
        caller: &AccountId,
        asset_in: usize,
        asset_out: usize,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<Amount> {
        self.enter()?;
        let result = self.swap_inner(caller, asset_in, asset_out, amount_in, min_amount_out);
        self.leave();
        result
    }

    fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    fn asset_set(&self) -> &AssetSet {
        &self.assets
    }
}

impl<T, A, P> LiquidityPool for MultiAssetPool<T, A, P>
where
    T: AssetTransfer,
    A: AccessControl,
    P: PauseGate,
{
    fn add_liquidity(&mut self, provider: &AccountId, amounts: &[Amount]) -> Result<Liquidity> {
        self.enter()?;
        let result = self.add_liquidity_inner(provider, amounts);
        self.leave();
        result
    }

    fn remove_liquidity(
        &mut self,
        provider: &AccountId,
        liquidity: Liquidity,
    ) -> Result<Vec<Amount>> {
        self.enter()?;
        let result = self.remove_liquidity_inner(provider, liquidity);
        self.leave();
        result
    }

    fn required_amounts(&self, reference_amount: Amount) -> Result<DepositQuote> {
        let total = self.ledger.total_liquidity();
        if total.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        let reference_reserve = self.ledger.reserve(0)?;
        let minted = math::mul_div(
            total.get(),
            reference_amount.get(),
            reference_reserve.get(),
            Rounding::Down,
        )?;
        if minted == 0 {
            return Err(PoolError::ArithmeticInvariant(
                "reference amount too small to mint liquidity",
            ));
        }
        let mut amounts = Vec::with_capacity(self.assets.len());
        for index in 0..self.assets.len() {
            let reserve = self.ledger.reserve(index)?;
            amounts.push(reserve.mul_div(
                Amount::new(minted),
                Amount::new(total.get()),
                Rounding::Up,
            )?);
        }
        Ok(DepositQuote::new(Liquidity::new(minted), amounts))
    }

    fn total_liquidity(&self) -> Liquidity {
        self.ledger.total_liquidity()
    }

    fn liquidity_of(&self, holder: &AccountId) -> Liquidity {
        self.ledger.balance_of(holder)
    }
}
