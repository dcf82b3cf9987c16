//! Property-based tests for the engine's accounting invariants.
//!
//! Covers the load-bearing properties:
//!
//! 1. **Bootstrap bounds** — the geometric-mean claim sits within the
//!    deposited amounts; equal deposits mint exactly that value.
//! 2. **Product preservation** — the touched reserve product never
//!    decreases across a swap.
//! 3. **Swap round trip** — A→B→A never returns more than went in.
//! 4. **Deposit/redeem round trip** — redeeming freshly minted claims
//!    never pays out more than was pulled.
//! 5. **Full drain** — redeeming the entire total empties every reserve.
//! 6. **Log/exp consistency** — `exp2_q64(log2_q64(x)) == x` over the
//!    exactness range.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Asset, AssetSet, BasisPoints, Liquidity};
use crate::math::{exp2_q64, log2_q64};
use crate::pools::MultiAssetPool;
use crate::support::{InMemoryVault, PauseSwitch, StaticAdmin};
use crate::traits::{LiquidityPool, SwapPool};

type PropPool = MultiAssetPool<InMemoryVault, StaticAdmin, PauseSwitch>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> Asset {
    Asset::token([1u8; 32])
}

fn asset_b() -> Asset {
    Asset::token([2u8; 32])
}

fn alice() -> AccountId {
    AccountId::from_bytes([0xA1; 32])
}

fn bob() -> AccountId {
    AccountId::from_bytes([0xB2; 32])
}

fn admin() -> AccountId {
    AccountId::from_bytes([0xAD; 32])
}

/// Two-asset pool with deep account balances for both traders.
fn make_pool(fee_bps: u32) -> PropPool {
    let Ok(assets) = AssetSet::new(vec![asset_a(), asset_b()]) else {
        panic!("valid asset set");
    };
    let Ok(config) = PoolConfig::new(assets, BasisPoints::new(fee_bps)) else {
        panic!("valid config");
    };
    let funds = Amount::new(u128::MAX / 8);
    let vault = InMemoryVault::new()
        .with_balance(asset_a(), alice(), funds)
        .with_balance(asset_b(), alice(), funds)
        .with_balance(asset_a(), bob(), funds)
        .with_balance(asset_b(), bob(), funds);
    MultiAssetPool::new(config, vault, StaticAdmin::new(admin()), PauseSwitch::new())
}

/// Reserve values kept inside the log/exp exactness range.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Bootstrap bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_mean_within_bounds(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let mut pool = make_pool(30);
        let Ok(minted) = pool.add_liquidity(&alice(), &[Amount::new(a), Amount::new(b)]) else {
            return Ok(());
        };
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(
            minted.get() >= lo && minted.get() <= hi,
            "geometric mean {} outside [{lo}, {hi}]",
            minted.get()
        );
    }

    #[test]
    fn prop_bootstrap_equal_amounts_exact(v in reserve_strategy()) {
        let mut pool = make_pool(30);
        let Ok(minted) = pool.add_liquidity(&alice(), &[Amount::new(v), Amount::new(v)]) else {
            return Ok(());
        };
        prop_assert_eq!(minted.get(), v);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_preserves_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        divisor in 1u128..=1_000u128,
    ) {
        let mut pool = make_pool(30);
        let Ok(_) = pool.add_liquidity(&alice(), &[Amount::new(ra), Amount::new(rb)]) else {
            return Ok(());
        };
        let amount_in = (ra / divisor).max(1);

        let k_before = ra * rb;
        if pool.swap(&bob(), 0, 1, Amount::new(amount_in), Amount::ZERO).is_err() {
            // dust-level swaps may price to zero output; nothing to check
            return Ok(());
        }
        let k_after = pool.reserves()[0].get() * pool.reserves()[1].get();
        prop_assert!(
            k_after >= k_before,
            "product shrank: {k_after} < {k_before}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Swap round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 100).max(1);
        let mut pool = make_pool(30);
        let Ok(_) = pool.add_liquidity(&alice(), &[Amount::new(ra), Amount::new(rb)]) else {
            return Ok(());
        };

        let Ok(received) = pool.swap(&bob(), 0, 1, Amount::new(swap_in), Amount::ZERO) else {
            return Ok(());
        };
        if received.is_zero() {
            return Ok(());
        }
        let Ok(returned) = pool.swap(&bob(), 1, 0, received, Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            returned.get() <= swap_in,
            "round trip gained value: {} > {swap_in}",
            returned.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 4 & 5: Deposit/redeem round trip and full drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_redeem_round_trip(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        reference in 100u128..=100_000u128,
    ) {
        let mut pool = make_pool(30);
        let Ok(_) = pool.add_liquidity(&alice(), &[Amount::new(ra), Amount::new(rb)]) else {
            return Ok(());
        };
        let Ok(quote) = pool.required_amounts(Amount::new(reference)) else {
            // reference too small against these reserves
            return Ok(());
        };
        let Ok(minted) = pool.add_liquidity(&bob(), quote.amounts()) else {
            return Ok(());
        };
        prop_assert_eq!(minted, quote.liquidity());

        let Ok(payouts) = pool.remove_liquidity(&bob(), minted) else {
            return Ok(());
        };
        for (paid, pulled) in payouts.iter().zip(quote.amounts()) {
            prop_assert!(
                paid.get() <= pulled.get(),
                "redeem paid {} for a {} deposit",
                paid.get(),
                pulled.get()
            );
        }
    }

    #[test]
    fn prop_full_redemption_drains_reserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let mut pool = make_pool(30);
        let Ok(minted) = pool.add_liquidity(&alice(), &[Amount::new(ra), Amount::new(rb)]) else {
            return Ok(());
        };
        let Ok(payouts) = pool.remove_liquidity(&alice(), minted) else {
            return Ok(());
        };
        prop_assert_eq!(payouts, vec![Amount::new(ra), Amount::new(rb)]);
        prop_assert_eq!(pool.total_liquidity(), Liquidity::ZERO);
        prop_assert_eq!(pool.reserves(), &[Amount::ZERO, Amount::ZERO]);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Log/exp consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_exp2_inverts_log2(x in 1u128..=4_294_967_295u128) {
        let Ok(log) = log2_q64(x) else {
            return Ok(());
        };
        prop_assert_eq!(exp2_q64(log), Ok(x));
    }

    #[test]
    fn prop_log2_is_monotone(x in 1u128..=u64::MAX as u128) {
        let Ok(at) = log2_q64(x) else {
            return Ok(());
        };
        let Ok(after) = log2_q64(x + 1) else {
            return Ok(());
        };
        prop_assert!(after >= at, "log2 not monotone at {x}");
    }
}
