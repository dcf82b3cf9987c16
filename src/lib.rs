//! # Basin AMM
//!
//! Multi-asset constant-product AMM engine: a reserve/liquidity ledger
//! and pricing core for a decentralized exchange pool.
//!
//! The engine tracks one reserve per asset in a fixed set, issues and
//! redeems a fungible liquidity claim proportional to contribution, and
//! prices exchanges between any two pooled assets with a constant-product
//! curve and a basis-point trading fee. Everything is integer arithmetic
//! with explicit rounding: required deposits round up, payouts round
//! down, and the first deposit is priced by a deterministic fixed-point
//! geometric mean — so no sequence of operations can shrink a liquidity
//! holder's claim value through rounding.
//!
//! Identity, pause state, and value transport are external collaborators
//! consumed through traits; the engine owns only the arithmetic and the
//! ledger.
//!
//! # Quick Start
//!
//! ```rust
//! use basin_amm::prelude::*;
//!
//! let a = Asset::token([1u8; 32]);
//! let b = Asset::token([2u8; 32]);
//! let alice = AccountId::from_bytes([0xA1; 32]);
//! let admin = AccountId::from_bytes([0xAD; 32]);
//!
//! // 1. Describe the pool: which assets, what fee.
//! let assets = AssetSet::new(vec![a, b]).expect("two distinct assets");
//! let config = PoolConfig::new(assets, BasisPoints::STANDARD_FEE).expect("valid fee");
//!
//! // 2. Wire the collaborators (in-memory reference implementations).
//! let vault = InMemoryVault::new()
//!     .with_balance(a, alice, Amount::new(10_000))
//!     .with_balance(b, alice, Amount::new(10_000));
//! let mut pool = MultiAssetPool::new(config, vault, StaticAdmin::new(admin), PauseSwitch::new());
//!
//! // 3. Bootstrap with the first deposit (priced by geometric mean).
//! let minted = pool
//!     .add_liquidity(&alice, &[Amount::new(1_000), Amount::new(1_000)])
//!     .expect("bootstrap deposit");
//! assert_eq!(minted.get(), 1_000);
//!
//! // 4. Swap 500 of asset A for asset B.
//! let out = pool
//!     .swap(&alice, 0, 1, Amount::new(500), Amount::new(1))
//!     .expect("swap");
//! assert_eq!(out.get(), 332);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  uses PoolConfig + MultiAssetPool
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐     ┌──────────────────────────────┐
//! │     Pool      │────▶│  Collaborators (traits)       │
//! │  pricing +    │     │  AssetTransfer, AccessControl,│
//! │  orchestration│     │  PauseGate                    │
//! └──────┬───────┘     └──────────────────────────────┘
//!        │ credit / debit / mint / burn
//!        ▼
//! ┌──────────────┐
//! │    Ledger     │  reserves, total liquidity, holder claims
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │  Math/Domain  │  mul_div, log2/exp2, Amount, Liquidity, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Asset`](domain::Asset), [`AssetSet`](domain::AssetSet), … |
//! | [`traits`] | Operation surface and collaborator seams: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`AssetTransfer`](traits::AssetTransfer), … |
//! | [`config`] | Validated pool blueprint: [`PoolConfig`](config::PoolConfig) |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger) — the authoritative state store |
//! | [`pools`] | [`MultiAssetPool`](pools::MultiAssetPool) — the engine |
//! | [`math`] | 256-bit `mul_div` and Q64.64 log/exp for the geometric-mean bootstrap |
//! | [`support`] | In-memory reference collaborators for tests and examples |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod support;
pub mod traits;
