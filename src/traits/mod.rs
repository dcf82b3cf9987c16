//! Core trait abstractions.
//!
//! Two families of traits define the engine's seams:
//!
//! - [`SwapPool`] and [`LiquidityPool`] are the operation surface a pool
//!   exposes to callers;
//! - [`AssetTransfer`], [`AccessControl`] and [`PauseGate`] are the
//!   external collaborators a pool consumes — value transport, role
//!   checks, and emergency-stop state live outside the engine and are
//!   specified only at this boundary.

mod external;
mod liquidity_pool;
mod swap_pool;

pub use external::{AccessControl, AssetTransfer, PauseGate};
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
