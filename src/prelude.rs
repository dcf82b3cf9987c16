//! Convenience re-exports for common types and traits.
//!
//! A single import brings the frequently used surface into scope:
//!
//! ```rust
//! use basin_amm::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, Asset, AssetAddress, AssetSet, BasisPoints, DepositQuote, Liquidity,
    PoolEvent, Rounding,
};

// Re-export core traits
pub use crate::traits::{AccessControl, AssetTransfer, LiquidityPool, PauseGate, SwapPool};

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export error types
pub use crate::error::{PoolError, Result};

// Re-export the pool
pub use crate::pools::MultiAssetPool;

// Re-export reference collaborators
pub use crate::support::{InMemoryVault, PauseSwitch, StaticAdmin};
