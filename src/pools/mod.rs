//! Pool implementations.
//!
//! A single pool shape lives here: [`MultiAssetPool`], the constant-
//! product engine over an arbitrary fixed asset set. It implements the
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool) traits and hosts the
//! pricing arithmetic as private methods.

mod multi_asset;

#[cfg(test)]
mod proptest_properties;

pub use multi_asset::MultiAssetPool;
