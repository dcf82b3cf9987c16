//! Read-only deposit preview.

use super::{Amount, Liquidity};

/// The result of previewing a proportional deposit against current
/// reserves: the liquidity that would be minted for a reference amount of
/// asset 0, and the exact amount of every asset the pool would pull.
///
/// Produced by `required_amounts` without mutating any state; executing
/// the deposit afterwards may still fail if reserves moved in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositQuote {
    liquidity: Liquidity,
    amounts: Vec<Amount>,
}

impl DepositQuote {
    /// Creates a new quote. Internal to the engine; consumers only read.
    #[must_use]
    pub(crate) fn new(liquidity: Liquidity, amounts: Vec<Amount>) -> Self {
        Self { liquidity, amounts }
    }

    /// The liquidity that would be minted.
    #[must_use]
    pub fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// The required amount per asset, indexed like the pool's asset set.
    #[must_use]
    pub fn amounts(&self) -> &[Amount] {
        &self.amounts
    }
}
