//! Observer events emitted by pool operations.

use super::{AccountId, Amount, BasisPoints, Liquidity};

/// An observational record of a committed state mutation.
///
/// Events are appended to the pool's event log after the corresponding
/// ledger mutation commits and carry no behavioral contract beyond their
/// ordering within the log. Asset positions are indices into the pool's
/// asset set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    /// Liquidity was deposited and claims minted.
    LiquidityAdded {
        /// The depositing account.
        provider: AccountId,
        /// The amounts actually pulled, indexed like the asset set.
        amounts: Vec<Amount>,
        /// The liquidity minted to the provider.
        liquidity_minted: Liquidity,
    },
    /// Liquidity claims were burned and reserves paid out.
    LiquidityRemoved {
        /// The redeeming account.
        provider: AccountId,
        /// The amounts paid out, indexed like the asset set.
        amounts: Vec<Amount>,
        /// The liquidity burned from the provider.
        liquidity_burned: Liquidity,
    },
    /// An exchange between two pooled assets.
    Swap {
        /// The trading account.
        user: AccountId,
        /// Index of the asset sold to the pool.
        asset_in: usize,
        /// Index of the asset bought from the pool.
        asset_out: usize,
        /// The input amount pulled.
        amount_in: Amount,
        /// The output amount pushed.
        amount_out: Amount,
    },
    /// The trading fee rate was changed by an admin.
    FeeRateUpdated {
        /// The new fee rate.
        rate: BasisPoints,
    },
    /// Fee surplus was withdrawn by an admin.
    FeesWithdrawn {
        /// Index of the asset whose surplus was withdrawn.
        asset: usize,
        /// The surplus amount transferred.
        amount: Amount,
        /// The receiving account.
        to: AccountId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_compare_by_payload() {
        let a = PoolEvent::FeeRateUpdated {
            rate: BasisPoints::new(30),
        };
        let b = PoolEvent::FeeRateUpdated {
            rate: BasisPoints::new(30),
        };
        let c = PoolEvent::FeeRateUpdated {
            rate: BasisPoints::new(100),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
