//! Basis-point fee fractions.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Denominator representing 100% (10 000 basis points).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A fee fraction expressed in basis points (1 bp = 0.01%).
///
/// The standard trading fee is 30 bp (0.30%). A valid fee rate is strictly
/// below 10 000 bp; [`is_valid_fee`](Self::is_valid_fee) checks this and
/// pool construction enforces it.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Amount, BasisPoints};
///
/// let fee = BasisPoints::new(30);
/// // floor(500 * 9970 / 10000) = 498
/// assert_eq!(fee.retain_after_fee(Amount::new(500)), Ok(Amount::new(498)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (fee-free).
    pub const ZERO: Self = Self(0);

    /// The standard 0.30% trading fee.
    pub const STANDARD_FEE: Self = Self(30);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is a usable fee rate (`0..10_000`).
    ///
    /// A 100% fee would zero out every swap input, so the upper bound is
    /// exclusive.
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate product
    /// overflows `u128`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(PoolError::Overflow("basis points apply overflow")),
        };
        let divisor = BPS_DENOMINATOR as u128;
        let quotient = product / divisor;
        match rounding {
            Rounding::Down => Ok(Amount::new(quotient)),
            Rounding::Up => {
                if product % divisor != 0 {
                    Ok(Amount::new(quotient + 1))
                } else {
                    Ok(Amount::new(quotient))
                }
            }
        }
    }

    /// Computes the fee-reduced remainder of `amount`:
    /// `floor(amount × (10_000 − self) / 10_000)`.
    ///
    /// This is the effective swap input after the trading fee is deducted.
    /// Flooring here keeps the rounding error on the pool's side.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfiguration`] if the rate is ≥ 100%.
    /// - [`PoolError::Overflow`] if the intermediate product overflows.
    pub const fn retain_after_fee(&self, amount: Amount) -> Result<Amount> {
        let complement = match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(0) | None => {
                return Err(PoolError::InvalidConfiguration(
                    "fee rate must be below 100%",
                ))
            }
            Some(v) => v,
        };
        Self(complement).apply(amount, Rounding::Down)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & validity --------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(30).get(), 30);
        assert_eq!(BasisPoints::STANDARD_FEE.get(), 30);
    }

    #[test]
    fn fee_validity_bounds() {
        assert!(BasisPoints::ZERO.is_valid_fee());
        assert!(BasisPoints::new(9_999).is_valid_fee());
        assert!(!BasisPoints::new(10_000).is_valid_fee());
        assert!(!BasisPoints::new(u32::MAX).is_valid_fee());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_round_down() {
        // 30bp of 1_000_000 = 3_000
        let Ok(fee) = BasisPoints::new(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(3_000));
    }

    #[test]
    fn apply_round_up_remainder() {
        // 30bp of 1 = 0.003 → ceil = 1
        let Ok(fee) = BasisPoints::new(30).apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(1));
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::new(u128::MAX), Rounding::Down);
        assert!(matches!(result, Err(PoolError::Overflow(_))));
    }

    // -- retain_after_fee ---------------------------------------------------

    #[test]
    fn retain_standard_fee() {
        // floor(500 * 9970 / 10000) = 498
        let Ok(net) = BasisPoints::new(30).retain_after_fee(Amount::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(498));
    }

    #[test]
    fn retain_zero_fee_is_identity() {
        let Ok(net) = BasisPoints::ZERO.retain_after_fee(Amount::new(12_345)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(12_345));
    }

    #[test]
    fn retain_full_fee_rejected() {
        let result = BasisPoints::new(10_000).retain_after_fee(Amount::new(100));
        assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn retain_monotone_in_fee() {
        let amount = Amount::new(1_000_000);
        let mut last = u128::MAX;
        for bps in [0u32, 5, 30, 100, 500] {
            let Ok(net) = BasisPoints::new(bps).retain_after_fee(amount) else {
                panic!("expected Ok");
            };
            assert!(net.get() < last, "net input must shrink as the fee grows");
            last = net.get();
        }
    }
}
