//! Wide integer arithmetic: `a × b / d` through a 256-bit intermediate.

use crate::domain::Rounding;
use crate::error::{PoolError, Result};

/// Multiplies two `u128` values into a 256-bit `(hi, lo)` pair.
///
/// Standard 64-bit limb decomposition; none of the partial sums can
/// overflow `u128`.
pub(crate) const fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & MASK) + (hl & MASK);
    let lo = (mid << 64) | (ll & MASK);
    let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
    (hi, lo)
}

/// Computes `a × b / divisor` with an explicit rounding direction.
///
/// The product is formed in 256 bits and divided back down, so ratios
/// like `reserve × liquidity / total_liquidity` are exact even when the
/// product overflows `u128`. The only failure modes are a zero divisor
/// and a quotient wider than 128 bits.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `divisor` is zero.
/// - [`PoolError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::Rounding;
/// use basin_amm::math::mul_div;
///
/// assert_eq!(mul_div(1_500, 500, 1_000, Rounding::Down), Ok(750));
/// assert_eq!(mul_div(668, 500, 1_000, Rounding::Down), Ok(334));
/// assert_eq!(mul_div(7, 1, 2, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Result<u128> {
    if divisor == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let (hi, lo) = mul_wide(a, b);
    if hi == 0 {
        return finish(lo / divisor, lo % divisor, rounding);
    }
    if hi >= divisor {
        return Err(PoolError::Overflow("mul_div quotient exceeds 128 bits"));
    }

    // Restoring long division of the 256-bit product by a 128-bit divisor.
    // Invariant at the top of each step: rem < divisor.
    let mut rem = hi;
    let mut quotient = 0u128;
    let mut bit = 128u32;
    while bit > 0 {
        bit -= 1;
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> bit) & 1);
        // When the shift carried out of 128 bits the true remainder is
        // rem + 2^128, which always exceeds the divisor; wrapping_sub
        // yields the correct in-range remainder.
        if carry == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1 << bit;
        }
    }
    finish(quotient, rem, rounding)
}

const fn finish(quotient: u128, remainder: u128, rounding: Rounding) -> Result<u128> {
    match rounding {
        Rounding::Down => Ok(quotient),
        Rounding::Up => {
            if remainder == 0 {
                return Ok(quotient);
            }
            match quotient.checked_add(1) {
                Some(q) => Ok(q),
                None => Err(PoolError::Overflow("mul_div ceiling exceeds 128 bits")),
            }
        }
    }
}
