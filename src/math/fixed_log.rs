//! Deterministic Q64.64 binary logarithm, exponential, and the
//! geometric-mean bootstrap built on them.
//!
//! The first deposit into an empty pool is priced by the geometric mean
//! of the deposited amounts, computed entirely in the log domain:
//!
//! ```text
//! mean = exp2( (log2(a_0) + log2(a_1) + … + log2(a_n-1)) / n )
//! ```
//!
//! Everything here is integer arithmetic on [`U64F64`] (64 integer, 64
//! fractional bits) with truncation at every step, so results are
//! bit-for-bit reproducible across platforms — no floating point, no
//! platform-dependent rounding.
//!
//! [`exp2_q64`] is defined as the exact floor-inverse of [`log2_q64`]:
//! the greatest integer `r` with `log2_q64(r) <= x`, located by binary
//! search. The pair is therefore consistent by construction and
//! `exp2_q64(log2_q64(x)) == x` holds over the ranges the engine uses.

use fixed::types::U64F64;

use super::wide::mul_wide;
use crate::error::{PoolError, Result};

/// Number of fractional bits in the Q64.64 representation.
const FRAC_BITS: u32 = 64;

/// The mantissa value `1.0` in raw Q64.64 bits.
const ONE_RAW: u128 = 1 << FRAC_BITS;

/// Squares a Q64.64 mantissa: `r² >> 64`, widened through 256 bits.
///
/// The caller keeps `r` below `2^66`, so the shifted square fits `u128`.
const fn square_shift(r: u128) -> u128 {
    let (hi, lo) = mul_wide(r, r);
    (hi << FRAC_BITS) | (lo >> FRAC_BITS)
}

/// Computes `log2(x)` in unsigned Q64.64.
///
/// The integer part comes from the bit width of `x`; the 64 fractional
/// bits are produced by the classic squaring method, one bit per
/// iteration, truncating the mantissa after each squaring. Inputs wider
/// than 65 significant bits lose the bits below the mantissa window,
/// which keeps the relative error under one part in `2^64`.
///
/// # Errors
///
/// Returns [`PoolError::ArithmeticInvariant`] if `x` is zero.
///
/// # Examples
///
/// ```
/// use basin_amm::math::log2_q64;
/// use fixed::types::U64F64;
///
/// assert_eq!(log2_q64(1), Ok(U64F64::ZERO));
/// assert_eq!(log2_q64(1024), Ok(U64F64::from_num(10)));
/// ```
pub fn log2_q64(x: u128) -> Result<U64F64> {
    if x == 0 {
        return Err(PoolError::ArithmeticInvariant("log2 of zero is undefined"));
    }
    let msb = 127 - x.leading_zeros();
    let mut bits = u128::from(msb) << FRAC_BITS;

    // Normalize the mantissa into [1, 2) as Q64.64.
    let mut r = if msb >= FRAC_BITS {
        x >> (msb - FRAC_BITS)
    } else {
        x << (FRAC_BITS - msb)
    };

    let mut bit = 1u128 << (FRAC_BITS - 1);
    while bit != 0 && r != ONE_RAW {
        r = square_shift(r);
        if r >= 2 * ONE_RAW {
            r >>= 1;
            bits |= bit;
        }
        bit >>= 1;
    }
    Ok(U64F64::from_bits(bits))
}

/// Computes `floor(2^x)` for an unsigned Q64.64 exponent.
///
/// Defined as the greatest integer `r` with `log2_q64(r) <= x`. The
/// integer part of `x` pins `r` into `[2^n, 2^(n+1))`; a binary search
/// over that range finds the boundary. [`log2_q64`] is monotone
/// non-decreasing, which is what makes the search valid.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if the integer part of `x` is 128 or
/// more, i.e. the result would not fit in `u128`.
///
/// # Examples
///
/// ```
/// use basin_amm::math::{exp2_q64, log2_q64};
/// use fixed::types::U64F64;
///
/// assert_eq!(exp2_q64(U64F64::from_num(3)), Ok(8));
/// // floor(2^1.5) = floor(2.828…) = 2
/// assert_eq!(exp2_q64(U64F64::from_num(1.5)), Ok(2));
/// let log = log2_q64(1_000).expect("non-zero");
/// assert_eq!(exp2_q64(log), Ok(1_000));
/// ```
pub fn exp2_q64(x: U64F64) -> Result<u128> {
    let raw = x.to_bits();
    let int_part = raw >> FRAC_BITS;
    if int_part >= 128 {
        return Err(PoolError::Overflow("2^x exceeds 128 bits"));
    }
    let floor_pow = 1u128 << int_part;
    if raw & (ONE_RAW - 1) == 0 {
        return Ok(floor_pow);
    }

    let mut lo = floor_pow;
    let mut hi = if int_part == 127 {
        u128::MAX
    } else {
        (floor_pow << 1) - 1
    };
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if log2_q64(mid)? <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(lo)
}

/// Computes the integer geometric mean of `values`, truncated.
///
/// Sums the Q64.64 binary logarithms, divides by the count with
/// truncation, and exponentiates. Fully deterministic; see the module
/// docs for the precision contract.
///
/// # Errors
///
/// - [`PoolError::InvalidInput`] if `values` is empty.
/// - [`PoolError::ArithmeticInvariant`] if any value is zero.
///
/// # Examples
///
/// ```
/// use basin_amm::math::geometric_mean;
///
/// assert_eq!(geometric_mean(&[1_000, 1_000]), Ok(1_000));
/// assert_eq!(geometric_mean(&[4, 16]), Ok(8));
/// ```
pub fn geometric_mean(values: &[u128]) -> Result<u128> {
    if values.is_empty() {
        return Err(PoolError::InvalidInput(
            "geometric mean of an empty sequence",
        ));
    }
    let mut sum: u128 = 0;
    for &value in values {
        sum = sum
            .checked_add(log2_q64(value)?.to_bits())
            .ok_or(PoolError::Overflow("log2 sum overflow"))?;
    }
    let mean = U64F64::from_bits(sum / values.len() as u128);
    exp2_q64(mean)
}
