//! Integer and fixed-point arithmetic primitives.
//!
//! Two building blocks carry every ratio computation in the engine:
//!
//! - [`mul_div`] — `a × b / d` through a 256-bit intermediate with an
//!   explicit [`Rounding`](crate::domain::Rounding) direction, so
//!   reserve/liquidity ratios never truncate prematurely or overflow.
//! - [`log2_q64`] / [`exp2_q64`] / [`geometric_mean`] — deterministic
//!   Q64.64 log-domain arithmetic for the bootstrap deposit, specified
//!   once here and reused rather than reimplemented per call site.

mod fixed_log;
mod wide;

pub use fixed_log::{exp2_q64, geometric_mean, log2_q64};
pub use wide::mul_div;
