//! Unified error types for the Basin AMM engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every failure aborts the whole operation: the engine never
//! applies a partial result, never retries internally, and never degrades
//! silently.

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

/// The unified error type for every engine operation.
///
/// Variants carry a `&'static str` context message where one failure class
/// covers several call sites.
///
/// # Retry semantics
///
/// - [`InvalidConfiguration`](Self::InvalidConfiguration) is fatal:
///   construction aborts.
/// - [`InvalidInput`](Self::InvalidInput) means the caller must correct
///   its arguments.
/// - The `Insufficient*` variants and [`SlippageExceeded`](Self::SlippageExceeded)
///   mean the operation cannot be satisfied against current state; the
///   caller may retry with adjusted amounts or after state changes.
/// - [`TransferFailed`](Self::TransferFailed) is propagated from the
///   external value-transport collaborator and always aborts the whole
///   operation with no ledger mutation observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// The requested asset set or fee rate is invalid at construction.
    InvalidConfiguration(&'static str),
    /// A caller argument is malformed (wrong length, zero amount, bad index).
    InvalidInput(&'static str),
    /// An offered deposit amount is below the required proportional amount.
    InsufficientInput(&'static str),
    /// The caller's liquidity balance cannot cover the requested burn.
    InsufficientBalance,
    /// A reserve debit would drive the reserve negative.
    InsufficientReserve,
    /// Pool reserves cannot satisfy the requested swap.
    InsufficientLiquidity,
    /// The computed swap output fell below the caller's minimum.
    SlippageExceeded,
    /// A computed quantity violates a required positivity or precision
    /// bound (e.g. minted liquidity of zero). Indicates a degenerate
    /// input, not a caller bug.
    ArithmeticInvariant(&'static str),
    /// A read-only preview was requested against a pool with no liquidity.
    EmptyPool,
    /// The observed custody balance carries no surplus over the reserve.
    NoFeesAvailable,
    /// The pool is paused; deposits, redemptions and swaps are rejected.
    PoolPaused,
    /// The caller lacks the admin role required for this operation.
    Unauthorized,
    /// A nested call entered the engine while an operation was in progress.
    Reentrancy,
    /// The external value-transport collaborator rejected a transfer.
    TransferFailed(&'static str),
    /// Intermediate arithmetic exceeded 128 bits.
    Overflow(&'static str),
    /// A divisor was zero.
    DivisionByZero,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InsufficientInput(msg) => write!(f, "insufficient input: {msg}"),
            Self::InsufficientBalance => write!(f, "insufficient liquidity balance"),
            Self::InsufficientReserve => write!(f, "insufficient reserve"),
            Self::InsufficientLiquidity => write!(f, "insufficient pool liquidity"),
            Self::SlippageExceeded => write!(f, "swap output below minimum"),
            Self::ArithmeticInvariant(msg) => write!(f, "arithmetic invariant violated: {msg}"),
            Self::EmptyPool => write!(f, "pool holds no liquidity"),
            Self::NoFeesAvailable => write!(f, "no fee surplus available"),
            Self::PoolPaused => write!(f, "pool is paused"),
            Self::Unauthorized => write!(f, "caller lacks admin role"),
            Self::Reentrancy => write!(f, "reentrant call rejected"),
            Self::TransferFailed(msg) => write!(f, "transfer failed: {msg}"),
            Self::Overflow(msg) => write!(f, "arithmetic overflow: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for PoolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = PoolError::Overflow("reserve credit overflow");
        assert_eq!(
            format!("{err}"),
            "arithmetic overflow: reserve credit overflow"
        );
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(format!("{}", PoolError::PoolPaused), "pool is paused");
        assert_eq!(format!("{}", PoolError::DivisionByZero), "division by zero");
        assert_eq!(
            format!("{}", PoolError::SlippageExceeded),
            "swap output below minimum"
        );
    }

    #[test]
    fn equality() {
        assert_eq!(PoolError::EmptyPool, PoolError::EmptyPool);
        assert_ne!(
            PoolError::InsufficientBalance,
            PoolError::InsufficientReserve
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&PoolError::NoFeesAvailable);
    }
}
