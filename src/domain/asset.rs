//! Asset identity: registered tokens and the native-currency sentinel.

use core::fmt;

/// A chain-agnostic token address.
///
/// Wraps a fixed-size `[u8; 32]` byte array; all 32-byte sequences are
/// valid addresses, so construction is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetAddress([u8; 32]);

impl AssetAddress {
    /// Creates an `AssetAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An opaque identifier for a fungible value type held by the pool.
///
/// [`Asset::Native`] is the distinguished sentinel for the chain's native
/// currency; every other pooled asset is a registered token addressed by
/// its [`AssetAddress`]. An asset set may contain at most one native
/// entry.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Asset, AssetAddress};
///
/// let usd = Asset::Token(AssetAddress::from_bytes([1u8; 32]));
/// assert!(!usd.is_native());
/// assert!(Asset::Native.is_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Asset {
    /// The native pool currency (value accompanies calls directly rather
    /// than moving through a token-transfer interface).
    Native,
    /// A registered token identified by address.
    Token(AssetAddress),
}

impl Asset {
    /// Returns `true` for the native-currency sentinel.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// Convenience constructor for a token asset.
    #[must_use]
    pub const fn token(bytes: [u8; 32]) -> Self {
        Self::Token(AssetAddress::from_bytes(bytes))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Token(addr) => {
                let bytes = addr.as_bytes();
                write!(f, "token({:02x}{:02x}..{:02x})", bytes[0], bytes[1], bytes[31])
            }
        }
    }
}
