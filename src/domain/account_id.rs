//! Chain-agnostic account identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a participant: a depositor, a trader, or the pool itself.
///
/// Wraps a fixed 32-byte array. Every byte sequence is a valid id, so
/// construction is infallible; the all-zero id is reserved as a sentinel
/// and rejected where a real account is required (see
/// [`PoolConfig`](crate::config::PoolConfig)).
///
/// # Examples
///
/// ```
/// use pairswap::domain::AccountId;
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// assert_eq!(alice.as_bytes(), [7u8; 32]);
/// assert!(!alice.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero sentinel id.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AccountId {
    /// Short hex form: the first four bytes, enough to tell accounts apart
    /// in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}
