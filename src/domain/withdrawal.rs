//! Outcome of a liquidity withdrawal.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// The two payouts of a burn: native base and ledger quote.
///
/// # Invariants
///
/// Both legs are strictly positive. A burn that would pay zero on either
/// side is rejected before any state changes.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Withdrawal};
///
/// let w = Withdrawal::new(Amount::new(1_000), Amount::new(1_500));
/// assert!(w.is_ok());
/// assert!(Withdrawal::new(Amount::ZERO, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Withdrawal {
    base_out: Amount,
    quote_out: Amount,
}

impl Withdrawal {
    /// Creates a withdrawal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientOutput`] if either leg is zero.
    pub const fn new(base_out: Amount, quote_out: Amount) -> crate::error::Result<Self> {
        if base_out.is_zero() || quote_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        Ok(Self {
            base_out,
            quote_out,
        })
    }

    /// Native currency paid to the holder.
    pub const fn base_out(&self) -> Amount {
        self.base_out
    }

    /// Quote asset paid to the holder.
    pub const fn quote_out(&self) -> Amount {
        self.quote_out
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(base={}, quote={})",
            self.base_out, self.quote_out
        )
    }
}
