//! Point-in-time view of both pool reserves.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// Base and quote reserves read from the ledgers at one instant.
///
/// The pool never stores reserves; it reads them from the collaborators
/// whenever it needs them and carries the result around as a `Reserves`
/// snapshot for the duration of one calculation.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Reserves};
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(2_000));
/// assert_eq!(r.product(), Some(2_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reserves {
    base: Amount,
    quote: Amount,
}

impl Reserves {
    /// Both reserves empty.
    pub const EMPTY: Self = Self {
        base: Amount::ZERO,
        quote: Amount::ZERO,
    };

    /// Creates a snapshot from the two balances.
    #[must_use]
    pub const fn new(base: Amount, quote: Amount) -> Self {
        Self { base, quote }
    }

    /// Native-currency balance of the pool account.
    pub const fn base(&self) -> Amount {
        self.base
    }

    /// Asset-ledger balance of the pool account.
    pub const fn quote(&self) -> Amount {
        self.quote
    }

    /// `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.base.is_zero() && self.quote.is_zero()
    }

    /// The constant-product value `base × quote`, `None` on overflow.
    #[must_use]
    pub const fn product(&self) -> Option<u128> {
        self.base.get().checked_mul(self.quote.get())
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(base={}, quote={})", self.base, self.quote)
    }
}
