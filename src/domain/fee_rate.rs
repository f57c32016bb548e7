//! Swap fee expressed as an exact rational.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// A trading fee as `numerator / denominator`.
///
/// The pool charges a single fixed rate, [`FeeRate::STANDARD`] (0.3%), which
/// is never changed after deployment. The rational form keeps every
/// calculation in integers: the input is scaled by
/// [`complement`](Self::complement) and the reserve by
/// [`denominator`](Self::denominator), so no fractional fee amount is ever
/// materialized.
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeRate;
///
/// let fee = FeeRate::STANDARD;
/// assert_eq!(fee.numerator(), 3);
/// assert_eq!(fee.denominator(), 1_000);
/// assert_eq!(fee.complement(), 997);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRate {
    numerator: u128,
    denominator: u128,
}

impl FeeRate {
    /// 0.3% — the rate every swap pays.
    pub const STANDARD: Self = Self {
        numerator: 3,
        denominator: 1_000,
    };

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Returns `denominator - numerator`, the share of the input that
    /// reaches the pricing curve.
    #[must_use]
    pub const fn complement(&self) -> u128 {
        self.denominator - self.numerator
    }

    /// Scales `amount` by the complement, giving the effective input of
    /// the pricing formula. `None` on overflow.
    #[must_use]
    pub const fn effective_input(&self, amount: Amount) -> Option<Amount> {
        amount.checked_mul(&Amount::new(self.complement()))
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
