//! Explicit rounding direction for integer division.

use serde::{Deserialize, Serialize};

/// Rounding direction for division on domain types.
///
/// Every division in the crate names its direction. Pool-facing results
/// (swap outputs, minted shares, withdrawal payouts) always use
/// [`Rounding::Down`] so the remainder stays with the pool; required-input
/// quotes use [`Rounding::Up`] for the same reason.
///
/// ```
/// use pairswap::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
