//! Share bookkeeping: total supply and per-holder balances.
//!
//! Changes are computed first as a [`ShareUpdate`] holding absolute
//! post-change values, and written later with [`ShareLedger::apply`]. The
//! pool stages an update while it talks to the ledgers and applies it only
//! once every transfer has succeeded, so a failed operation never touches
//! the share book.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A computed, not yet applied, change to one holder and the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct ShareUpdate {
    account: AccountId,
    balance: Shares,
    total: Shares,
}

/// Total share supply and the balance of every holder.
///
/// # Invariant
///
/// `total == Σ balances`; zero balances are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    total: Shares,
    balances: BTreeMap<AccountId, Shares>,
}

impl ShareLedger {
    /// An empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from persisted balances.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if an account appears
    /// twice or the balances do not sum to `total`.
    pub fn from_balances(
        total: Shares,
        balances: impl IntoIterator<Item = (AccountId, Shares)>,
    ) -> Result<Self, AmmError> {
        let mut book = BTreeMap::new();
        let mut sum = Shares::ZERO;
        for (account, shares) in balances {
            sum = sum.safe_add(&shares)?;
            if shares.is_zero() {
                continue;
            }
            if book.insert(account, shares).is_some() {
                return Err(AmmError::InvalidConfiguration(
                    "duplicate holder in share snapshot",
                ));
            }
        }
        if sum != total {
            return Err(AmmError::InvalidConfiguration(
                "share balances do not sum to the total",
            ));
        }
        Ok(Self {
            total,
            balances: book,
        })
    }

    /// Total shares outstanding.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Shares held by `account` (zero if it holds none).
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Iterates holders in account order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Shares)> {
        self.balances.iter()
    }

    /// Plans minting `shares` to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the holder balance or the total
    /// would exceed `u128`.
    pub(crate) fn plan_credit(
        &self,
        account: &AccountId,
        shares: Shares,
    ) -> Result<ShareUpdate, AmmError> {
        Ok(ShareUpdate {
            account: *account,
            balance: self.balance_of(account).safe_add(&shares)?,
            total: self.total.safe_add(&shares)?,
        })
    }

    /// Plans burning `shares` from `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if the holder owns fewer
    /// than `shares`.
    pub(crate) fn plan_debit(
        &self,
        account: &AccountId,
        shares: Shares,
    ) -> Result<ShareUpdate, AmmError> {
        let held = self.balance_of(account);
        let Some(balance) = held.checked_sub(&shares) else {
            return Err(AmmError::InsufficientShares {
                held: held.get(),
                requested: shares.get(),
            });
        };
        Ok(ShareUpdate {
            account: *account,
            balance,
            total: self.total.safe_sub(&shares)?,
        })
    }

    /// Writes a planned update. Infallible: the update already carries the
    /// final values.
    pub(crate) fn apply(&mut self, update: ShareUpdate) {
        if update.balance.is_zero() {
            self.balances.remove(&update.account);
        } else {
            self.balances.insert(update.account, update.balance);
        }
        self.total = update.total;
    }

    /// Checks `total == Σ balances` and `balance ≤ total` for every holder.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] naming the broken rule.
    pub fn audit(&self) -> Result<(), AmmError> {
        let mut sum = Shares::ZERO;
        for shares in self.balances.values() {
            if *shares > self.total {
                return Err(AmmError::InvariantViolation(
                    "holder balance exceeds total shares",
                ));
            }
            sum = sum
                .checked_add(shares)
                .ok_or(AmmError::InvariantViolation("share balances overflow"))?;
        }
        if sum != self.total {
            return Err(AmmError::InvariantViolation(
                "share balances do not sum to the total",
            ));
        }
        Ok(())
    }
}
