//! Collaborator contract for the quote asset's ledger.
//!
//! The pool never stores the quote reserve. It asks the ledger for the pool
//! account's balance every time it prices or settles, so a ledger that is
//! credited directly (a donation) is reflected immediately.

use crate::domain::{AccountId, Amount};
use crate::error::LedgerError;

/// Authoritative balance store for the quote asset.
///
/// Mirrors the classic fungible-token surface. Because calls are made
/// in-process rather than by a message sender, the acting account is
/// passed explicitly: `from` for [`transfer`](Self::transfer) and
/// `spender` for [`transfer_from`](Self::transfer_from).
///
/// # Errors
///
/// Every mutating method returns a [`LedgerError`] instead of a boolean;
/// the pool treats any `Err` as a failed transfer and aborts.
pub trait AssetLedger {
    /// Balance held by `account`.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if `from` cannot cover the amount or the
    /// ledger refuses the transfer.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `owner` to `to` on behalf of `spender`, consuming
    /// the allowance `owner` previously granted to `spender`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`] if the allowance is
    /// too small, or another [`LedgerError`] if the transfer itself fails.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
