//! Collaborator contract for the native settlement currency.

use crate::domain::{AccountId, Amount};
use crate::error::LedgerError;

/// Moves the native (base) currency between accounts.
///
/// The pool uses it in two directions:
///
/// - **accepting** native value sent alongside a call
///   (`depositor → pool`), which credits the base reserve as part of the
///   same operation;
/// - **paying out** (`pool → recipient`), a synchronous send that can fail,
///   for example when the recipient rejects the payment.
pub trait NativeTransfer {
    /// Native balance of `account`.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Sends `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if `from` cannot cover the amount or `to`
    /// rejects the payment.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
