//! In-memory native-currency balances.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::domain::{AccountId, Amount};
use crate::error::LedgerError;
use crate::traits::{Journaled, NativeTransfer};

/// Prior value of one entry, recorded while a checkpoint is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeUndo {
    Balance(AccountId, Amount),
    Rejecting(AccountId, bool),
}

/// Position in an [`InMemoryNativeLedger`]'s undo journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCheckpoint(usize);

/// Native-currency balances kept in memory.
///
/// Accounts can be marked as rejecting incoming payments, modelling a
/// recipient that refuses a send. Zero balances are not stored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNativeLedger {
    balances: HashMap<AccountId, Amount>,
    rejecting: HashSet<AccountId>,
    journal: Vec<NativeUndo>,
    open_checkpoints: usize,
}

impl InMemoryNativeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `account` out of thin air (genesis funding).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the balance would
    /// exceed `u128`.
    pub fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow(*account))?;
        self.set_balance(account, credited);
        Ok(())
    }

    /// Makes every future payment to `account` fail.
    pub fn reject_payments_to(&mut self, account: &AccountId) {
        self.set_rejecting(account, true);
    }

    /// Lets `account` receive payments again.
    pub fn accept_payments_to(&mut self, account: &AccountId) {
        self.set_rejecting(account, false);
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    fn record(&mut self, undo: NativeUndo) {
        if self.open_checkpoints > 0 {
            self.journal.push(undo);
        }
    }

    fn set_balance(&mut self, account: &AccountId, amount: Amount) {
        self.record(NativeUndo::Balance(*account, self.balance_of(account)));
        self.write_balance(account, amount);
    }

    fn write_balance(&mut self, account: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    fn set_rejecting(&mut self, account: &AccountId, rejecting: bool) {
        self.record(NativeUndo::Rejecting(
            *account,
            self.rejecting.contains(account),
        ));
        self.write_rejecting(account, rejecting);
    }

    fn write_rejecting(&mut self, account: &AccountId, rejecting: bool) {
        if rejecting {
            self.rejecting.insert(*account);
        } else {
            self.rejecting.remove(account);
        }
    }

    fn close_checkpoint(&mut self) {
        self.open_checkpoints = self.open_checkpoints.saturating_sub(1);
        if self.open_checkpoints == 0 {
            self.journal.clear();
        }
    }
}

impl NativeTransfer for InMemoryNativeLedger {
    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.rejecting.contains(to) {
            return Err(LedgerError::Rejected(*to));
        }
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                account: *from,
                available,
                required: amount,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow(*to))?;

        self.set_balance(from, remaining);
        self.set_balance(to, credited);
        trace!(%from, %to, amount = amount.get(), "native transfer");
        Ok(())
    }
}

impl Journaled for InMemoryNativeLedger {
    type Checkpoint = NativeCheckpoint;

    fn checkpoint(&mut self) -> NativeCheckpoint {
        self.open_checkpoints += 1;
        NativeCheckpoint(self.journal.len())
    }

    fn commit(&mut self, _checkpoint: NativeCheckpoint) {
        self.close_checkpoint();
    }

    fn restore(&mut self, checkpoint: NativeCheckpoint) {
        while self.journal.len() > checkpoint.0 {
            match self.journal.pop() {
                Some(NativeUndo::Balance(account, amount)) => self.write_balance(&account, amount),
                Some(NativeUndo::Rejecting(account, rejecting)) => {
                    self.write_rejecting(&account, rejecting);
                }
                None => break,
            }
        }
        self.close_checkpoint();
    }
}
