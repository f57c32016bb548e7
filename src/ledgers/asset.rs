//! In-memory fungible-token ledger with allowances.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::domain::{AccountId, Amount};
use crate::error::LedgerError;
use crate::traits::{AssetLedger, Journaled};

/// Prior value of one entry, recorded while a checkpoint is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetUndo {
    Balance(AccountId, Amount),
    Allowance(AccountId, AccountId, Amount),
    Frozen(AccountId, bool),
}

/// Position in an [`InMemoryAssetLedger`]'s undo journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCheckpoint(usize);

/// A quote-asset ledger kept entirely in memory.
///
/// Supports the usual token surface (balances, allowances, `transfer`,
/// `transfer_from`) plus account freezing: a frozen account can neither
/// send nor receive, which is how a real token's blocklist makes a payout
/// fail.
///
/// Zero balances and allowances are not stored. While a checkpoint is open
/// every write records the entry's prior value.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountId, Amount};
/// use pairswap::ledgers::InMemoryAssetLedger;
/// use pairswap::traits::AssetLedger;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let pool = AccountId::from_bytes([0xAA; 32]);
///
/// let mut ledger = InMemoryAssetLedger::new();
/// ledger.mint(&alice, Amount::new(500)).expect("mint");
/// ledger.approve(&alice, &pool, Amount::new(200));
/// ledger.transfer_from(&pool, &alice, &pool, Amount::new(200)).expect("pull");
///
/// assert_eq!(ledger.balance_of(&pool), Amount::new(200));
/// assert_eq!(ledger.allowance(&alice, &pool), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetLedger {
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
    frozen: HashSet<AccountId>,
    journal: Vec<AssetUndo>,
    open_checkpoints: usize,
}

impl InMemoryAssetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits newly issued tokens to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the balance would
    /// exceed `u128`.
    pub fn mint(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow(*account))?;
        self.set_balance(account, credited);
        Ok(())
    }

    /// Sets the allowance `owner` grants `spender`, replacing any previous
    /// value.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.set_allowance(owner, spender, amount);
    }

    /// Remaining allowance `owner` has granted `spender`.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Blocks every transfer to or from `account`.
    pub fn freeze(&mut self, account: &AccountId) {
        self.set_frozen(account, true);
    }

    /// Lifts a freeze.
    pub fn unfreeze(&mut self, account: &AccountId) {
        self.set_frozen(account, false);
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    fn record(&mut self, undo: AssetUndo) {
        if self.open_checkpoints > 0 {
            self.journal.push(undo);
        }
    }

    fn set_balance(&mut self, account: &AccountId, amount: Amount) {
        self.record(AssetUndo::Balance(*account, self.balance_of(account)));
        self.write_balance(account, amount);
    }

    fn write_balance(&mut self, account: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    fn set_allowance(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.record(AssetUndo::Allowance(
            *owner,
            *spender,
            self.allowance(owner, spender),
        ));
        self.write_allowance(owner, spender, amount);
    }

    fn write_allowance(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    fn set_frozen(&mut self, account: &AccountId, frozen: bool) {
        self.record(AssetUndo::Frozen(*account, self.frozen.contains(account)));
        self.write_frozen(account, frozen);
    }

    fn write_frozen(&mut self, account: &AccountId, frozen: bool) {
        if frozen {
            self.frozen.insert(*account);
        } else {
            self.frozen.remove(account);
        }
    }

    fn close_checkpoint(&mut self) {
        self.open_checkpoints = self.open_checkpoints.saturating_sub(1);
        if self.open_checkpoints == 0 {
            self.journal.clear();
        }
    }

    fn ensure_active(&self, account: &AccountId) -> Result<(), LedgerError> {
        if self.frozen.contains(account) {
            return Err(LedgerError::Rejected(*account));
        }
        Ok(())
    }

    fn move_balance(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(from)?;
        self.ensure_active(to)?;

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
        trace!(%from, %to, amount = amount.get(), "asset transfer");
        Ok(())
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowance = self.allowance(owner, spender);
        let left = allowance
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                owner: *owner,
                allowance,
                required: amount,
            })?;
        self.move_balance(owner, to, amount)?;
        self.set_allowance(owner, spender, left);
        Ok(())
    }
}

impl Journaled for InMemoryAssetLedger {
    type Checkpoint = AssetCheckpoint;

    fn checkpoint(&mut self) -> AssetCheckpoint {
        self.open_checkpoints += 1;
        AssetCheckpoint(self.journal.len())
    }

    fn commit(&mut self, _checkpoint: AssetCheckpoint) {
        self.close_checkpoint();
    }

    fn restore(&mut self, checkpoint: AssetCheckpoint) {
        while self.journal.len() > checkpoint.0 {
            match self.journal.pop() {
                Some(AssetUndo::Balance(account, amount)) => self.write_balance(&account, amount),
                Some(AssetUndo::Allowance(owner, spender, amount)) => {
                    self.write_allowance(&owner, &spender, amount);
                }
                Some(AssetUndo::Frozen(account, frozen)) => self.write_frozen(&account, frozen),
                None => break,
            }
        }
        self.close_checkpoint();
    }
}
