//! Unified error types for the pool core.
//!
//! All fallible operations across the crate return [`AmmError`], so a
//! caller handles one enum whether a failure came from a precondition, the
//! pricing formula, or an external ledger. Collaborators report their own
//! failures as [`LedgerError`], which the pool wraps in
//! [`AmmError::TransferFailed`].

use thiserror::Error;

use crate::domain::{AccountId, Amount};

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every way a pool operation can fail.
///
/// Any of these aborts the triggering operation; no share or ledger change
/// made during that call survives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A required amount is zero or otherwise out of domain.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Pricing was attempted against a zero reserve.
    #[error("pricing requires both reserves to be non-zero")]
    InvalidReserves,

    /// The computed mint or swap output is zero, the first deposit is at or
    /// below the minimum, or the output exceeds the reserve.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// The holder owns fewer shares than the withdrawal requests.
    #[error("insufficient shares: holder has {held}, requested {requested}")]
    InsufficientShares {
        /// Shares the holder owns.
        held: u128,
        /// Shares the withdrawal asked to burn.
        requested: u128,
    },

    /// A withdrawal would pay zero on one of its two legs.
    #[error("withdrawal would yield a zero-valued asset leg")]
    InsufficientOutput,

    /// The realized swap output is below the caller's minimum.
    #[error("slippage exceeded: output {actual} below minimum {minimum}")]
    SlippageExceeded {
        /// Output the swap would have produced.
        actual: Amount,
        /// Minimum the caller accepted.
        minimum: Amount,
    },

    /// An external ledger or native transfer did not succeed.
    #[error("transfer failed")]
    TransferFailed(#[source] LedgerError),

    /// Arithmetic overflow in an intermediate value.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow in an intermediate value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration or snapshot value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The pool account itself was named as depositor or trader.
    #[error("invalid counterparty: {0}")]
    InvalidCounterparty(&'static str),

    /// A pool invariant does not hold against the live ledgers.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// The shared pool's lock was poisoned by a panicking holder.
    #[error("pool unavailable: lock poisoned")]
    PoolUnavailable,
}

/// Failure reported by an [`AssetLedger`](crate::traits::AssetLedger) or
/// [`NativeTransfer`](crate::traits::NativeTransfer) collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The source account cannot cover the transfer.
    #[error("account {account} holds {available}, transfer needs {required}")]
    InsufficientBalance {
        /// The debited account.
        account: AccountId,
        /// Its balance.
        available: Amount,
        /// The transfer amount.
        required: Amount,
    },

    /// The spender's allowance does not cover a `transfer_from`.
    #[error("allowance of {allowance} from {owner} is below {required}")]
    InsufficientAllowance {
        /// The owner whose funds are pulled.
        owner: AccountId,
        /// Approved allowance for the spender.
        allowance: Amount,
        /// The transfer amount.
        required: Amount,
    },

    /// The recipient refused the payment.
    #[error("recipient {0} rejected the payment")]
    Rejected(AccountId),

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow for {0}")]
    BalanceOverflow(AccountId),

    /// The collaborator is unreachable or failed for its own reasons.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

impl From<LedgerError> for AmmError {
    fn from(err: LedgerError) -> Self {
        Self::TransferFailed(err)
    }
}
