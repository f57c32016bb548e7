//! Durable share state.
//!
//! Reserves live in the ledgers, so the share book is all a pool needs to
//! persist: the total and every holder's balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Shares};
use crate::error::AmmError;
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer, TracingEventSink};

use super::pool::Pool;
use super::share_ledger::ShareLedger;

/// One holder's balance in a [`PoolSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareBalance {
    /// The holder.
    pub account: AccountId,
    /// Shares held.
    pub shares: Shares,
}

/// Serializable copy of a pool's share book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Total shares outstanding.
    pub total_shares: Shares,
    /// Holders with a non-zero balance, in account order.
    pub holders: Vec<ShareBalance>,
}

impl<A, N> Pool<A, N, TracingEventSink>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
{
    /// Rebuilds a pool from a snapshot and the ledgers holding its
    /// reserves.
    ///
    /// # Errors
    ///
    /// See [`Pool::restore_with_event_sink`].
    pub fn restore(
        config: PoolConfig,
        snapshot: PoolSnapshot,
        asset: A,
        native: N,
    ) -> Result<Self, AmmError> {
        Self::restore_with_event_sink(config, snapshot, asset, native, TracingEventSink)
    }
}

impl<A, N, S> Pool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Copies the share book.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            total_shares: self.shares.total(),
            holders: self
                .shares
                .iter()
                .map(|(account, shares)| ShareBalance {
                    account: *account,
                    shares: *shares,
                })
                .collect(),
        }
    }

    /// Rebuilds a pool from a snapshot, reporting events to `events`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `config` is invalid, the
    ///   snapshot lists a holder twice, or its balances do not sum to
    ///   `total_shares`.
    /// - [`AmmError::InvariantViolation`] if the ledgers' reserves do not
    ///   agree with the share total.
    pub fn restore_with_event_sink(
        config: PoolConfig,
        snapshot: PoolSnapshot,
        asset: A,
        native: N,
        events: S,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        let shares = ShareLedger::from_balances(
            snapshot.total_shares,
            snapshot
                .holders
                .into_iter()
                .map(|entry| (entry.account, entry.shares)),
        )?;
        let pool = Self::from_parts(config, shares, asset, native, events);
        pool.check_invariants()?;
        debug!(
            pool = %pool.pool_account(),
            total_shares = pool.total_shares().get(),
            holders = pool.share_ledger().holder_count(),
            "pool restored"
        );
        Ok(pool)
    }
}
