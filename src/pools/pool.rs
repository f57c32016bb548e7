//! The pool aggregate: configuration, share book, and the two ledgers.
//!
//! Every state-changing operation runs inside `Pool::transact`:
//!
//! 1. Checkpoint both ledgers.
//! 2. Run the operation body. It validates input, snapshots reserves,
//!    computes every output, calls the ledgers, and returns a
//!    `Staged` result carrying the planned share change and the event.
//! 3. On `Ok`, commit both ledgers and apply the share change, then hand
//!    the event to the sink.
//! 4. On `Err`, restore both ledgers and discard the staged result.
//!
//! The body holds `&mut Pool` throughout, so no other operation on the
//! same pool can interleave with it.

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{AccountId, PoolEvent, Reserves};
use crate::error::AmmError;
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer, TracingEventSink};

use super::share_ledger::{ShareLedger, ShareUpdate};

/// Result of an operation body, applied only if the body succeeded.
#[derive(Debug)]
pub(super) struct Staged<T> {
    pub(super) value: T,
    pub(super) shares: Option<ShareUpdate>,
    pub(super) event: PoolEvent,
}

/// A two-asset constant-product pool.
///
/// The base asset is the host's native currency, held by
/// [`PoolConfig::pool_account`] on the `N` ledger. The quote asset is a
/// fungible token on the `A` ledger. Reserves are never cached: they are
/// read from the ledgers whenever they are needed.
///
/// # Example
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{AccountId, Amount, Shares};
/// use pairswap::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};
/// use pairswap::pools::Pool;
///
/// let pool_account = AccountId::from_bytes([0xAA; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
///
/// let mut asset = InMemoryAssetLedger::new();
/// asset.mint(&alice, Amount::new(10_000)).expect("mint");
/// asset.approve(&alice, &pool_account, Amount::new(10_000));
/// let mut native = InMemoryNativeLedger::new();
/// native.credit(&alice, Amount::new(5_000)).expect("credit");
///
/// let config = PoolConfig::new(pool_account).expect("valid config");
/// let mut pool = Pool::new(config, asset, native);
///
/// let minted = pool
///     .provide(Amount::new(5_000), Amount::new(10_000), &alice)
///     .expect("first deposit");
/// assert_eq!(minted, Shares::new(5_000));
/// assert_eq!(pool.total_shares(), Shares::new(5_000));
/// ```
#[derive(Debug)]
pub struct Pool<A, N, S = TracingEventSink> {
    pub(super) config: PoolConfig,
    pub(super) shares: ShareLedger,
    pub(super) asset: A,
    pub(super) native: N,
    pub(super) events: S,
}

impl<A, N> Pool<A, N, TracingEventSink>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
{
    /// Creates an empty pool that logs events through `tracing`.
    #[must_use]
    pub fn new(config: PoolConfig, asset: A, native: N) -> Self {
        Self::with_event_sink(config, asset, native, TracingEventSink)
    }
}

impl<A, N, S> Pool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Creates an empty pool that reports events to `events`.
    #[must_use]
    pub fn with_event_sink(config: PoolConfig, asset: A, native: N, events: S) -> Self {
        debug!(pool = %config.pool_account(), "pool created");
        Self {
            config,
            shares: ShareLedger::new(),
            asset,
            native,
            events,
        }
    }

    /// Rebuilds a pool around an existing share book.
    pub(super) fn from_parts(
        config: PoolConfig,
        shares: ShareLedger,
        asset: A,
        native: N,
        events: S,
    ) -> Self {
        Self {
            config,
            shares,
            asset,
            native,
            events,
        }
    }

    /// Pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The account holding both reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.config.pool_account()
    }

    /// Live reserves: the pool account's balance on each ledger.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        let account = self.config.pool_account();
        Reserves::new(
            self.native.balance_of(&account),
            self.asset.balance_of(&account),
        )
    }

    /// The share book.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// The quote-asset ledger.
    #[must_use]
    pub const fn asset_ledger(&self) -> &A {
        &self.asset
    }

    /// Mutable access to the quote-asset ledger, e.g. to fund accounts or
    /// set allowances between operations.
    pub fn asset_ledger_mut(&mut self) -> &mut A {
        &mut self.asset
    }

    /// The native-currency ledger.
    #[must_use]
    pub const fn native_ledger(&self) -> &N {
        &self.native
    }

    /// Mutable access to the native-currency ledger.
    pub fn native_ledger_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// The event sink.
    #[must_use]
    pub const fn event_sink(&self) -> &S {
        &self.events
    }

    /// Mutable access to the event sink, e.g. to drain collected events.
    pub fn event_sink_mut(&mut self) -> &mut S {
        &mut self.events
    }

    /// Consumes the pool, returning its collaborators.
    pub fn into_parts(self) -> (PoolConfig, ShareLedger, A, N, S) {
        (
            self.config,
            self.shares,
            self.asset,
            self.native,
            self.events,
        )
    }

    /// Checks the pool's structural invariants against live balances.
    ///
    /// - the share book is internally consistent;
    /// - `total_shares == 0` exactly when both reserves are empty.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] naming the broken rule.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        self.shares.audit()?;
        let reserves = self.reserves();
        let total = self.shares.total();
        if total.is_zero() && !reserves.is_empty() {
            return Err(AmmError::InvariantViolation(
                "reserves held with no shares outstanding",
            ));
        }
        if !total.is_zero() && (reserves.base().is_zero() || reserves.quote().is_zero()) {
            return Err(AmmError::InvariantViolation(
                "shares outstanding against an empty reserve",
            ));
        }
        Ok(())
    }

    /// Rejects the pool account as the external side of an operation.
    ///
    /// Both ledgers treat a self-transfer as a no-op, so the pool paying
    /// itself would mint shares or release output for nothing.
    pub(super) fn ensure_counterparty(&self, account: &AccountId) -> Result<(), AmmError> {
        if *account == self.config.pool_account() {
            return Err(AmmError::InvalidCounterparty(
                "the pool account cannot trade with itself",
            ));
        }
        Ok(())
    }

    /// Runs `body` with all-or-nothing semantics.
    pub(super) fn transact<T>(
        &mut self,
        operation: &'static str,
        body: impl FnOnce(&mut Self) -> Result<Staged<T>, AmmError>,
    ) -> Result<T, AmmError> {
        let asset_checkpoint = self.asset.checkpoint();
        let native_checkpoint = self.native.checkpoint();

        match body(self) {
            Ok(staged) => {
                self.asset.commit(asset_checkpoint);
                self.native.commit(native_checkpoint);
                if let Some(update) = staged.shares {
                    self.shares.apply(update);
                }
                self.events.emit(&staged.event);
                Ok(staged.value)
            }
            Err(error) => {
                self.asset.restore(asset_checkpoint);
                self.native.restore(native_checkpoint);
                warn!(operation, %error, "operation aborted, ledgers restored");
                Err(error)
            }
        }
    }
}
