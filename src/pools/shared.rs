//! A pool shared between threads.

use std::sync::{Arc, Mutex};

use tracing::error;

use crate::error::AmmError;
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer, TracingEventSink};

use super::pool::Pool;

/// Cloneable handle running one closure at a time against a [`Pool`].
///
/// Every clone refers to the same pool. A closure runs with exclusive
/// access, so an operation inside it never interleaves with another.
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{AccountId, Shares};
/// use pairswap::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};
/// use pairswap::pools::{Pool, SharedPool};
///
/// let config = PoolConfig::new(AccountId::from_bytes([0xAA; 32])).expect("valid");
/// let pool = Pool::new(config, InMemoryAssetLedger::new(), InMemoryNativeLedger::new());
/// let shared = SharedPool::new(pool);
///
/// let total = shared.with(|pool| Ok(pool.total_shares())).expect("lock");
/// assert_eq!(total, Shares::ZERO);
/// ```
#[derive(Debug)]
pub struct SharedPool<A, N, S = TracingEventSink> {
    inner: Arc<Mutex<Pool<A, N, S>>>,
}

impl<A, N, S> Clone for SharedPool<A, N, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, N, S> SharedPool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Wraps `pool` for shared use.
    #[must_use]
    pub fn new(pool: Pool<A, N, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Runs `op` with exclusive access to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolUnavailable`] if a previous closure panicked
    /// while holding the pool, otherwise whatever `op` returns.
    pub fn with<T>(
        &self,
        op: impl FnOnce(&mut Pool<A, N, S>) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let mut guard = self.inner.lock().map_err(|_| {
            error!("pool lock poisoned");
            AmmError::PoolUnavailable
        })?;
        op(&mut guard)
    }
}
