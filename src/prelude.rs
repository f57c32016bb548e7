//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::config::{PoolConfig, MINIMUM_SHARES};
pub use crate::domain::{
    AccountId, Amount, PoolEvent, Reserves, Shares, SwapDirection, Withdrawal,
};
pub use crate::error::{AmmError, LedgerError, Result};
pub use crate::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};
pub use crate::pools::{Pool, PoolSnapshot, SharedPool};
pub use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer, TracingEventSink};
