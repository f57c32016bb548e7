//! The pool aggregate and its operations.
//!
//! | File | Contents |
//! |------|----------|
//! | `pool` | [`Pool`] state, accessors, invariant audit, transaction wrapper |
//! | `liquidity` | [`Pool::provide`], [`Pool::withdraw`] |
//! | `swap` | [`Pool::swap_base_for_quote`], [`Pool::swap_quote_for_base`] |
//! | `views` | read-only previews and share lookups |
//! | `snapshot` | [`PoolSnapshot`] export and [`Pool::restore`] |
//! | `shared` | [`SharedPool`] for multi-threaded hosts |
//! | `share_ledger` | [`ShareLedger`] bookkeeping |

mod liquidity;
mod pool;
mod share_ledger;
mod shared;
mod snapshot;
mod swap;
mod views;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool::Pool;
pub use share_ledger::ShareLedger;
pub use shared::SharedPool;
pub use snapshot::{PoolSnapshot, ShareBalance};
