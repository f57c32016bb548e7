//! In-memory collaborators for off-chain simulation and testing.
//!
//! Both ledgers implement their collaborator trait and
//! [`Journaled`](crate::traits::Journaled), so a [`Pool`](crate::pools::Pool)
//! built on them has full all-or-nothing semantics.

mod asset;
mod native;

pub use asset::{AssetCheckpoint, InMemoryAssetLedger};
pub use native::{InMemoryNativeLedger, NativeCheckpoint};
