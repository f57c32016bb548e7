//! Collaborator seams.
//!
//! The pool core talks to the outside world only through these traits:
//! [`AssetLedger`] for the quote asset, [`NativeTransfer`] for the base
//! currency, [`Journaled`] to make both roll back together, and
//! [`EventSink`] for observability.

mod asset_ledger;
mod event_sink;
mod journaled;
mod native_transfer;

pub use asset_ledger::AssetLedger;
pub use event_sink::{EventSink, TracingEventSink};
pub use journaled::Journaled;
pub use native_transfer::NativeTransfer;
