//! Observability collaborator.

use tracing::info;

use crate::domain::PoolEvent;

/// Receives [`PoolEvent`]s after an operation has committed.
pub trait EventSink {
    /// Handles one committed event.
    fn emit(&mut self, event: &PoolEvent);
}

/// Default sink: one structured `tracing` record per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&mut self, event: &PoolEvent) {
        match event {
            PoolEvent::LiquidityAdded {
                provider,
                base_in,
                quote_in,
                shares,
            } => info!(
                %provider,
                base_in = base_in.get(),
                quote_in = quote_in.get(),
                shares = shares.get(),
                "liquidity added"
            ),
            PoolEvent::LiquidityRemoved {
                provider,
                shares,
                base_out,
                quote_out,
            } => info!(
                %provider,
                shares = shares.get(),
                base_out = base_out.get(),
                quote_out = quote_out.get(),
                "liquidity removed"
            ),
            PoolEvent::Swap {
                trader,
                direction,
                amount_in,
                amount_out,
            } => info!(
                %trader,
                ?direction,
                amount_in = amount_in.get(),
                amount_out = amount_out.get(),
                "swap"
            ),
        }
    }
}

/// Collects events in memory; useful for hosts that forward them in
/// batches and for tests.
impl EventSink for Vec<PoolEvent> {
    fn emit(&mut self, event: &PoolEvent) {
        self.push(event.clone());
    }
}
