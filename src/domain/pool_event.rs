//! Notifications emitted after a pool operation commits.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Shares};

/// Which way a swap moved value through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Native base in, quote asset out.
    BaseToQuote,
    /// Quote asset in, native base out.
    QuoteToBase,
}

/// An observable pool state change.
///
/// Events are handed to the pool's [`EventSink`](crate::traits::EventSink)
/// only after every collaborator call succeeded and the share book was
/// committed, so a sink never sees an operation that later rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolEvent {
    /// Shares minted against a two-sided deposit.
    LiquidityAdded {
        /// The depositor credited with the shares.
        provider: AccountId,
        /// Native base deposited.
        base_in: Amount,
        /// Quote asset deposited.
        quote_in: Amount,
        /// Shares minted.
        shares: Shares,
    },
    /// Shares burned for a proportional payout.
    LiquidityRemoved {
        /// The holder whose shares were burned.
        provider: AccountId,
        /// Shares burned.
        shares: Shares,
        /// Native base paid out.
        base_out: Amount,
        /// Quote asset paid out.
        quote_out: Amount,
    },
    /// A completed swap.
    Swap {
        /// The trader.
        trader: AccountId,
        /// Direction of the trade.
        direction: SwapDirection,
        /// Amount the trader paid in.
        amount_in: Amount,
        /// Amount the trader received.
        amount_out: Amount,
    },
}
