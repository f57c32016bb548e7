//! Swaps in both directions with a caller-supplied output floor.
//!
//! # Base → quote
//!
//! The native input arrives with the call, so by the time the price is
//! computed the pool account already holds it. Pricing therefore uses the
//! base reserve *minus* the input, the reserve as it stood before the call.
//!
//! # Quote → base
//!
//! The quote input is pulled first and pricing uses the quote reserve
//! *after* the pull, i.e. including the input. This prices the trade
//! against a larger input reserve than a textbook constant-product swap
//! and so pays the trader slightly less; the surplus stays in the pool.

use tracing::debug;

use crate::domain::{AccountId, Amount, PoolEvent, SwapDirection};
use crate::error::AmmError;
use crate::math::{quote, CheckedArithmetic};
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer};

use super::pool::{Pool, Staged};

/// Rejects an output that misses the floor, is zero, or exceeds what the
/// pool holds.
fn check_output(out: Amount, minimum: Amount, reserve_out: Amount) -> Result<(), AmmError> {
    if out < minimum {
        return Err(AmmError::SlippageExceeded {
            actual: out,
            minimum,
        });
    }
    if out.is_zero() {
        return Err(AmmError::InsufficientLiquidity("swap output rounds to zero"));
    }
    if out > reserve_out {
        return Err(AmmError::InsufficientLiquidity(
            "swap output exceeds the reserve",
        ));
    }
    Ok(())
}

impl<A, N, S> Pool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Sells `base_in` native currency for the quote asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `base_in` is zero.
    /// - [`AmmError::InvalidCounterparty`] if `trader` is the pool account.
    /// - [`AmmError::InvalidReserves`] if the pool has no liquidity.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_quote_out`.
    /// - [`AmmError::InsufficientLiquidity`] if the output is zero.
    /// - [`AmmError::TransferFailed`] if the trader cannot pay or the payout
    ///   is refused.
    ///
    /// On any error no ledger balance changes.
    pub fn swap_base_for_quote(
        &mut self,
        base_in: Amount,
        min_quote_out: Amount,
        trader: &AccountId,
    ) -> Result<Amount, AmmError> {
        if base_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be positive"));
        }
        self.ensure_counterparty(trader)?;

        self.transact("swap_base_for_quote", |pool| {
            let pool_account = pool.config.pool_account();
            pool.native.transfer(trader, &pool_account, base_in)?;

            let reserves = pool.reserves();
            let base_before = reserves.base().safe_sub(&base_in)?;
            let quote_out = quote(base_in, base_before, reserves.quote())?;
            check_output(quote_out, min_quote_out, reserves.quote())?;

            pool.asset.transfer(&pool_account, trader, quote_out)?;

            debug!(
                %trader,
                base_in = base_in.get(),
                quote_out = quote_out.get(),
                "swapped base for quote"
            );
            Ok(Staged {
                value: quote_out,
                shares: None,
                event: PoolEvent::Swap {
                    trader: *trader,
                    direction: SwapDirection::BaseToQuote,
                    amount_in: base_in,
                    amount_out: quote_out,
                },
            })
        })
    }

    /// Sells `quote_in` of the quote asset for native currency.
    ///
    /// The trader must have approved the pool account for at least
    /// `quote_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `quote_in` is zero.
    /// - [`AmmError::InvalidCounterparty`] if `trader` is the pool account.
    /// - [`AmmError::InvalidReserves`] if the pool has no liquidity.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_base_out`.
    /// - [`AmmError::InsufficientLiquidity`] if the output is zero.
    /// - [`AmmError::TransferFailed`] if the pull or the payout fails.
    ///
    /// On any error no ledger balance or allowance changes.
    pub fn swap_quote_for_base(
        &mut self,
        quote_in: Amount,
        min_base_out: Amount,
        trader: &AccountId,
    ) -> Result<Amount, AmmError> {
        if quote_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be positive"));
        }
        self.ensure_counterparty(trader)?;

        self.transact("swap_quote_for_base", |pool| {
            let pool_account = pool.config.pool_account();
            pool.asset
                .transfer_from(&pool_account, trader, &pool_account, quote_in)?;

            let reserves = pool.reserves();
            let base_out = quote(quote_in, reserves.quote(), reserves.base())?;
            check_output(base_out, min_base_out, reserves.base())?;

            pool.native.transfer(&pool_account, trader, base_out)?;

            debug!(
                %trader,
                quote_in = quote_in.get(),
                base_out = base_out.get(),
                "swapped quote for base"
            );
            Ok(Staged {
                value: base_out,
                shares: None,
                event: PoolEvent::Swap {
                    trader: *trader,
                    direction: SwapDirection::QuoteToBase,
                    amount_in: quote_in,
                    amount_out: base_out,
                },
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::{Reserves, Shares};
    use crate::error::LedgerError;
    use crate::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};

    type TestPool = Pool<InMemoryAssetLedger, InMemoryNativeLedger, Vec<PoolEvent>>;

    // -- helpers --------------------------------------------------------------

    fn pool_account() -> AccountId {
        AccountId::from_bytes([0xAA; 32])
    }

    fn lp() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    fn trader() -> AccountId {
        AccountId::from_bytes([3u8; 32])
    }

    /// Pool with `base` / `quote` reserves; the trader holds 1 000 000 of
    /// each and has approved the pool for all of its quote.
    fn make_pool(base: u128, quote: u128) -> TestPool {
        let Ok(config) = PoolConfig::new(pool_account()) else {
            panic!("valid config");
        };
        let mut asset = InMemoryAssetLedger::new();
        let mut native = InMemoryNativeLedger::new();
        for (account, b, q) in [(lp(), base, quote), (trader(), 1_000_000, 1_000_000)] {
            let Ok(()) = native.credit(&account, Amount::new(b)) else {
                panic!("credit");
            };
            let Ok(()) = asset.mint(&account, Amount::new(q)) else {
                panic!("mint");
            };
            asset.approve(&account, &pool_account(), Amount::new(q));
        }
        let mut pool = Pool::with_event_sink(config, asset, native, Vec::new());
        let Ok(_) = pool.provide(Amount::new(base), Amount::new(quote), &lp()) else {
            panic!("seed deposit");
        };
        pool
    }

    fn product(pool: &TestPool) -> u128 {
        let Some(k) = pool.reserves().product() else {
            panic!("product fits u128");
        };
        k
    }

    // -- base → quote ---------------------------------------------------------

    #[test]
    fn base_for_quote_reference_vector() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let Ok(out) = pool.swap_base_for_quote(Amount::new(100), Amount::ZERO, &trader()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            Ok(out),
            quote(Amount::new(100), Amount::new(1_000_000), Amount::new(2_000_000))
        );
        assert_eq!(
            pool.reserves(),
            Reserves::new(
                Amount::new(1_000_100),
                Amount::new(2_000_000 - out.get())
            )
        );
        assert_eq!(
            pool.asset_ledger().balance_of(&trader()),
            Amount::new(1_000_000 + out.get())
        );
    }

    #[test]
    fn base_for_quote_small_pool_vector() {
        let mut pool = make_pool(1_001, 2_002);
        // quote(100, 1001, 2002) = ⌊99_700 × 2002 / (1_001_000 + 99_700)⌋ = 181
        let Ok(out) = pool.swap_base_for_quote(Amount::new(100), Amount::new(181), &trader())
        else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(181));
    }

    #[test]
    fn base_for_quote_slippage_leaves_state_unchanged() {
        let mut pool = make_pool(1_001, 2_002);
        let before = pool.reserves();
        let result = pool.swap_base_for_quote(Amount::new(100), Amount::new(182), &trader());
        assert_eq!(
            result,
            Err(AmmError::SlippageExceeded {
                actual: Amount::new(181),
                minimum: Amount::new(182)
            })
        );
        assert_eq!(pool.reserves(), before);
        assert_eq!(
            pool.native_ledger().balance_of(&trader()),
            Amount::new(1_000_000)
        );
        assert_eq!(pool.event_sink().len(), 1);
    }

    #[test]
    fn base_for_quote_zero_rejected() {
        let mut pool = make_pool(10_000, 10_000);
        assert!(matches!(
            pool.swap_base_for_quote(Amount::ZERO, Amount::ZERO, &trader()),
            Err(AmmError::InvalidAmount(_))
        ));
    }

    #[test]
    fn base_for_quote_dust_output_rejected() {
        let mut pool = make_pool(1_000_000, 2_000);
        // ⌊997 × 2000 / (1_000_000_000 + 997)⌋ = 0
        let result = pool.swap_base_for_quote(Amount::new(1), Amount::ZERO, &trader());
        assert!(matches!(result, Err(AmmError::InsufficientLiquidity(_))));
        assert_eq!(pool.reserves().base(), Amount::new(1_000_000));
    }

    #[test]
    fn base_for_quote_on_empty_pool() {
        let Ok(config) = PoolConfig::new(pool_account()) else {
            panic!("valid config");
        };
        let mut native = InMemoryNativeLedger::new();
        let Ok(()) = native.credit(&trader(), Amount::new(10)) else {
            panic!("credit");
        };
        let mut pool =
            Pool::with_event_sink(config, InMemoryAssetLedger::new(), native, Vec::new());
        assert_eq!(
            pool.swap_base_for_quote(Amount::new(10), Amount::ZERO, &trader()),
            Err(AmmError::InvalidReserves)
        );
        assert_eq!(pool.native_ledger().balance_of(&trader()), Amount::new(10));
    }

    #[test]
    fn base_for_quote_unfunded_trader() {
        let mut pool = make_pool(10_000, 10_000);
        let broke = AccountId::from_bytes([9u8; 32]);
        let result = pool.swap_base_for_quote(Amount::new(10), Amount::ZERO, &broke);
        assert!(matches!(
            result,
            Err(AmmError::TransferFailed(
                LedgerError::InsufficientBalance { .. }
            ))
        ));
    }

    #[test]
    fn base_for_quote_refused_payout_refunds_input() {
        let mut pool = make_pool(10_000, 10_000);
        pool.asset_ledger_mut().freeze(&trader());
        let result = pool.swap_base_for_quote(Amount::new(100), Amount::ZERO, &trader());
        assert_eq!(
            result,
            Err(AmmError::TransferFailed(LedgerError::Rejected(trader())))
        );
        assert_eq!(
            pool.native_ledger().balance_of(&trader()),
            Amount::new(1_000_000)
        );
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(10_000), Amount::new(10_000))
        );
    }

    // -- quote → base ---------------------------------------------------------

    #[test]
    fn quote_for_base_prices_against_credited_reserve() {
        let mut pool = make_pool(5_000, 10_000);
        let Ok(out) = pool.swap_quote_for_base(Amount::new(1_000), Amount::ZERO, &trader()) else {
            panic!("expected Ok");
        };
        // quote(1000, 11_000, 5000) = ⌊997_000 × 5000 / (11_000_000 + 997_000)⌋ = 415
        assert_eq!(out, Amount::new(415));
        assert_eq!(
            pool.reserves(),
            Reserves::new(Amount::new(4_585), Amount::new(11_000))
        );
        assert_eq!(
            pool.asset_ledger().allowance(&trader(), &pool_account()),
            Amount::new(999_000)
        );
    }

    #[test]
    fn quote_for_base_slippage_restores_pull() {
        let mut pool = make_pool(5_000, 10_000);
        let result = pool.swap_quote_for_base(Amount::new(1_000), Amount::new(416), &trader());
        assert_eq!(
            result,
            Err(AmmError::SlippageExceeded {
                actual: Amount::new(415),
                minimum: Amount::new(416)
            })
        );
        assert_eq!(
            pool.asset_ledger().balance_of(&trader()),
            Amount::new(1_000_000)
        );
        assert_eq!(
            pool.asset_ledger().allowance(&trader(), &pool_account()),
            Amount::new(1_000_000)
        );
        assert_eq!(pool.reserves().quote(), Amount::new(10_000));
    }

    #[test]
    fn quote_for_base_without_allowance() {
        let mut pool = make_pool(5_000, 10_000);
        pool.asset_ledger_mut()
            .approve(&trader(), &pool_account(), Amount::new(10));
        assert!(matches!(
            pool.swap_quote_for_base(Amount::new(1_000), Amount::ZERO, &trader()),
            Err(AmmError::TransferFailed(
                LedgerError::InsufficientAllowance { .. }
            ))
        ));
    }

    #[test]
    fn quote_for_base_refused_payout_rolls_back_pull() {
        let mut pool = make_pool(5_000, 10_000);
        pool.native_ledger_mut().reject_payments_to(&trader());
        let result = pool.swap_quote_for_base(Amount::new(1_000), Amount::ZERO, &trader());
        assert_eq!(
            result,
            Err(AmmError::TransferFailed(LedgerError::Rejected(trader())))
        );
        assert_eq!(pool.reserves().quote(), Amount::new(10_000));
        assert_eq!(
            pool.asset_ledger().allowance(&trader(), &pool_account()),
            Amount::new(1_000_000)
        );
    }

    #[test]
    fn pool_account_cannot_trade_with_itself() {
        let mut pool = make_pool(5_000, 10_000);
        pool.asset_ledger_mut()
            .approve(&pool_account(), &pool_account(), Amount::new(10_000));
        let reserves = pool.reserves();

        let result = pool.swap_base_for_quote(Amount::new(500), Amount::ZERO, &pool_account());
        assert!(matches!(result, Err(AmmError::InvalidCounterparty(_))));
        let result = pool.swap_quote_for_base(Amount::new(500), Amount::ZERO, &pool_account());
        assert!(matches!(result, Err(AmmError::InvalidCounterparty(_))));

        assert_eq!(pool.reserves(), reserves);
        assert_eq!(
            pool.asset_ledger().allowance(&pool_account(), &pool_account()),
            Amount::new(10_000)
        );
        assert_eq!(pool.event_sink().len(), 1);
    }

    // -- invariants -----------------------------------------------------------

    #[test]
    fn product_never_decreases_across_swaps() {
        let mut pool = make_pool(50_000, 80_000);
        let mut k = product(&pool);
        for i in 1..=20u128 {
            let result = if i % 2 == 0 {
                pool.swap_base_for_quote(Amount::new(i * 37), Amount::ZERO, &trader())
            } else {
                pool.swap_quote_for_base(Amount::new(i * 53), Amount::ZERO, &trader())
            };
            let Ok(_) = result else {
                panic!("swap {i} failed");
            };
            let next = product(&pool);
            assert!(next >= k, "k fell at swap {i}: {next} < {k}");
            k = next;
        }
        assert_eq!(pool.share_ledger().total(), Shares::new(50_000));
        assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn swaps_emit_events_in_order() {
        let mut pool = make_pool(1_001, 2_002);
        let Ok(_) = pool.swap_base_for_quote(Amount::new(100), Amount::ZERO, &trader()) else {
            panic!("expected Ok");
        };
        let events = pool.event_sink().as_slice();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            PoolEvent::Swap {
                trader: trader(),
                direction: SwapDirection::BaseToQuote,
                amount_in: Amount::new(100),
                amount_out: Amount::new(181),
            }
        );
    }
}
