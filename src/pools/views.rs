//! Read-only helpers. None of these touch ledger or share state.
//!
//! Previews price against live reserves exactly the way the matching
//! operation does, so a preview followed by the operation in the same
//! state returns the same amount.

use crate::domain::{AccountId, Amount, Rounding, Shares, Withdrawal};
use crate::error::AmmError;
use crate::math::{mul_div, quote, required_input, required_input_credited, CheckedArithmetic};
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer};

use super::pool::Pool;

/// Basis points in 100%.
const BPS_DENOMINATOR: u128 = 10_000;

impl<A, N, S> Pool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Total shares outstanding.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// Shares held by `account`.
    #[must_use]
    pub fn share_of(&self, account: &AccountId) -> Shares {
        self.shares.balance_of(account)
    }

    /// `account`'s fraction of the pool in basis points, rounded down.
    /// Zero when no shares are outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the holder balance times 10 000
    /// exceeds `u128`.
    pub fn pool_share_bps(&self, account: &AccountId) -> Result<u128, AmmError> {
        let total = self.shares.total();
        if total.is_zero() {
            return Ok(0);
        }
        let bps = mul_div(
            self.share_of(account).as_amount(),
            Amount::new(BPS_DENOMINATOR),
            total.as_amount(),
            Rounding::Down,
        )?;
        Ok(bps.get())
    }

    /// Quote output [`swap_base_for_quote`](Self::swap_base_for_quote)
    /// would pay for `base_in` right now, before any slippage check.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserves`] on an empty pool, or an arithmetic
    /// error from the pricing formula.
    pub fn preview_swap_base_for_quote(&self, base_in: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        quote(base_in, reserves.base(), reserves.quote())
    }

    /// Base output [`swap_quote_for_base`](Self::swap_quote_for_base)
    /// would pay for `quote_in` right now.
    ///
    /// # Errors
    ///
    /// As for [`preview_swap_base_for_quote`](Self::preview_swap_base_for_quote).
    pub fn preview_swap_quote_for_base(&self, quote_in: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        let credited = reserves.quote().safe_add(&quote_in)?;
        quote(quote_in, credited, reserves.base())
    }

    /// Smallest base input for which `swap_base_for_quote` pays at least
    /// `quote_out`.
    ///
    /// # Errors
    ///
    /// See [`required_input`](crate::math::required_input).
    pub fn base_needed_for_quote(&self, quote_out: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        required_input(quote_out, reserves.base(), reserves.quote())
    }

    /// Smallest quote input for which `swap_quote_for_base` pays at least
    /// `base_out`.
    ///
    /// # Errors
    ///
    /// See [`required_input_credited`](crate::math::required_input_credited).
    pub fn quote_needed_for_base(&self, base_out: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        required_input_credited(base_out, reserves.quote(), reserves.base())
    }

    /// Shares [`provide`](Self::provide) would mint for this deposit.
    ///
    /// # Errors
    ///
    /// The same validation errors `provide` reports before it moves funds.
    pub fn preview_provide(&self, base_in: Amount, quote_in: Amount) -> Result<Shares, AmmError> {
        if base_in.is_zero() || quote_in.is_zero() {
            return Err(AmmError::InvalidAmount("both deposit legs must be positive"));
        }
        self.shares_for_deposit(base_in, quote_in, self.reserves())
    }

    /// Payout [`withdraw`](Self::withdraw) would make for burning
    /// `shares_in`, ignoring who holds them.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidAmount`] for zero shares,
    /// [`AmmError::InsufficientShares`] if `shares_in` exceeds the total,
    /// [`AmmError::InsufficientOutput`] if a leg rounds to zero.
    pub fn preview_withdraw(&self, shares_in: Shares) -> Result<Withdrawal, AmmError> {
        if shares_in.is_zero() {
            return Err(AmmError::InvalidAmount("shares to burn must be positive"));
        }
        let total = self.shares.total();
        if shares_in > total {
            return Err(AmmError::InsufficientShares {
                held: total.get(),
                requested: shares_in.get(),
            });
        }
        self.payout_for(shares_in, self.reserves())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::PoolEvent;
    use crate::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};

    type TestPool = Pool<InMemoryAssetLedger, InMemoryNativeLedger, Vec<PoolEvent>>;

    fn pool_account() -> AccountId {
        AccountId::from_bytes([0xAA; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([2u8; 32])
    }

    fn empty_pool() -> TestPool {
        let Ok(config) = PoolConfig::new(pool_account()) else {
            panic!("valid config");
        };
        let mut asset = InMemoryAssetLedger::new();
        let mut native = InMemoryNativeLedger::new();
        for account in [alice(), bob()] {
            let Ok(()) = native.credit(&account, Amount::new(1_000_000)) else {
                panic!("credit");
            };
            let Ok(()) = asset.mint(&account, Amount::new(1_000_000)) else {
                panic!("mint");
            };
            asset.approve(&account, &pool_account(), Amount::new(1_000_000));
        }
        Pool::with_event_sink(config, asset, native, Vec::new())
    }

    fn seeded_pool() -> TestPool {
        let mut pool = empty_pool();
        let Ok(_) = pool.provide(Amount::new(5_000), Amount::new(10_000), &alice()) else {
            panic!("seed deposit");
        };
        pool
    }

    #[test]
    fn share_percentages() {
        let mut pool = seeded_pool();
        assert_eq!(pool.pool_share_bps(&alice()), Ok(10_000));
        let Ok(_) = pool.provide(Amount::new(1_000), Amount::new(1_500), &bob()) else {
            panic!("expected Ok");
        };
        // 750 / 5750 = 13.04%
        assert_eq!(pool.pool_share_bps(&bob()), Ok(1_304));
        assert_eq!(pool.pool_share_bps(&alice()), Ok(8_695));
    }

    #[test]
    fn share_percentage_of_empty_pool_is_zero() {
        let pool = empty_pool();
        assert_eq!(pool.pool_share_bps(&alice()), Ok(0));
        assert_eq!(pool.total_shares(), Shares::ZERO);
    }

    #[test]
    fn previews_match_swaps() {
        let mut pool = seeded_pool();

        let Ok(expected) = pool.preview_swap_base_for_quote(Amount::new(321)) else {
            panic!("expected Ok");
        };
        let Ok(paid) = pool.swap_base_for_quote(Amount::new(321), Amount::ZERO, &bob()) else {
            panic!("expected Ok");
        };
        assert_eq!(paid, expected);

        let Ok(expected) = pool.preview_swap_quote_for_base(Amount::new(777)) else {
            panic!("expected Ok");
        };
        let Ok(paid) = pool.swap_quote_for_base(Amount::new(777), Amount::ZERO, &bob()) else {
            panic!("expected Ok");
        };
        assert_eq!(paid, expected);
    }

    #[test]
    fn base_needed_reaches_target() {
        let mut pool = seeded_pool();
        let Ok(needed) = pool.base_needed_for_quote(Amount::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(out) = pool.swap_base_for_quote(needed, Amount::new(500), &bob()) else {
            panic!("expected Ok");
        };
        assert!(out >= Amount::new(500));
    }

    #[test]
    fn quote_needed_reaches_target() {
        let mut pool = seeded_pool();
        let Ok(needed) = pool.quote_needed_for_base(Amount::new(300)) else {
            panic!("expected Ok");
        };
        let Ok(out) = pool.swap_quote_for_base(needed, Amount::new(300), &bob()) else {
            panic!("expected Ok");
        };
        assert!(out >= Amount::new(300));
    }

    #[test]
    fn previews_on_empty_pool() {
        let pool = empty_pool();
        assert_eq!(
            pool.preview_swap_base_for_quote(Amount::new(1)),
            Err(AmmError::InvalidReserves)
        );
        assert_eq!(
            pool.preview_swap_quote_for_base(Amount::new(1)),
            Err(AmmError::InvalidReserves)
        );
    }

    #[test]
    fn preview_provide_and_withdraw() {
        let pool = seeded_pool();
        assert_eq!(
            pool.preview_provide(Amount::new(1_000), Amount::new(1_500)),
            Ok(Shares::new(750))
        );
        let Ok(payout) = pool.preview_withdraw(Shares::new(2_500)) else {
            panic!("expected Ok");
        };
        assert_eq!(payout.base_out(), Amount::new(2_500));
        assert_eq!(payout.quote_out(), Amount::new(5_000));
        assert!(matches!(
            pool.preview_withdraw(Shares::new(5_001)),
            Err(AmmError::InsufficientShares { .. })
        ));
    }

    #[test]
    fn previews_do_not_mutate() {
        let pool = seeded_pool();
        let before = pool.reserves();
        let _ = pool.preview_swap_base_for_quote(Amount::new(100));
        let _ = pool.base_needed_for_quote(Amount::new(100));
        let _ = pool.preview_provide(Amount::new(100), Amount::new(100));
        assert_eq!(pool.reserves(), before);
        assert_eq!(pool.event_sink().len(), 1);
    }
}
