//! Two-sided liquidity: minting shares on deposit and burning them for a
//! proportional payout.
//!
//! # Minting
//!
//! ```text
//! first deposit:  shares = base_in                       (must exceed the floor)
//! later deposits: shares = min(⌊base_in × T / R_base⌋, ⌊quote_in × T / R_quote⌋)
//! ```
//!
//! Share amounts are computed against the reserves as they stood before the
//! deposit. Any excess on the more generous leg stays in the pool and
//! accrues to every holder; the depositor is not refunded.
//!
//! # Burning
//!
//! ```text
//! base_out  = ⌊shares × R_base  / T⌋
//! quote_out = ⌊shares × R_quote / T⌋
//! ```

use tracing::debug;

use crate::domain::{AccountId, Amount, PoolEvent, Reserves, Rounding, Shares, Withdrawal};
use crate::error::AmmError;
use crate::math::mul_div;
use crate::traits::{AssetLedger, EventSink, Journaled, NativeTransfer};

use super::pool::{Pool, Staged};

impl<A, N, S> Pool<A, N, S>
where
    A: AssetLedger + Journaled,
    N: NativeTransfer + Journaled,
    S: EventSink,
{
    /// Deposits `base_in` native currency and `quote_in` of the quote asset
    /// from `depositor`, minting shares to them.
    ///
    /// The quote leg is pulled with `transfer_from`, so the depositor must
    /// have approved the pool account for at least `quote_in`. The base leg
    /// is the value attached to the call: it moves from the depositor to the
    /// pool account on the native ledger.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either leg is zero.
    /// - [`AmmError::InvalidCounterparty`] if `depositor` is the pool account.
    /// - [`AmmError::InsufficientLiquidity`] if this is the first deposit
    ///   and `base_in` does not exceed the configured share floor, or if a
    ///   later deposit is too small to mint a single share.
    /// - [`AmmError::TransferFailed`] if either ledger refuses a transfer.
    /// - [`AmmError::Overflow`] if share arithmetic exceeds `u128`.
    ///
    /// On any error no ledger balance, allowance, or share balance changes.
    pub fn provide(
        &mut self,
        base_in: Amount,
        quote_in: Amount,
        depositor: &AccountId,
    ) -> Result<Shares, AmmError> {
        if base_in.is_zero() || quote_in.is_zero() {
            return Err(AmmError::InvalidAmount("both deposit legs must be positive"));
        }
        self.ensure_counterparty(depositor)?;

        self.transact("provide", |pool| {
            let before = pool.reserves();
            let minted = pool.shares_for_deposit(base_in, quote_in, before)?;
            let update = pool.shares.plan_credit(depositor, minted)?;

            let pool_account = pool.config.pool_account();
            pool.asset
                .transfer_from(&pool_account, depositor, &pool_account, quote_in)?;
            pool.native.transfer(depositor, &pool_account, base_in)?;

            debug!(
                %depositor,
                base_in = base_in.get(),
                quote_in = quote_in.get(),
                minted = minted.get(),
                "liquidity provided"
            );
            Ok(Staged {
                value: minted,
                shares: Some(update),
                event: PoolEvent::LiquidityAdded {
                    provider: *depositor,
                    base_in,
                    quote_in,
                    shares: minted,
                },
            })
        })
    }

    /// Burns `shares_in` of `holder`'s shares and pays out the matching
    /// fraction of both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares_in` is zero.
    /// - [`AmmError::InsufficientShares`] if `holder` owns fewer shares.
    /// - [`AmmError::InsufficientOutput`] if either payout rounds to zero.
    /// - [`AmmError::TransferFailed`] if either payout is refused.
    ///
    /// On any error no ledger balance or share balance changes.
    pub fn withdraw(
        &mut self,
        shares_in: Shares,
        holder: &AccountId,
    ) -> Result<Withdrawal, AmmError> {
        if shares_in.is_zero() {
            return Err(AmmError::InvalidAmount("shares to burn must be positive"));
        }

        self.transact("withdraw", |pool| {
            let update = pool.shares.plan_debit(holder, shares_in)?;
            let payout = pool.payout_for(shares_in, pool.reserves())?;

            let pool_account = pool.config.pool_account();
            pool.asset
                .transfer(&pool_account, holder, payout.quote_out())?;
            pool.native
                .transfer(&pool_account, holder, payout.base_out())?;

            debug!(
                %holder,
                burned = shares_in.get(),
                base_out = payout.base_out().get(),
                quote_out = payout.quote_out().get(),
                "liquidity withdrawn"
            );
            Ok(Staged {
                value: payout,
                shares: Some(update),
                event: PoolEvent::LiquidityRemoved {
                    provider: *holder,
                    shares: shares_in,
                    base_out: payout.base_out(),
                    quote_out: payout.quote_out(),
                },
            })
        })
    }

    /// Shares a deposit would mint against `reserves`.
    pub(super) fn shares_for_deposit(
        &self,
        base_in: Amount,
        quote_in: Amount,
        reserves: Reserves,
    ) -> Result<Shares, AmmError> {
        let total = self.shares.total();

        if total.is_zero() {
            let minted = Shares::from(base_in);
            if minted <= self.config.minimum_shares() {
                return Err(AmmError::InsufficientLiquidity(
                    "first deposit must exceed the minimum share floor",
                ));
            }
            return Ok(minted);
        }

        if reserves.base().is_zero() || reserves.quote().is_zero() {
            return Err(AmmError::InvalidReserves);
        }
        let by_base = mul_div(base_in, total.as_amount(), reserves.base(), Rounding::Down)?;
        let by_quote = mul_div(quote_in, total.as_amount(), reserves.quote(), Rounding::Down)?;
        let minted = Shares::from(by_base.min(by_quote));
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidity(
                "deposit too small to mint a share",
            ));
        }
        Ok(minted)
    }

    /// Payout for burning `shares_in` against `reserves`.
    pub(super) fn payout_for(
        &self,
        shares_in: Shares,
        reserves: Reserves,
    ) -> Result<Withdrawal, AmmError> {
        let total = self.shares.total().as_amount();
        let base_out = mul_div(shares_in.as_amount(), reserves.base(), total, Rounding::Down)?;
        let quote_out = mul_div(shares_in.as_amount(), reserves.quote(), total, Rounding::Down)?;
        Withdrawal::new(base_out, quote_out)
    }
}
