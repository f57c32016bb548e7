//! Constant-product pricing with the pool's fixed fee.
//!
//! # Forward quote
//!
//! ```text
//! effective_in = amount_in × (fee_den − fee_num)
//! amount_out   = ⌊ effective_in × reserve_out / (reserve_in × fee_den + effective_in) ⌋
//! ```
//!
//! Floor division leaves the remainder in the pool, so the product of the
//! reserves never decreases across a swap. The direction is part of the
//! contract: results must match these formulas to the unit.
//!
//! # Reverse quote
//!
//! [`required_input`] inverts the forward formula, rounding up, and returns
//! the *smallest* input whose forward quote reaches the requested output.

use crate::domain::{Amount, FeeRate, Rounding};
use crate::error::AmmError;

/// Returns the output a swap of `amount_in` would receive.
///
/// Pure: the result depends only on the arguments.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::quote;
///
/// let out = quote(Amount::new(100), Amount::new(1_000), Amount::new(2_000));
/// assert_eq!(out, Ok(Amount::new(181)));
/// ```
pub fn quote(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    let fee = FeeRate::STANDARD;

    let effective_in = fee
        .effective_input(amount_in)
        .ok_or(AmmError::Overflow("effective input overflow"))?;

    let numerator = effective_in
        .checked_mul(&reserve_out)
        .ok_or(AmmError::Overflow("quote numerator overflow"))?;

    let denominator = reserve_in
        .checked_mul(&Amount::new(fee.denominator()))
        .and_then(|scaled| scaled.checked_add(&effective_in))
        .ok_or(AmmError::Overflow("quote denominator overflow"))?;

    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(AmmError::DivisionByZero)
}

/// Returns the smallest input for which [`quote`] yields at least
/// `amount_out`.
///
/// ```text
/// amount_in = ⌈ reserve_in × amount_out × fee_den / ((reserve_out − amount_out) × (fee_den − fee_num)) ⌉
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out` is not below
///   `reserve_out`; no finite input can drain the reserve.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn required_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount("requested output is zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity(
            "requested output drains the reserve",
        ));
    }
    let fee = FeeRate::STANDARD;

    let numerator = reserve_in
        .checked_mul(&amount_out)
        .and_then(|n| n.checked_mul(&Amount::new(fee.denominator())))
        .ok_or(AmmError::Overflow("reverse quote numerator overflow"))?;

    let remaining = reserve_out
        .checked_sub(&amount_out)
        .ok_or(AmmError::Underflow("reverse quote remaining reserve"))?;
    let denominator = fee
        .effective_input(remaining)
        .ok_or(AmmError::Overflow("reverse quote denominator overflow"))?;

    numerator
        .checked_div(&denominator, Rounding::Up)
        .ok_or(AmmError::DivisionByZero)
}

/// Returns the smallest input `x` for which
/// `quote(x, reserve_in + x, reserve_out)` yields at least `amount_out`.
///
/// This is the inverse for swaps priced against an input reserve that
/// already holds the incoming amount:
///
/// ```text
/// x = ⌈ reserve_in × amount_out × fee_den
///       / (reserve_out × (fee_den − fee_num) − amount_out × (2·fee_den − fee_num)) ⌉
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if the denominator is not
///   positive: no input reaches `amount_out`.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn required_input_credited(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount("requested output is zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    let fee = FeeRate::STANDARD;

    let numerator = reserve_in
        .checked_mul(&amount_out)
        .and_then(|n| n.checked_mul(&Amount::new(fee.denominator())))
        .ok_or(AmmError::Overflow("reverse quote numerator overflow"))?;

    let capacity = fee
        .effective_input(reserve_out)
        .ok_or(AmmError::Overflow("reverse quote capacity overflow"))?;
    let drag = amount_out
        .checked_mul(&Amount::new(fee.denominator() + fee.complement()))
        .ok_or(AmmError::Overflow("reverse quote drag overflow"))?;
    let denominator = capacity
        .checked_sub(&drag)
        .filter(|d| !d.is_zero())
        .ok_or(AmmError::InsufficientLiquidity(
            "requested output is unreachable",
        ))?;

    numerator
        .checked_div(&denominator, Rounding::Up)
        .ok_or(AmmError::DivisionByZero)
}
