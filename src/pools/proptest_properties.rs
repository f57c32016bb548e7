//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Constant product** never decreases across swaps.
//! 2. **Share accounting**: holder balances sum to the total after every
//!    operation, including failed ones.
//! 3. **Liquidity round trip**: a deposit of exact reserve multiples comes
//!    back within one unit per asset, any other proportional deposit within
//!    one share's worth; no deposit comes back larger.
//! 4. **Reverse pricing** returns the smallest sufficient input.
//! 5. **Atomicity**: a failing operation leaves every balance untouched.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, PoolEvent, Rounding, Shares};
use crate::ledgers::{InMemoryAssetLedger, InMemoryNativeLedger};
use crate::math::{mul_div, quote, required_input};
use crate::traits::{AssetLedger, NativeTransfer};

use super::Pool;

type TestPool = Pool<InMemoryAssetLedger, InMemoryNativeLedger, Vec<PoolEvent>>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1_000_000_000_000;

fn pool_account() -> AccountId {
    AccountId::from_bytes([0xAA; 32])
}

fn actor(i: u8) -> AccountId {
    AccountId::from_bytes([i + 1; 32])
}

/// Pool seeded by actor 0; actors 0..4 hold [`FUNDING`] of each asset and
/// have approved the pool for all of it.
fn make_pool(base: u128, quote: u128) -> TestPool {
    let Ok(config) = PoolConfig::new(pool_account()) else {
        panic!("valid config");
    };
    let mut asset = InMemoryAssetLedger::new();
    let mut native = InMemoryNativeLedger::new();
    for i in 0..4u8 {
        let Ok(()) = native.credit(&actor(i), Amount::new(FUNDING)) else {
            panic!("credit");
        };
        let Ok(()) = asset.mint(&actor(i), Amount::new(FUNDING)) else {
            panic!("mint");
        };
        asset.approve(&actor(i), &pool_account(), Amount::new(FUNDING));
    }
    let mut pool = Pool::with_event_sink(config, asset, native, Vec::new());
    let Ok(_) = pool.provide(Amount::new(base), Amount::new(quote), &actor(0)) else {
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

/// Every balance the pool can touch, for before/after comparison.
fn balances(pool: &TestPool) -> Vec<Amount> {
    let mut out = Vec::new();
    for i in 0..4u8 {
        out.push(pool.asset_ledger().balance_of(&actor(i)));
        out.push(pool.native_ledger().balance_of(&actor(i)));
        out.push(pool.asset_ledger().allowance(&actor(i), &pool_account()));
    }
    out.push(pool.asset_ledger().balance_of(&pool_account()));
    out.push(pool.native_ledger().balance_of(&pool_account()));
    out
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Provide { who: u8, base: u128, quote: u128 },
    Withdraw { who: u8, shares: u128 },
    BaseForQuote { who: u8, amount: u128, min_out: u128 },
    QuoteForBase { who: u8, amount: u128, min_out: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4u8, 0..200_000u128, 0..200_000u128)
            .prop_map(|(who, base, quote)| Op::Provide { who, base, quote }),
        (0..4u8, 0..100_000u128).prop_map(|(who, shares)| Op::Withdraw { who, shares }),
        (0..4u8, 0..100_000u128, 0..50_000u128)
            .prop_map(|(who, amount, min_out)| Op::BaseForQuote { who, amount, min_out }),
        (0..4u8, 0..100_000u128, 0..50_000u128)
            .prop_map(|(who, amount, min_out)| Op::QuoteForBase { who, amount, min_out }),
    ]
}

fn apply(pool: &mut TestPool, op: &Op) -> bool {
    match *op {
        Op::Provide { who, base, quote } => pool
            .provide(Amount::new(base), Amount::new(quote), &actor(who))
            .is_ok(),
        Op::Withdraw { who, shares } => pool.withdraw(Shares::new(shares), &actor(who)).is_ok(),
        Op::BaseForQuote {
            who,
            amount,
            min_out,
        } => pool
            .swap_base_for_quote(Amount::new(amount), Amount::new(min_out), &actor(who))
            .is_ok(),
        Op::QuoteForBase {
            who,
            amount,
            min_out,
        } => pool
            .swap_quote_for_base(Amount::new(amount), Amount::new(min_out), &actor(who))
            .is_ok(),
    }
}

// ---------------------------------------------------------------------------
// 1. Constant product
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_non_decreasing_across_swaps(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        amounts in prop::collection::vec(1u128..50_000u128, 1..12),
    ) {
        let mut pool = make_pool(rb, rq);
        let mut k = product(&pool);
        for (i, amount) in amounts.iter().enumerate() {
            let result = if i % 2 == 0 {
                pool.swap_base_for_quote(Amount::new(*amount), Amount::ZERO, &actor(1))
            } else {
                pool.swap_quote_for_base(Amount::new(*amount), Amount::ZERO, &actor(2))
            };
            if result.is_err() { continue; }
            let next = product(&pool);
            prop_assert!(next >= k, "k fell: {} < {}", next, k);
            k = next;
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Share accounting + 5. Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_book_consistent_after_every_op(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut pool = make_pool(rb, rq);
        for op in &ops {
            let before = balances(&pool);
            let shares_before = pool.snapshot();
            let events_before = pool.event_sink().len();

            let ok = apply(&mut pool, op);

            prop_assert!(pool.check_invariants().is_ok(), "invariant broken after {:?}", op);
            if !ok {
                prop_assert_eq!(balances(&pool), before, "failed {:?} moved funds", op);
                prop_assert_eq!(pool.snapshot(), shares_before, "failed {:?} moved shares", op);
                prop_assert_eq!(pool.event_sink().len(), events_before);
            } else {
                prop_assert_eq!(pool.event_sink().len(), events_before + 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Liquidity round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_round_trip_within_one_unit(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        swap_in in 1u128..100_000u128,
        multiple in 1u128..=5u128,
    ) {
        let mut pool = make_pool(rb, rq);
        // move the price first so the reserves are no longer the seed
        let _ = pool.swap_base_for_quote(Amount::new(swap_in), Amount::ZERO, &actor(2));

        let reserves = pool.reserves();
        let base_in = reserves.base().get() * multiple;
        let quote_in = reserves.quote().get() * multiple;
        let Ok(minted) = pool.provide(Amount::new(base_in), Amount::new(quote_in), &actor(1)) else {
            return Err(TestCaseError::fail("proportional deposit rejected"));
        };
        let Ok(payout) = pool.withdraw(minted, &actor(1)) else {
            return Err(TestCaseError::fail("withdraw of fresh shares rejected"));
        };

        prop_assert!(payout.base_out().get() <= base_in);
        prop_assert!(payout.quote_out().get() <= quote_in);
        prop_assert!(base_in - payout.base_out().get() <= 1);
        prop_assert!(quote_in - payout.quote_out().get() <= 1);
    }

    #[test]
    fn prop_uneven_proportional_round_trip_loses_under_one_share(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        swap_in in 1u128..100_000u128,
        base_in in 10_000u128..1_000_000u128,
    ) {
        let mut pool = make_pool(rb, rq);
        let _ = pool.swap_base_for_quote(Amount::new(swap_in), Amount::ZERO, &actor(2));

        let reserves = pool.reserves();
        let total = pool.total_shares().get();
        // smallest quote leg that keeps base the limiting side
        let Ok(quote_in) = mul_div(
            Amount::new(base_in),
            reserves.quote(),
            reserves.base(),
            Rounding::Up,
        ) else {
            return Err(TestCaseError::fail("quote leg overflowed"));
        };
        let quote_in = quote_in.get();

        let minted = pool.provide(Amount::new(base_in), Amount::new(quote_in), &actor(1));
        prop_assume!(minted.is_ok());
        let Ok(minted) = minted else {
            return Ok(());
        };
        let payout = pool.withdraw(minted, &actor(1));
        prop_assume!(payout.is_ok());
        let Ok(payout) = payout else {
            return Ok(());
        };

        let base_loss = base_in - payout.base_out().get();
        let quote_loss = quote_in - payout.quote_out().get();
        prop_assert!(base_loss <= reserves.base().get().div_ceil(total));
        prop_assert!(quote_loss <= reserves.quote().get().div_ceil(total) + 1);
        prop_assert!(pool.check_invariants().is_ok());
    }

    #[test]
    fn prop_round_trip_never_profits(
        rb in reserve_strategy(),
        rq in reserve_strategy(),
        base_in in 1u128..1_000_000u128,
        quote_in in 1u128..1_000_000u128,
    ) {
        let mut pool = make_pool(rb, rq);
        let Ok(minted) = pool.provide(Amount::new(base_in), Amount::new(quote_in), &actor(1)) else {
            return Ok(());
        };
        let Ok(payout) = pool.withdraw(minted, &actor(1)) else {
            return Ok(());
        };
        prop_assert!(payout.base_out().get() <= base_in);
        prop_assert!(payout.quote_out().get() <= quote_in);
        prop_assert!(pool.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// 4. Reverse pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_required_input_is_minimal(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        permille in 1u128..=900u128,
    ) {
        let target = (reserve_out * permille / 1_000).max(1);
        let Ok(needed) = required_input(
            Amount::new(target),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Ok(());
        };
        let Ok(got) = quote(needed, Amount::new(reserve_in), Amount::new(reserve_out)) else {
            return Ok(());
        };
        prop_assert!(got.get() >= target);
        if needed.get() > 1 {
            let Ok(short) = quote(
                Amount::new(needed.get() - 1),
                Amount::new(reserve_in),
                Amount::new(reserve_out),
            ) else {
                return Ok(());
            };
            prop_assert!(short.get() < target);
        }
    }
}
