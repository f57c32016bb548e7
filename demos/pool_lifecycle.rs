//! Pool lifecycle walkthrough.
//!
//! Seeds a pool, adds a second provider, trades in both directions, shows
//! a slippage rejection rolling back cleanly, then lets everyone exit.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example pool_lifecycle
//! ```

use std::env;
use std::error::Error;

use pairswap::prelude::{
    AccountId, Amount, InMemoryAssetLedger, InMemoryNativeLedger, Pool, PoolConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== pairswap: constant-product pool lifecycle ===\n");

    // ── 1. Accounts and ledgers ────────────────────────────────────────
    let pool_account = AccountId::from_bytes([0xAA; 32]);
    let alice = AccountId::from_bytes([1u8; 32]);
    let bob = AccountId::from_bytes([2u8; 32]);
    let trader = AccountId::from_bytes([3u8; 32]);

    let mut asset = InMemoryAssetLedger::new();
    let mut native = InMemoryNativeLedger::new();
    for account in [alice, bob, trader] {
        asset.mint(&account, Amount::new(1_000_000))?;
        asset.approve(&account, &pool_account, Amount::new(1_000_000));
        native.credit(&account, Amount::new(1_000_000))?;
    }

    // ── 2. Create and seed the pool ────────────────────────────────────
    let config = PoolConfig::new(pool_account)?;
    println!("Pool account:   {}", config.pool_account());
    println!("Minimum shares: {}", config.minimum_shares());

    let mut pool = Pool::new(config, asset, native);
    let minted = pool.provide(Amount::new(5_000), Amount::new(10_000), &alice)?;
    println!("\nAlice seeds 5000 / 10000 → {minted} shares");

    let minted = pool.provide(Amount::new(1_000), Amount::new(1_500), &bob)?;
    println!("Bob adds 1000 / 1500     → {minted} shares (quote leg limits the mint)");
    println!("{}", pool.reserves());

    // ── 3. Trade ───────────────────────────────────────────────────────
    let preview = pool.preview_swap_base_for_quote(Amount::new(500))?;
    let out = pool.swap_base_for_quote(Amount::new(500), preview, &trader)?;
    println!("\nTrader sells 500 base  → {out} quote (previewed {preview})");

    let out = pool.swap_quote_for_base(Amount::new(800), Amount::new(1), &trader)?;
    println!("Trader sells 800 quote → {out} base");

    let needed = pool.base_needed_for_quote(Amount::new(250))?;
    println!("Base needed for 250 quote: {needed}");

    // ── 4. Slippage rejection ──────────────────────────────────────────
    let before = pool.reserves();
    match pool.swap_base_for_quote(Amount::new(100), Amount::new(10_000), &trader) {
        Err(err) => println!("\nRejected: {err}"),
        Ok(out) => println!("\nUnexpectedly filled for {out}"),
    }
    println!("Reserves unchanged: {}", pool.reserves() == before);

    // ── 5. Exit ────────────────────────────────────────────────────────
    println!(
        "\nBob holds {} bps of the pool",
        pool.pool_share_bps(&bob)?
    );
    let payout = pool.withdraw(pool.share_of(&bob), &bob)?;
    println!("Bob exits   → {payout}");
    let payout = pool.withdraw(pool.share_of(&alice), &alice)?;
    println!("Alice exits → {payout}");

    pool.check_invariants()?;
    println!("\nFinal: {}, total shares {}", pool.reserves(), pool.total_shares());

    let snapshot = pool.snapshot();
    println!("Snapshot holders: {}", snapshot.holders.len());

    Ok(())
}
