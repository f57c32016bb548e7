//! # pairswap
//!
//! Core of a two-asset constant-product liquidity pool: a native base
//! currency paired with one fungible quote asset.
//!
//! Providers deposit both assets and receive proportional ownership
//! shares; traders swap one asset for the other at a price set by the
//! reserve ratio, paying a fixed 0.3% fee that stays in the pool.
//!
//! - **Pricing**: `out = ⌊in·997·R_out / (R_in·1000 + in·997)⌋`, floor
//!   division in the pool's favour.
//! - **Liquidity**: first deposit mints `base_in` shares (above a floor);
//!   later deposits mint pro rata on the limiting leg.
//! - **Atomicity**: every operation is all-or-nothing across the share book
//!   and both external ledgers.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let pool_account = AccountId::from_bytes([0xAA; 32]);
//! let lp = AccountId::from_bytes([1u8; 32]);
//! let trader = AccountId::from_bytes([2u8; 32]);
//!
//! // 1. Fund both parties on in-memory ledgers
//! let mut asset = InMemoryAssetLedger::new();
//! let mut native = InMemoryNativeLedger::new();
//! asset.mint(&lp, Amount::new(2_002)).expect("mint");
//! asset.approve(&lp, &pool_account, Amount::new(2_002));
//! native.credit(&lp, Amount::new(1_001)).expect("credit");
//! native.credit(&trader, Amount::new(100)).expect("credit");
//!
//! // 2. Create the pool and seed it
//! let config = PoolConfig::new(pool_account).expect("valid config");
//! let mut pool = Pool::new(config, asset, native);
//! pool.provide(Amount::new(1_001), Amount::new(2_002), &lp).expect("seed");
//!
//! // 3. Swap 100 base for at least 181 quote
//! let out = pool
//!     .swap_base_for_quote(Amount::new(100), Amount::new(181), &trader)
//!     .expect("swap");
//! assert_eq!(out, Amount::new(181));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host     │  owns the ledgers, calls pool operations
//! └──────┬───────┘
//!        │ &mut Pool  (or SharedPool::with)
//!        ▼
//! ┌──────────────┐
//! │     Pool     │  provide / withdraw / swaps, checkpoint + rollback
//! └──────┬───────┘
//!        │ AssetLedger + NativeTransfer + Journaled + EventSink
//!        ▼
//! ┌──────────────┐
//! │ Collaborators│  token ledger, native currency, event sink
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AccountId`](domain::AccountId), events |
//! | [`math`]   | Checked arithmetic and the pricing engine |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and the [`MINIMUM_SHARES`](config::MINIMUM_SHARES) floor |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`NativeTransfer`](traits::NativeTransfer), [`Journaled`](traits::Journaled), [`EventSink`](traits::EventSink) |
//! | [`pools`]  | [`Pool`](pools::Pool), [`SharedPool`](pools::SharedPool), snapshots |
//! | [`ledgers`] | In-memory collaborators for simulation and tests |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledgers;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
