//! Declarative pool blueprints.
//!
//! A [`PoolConfig`] carries everything fixed at deployment: the pool's own
//! account and the first-mint floor. The fee is not configurable; every
//! pool charges [`FeeRate::STANDARD`](crate::domain::FeeRate::STANDARD).

mod pool_config;

pub use pool_config::{PoolConfig, MINIMUM_SHARES};
