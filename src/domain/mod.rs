//! Value types used throughout the pool core.
//!
//! Newtypes for amounts, shares and accounts keep the two quantities that
//! the pool multiplies together (asset amounts and ownership shares) from
//! being confused, and every arithmetic method on them is checked.

mod account_id;
mod amount;
mod fee_rate;
mod pool_event;
mod reserves;
mod rounding;
mod shares;
mod withdrawal;

pub use account_id::AccountId;
pub use amount::Amount;
pub use fee_rate::FeeRate;
pub use pool_event::{PoolEvent, SwapDirection};
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
pub use withdrawal::Withdrawal;
