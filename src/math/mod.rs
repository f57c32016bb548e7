//! Arithmetic for the pool: checked operations and the pricing engine.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CheckedArithmetic`] | `Result`-returning add/sub on [`Amount`](crate::domain::Amount) and [`Shares`](crate::domain::Shares) |
//! | [`mul_div`] | `value × numerator / denominator` with explicit rounding |
//! | [`quote`] | Constant-product output for an exact input |
//! | [`required_input`] | Smallest input reaching a target output |
//! | [`required_input_credited`] | Same, when the input is priced against a reserve that already holds it |

mod checked;
mod pricing;

pub use checked::{mul_div, CheckedArithmetic};
pub use pricing::{quote, required_input, required_input_credited};
