//! Construction parameters for a [`Pool`](crate::pools::Pool).

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;

/// Default floor the first mint must exceed.
///
/// With a first mint of `base_in` shares, a near-zero denominator would
/// let a depositor set an arbitrarily high share price; requiring more than
/// this many shares bounds that.
pub const MINIMUM_SHARES: Shares = Shares::new(1_000);

/// Immutable parameters of one pool.
///
/// # Validation
///
/// - The pool account must not be the all-zero sentinel: it is the account
///   whose ledger balances *are* the reserves.
/// - The minimum-share floor must be non-zero.
///
/// The config is deserializable so hosts can keep it in whatever format
/// they already load settings from; [`validate`](Self::validate) runs again
/// when a pool is built from it.
///
/// # Examples
///
/// ```
/// use pairswap::config::{PoolConfig, MINIMUM_SHARES};
/// use pairswap::domain::AccountId;
///
/// let cfg = PoolConfig::new(AccountId::from_bytes([0xAA; 32])).expect("valid");
/// assert_eq!(cfg.minimum_shares(), MINIMUM_SHARES);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pool_account: AccountId,
    #[serde(default = "default_minimum_shares")]
    minimum_shares: Shares,
}

const fn default_minimum_shares() -> Shares {
    MINIMUM_SHARES
}

impl PoolConfig {
    /// Creates a config with the default [`MINIMUM_SHARES`] floor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `pool_account` is zero.
    pub fn new(pool_account: AccountId) -> Result<Self, AmmError> {
        Self::with_minimum_shares(pool_account, MINIMUM_SHARES)
    }

    /// Creates a config with an explicit first-mint floor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `pool_account` is zero
    /// or `minimum_shares` is zero.
    pub fn with_minimum_shares(
        pool_account: AccountId,
        minimum_shares: Shares,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pool_account,
            minimum_shares,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] describing the first
    /// violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must not be the zero id",
            ));
        }
        if self.minimum_shares.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum shares must be non-zero",
            ));
        }
        Ok(())
    }

    /// The account whose balances form the reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// The first mint must be strictly greater than this.
    #[must_use]
    pub const fn minimum_shares(&self) -> Shares {
        self.minimum_shares
    }
}
