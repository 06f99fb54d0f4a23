//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use lendgine_engine::prelude::*;
//! ```

pub use crate::domain::{
    sort_tokens, Decimals, Fraction, Lendgine, LendgineInfo, LendginePosition, Pair, PairInfo,
    Percent, Price, Rounding, Token, TokenAddress, TokenAmount,
};

pub use crate::accounting::{
    accrue, estimate_burn, estimate_deposit, estimate_mint, estimate_pair_burn, estimate_withdraw,
    estimated_tokens_owed, pair_valuation, position_snapshot, reconcile_position,
};

pub use crate::market::{
    median_price, next_highest, next_lowest, partition_by_orientation, select_default_lendgine,
};

pub use crate::math::{
    borrow_rate, price_per_lp, price_to_reserves, reserves_to_price, supply_rate, utilization_rate,
    RateParams,
};

pub use crate::config::{ProtocolConfig, RateModel};

pub use crate::traits::{FromConfig, ReferencePriceSource, StateReader};

pub use crate::error::{EngineError, Result};
