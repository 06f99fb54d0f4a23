//! Pure valuation math over exact rationals.
//!
//! This module provides the price/reserve curve of a bound market, the
//! jump-rate interest model, and [`div_round`] for settling exact values
//! to integers with an explicit [`Rounding`](crate::domain::Rounding)
//! direction.
//!
//! Every function here is a pure function of immutable snapshots.

mod curve;
mod jump_rate;
mod rounding;

pub use curve::{
    lendgine_price, paired_deposit_amount, price_per_lp, price_to_reserves, reserves_to_price,
    total_value,
};
pub use jump_rate::{
    available_borrow_rate, available_supply_rate, available_utilization_rate, borrow_rate,
    borrow_rate_at, supply_rate, utilization_rate, RateParams,
};
pub use rounding::div_round;
