//! Accrual and position accounting.
//!
//! [`accrue`] advances a lendgine's global state by elapsed time,
//! diluting borrowed liquidity into a reward-per-position accumulator.
//! [`reconcile_position`] lazily settles one position against that
//! accumulator, so an accrual never touches individual positions. The
//! estimators size deposits, withdrawals, mints and burns against an
//! accrued snapshot.

mod accrual;
mod estimates;
mod snapshot;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use accrual::{
    accrue, accrue_detailed, estimated_tokens_owed, liquidity_to_collateral, reconcile_position,
    AccrualOutcome, SECONDS_PER_YEAR,
};
pub use estimates::{
    estimate_burn, estimate_deposit, estimate_mint, estimate_pair_burn, estimate_withdraw,
    BurnEstimate, DepositEstimate, MintEstimate, PairBurnEstimate, WithdrawEstimate,
};
pub use snapshot::{pair_valuation, position_snapshot, PairValuation, PositionSnapshot};
