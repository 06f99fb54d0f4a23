//! Read-then-project helpers over a [`StateReader`]: lender positions on
//! the lendgine side, reserve valuation on the pair side.

use tracing::debug;

use super::accrual::{accrue, reconcile_position};
use crate::config::RateModel;
use crate::domain::{
    Lendgine, LendgineInfo, LendginePosition, Pair, PairInfo, Percent, Price, TokenAddress,
    TokenAmount,
};
use crate::math::{borrow_rate, price_per_lp, reserves_to_price, supply_rate};
use crate::traits::StateReader;

/// A lender's view of one lendgine, projected to the reader's `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Lendgine state accrued to `now`.
    pub info: LendgineInfo,
    /// The owner's position reconciled against `info`.
    pub position: LendginePosition,
    /// Borrow rate of the accrued state.
    pub borrow_rate: Percent,
    /// Supply rate of the accrued state.
    pub supply_rate: Percent,
}

/// A pair's reserves and the prices they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairValuation {
    /// Reserves and LP supply as read.
    pub info: PairInfo,
    /// Implied price of the speculative token (speculative → base).
    pub price: Price,
    /// Value of one LP unit (LP → base).
    pub price_per_lp: Price,
    /// Base-token value of the LP holding passed in.
    pub value: TokenAmount,
}

/// Reads lendgine state, the owner's position and `now` from `reader`,
/// accrues, and reconciles.
///
/// # Errors
///
/// Propagates reader errors and the errors of
/// [`accrue`](super::accrue) / [`reconcile_position`](super::reconcile_position).
pub fn position_snapshot<R>(
    reader: &R,
    lendgine: &Lendgine,
    owner: &TokenAddress,
    model: RateModel,
) -> crate::error::Result<PositionSnapshot>
where
    R: StateReader + ?Sized,
{
    let params = model.params();
    let now = reader.now();
    let raw_info = reader.lendgine_info(lendgine)?;
    let raw_position = reader.position(lendgine, owner)?;
    raw_position.validate(lendgine)?;

    let info = accrue(lendgine, &raw_info, &params, now)?;
    let position = reconcile_position(&info, &raw_position)?;
    debug!(
        lendgine = %lendgine.address(),
        %owner,
        now,
        owed = %position.tokens_owed.raw(),
        "projected lender position"
    );
    Ok(PositionSnapshot {
        borrow_rate: borrow_rate(&info, &params)?,
        supply_rate: supply_rate(&info, &params)?,
        info,
        position,
    })
}

/// Reads the reserves of `pair` from `reader` and values `liquidity` LP
/// units against them.
///
/// # Errors
///
/// - Propagates reader errors.
/// - [`EngineError::MismatchedDenomination`](crate::error::EngineError::MismatchedDenomination)
///   if the reserves do not match `pair` or `liquidity` is not in the LP
///   token.
/// - The errors of [`reserves_to_price`].
pub fn pair_valuation<R>(
    reader: &R,
    pair: &Pair,
    liquidity: &TokenAmount,
) -> crate::error::Result<PairValuation>
where
    R: StateReader + ?Sized,
{
    let info = reader.pair_info(pair)?;
    info.validate(pair)?;
    let price = reserves_to_price(&info, pair)?;
    let per_lp = price_per_lp(&info, pair)?;
    let value = per_lp.quote(liquidity)?;
    debug!(
        lp = %pair.lp_token().address(),
        price = %price,
        value = %value.raw(),
        "valued pair liquidity"
    );
    Ok(PairValuation {
        info,
        price,
        price_per_lp: per_lp,
        value,
    })
}
