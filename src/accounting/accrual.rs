//! Interest accrual and lazy per-position settlement.
//!
//! Borrowed liquidity is diluted linearly at the annualized borrow rate.
//! The diluted liquidity is converted to collateral at the bound and
//! credited to a reward-per-position accumulator; each position settles
//! against that accumulator only when it is next reconciled.

use tracing::{debug, warn};

use crate::domain::{Fraction, Lendgine, LendgineInfo, LendginePosition, Price, TokenAmount};
use crate::math::{borrow_rate, RateParams};

/// Seconds in the 365-day year used to de-annualize rates.
pub const SECONDS_PER_YEAR: u64 = 86_400 * 365;

/// Result of one accrual step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualOutcome {
    /// The post-accrual snapshot.
    pub info: LendgineInfo,
    /// Borrowed liquidity removed by this step, in the lendgine token.
    pub dilution: TokenAmount,
    /// Collateral credited to lenders by this step, in `token1`.
    pub collateral: TokenAmount,
}

/// Converts lendgine-token liquidity into `token1` collateral at the bound
/// (`liquidity * bound * 2`).
#[must_use]
pub fn liquidity_to_collateral(lendgine: &Lendgine, liquidity: &TokenAmount) -> TokenAmount {
    let factor = lendgine.bound().to_fraction() * Fraction::from_integer(2u8);
    TokenAmount::from_fraction(lendgine.token1(), liquidity.raw() * &factor)
}

/// Advances `info` to `now` and reports what moved.
///
/// With no debt outstanding (`totalSupply == 0` or no borrowed liquidity)
/// the snapshot is returned untouched. Otherwise `last_update` becomes
/// `max(now, last_update)`; a `now` earlier than `last_update` accrues
/// nothing.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedDenomination`](crate::error::EngineError::MismatchedDenomination)
/// if `info` does not belong to `lendgine`.
pub fn accrue_detailed(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<AccrualOutcome> {
    info.validate(lendgine)?;
    let share = lendgine.lendgine_token();
    if info.total_supply.is_zero() || info.total_liquidity_borrowed.is_zero() {
        return Ok(AccrualOutcome {
            info: info.clone(),
            dilution: TokenAmount::zero(share),
            collateral: TokenAmount::zero(lendgine.token1()),
        });
    }

    let elapsed = match now.checked_sub(info.last_update) {
        Some(elapsed) => elapsed,
        None => {
            warn!(
                now,
                last_update = info.last_update,
                "accrual time moved backwards; clamping to zero"
            );
            0
        }
    };

    let rate = borrow_rate(info, params)?;
    let borrowed = &info.total_liquidity_borrowed;
    let year = Fraction::from(SECONDS_PER_YEAR);
    let year_fraction = Fraction::from_integer(elapsed).checked_div(&year)?;
    let requested = borrowed.multiply(&(rate.as_fraction() * &year_fraction));
    let clamped = requested.raw() > borrowed.raw();
    let dilution = requested.min_of(borrowed.clone())?;
    let collateral = liquidity_to_collateral(lendgine, &dilution);

    let mut reward = info.reward_per_position_stored.clone();
    if info.total_position_size.is_zero() {
        warn!(
            lendgine = %lendgine.address(),
            "debt outstanding with zero position size; accumulator unchanged"
        );
    } else {
        let increment = collateral
            .to_fraction()
            .checked_div(&info.total_position_size.to_fraction())?;
        let stored = reward.to_fraction() + increment;
        reward = Price::from_fraction(&stored, share, lendgine.token1());
    }

    debug!(
        lendgine = %lendgine.address(),
        elapsed,
        rate = %rate,
        dilution = %dilution.raw(),
        clamped,
        "accrued lendgine interest"
    );

    let next = LendgineInfo {
        total_liquidity_borrowed: borrowed.checked_sub(&dilution)?,
        reward_per_position_stored: reward,
        last_update: now.max(info.last_update),
        ..info.clone()
    };
    Ok(AccrualOutcome {
        info: next,
        dilution,
        collateral,
    })
}

/// Advances `info` to `now`, returning the post-accrual snapshot.
///
/// # Errors
///
/// Same as [`accrue_detailed`].
pub fn accrue(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<LendgineInfo> {
    accrue_detailed(lendgine, info, params, now).map(|outcome| outcome.info)
}

/// Settles `position` against an already accrued `info`.
///
/// The position absorbs `(stored - paid) * size` of collateral and its
/// paid snapshot moves to the current accumulator.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedDenomination`](crate::error::EngineError::MismatchedDenomination)
/// if the position and accumulator disagree on tokens.
pub fn reconcile_position(
    info: &LendgineInfo,
    position: &LendginePosition,
) -> crate::error::Result<LendginePosition> {
    let stored = &info.reward_per_position_stored;
    let earned = stored.quote(&position.size)?;
    let already_paid = position.reward_per_position_paid.quote(&position.size)?;
    let owed = earned.checked_sub(&already_paid)?;
    Ok(LendginePosition {
        tokens_owed: position.tokens_owed.checked_add(&owed)?,
        reward_per_position_paid: stored.clone(),
        ..position.clone()
    })
}

/// Collateral a position could collect at `now`: accrue, then reconcile.
///
/// # Errors
///
/// Propagates the errors of [`accrue`] and [`reconcile_position`].
pub fn estimated_tokens_owed(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    position: &LendginePosition,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<TokenAmount> {
    position.validate(lendgine)?;
    let accrued = accrue(lendgine, info, params, now)?;
    reconcile_position(&accrued, position).map(|settled| settled.tokens_owed)
}
