//! Pure estimators for sizing lender and borrower actions.
//!
//! Each estimator accrues the snapshot to `now` first, so its result
//! matches what the protocol settles at that time. Degenerate states with
//! a zero denominator return a defined value instead of an error: the
//! first deposit is sized 1:1, the first mint 1:1, and withdrawing or
//! burning against an empty side yields zero.

use super::accrual::{accrue, liquidity_to_collateral};
use crate::domain::{Fraction, Lendgine, LendgineInfo, Token, TokenAmount};
use crate::error::EngineError;
use crate::math::RateParams;

/// Position size minted for a liquidity deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositEstimate {
    /// Position size, in the lendgine token.
    pub size: TokenAmount,
}

/// Liquidity released by withdrawing a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawEstimate {
    /// Liquidity, in the lendgine token.
    pub liquidity: TokenAmount,
}

/// Liquidity borrowed and debt balance issued for a collateral deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintEstimate {
    /// Liquidity borrowed, in the lendgine token.
    pub liquidity: TokenAmount,
    /// Debt-token balance issued, in the lendgine token.
    pub balance: TokenAmount,
}

/// Liquidity repaid and collateral released by burning a debt balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnEstimate {
    /// Liquidity repaid, in the lendgine token.
    pub liquidity: TokenAmount,
    /// Collateral released, in `token1`.
    pub collateral: TokenAmount,
}

/// Reserves released by burning liquidity back into the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairBurnEstimate {
    /// `token0` released.
    pub amount0: TokenAmount,
    /// `token1` released.
    pub amount1: TokenAmount,
}

fn expect_token(amount: &TokenAmount, expected: Token) -> crate::error::Result<()> {
    if amount.token() != expected {
        return Err(EngineError::MismatchedDenomination);
    }
    Ok(())
}

/// `amount * numerator / denominator`, keeping `amount`'s token.
fn pro_rata(
    amount: &TokenAmount,
    numerator: &TokenAmount,
    denominator: &TokenAmount,
) -> crate::error::Result<TokenAmount> {
    Ok(amount.multiply(&numerator.ratio_to(denominator)?))
}

/// Estimates the position size a deposit of `liquidity` receives.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `liquidity` is not in the
///   lendgine token or `info` does not belong to `lendgine`.
pub fn estimate_deposit(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    liquidity: &TokenAmount,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<DepositEstimate> {
    expect_token(liquidity, lendgine.lendgine_token())?;
    let accrued = accrue(lendgine, info, params, now)?;
    let supplied = accrued.total_liquidity_supplied()?;
    if supplied.is_zero() {
        return Ok(DepositEstimate {
            size: liquidity.clone(),
        });
    }
    Ok(DepositEstimate {
        size: pro_rata(liquidity, &accrued.total_position_size, &supplied)?,
    })
}

/// Estimates the liquidity a position of `size` withdraws.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `size` is not in the
///   lendgine token or `info` does not belong to `lendgine`.
pub fn estimate_withdraw(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    size: &TokenAmount,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<WithdrawEstimate> {
    expect_token(size, lendgine.lendgine_token())?;
    let accrued = accrue(lendgine, info, params, now)?;
    if accrued.total_position_size.is_zero() {
        return Ok(WithdrawEstimate {
            liquidity: TokenAmount::zero(lendgine.lendgine_token()),
        });
    }
    let supplied = accrued.total_liquidity_supplied()?;
    Ok(WithdrawEstimate {
        liquidity: pro_rata(size, &supplied, &accrued.total_position_size)?,
    })
}

/// Estimates the liquidity borrowed and balance issued for `collateral`.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `collateral` is not in
///   `token1` or `info` does not belong to `lendgine`.
pub fn estimate_mint(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    collateral: &TokenAmount,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<MintEstimate> {
    expect_token(collateral, lendgine.token1())?;
    let per_liquidity = lendgine.bound().to_fraction() * Fraction::from_integer(2u8);
    let liquidity = TokenAmount::from_fraction(
        lendgine.lendgine_token(),
        collateral.raw().checked_div(&per_liquidity)?,
    );

    let accrued = accrue(lendgine, info, params, now)?;
    if accrued.total_liquidity_borrowed.is_zero() {
        return Ok(MintEstimate {
            balance: liquidity.clone(),
            liquidity,
        });
    }
    let borrowed = &accrued.total_liquidity_borrowed;
    let balance = pro_rata(&liquidity, &accrued.total_supply, borrowed)?;
    Ok(MintEstimate { liquidity, balance })
}

/// Estimates the liquidity repaid and collateral released by burning
/// `balance`.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `balance` is not in the
///   lendgine token or `info` does not belong to `lendgine`.
pub fn estimate_burn(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    balance: &TokenAmount,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<BurnEstimate> {
    expect_token(balance, lendgine.lendgine_token())?;
    let accrued = accrue(lendgine, info, params, now)?;
    if accrued.total_supply.is_zero() {
        return Ok(BurnEstimate {
            liquidity: TokenAmount::zero(lendgine.lendgine_token()),
            collateral: TokenAmount::zero(lendgine.token1()),
        });
    }
    let borrowed = &accrued.total_liquidity_borrowed;
    let liquidity = pro_rata(balance, borrowed, &accrued.total_supply)?;
    let collateral = liquidity_to_collateral(lendgine, &liquidity);
    Ok(BurnEstimate {
        liquidity,
        collateral,
    })
}

/// Estimates the reserves released by burning `liquidity` into the pair.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `liquidity` is not in the
///   lendgine token or `info` does not belong to `lendgine`.
pub fn estimate_pair_burn(
    lendgine: &Lendgine,
    info: &LendgineInfo,
    liquidity: &TokenAmount,
    params: &RateParams,
    now: u64,
) -> crate::error::Result<PairBurnEstimate> {
    expect_token(liquidity, lendgine.lendgine_token())?;
    let accrued = accrue(lendgine, info, params, now)?;
    if accrued.total_liquidity.is_zero() {
        return Ok(PairBurnEstimate {
            amount0: TokenAmount::zero(lendgine.token0()),
            amount1: TokenAmount::zero(lendgine.token1()),
        });
    }
    let share = liquidity.ratio_to(&accrued.total_liquidity)?;
    Ok(PairBurnEstimate {
        amount0: accrued.reserve0.multiply(&share),
        amount1: accrued.reserve1.multiply(&share),
    })
}
