//! Price/reserve curve of a bound market.
//!
//! A position of `L` liquidity units at price `p` (below the bound `b`)
//! occupies exactly
//!
//! ```text
//! base        = L * p²
//! speculative = L * 2 * (b - p)
//! ```
//!
//! and the implied marginal price of a reserve snapshot is recovered as
//! `p = b - (speculative / L) / 2`. Both directions are computed in
//! decimal-adjusted units, so [`reserves_to_price`] and
//! [`price_to_reserves`] are exact mutual inverses.

use crate::domain::{Fraction, Lendgine, LendgineInfo, Pair, PairInfo, Price, TokenAmount};
use crate::error::EngineError;

fn two() -> Fraction {
    Fraction::from_integer(2u8)
}

/// Returns the implied marginal price of `pair` (speculative → base).
///
/// An empty pool (`totalLPSupply == 0`) yields price zero.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `info` does not belong to
///   `pair`.
/// - [`EngineError::PreconditionViolation`] if the speculative reserve per
///   LP unit exceeds twice the bound, which no point on the curve can hold.
pub fn reserves_to_price(info: &PairInfo, pair: &Pair) -> crate::error::Result<Price> {
    info.validate(pair)?;
    let (base, speculative) = (pair.base_token(), pair.speculative_token());
    if info.total_lp_supply.is_zero() {
        return Ok(Price::zero(speculative, base));
    }
    let scale1 = info
        .speculative_amount
        .to_fraction()
        .checked_div(&info.total_lp_supply.to_fraction())?;
    let half = scale1.checked_div(&two())?;
    let price = pair.bound().to_fraction() - half;
    if price.is_negative() {
        return Err(EngineError::PreconditionViolation(
            "speculative reserve exceeds the curve at zero price",
        ));
    }
    Ok(Price::from_fraction(&price, speculative, base))
}

/// Returns the `(base, speculative)` reserves occupied by `liquidity` LP
/// units at `price`.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `price` is not quoted from
///   speculative to base, or `liquidity` is not in the LP token.
/// - [`EngineError::PreconditionViolation`] if `price` is negative or above
///   the bound.
pub fn price_to_reserves(
    price: &Price,
    liquidity: &TokenAmount,
    pair: &Pair,
) -> crate::error::Result<(TokenAmount, TokenAmount)> {
    if !price.same_denominations(pair.bound()) || liquidity.token() != pair.lp_token() {
        return Err(EngineError::MismatchedDenomination);
    }
    if price.raw().is_negative() {
        return Err(EngineError::PreconditionViolation(
            "price must be non-negative",
        ));
    }
    if price.compare(pair.bound())?.is_gt() {
        return Err(EngineError::PreconditionViolation("price above bound"));
    }
    let p = price.to_fraction();
    let scale0 = &p * &p;
    let scale1 = (pair.bound().to_fraction() - &p) * two();
    let units = liquidity.to_fraction();
    Ok((
        TokenAmount::from_units(pair.base_token(), &(&units * &scale0)),
        TokenAmount::from_units(pair.speculative_token(), &(units * scale1)),
    ))
}

/// Returns the value of one LP unit in the base token (LP → base).
///
/// Zero when the pool is empty or its implied price is zero.
///
/// # Errors
///
/// Propagates the errors of [`reserves_to_price`].
pub fn price_per_lp(info: &PairInfo, pair: &Pair) -> crate::error::Result<Price> {
    let price = reserves_to_price(info, pair)?;
    let (lp, base) = (pair.lp_token(), pair.base_token());
    if price.is_zero() {
        return Ok(Price::zero(lp, base));
    }
    let supply = info.total_lp_supply.to_fraction();
    let scale0 = info.base_amount.to_fraction().checked_div(&supply)?;
    let speculative = info.speculative_amount.to_fraction();
    let scale1 = speculative.checked_div(&supply)?;
    let value = scale0 + scale1 * price.to_fraction();
    Ok(Price::from_fraction(&value, lp, base))
}

/// Returns the base-token value of `total_liquidity` LP units.
///
/// # Errors
///
/// - Propagates the errors of [`price_per_lp`].
/// - [`EngineError::MismatchedDenomination`] if `total_liquidity` is not in
///   the LP token.
pub fn total_value(
    info: &PairInfo,
    pair: &Pair,
    total_liquidity: &TokenAmount,
) -> crate::error::Result<TokenAmount> {
    price_per_lp(info, pair)?.quote(total_liquidity)
}

/// Sizes the other side of a two-sided deposit at `price`.
///
/// Given an amount of either pair token, returns the amount of the other
/// token that keeps the deposit on the curve: base → speculative scales by
/// `2 (b - p) / p²`, speculative → base by its reciprocal.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `price` is not quoted from
///   speculative to base or `amount` is in neither pair token.
/// - [`EngineError::DivisionByZero`] if the ratio is undefined at `price`
///   (zero price, or price at the bound when sizing from speculative).
pub fn paired_deposit_amount(
    amount: &TokenAmount,
    price: &Price,
    pair: &Pair,
) -> crate::error::Result<TokenAmount> {
    if !price.same_denominations(pair.bound()) {
        return Err(EngineError::MismatchedDenomination);
    }
    let p = price.to_fraction();
    let spread = (pair.bound().to_fraction() - &p) * two();
    let speculative_per_base = spread.checked_div(&(&p * &p))?;
    let units = amount.to_fraction();
    if amount.token() == pair.base_token() {
        let speculative = units * speculative_per_base;
        Ok(TokenAmount::from_units(
            pair.speculative_token(),
            &speculative,
        ))
    } else if amount.token() == pair.speculative_token() {
        let base = units.checked_div(&speculative_per_base)?;
        Ok(TokenAmount::from_units(pair.base_token(), &base))
    } else {
        Err(EngineError::MismatchedDenomination)
    }
}

/// Returns the lendgine's implied price in bound orientation
/// (`token0 → token1`): `bound - (reserve1 / totalLiquidity) / 2`.
///
/// Zero when the lendgine holds no liquidity.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedDenomination`] if `info` does not
/// belong to `lendgine`.
pub fn lendgine_price(lendgine: &Lendgine, info: &LendgineInfo) -> crate::error::Result<Price> {
    info.validate(lendgine)?;
    let (token0, token1) = (lendgine.token0(), lendgine.token1());
    if info.total_liquidity.is_zero() {
        return Ok(Price::zero(token0, token1));
    }
    let scale1 = info
        .reserve1
        .to_fraction()
        .checked_div(&info.total_liquidity.to_fraction())?;
    let price = lendgine.bound().to_fraction() - scale1.checked_div(&two())?;
    Ok(Price::from_fraction(&price, token0, token1))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, Token, TokenAddress};

    fn tok(addr_byte: u8, dec: u8) -> Token {
        let Ok(d) = Decimals::new(dec) else {
            panic!("invalid decimals in test: {dec}");
        };
        Token::new(1, TokenAddress::from_bytes([addr_byte; 20]), d)
    }

    fn frac(n: i64, d: i64) -> Fraction {
        let Ok(f) = Fraction::new(n, d) else {
            panic!("valid fraction");
        };
        f
    }

    /// base 6 decimals, speculative 18, LP 18, bound 5.
    fn pair() -> Pair {
        let (base, spec, lp) = (tok(1, 6), tok(2, 18), tok(3, 18));
        let bound = Price::from_fraction(&Fraction::from_integer(5), spec, base);
        let Ok(p) = Pair::new(base, spec, lp, bound) else {
            panic!("valid pair");
        };
        p
    }

    fn units(token: Token, n: i64) -> TokenAmount {
        TokenAmount::from_units(token, &Fraction::from_integer(n))
    }

    fn spec_price(pair: &Pair, n: i64, d: i64) -> Price {
        Price::from_fraction(&frac(n, d), pair.speculative_token(), pair.base_token())
    }

    fn info_for(pair: &Pair, price: &Price, lp_units: i64) -> PairInfo {
        let liquidity = units(pair.lp_token(), lp_units);
        let Ok((base_amount, speculative_amount)) = price_to_reserves(price, &liquidity, pair)
        else {
            panic!("price within bound");
        };
        PairInfo {
            base_amount,
            speculative_amount,
            total_lp_supply: liquidity,
        }
    }

    // -- reserves_to_price --------------------------------------------------

    #[test]
    fn empty_pool_has_zero_price() {
        let pair = pair();
        let info = PairInfo {
            base_amount: TokenAmount::zero(pair.base_token()),
            speculative_amount: TokenAmount::zero(pair.speculative_token()),
            total_lp_supply: TokenAmount::zero(pair.lp_token()),
        };
        let Ok(price) = reserves_to_price(&info, &pair) else {
            panic!("expected Ok");
        };
        assert!(price.is_zero());
        assert_eq!(price.base_token(), pair.speculative_token());
    }

    #[test]
    fn reserves_to_price_formula() {
        let pair = pair();
        // scale1 = 6 / 2 = 3, price = 5 - 3/2 = 7/2
        let info = PairInfo {
            base_amount: TokenAmount::zero(pair.base_token()),
            speculative_amount: units(pair.speculative_token(), 6),
            total_lp_supply: units(pair.lp_token(), 2),
        };
        let Ok(price) = reserves_to_price(&info, &pair) else {
            panic!("expected Ok");
        };
        assert_eq!(price.to_fraction(), frac(7, 2));
    }

    #[test]
    fn reserves_beyond_curve_rejected() {
        let pair = pair();
        let info = PairInfo {
            base_amount: TokenAmount::zero(pair.base_token()),
            speculative_amount: units(pair.speculative_token(), 11),
            total_lp_supply: units(pair.lp_token(), 1),
        };
        assert!(matches!(
            reserves_to_price(&info, &pair),
            Err(EngineError::PreconditionViolation(_))
        ));
    }

    // -- price_to_reserves --------------------------------------------------

    #[test]
    fn price_to_reserves_formula() {
        let pair = pair();
        let price = spec_price(&pair, 2, 1);
        let info = info_for(&pair, &price, 3);
        // base = 3 * 4 = 12, speculative = 3 * 2 * (5 - 2) = 18
        assert_eq!(info.base_amount.to_fraction(), Fraction::from_integer(12));
        let speculative = info.speculative_amount.to_fraction();
        assert_eq!(speculative, Fraction::from_integer(18));
        assert_eq!(info.base_amount.raw(), &Fraction::from_integer(12_000_000));
    }

    #[test]
    fn round_trip() {
        let pair = pair();
        let price = spec_price(&pair, 13, 7);
        let info = info_for(&pair, &price, 42);
        assert_eq!(reserves_to_price(&info, &pair), Ok(price));
    }

    #[test]
    fn price_above_bound_rejected() {
        let pair = pair();
        let liquidity = TokenAmount::from_raw(pair.lp_token(), 1);
        let result = price_to_reserves(&spec_price(&pair, 6, 1), &liquidity, &pair);
        assert!(matches!(result, Err(EngineError::PreconditionViolation(_))));
    }

    #[test]
    fn price_wrong_orientation_rejected() {
        let pair = pair();
        let Ok(inverted) = spec_price(&pair, 2, 1).invert() else {
            panic!("non-zero price");
        };
        let liquidity = TokenAmount::from_raw(pair.lp_token(), 1);
        assert_eq!(
            price_to_reserves(&inverted, &liquidity, &pair),
            Err(EngineError::MismatchedDenomination)
        );
    }

    // -- price_per_lp / total_value -----------------------------------------

    #[test]
    fn price_per_lp_formula() {
        let pair = pair();
        let price = spec_price(&pair, 2, 1);
        let info = info_for(&pair, &price, 3);
        // scale0 = 4, scale1 = 6, value = 4 + 6 * 2 = 16
        let Ok(per_lp) = price_per_lp(&info, &pair) else {
            panic!("expected Ok");
        };
        assert_eq!(per_lp.base_token(), pair.lp_token());
        assert_eq!(per_lp.to_fraction(), Fraction::from_integer(16));

        let held = TokenAmount::from_units(pair.lp_token(), &frac(1, 2));
        let Ok(value) = total_value(&info, &pair, &held) else {
            panic!("expected Ok");
        };
        assert_eq!(value.token(), pair.base_token());
        assert_eq!(value.to_fraction(), Fraction::from_integer(8));
    }

    #[test]
    fn price_per_lp_zero_supply() {
        let pair = pair();
        let info = PairInfo {
            base_amount: TokenAmount::zero(pair.base_token()),
            speculative_amount: TokenAmount::zero(pair.speculative_token()),
            total_lp_supply: TokenAmount::zero(pair.lp_token()),
        };
        let Ok(per_lp) = price_per_lp(&info, &pair) else {
            panic!("expected Ok");
        };
        assert!(per_lp.is_zero());
        assert_eq!(per_lp.base_token(), pair.lp_token());
    }

    // -- paired_deposit_amount ----------------------------------------------

    #[test]
    fn paired_deposit_both_directions() {
        let pair = pair();
        let price = spec_price(&pair, 2, 1);
        // ratio = 2 * (5 - 2) / 4 = 3/2 speculative per base
        let base_in = TokenAmount::from_units(pair.base_token(), &Fraction::from_integer(4));
        let Ok(spec_out) = paired_deposit_amount(&base_in, &price, &pair) else {
            panic!("expected Ok");
        };
        assert_eq!(spec_out.to_fraction(), Fraction::from_integer(6));

        let Ok(base_back) = paired_deposit_amount(&spec_out, &price, &pair) else {
            panic!("expected Ok");
        };
        assert_eq!(base_back, base_in);
    }

    #[test]
    fn paired_deposit_at_bound_from_speculative() {
        let pair = pair();
        let at_bound = spec_price(&pair, 5, 1);
        let spec_in = TokenAmount::from_units(pair.speculative_token(), &Fraction::one());
        assert_eq!(
            paired_deposit_amount(&spec_in, &at_bound, &pair),
            Err(EngineError::DivisionByZero)
        );
    }

    #[test]
    fn paired_deposit_foreign_token() {
        let pair = pair();
        let lp_in = TokenAmount::from_raw(pair.lp_token(), 1);
        assert_eq!(
            paired_deposit_amount(&lp_in, &spec_price(&pair, 2, 1), &pair),
            Err(EngineError::MismatchedDenomination)
        );
    }

    // -- lendgine_price -----------------------------------------------------

    #[test]
    fn lendgine_price_formula() {
        let (t0, t1, share) = (tok(1, 18), tok(2, 18), tok(3, 18));
        let bound = Price::from_fraction(&Fraction::from_integer(5), t0, t1);
        let Ok(lendgine) = Lendgine::new(t0, t1, share, bound) else {
            panic!("valid lendgine");
        };
        let empty = LendgineInfo::empty(&lendgine);
        let Ok(zero) = lendgine_price(&lendgine, &empty) else {
            panic!("expected Ok");
        };
        assert!(zero.is_zero());

        let info = LendgineInfo {
            total_liquidity: TokenAmount::from_units(share, &Fraction::from_integer(2)),
            reserve1: TokenAmount::from_units(t1, &Fraction::from_integer(8)),
            ..empty
        };
        // 5 - (8 / 2) / 2 = 3
        let Ok(price) = lendgine_price(&lendgine, &info) else {
            panic!("expected Ok");
        };
        assert_eq!(price.to_fraction(), Fraction::from_integer(3));
    }
}
