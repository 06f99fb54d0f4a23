//! Utilization-based jump-rate interest model.
//!
//! Below the kink the borrow rate grows linearly with utilization; above
//! it, every additional unit of utilization is charged at the steeper jump
//! multiplier. The supply rate is the borrow rate weighted by utilization.
//!
//! Two utilization bases coexist and must not be conflated:
//!
//! | Function | Utilization |
//! |----------|-------------|
//! | [`utilization_rate`] | `borrowed / (liquidity + borrowed)` |
//! | [`available_utilization_rate`] | `borrowed / liquidity` |
//!
//! Accrual always uses the first; the second backs the pool-card rates
//! shown next to available liquidity.
//!
//! # Examples
//!
//! ```
//! use lendgine_engine::domain::{Fraction, Percent};
//! use lendgine_engine::math::{borrow_rate_at, RateParams};
//!
//! let pct = |n, d| Percent::new(Fraction::new(n, d).expect("non-zero"));
//! let params = RateParams::new(pct(8, 10), pct(1375, 1000), pct(445, 1000)).expect("valid");
//! assert_eq!(borrow_rate_at(&pct(8, 10), &params), pct(11, 10));
//! assert_eq!(borrow_rate_at(&pct(9, 10), &params), pct(11445, 10000));
//! ```

use crate::domain::{LendgineInfo, Percent};
use crate::error::EngineError;

/// Jump-rate parameters of one protocol variant.
///
/// # Invariants
///
/// - `kink` lies in `[0, 1]`.
/// - `multiplier` and `jump_multiplier` are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateParams {
    kink: Percent,
    multiplier: Percent,
    jump_multiplier: Percent,
}

impl RateParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if the kink is outside
    /// `[0, 1]` or either multiplier is negative.
    pub fn new(
        kink: Percent,
        multiplier: Percent,
        jump_multiplier: Percent,
    ) -> crate::error::Result<Self> {
        if kink.as_fraction().is_negative() || kink > Percent::literal(1, 1) {
            return Err(EngineError::InvalidConfiguration("kink must lie in [0, 1]"));
        }
        if multiplier.as_fraction().is_negative() || jump_multiplier.as_fraction().is_negative() {
            return Err(EngineError::InvalidConfiguration(
                "rate multipliers must be non-negative",
            ));
        }
        Ok(Self {
            kink,
            multiplier,
            jump_multiplier,
        })
    }

    /// Parameters for the `pmmp` deployment.
    #[must_use]
    pub fn pmmp() -> Self {
        Self {
            kink: Percent::literal(8, 10),
            multiplier: Percent::literal(1375, 1000),
            jump_multiplier: Percent::literal(89, 2),
        }
    }

    /// Parameters for the `stpmmp` deployment.
    #[must_use]
    pub fn stpmmp() -> Self {
        Self {
            kink: Percent::literal(8, 10),
            multiplier: Percent::literal(375, 10000),
            jump_multiplier: Percent::literal(45, 100),
        }
    }

    /// Parameters used by the pool-card rates on the available-liquidity
    /// utilization basis.
    #[must_use]
    pub fn legacy_pool() -> Self {
        Self {
            kink: Percent::literal(8, 10),
            multiplier: Percent::literal(1375, 100_000),
            jump_multiplier: Percent::literal(89, 200),
        }
    }

    /// Utilization above which the jump multiplier applies.
    #[must_use]
    pub const fn kink(&self) -> &Percent {
        &self.kink
    }

    /// Slope below the kink.
    #[must_use]
    pub const fn multiplier(&self) -> &Percent {
        &self.multiplier
    }

    /// Slope above the kink.
    #[must_use]
    pub const fn jump_multiplier(&self) -> &Percent {
        &self.jump_multiplier
    }
}

/// Annualized borrow rate at a given utilization.
#[must_use]
pub fn borrow_rate_at(utilization: &Percent, params: &RateParams) -> Percent {
    if utilization > &params.kink {
        let normal = params.kink.multiply(&params.multiplier);
        let excess = Percent::new(utilization.as_fraction() - params.kink.as_fraction());
        let jump = excess.multiply(&params.jump_multiplier);
        Percent::new(jump.into_fraction() + normal.into_fraction())
    } else {
        utilization.multiply(&params.multiplier)
    }
}

/// Returns `borrowed / (liquidity + borrowed)`, or zero when nothing is
/// supplied.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedDenomination`] if the liquidity fields
/// carry different tokens.
pub fn utilization_rate(info: &LendgineInfo) -> crate::error::Result<Percent> {
    let supplied = info.total_liquidity_supplied()?;
    if supplied.is_zero() {
        return Ok(Percent::zero());
    }
    info.total_liquidity_borrowed
        .ratio_to(&supplied)
        .map(Percent::new)
}

/// Annualized borrow rate of a lendgine on the supplied-liquidity basis.
///
/// # Errors
///
/// Propagates the errors of [`utilization_rate`].
pub fn borrow_rate(info: &LendgineInfo, params: &RateParams) -> crate::error::Result<Percent> {
    Ok(borrow_rate_at(&utilization_rate(info)?, params))
}

/// Annualized supply rate: `utilization * borrowRate`.
///
/// # Errors
///
/// Propagates the errors of [`utilization_rate`].
pub fn supply_rate(info: &LendgineInfo, params: &RateParams) -> crate::error::Result<Percent> {
    let utilization = utilization_rate(info)?;
    Ok(utilization.multiply(&borrow_rate_at(&utilization, params)))
}

/// Returns `borrowed / liquidity`, or zero when no liquidity is available.
///
/// # Errors
///
/// Returns [`EngineError::MismatchedDenomination`] if the liquidity fields
/// carry different tokens.
pub fn available_utilization_rate(info: &LendgineInfo) -> crate::error::Result<Percent> {
    if info.total_liquidity.is_zero() {
        return Ok(Percent::zero());
    }
    info.total_liquidity_borrowed
        .ratio_to(&info.total_liquidity)
        .map(Percent::new)
}

/// Borrow rate on the available-liquidity basis.
///
/// # Errors
///
/// Propagates the errors of [`available_utilization_rate`].
pub fn available_borrow_rate(
    info: &LendgineInfo,
    params: &RateParams,
) -> crate::error::Result<Percent> {
    Ok(borrow_rate_at(&available_utilization_rate(info)?, params))
}

/// Supply rate on the available-liquidity basis.
///
/// # Errors
///
/// Propagates the errors of [`available_utilization_rate`].
pub fn available_supply_rate(
    info: &LendgineInfo,
    params: &RateParams,
) -> crate::error::Result<Percent> {
    let utilization = available_utilization_rate(info)?;
    Ok(utilization.multiply(&borrow_rate_at(&utilization, params)))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{
        Decimals, Fraction, Lendgine, LendgineInfo, Price, Token, TokenAddress, TokenAmount,
    };

    fn tok(addr_byte: u8) -> Token {
        Token::new(1, TokenAddress::from_bytes([addr_byte; 20]), Decimals::MAX)
    }

    fn lendgine() -> Lendgine {
        let bound = Price::from_fraction(&Fraction::from_integer(3), tok(1), tok(2));
        let Ok(l) = Lendgine::new(tok(1), tok(2), tok(3), bound) else {
            panic!("valid lendgine");
        };
        l
    }

    fn info(liquidity: u64, borrowed: u64) -> LendgineInfo {
        let l = lendgine();
        LendgineInfo {
            total_liquidity: TokenAmount::from_raw(tok(3), liquidity),
            total_liquidity_borrowed: TokenAmount::from_raw(tok(3), borrowed),
            ..LendgineInfo::empty(&l)
        }
    }

    fn example_params() -> RateParams {
        let Ok(p) = RateParams::new(
            Percent::literal(8, 10),
            Percent::literal(1375, 1000),
            Percent::literal(445, 1000),
        ) else {
            panic!("valid params");
        };
        p
    }

    // -- Parameter validation -----------------------------------------------

    #[test]
    fn kink_above_one_rejected() {
        let result = RateParams::new(
            Percent::literal(11, 10),
            Percent::literal(1, 1),
            Percent::literal(1, 1),
        );
        assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
    }

    #[test]
    fn named_variants() {
        let jump = RateParams::pmmp().jump_multiplier().clone();
        assert_eq!(jump, Percent::literal(89, 2));
        assert_eq!(RateParams::stpmmp().multiplier(), &Percent::literal(3, 80));
        assert_eq!(RateParams::legacy_pool().kink(), &Percent::literal(4, 5));
    }

    // -- Borrow rate curve --------------------------------------------------

    #[test]
    fn rate_at_kink_is_linear() {
        let rate = borrow_rate_at(&Percent::literal(8, 10), &example_params());
        assert_eq!(rate, Percent::literal(11, 10));
    }

    #[test]
    fn rate_above_kink_jumps() {
        let rate = borrow_rate_at(&Percent::literal(9, 10), &example_params());
        assert_eq!(rate, Percent::literal(11445, 10000));
    }

    #[test]
    fn rate_zero_utilization() {
        let rate = borrow_rate_at(&Percent::zero(), &RateParams::pmmp());
        assert_eq!(rate, Percent::zero());
    }

    // -- Supplied-liquidity basis -------------------------------------------

    #[test]
    fn utilization_includes_borrowed_in_denominator() {
        assert_eq!(utilization_rate(&info(1, 4)), Ok(Percent::literal(4, 5)));
    }

    #[test]
    fn utilization_zero_supply() {
        assert_eq!(utilization_rate(&info(0, 0)), Ok(Percent::zero()));
        let (empty, params) = (info(0, 0), RateParams::pmmp());
        assert_eq!(borrow_rate(&empty, &params), Ok(Percent::zero()));
        assert_eq!(supply_rate(&empty, &params), Ok(Percent::zero()));
    }

    #[test]
    fn supply_rate_weights_borrow_rate() {
        // utilization 0.8, borrow 1.1, supply 0.88
        let Ok(rate) = supply_rate(&info(1, 4), &example_params()) else {
            panic!("expected Ok");
        };
        assert_eq!(rate, Percent::literal(88, 100));
    }

    // -- Available-liquidity basis ------------------------------------------

    #[test]
    fn available_utilization_excludes_borrowed() {
        let available = available_utilization_rate(&info(5, 4));
        assert_eq!(available, Ok(Percent::literal(4, 5)));
        assert_eq!(utilization_rate(&info(5, 4)), Ok(Percent::literal(4, 9)));
    }

    #[test]
    fn available_zero_liquidity() {
        // Fully borrowed: the available basis is undefined and reported as zero.
        assert_eq!(available_utilization_rate(&info(0, 4)), Ok(Percent::zero()));
        assert_eq!(
            available_borrow_rate(&info(0, 4), &RateParams::legacy_pool()),
            Ok(Percent::zero())
        );
        assert_eq!(
            available_supply_rate(&info(0, 4), &RateParams::legacy_pool()),
            Ok(Percent::zero())
        );
    }

    #[test]
    fn available_rates_use_legacy_constants() {
        // utilization 1/2: borrow = 1/2 * 0.01375
        let params = RateParams::legacy_pool();
        let Ok(borrow) = available_borrow_rate(&info(2, 1), &params) else {
            panic!("expected Ok");
        };
        assert_eq!(borrow, Percent::literal(1375, 200_000));
        let Ok(supply) = available_supply_rate(&info(2, 1), &params) else {
            panic!("expected Ok");
        };
        assert_eq!(supply, Percent::literal(1375, 400_000));
    }
}
