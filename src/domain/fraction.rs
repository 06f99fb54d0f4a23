//! Exact rational number.

use core::fmt;
use core::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, One, Signed, Zero};

use super::Rounding;
use crate::error::EngineError;
use crate::math::div_round;

/// An exact, arbitrary-precision rational number.
///
/// Every value in the engine (amounts, prices, rates, accumulators) is
/// built on `Fraction`, so no operation ever introduces floating-point
/// rounding. The value is always kept in lowest terms with a positive
/// denominator, which makes equality and hashing structural.
///
/// Addition, subtraction and multiplication are infallible and exposed
/// through the standard operators. Division is only available through
/// [`checked_div`](Self::checked_div) so that a zero divisor surfaces as
/// [`EngineError::DivisionByZero`] instead of a panic.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::Fraction;
///
/// let a = Fraction::new(1, 3).expect("non-zero denominator");
/// let b = Fraction::new(1, 6).expect("non-zero denominator");
/// assert_eq!(&a + &b, Fraction::new(1, 2).expect("non-zero denominator"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Creates `numerator / denominator`, reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> crate::error::Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(EngineError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// Builds a fraction from machine-integer literals.
    ///
    /// Only used for compile-time-known constants whose denominator is
    /// never zero; a zero denominator yields zero.
    pub(crate) fn literal(numerator: u64, denominator: u64) -> Self {
        debug_assert!(denominator != 0, "literal fraction with zero denominator");
        if denominator == 0 {
            return Self::zero();
        }
        let (numerator, denominator) = (BigInt::from(numerator), BigInt::from(denominator));
        Self(BigRational::new(numerator, denominator))
    }

    /// Lifts an integer into a fraction with denominator one.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Returns `10^exponent`.
    #[must_use]
    pub fn pow10(exponent: u8) -> Self {
        Self::from_integer(pow(BigInt::from(10u8), usize::from(exponent)))
    }

    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Parses a non-negative decimal literal such as `"1.005"` or `".5"`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuantity`] if the text is empty,
    /// signed, or contains anything other than digits and a single `.`.
    pub fn from_decimal_str(value: &str) -> crate::error::Result<Self> {
        let (digits, scale) = parse_decimal(value)?;
        let scale = u8::try_from(scale)
            .map_err(|_| EngineError::InvalidQuantity("too many fractional digits"))?;
        let inverse = Self::pow10(scale).invert()?;
        Ok(Self::from_integer(digits) * inverse)
    }

    /// Returns the numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Returns the (always positive) denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> crate::error::Result<Self> {
        if divisor.is_zero() {
            return Err(EngineError::DivisionByZero);
        }
        Ok(Self(&self.0 / &divisor.0))
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if the value is zero.
    pub fn invert(&self) -> crate::error::Result<Self> {
        if self.is_zero() {
            return Err(EngineError::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Returns the smaller of two fractions, preferring `self` on ties.
    #[must_use]
    pub fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Rounds to an integer in the given direction.
    ///
    /// [`Rounding::Down`] truncates toward zero, [`Rounding::Up`] rounds
    /// toward positive infinity.
    #[must_use]
    pub fn to_integer(&self, rounding: Rounding) -> BigInt {
        // The denominator is positive by construction.
        div_round(self.0.numer(), self.0.denom(), rounding).unwrap_or_else(|| self.0.to_integer())
    }

    /// Formats the value with exactly `digits` fractional digits,
    /// rounding half away from zero.
    #[must_use]
    pub fn to_fixed(&self, digits: u8) -> String {
        let scale = pow(BigInt::from(10u8), usize::from(digits));
        let half = BigRational::new(BigInt::one(), BigInt::from(2u8));
        let magnitude = self.0.abs() * BigRational::from_integer(scale.clone()) + half;
        let scaled = magnitude.floor().to_integer();

        let whole = &scaled / &scale;
        let frac = &scaled % &scale;
        let sign = if self.is_negative() && !scaled.is_zero() {
            "-"
        } else {
            ""
        };
        if digits == 0 {
            return format!("{sign}{whole}");
        }
        format!(
            "{sign}{whole}.{frac:0>width$}",
            width = usize::from(digits)
        )
    }
}

/// Splits a decimal literal into its digit string (as an integer) and
/// the number of fractional digits.
pub(crate) fn parse_decimal(value: &str) -> crate::error::Result<(BigInt, usize)> {
    let value = value.trim();
    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(EngineError::InvalidQuantity("empty decimal literal"));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(frac) {
        return Err(EngineError::InvalidQuantity(
            "decimal literal must be digits",
        ));
    }
    let joined = format!("{whole}{frac}");
    let digits = joined
        .parse::<BigInt>()
        .map_err(|_| EngineError::InvalidQuantity("decimal literal must be digits"))?;
    Ok((digits, frac.len()))
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.denom().is_one() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                Fraction(self.0.$method(rhs.0))
            }
        }

        impl<'a> $trait<&'a Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &'a Fraction) -> Fraction {
                Fraction(self.0.$method(&rhs.0))
            }
        }

        impl<'a, 'b> $trait<&'b Fraction> for &'a Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &'b Fraction) -> Fraction {
                Fraction((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
