//! Token-denominated exact quantity.

use core::fmt;

use num_bigint::BigInt;

use super::fraction::parse_decimal;
use super::{Fraction, Rounding, Token};
use crate::error::EngineError;

/// An exact quantity of a single [`Token`], measured in raw units.
///
/// The raw magnitude is a [`Fraction`], not an integer: intermediate
/// results such as "dilution so far" are fractional until a caller settles
/// them with [`to_raw_integer`](Self::to_raw_integer).
///
/// Arithmetic between two amounts is only defined when both carry the
/// same token; mixing denominations returns
/// [`EngineError::MismatchedDenomination`]. Crossing denominations goes
/// through a [`Price`](super::Price).
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::{Decimals, Token, TokenAddress, TokenAmount};
///
/// let usdc = Token::new(1, TokenAddress::from_bytes([1u8; 20]), Decimals::new(6).expect("valid"));
/// let a = TokenAmount::from_raw(usdc, 1_500_000u64);
/// let b = TokenAmount::from_raw(usdc, 500_000u64);
///
/// let sum = a.checked_add(&b).expect("same token");
/// assert_eq!(sum.to_fixed(2), "2.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    token: Token,
    raw: Fraction,
}

impl TokenAmount {
    /// Creates an amount from an integer number of raw units.
    #[must_use]
    pub fn from_raw(token: Token, raw: impl Into<BigInt>) -> Self {
        Self {
            token,
            raw: Fraction::from_integer(raw),
        }
    }

    /// Creates an amount from a possibly fractional number of raw units.
    #[must_use]
    pub const fn from_fraction(token: Token, raw: Fraction) -> Self {
        Self { token, raw }
    }

    /// Creates an amount from a quantity in whole-token units.
    #[must_use]
    pub fn from_units(token: Token, units: &Fraction) -> Self {
        let raw = units * &Fraction::pow10(token.decimals().get());
        Self { token, raw }
    }

    /// The zero amount of `token`.
    #[must_use]
    pub fn zero(token: Token) -> Self {
        Self {
            token,
            raw: Fraction::zero(),
        }
    }

    /// Parses a human-readable decimal string such as `"1.25"` into an
    /// amount of `token`.
    ///
    /// Returns `None` for empty or malformed text, for a value of zero,
    /// and when the text has more fractional digits than the token
    /// supports.
    #[must_use]
    pub fn parse(value: &str, token: Token) -> Option<Self> {
        let (digits, scale) = match parse_decimal(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(%err, value, "failed to parse token amount");
                return None;
            }
        };
        let decimals = usize::from(token.decimals().get());
        if scale > decimals {
            tracing::debug!(value, decimals, "token amount has too many decimal places");
            return None;
        }
        let Ok(shift) = u8::try_from(decimals - scale) else {
            return None;
        };
        let raw = Fraction::from_integer(digits) * Fraction::pow10(shift);
        if raw.is_zero() {
            return None;
        }
        Some(Self { token, raw })
    }

    /// Returns the token this amount is denominated in.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the raw-unit magnitude.
    #[must_use]
    pub const fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// Returns the magnitude in whole-token units (`raw / 10^decimals`).
    #[must_use]
    pub fn to_fraction(&self) -> Fraction {
        // pow10 is never zero, so inversion cannot fail.
        match Fraction::pow10(self.token.decimals().get()).invert() {
            Ok(inv) => &self.raw * &inv,
            Err(_) => self.raw.clone(),
        }
    }

    /// Returns `true` if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    fn ensure_same_token(&self, other: &Self) -> crate::error::Result<()> {
        if self.token != other.token {
            return Err(EngineError::MismatchedDenomination);
        }
        Ok(())
    }

    /// Adds two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] if the tokens differ.
    pub fn checked_add(&self, other: &Self) -> crate::error::Result<Self> {
        self.ensure_same_token(other)?;
        Ok(Self {
            token: self.token,
            raw: &self.raw + &other.raw,
        })
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MismatchedDenomination`] if the tokens differ.
    /// - [`EngineError::Underflow`] if the result would be negative.
    pub fn checked_sub(&self, other: &Self) -> crate::error::Result<Self> {
        self.ensure_same_token(other)?;
        let raw = &self.raw - &other.raw;
        if raw.is_negative() {
            return Err(EngineError::Underflow("token amount subtraction underflow"));
        }
        Ok(Self {
            token: self.token,
            raw,
        })
    }

    /// Scales the amount by a plain rational, keeping the token.
    #[must_use]
    pub fn multiply(&self, factor: &Fraction) -> Self {
        Self {
            token: self.token,
            raw: &self.raw * factor,
        }
    }

    /// Divides the amount by a plain rational, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(&self, divisor: &Fraction) -> crate::error::Result<Self> {
        Ok(Self {
            token: self.token,
            raw: self.raw.checked_div(divisor)?,
        })
    }

    /// Returns the dimensionless ratio `self / other` of two amounts of
    /// the same token.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MismatchedDenomination`] if the tokens differ.
    /// - [`EngineError::DivisionByZero`] if `other` is zero.
    pub fn ratio_to(&self, other: &Self) -> crate::error::Result<Fraction> {
        self.ensure_same_token(other)?;
        self.raw.checked_div(&other.raw)
    }

    /// Returns the smaller of two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] if the tokens differ.
    pub fn min_of(self, other: Self) -> crate::error::Result<Self> {
        self.ensure_same_token(&other)?;
        Ok(Self {
            token: self.token,
            raw: self.raw.min_of(other.raw),
        })
    }

    /// Settles the amount to an integer number of raw units.
    #[must_use]
    pub fn to_raw_integer(&self, rounding: Rounding) -> BigInt {
        self.raw.to_integer(rounding)
    }

    /// Formats the amount in whole-token units with `digits` fractional
    /// digits.
    #[must_use]
    pub fn to_fixed(&self, digits: u8) -> String {
        self.to_fraction().to_fixed(digits)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.raw, self.token.address())
    }
}
