//! Exchange rate between two tokens.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;

use super::{Fraction, Token, TokenAmount};
use crate::error::EngineError;

/// An exact exchange rate from a `base` token to a `quote` token.
///
/// The ratio is stored in raw units: one raw unit of `base` is worth
/// `raw()` raw units of `quote`. [`to_fraction`](Self::to_fraction) and
/// [`from_fraction`](Self::from_fraction) convert to and from the
/// decimal-adjusted ratio (whole `quote` tokens per whole `base` token)
/// that the curve and accrual math is written in.
///
/// Ordering is only meaningful between prices of the same pair, so
/// `Price` does not implement `PartialOrd`; use
/// [`compare`](Self::compare), which rejects mismatched denominations.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::{Decimals, Price, Token, TokenAddress};
///
/// let d18 = Decimals::new(18).expect("valid");
/// let weth = Token::new(1, TokenAddress::from_bytes([1u8; 20]), d18);
/// let dai = Token::new(1, TokenAddress::from_bytes([2u8; 20]), d18);
///
/// let price = Price::new(weth, dai, 1, 3000).expect("non-zero denominator");
/// let inverse = price.invert().expect("non-zero price");
/// assert_eq!(inverse.invert().expect("non-zero price"), price);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Fraction,
}

impl Price {
    /// Creates a price of `numerator / denominator` raw `quote` units per
    /// raw `base` unit.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        base: Token,
        quote: Token,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> crate::error::Result<Self> {
        Ok(Self {
            base,
            quote,
            raw: Fraction::new(numerator, denominator)?,
        })
    }

    /// Creates a price from a raw-unit ratio.
    #[must_use]
    pub const fn from_raw(base: Token, quote: Token, raw: Fraction) -> Self {
        Self { base, quote, raw }
    }

    /// Lifts a decimal-adjusted ratio (whole `quote` per whole `base`)
    /// into a price.
    #[must_use]
    pub fn from_fraction(adjusted: &Fraction, base: Token, quote: Token) -> Self {
        let raw = adjusted * &Self::scalar(base, quote);
        Self { base, quote, raw }
    }

    /// The zero price from `base` to `quote`.
    #[must_use]
    pub fn zero(base: Token, quote: Token) -> Self {
        Self {
            base,
            quote,
            raw: Fraction::zero(),
        }
    }

    /// `10^quote.decimals / 10^base.decimals`: multiplies an adjusted ratio
    /// into a raw one.
    fn scalar(base: Token, quote: Token) -> Fraction {
        let q = Fraction::pow10(quote.decimals().get());
        match Fraction::pow10(base.decimals().get()).invert() {
            Ok(inv) => q * inv,
            Err(_) => q,
        }
    }

    /// Returns the base token.
    #[must_use]
    pub const fn base_token(&self) -> Token {
        self.base
    }

    /// Returns the quote token.
    #[must_use]
    pub const fn quote_token(&self) -> Token {
        self.quote
    }

    /// Returns the raw-unit ratio.
    #[must_use]
    pub const fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// Drops the denomination tags, returning the decimal-adjusted ratio.
    #[must_use]
    pub fn to_fraction(&self) -> Fraction {
        match Self::scalar(self.base, self.quote).invert() {
            Ok(inv) => &self.raw * &inv,
            Err(_) => self.raw.clone(),
        }
    }

    /// Returns `true` if the price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Returns `true` if both prices quote the same base in the same quote.
    #[must_use]
    pub fn same_denominations(&self, other: &Self) -> bool {
        self.base == other.base && self.quote == other.quote
    }

    /// Swaps base and quote and reciprocates the ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if the price is zero.
    pub fn invert(&self) -> crate::error::Result<Self> {
        Ok(Self {
            base: self.quote,
            quote: self.base,
            raw: self.raw.invert()?,
        })
    }

    /// Scales the ratio by a plain rational.
    #[must_use]
    pub fn multiply(&self, factor: &Fraction) -> Self {
        Self {
            base: self.base,
            quote: self.quote,
            raw: &self.raw * factor,
        }
    }

    /// Divides the ratio by a plain rational.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(&self, divisor: &Fraction) -> crate::error::Result<Self> {
        Ok(Self {
            base: self.base,
            quote: self.quote,
            raw: self.raw.checked_div(divisor)?,
        })
    }

    /// Converts an amount of the base token into the quote token.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] if `amount` is not
    /// denominated in the base token.
    pub fn quote(&self, amount: &TokenAmount) -> crate::error::Result<TokenAmount> {
        if amount.token() != self.base {
            return Err(EngineError::MismatchedDenomination);
        }
        let value = amount.raw() * &self.raw;
        Ok(TokenAmount::from_fraction(self.quote, value))
    }

    /// Compares two prices of the same pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] if the prices do not
    /// share base and quote tokens.
    pub fn compare(&self, other: &Self) -> crate::error::Result<Ordering> {
        if !self.same_denominations(other) {
            return Err(EngineError::MismatchedDenomination);
        }
        Ok(self.raw.cmp(&other.raw))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.to_fraction(),
            self.quote.address(),
            self.base.address()
        )
    }
}
