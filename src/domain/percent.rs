//! Exact percentage.

use core::fmt;

use super::Fraction;

/// A rate or ratio expressed as an exact fraction of one (`1 == 100%`).
///
/// Used for utilization, borrow rates and supply rates. Values above one
/// are valid: annualized borrow rates past the kink routinely exceed 100%.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::{Fraction, Percent};
///
/// let p = Percent::new(Fraction::new(1, 8).expect("non-zero"));
/// assert_eq!(p.to_string(), "12.50%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(Fraction);

impl Percent {
    /// Wraps a fraction of one.
    #[must_use]
    pub const fn new(value: Fraction) -> Self {
        Self(value)
    }

    /// Builds a percent from literal parts; the denominator is never zero
    /// at the call sites.
    pub(crate) fn literal(numerator: u64, denominator: u64) -> Self {
        Self(Fraction::literal(numerator, denominator))
    }

    /// Zero percent.
    #[must_use]
    pub fn zero() -> Self {
        Self(Fraction::zero())
    }

    /// Returns the value as a fraction of one.
    #[must_use]
    pub const fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    /// Consumes the percent, returning the underlying fraction.
    #[must_use]
    pub fn into_fraction(self) -> Fraction {
        self.0
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the exact product of two percentages.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundred = Fraction::from_integer(100u8);
        write!(f, "{}%", (&self.0 * &hundred).to_fixed(2))
    }
}
