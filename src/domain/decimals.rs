//! Token decimal places.

use num_bigint::BigInt;
use num_traits::pow;

use crate::error::EngineError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places between a token's raw unit and its
/// human-readable unit.
///
/// Valid range is `0..=18`. Construction is validated: values above 18
/// are rejected.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, EngineError> {
        if value > MAX_DECIMALS {
            return Err(EngineError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the number of raw units in one whole token.
    #[must_use]
    pub fn factor(&self) -> BigInt {
        pow(BigInt::from(10u8), usize::from(self.0))
    }
}
