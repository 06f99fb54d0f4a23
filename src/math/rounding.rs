//! Rounding helpers for integer division.
//!
//! This module provides [`div_round`], a free function that performs
//! arbitrary-precision integer division with an explicit [`Rounding`]
//! direction. It is the building block behind
//! [`Fraction::to_integer`](crate::domain::Fraction::to_integer) and
//! therefore behind every settlement of an exact amount to raw units.
//!
//! # Convention
//!
//! **Always round against the user** (protocol-favorable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount the user receives (withdraw, burn, owed collateral) | [`Rounding::Down`] |
//! | Amount the user must supply (deposit, mint collateral) | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use lendgine_engine::domain::Rounding;
//! use lendgine_engine::math::div_round;
//! use num_bigint::BigInt;
//!
//! let (ten, three) = (BigInt::from(10), BigInt::from(3));
//! assert_eq!(div_round(&ten, &three, Rounding::Down), Some(BigInt::from(3)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up), Some(BigInt::from(4)));
//! assert_eq!(div_round(&ten, &BigInt::from(0), Rounding::Down), None);
//! ```

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::domain::Rounding;

/// Integer division with explicit rounding direction.
///
/// - [`Rounding::Down`]: truncates towards zero.
/// - [`Rounding::Up`]: ceiling, the smallest integer ≥ the exact quotient.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            let remainder = numerator % denominator;
            // Truncation undershot the exact quotient only when it was positive.
            if !remainder.is_zero() && remainder.is_positive() == denominator.is_positive() {
                Some(quotient + BigInt::one())
            } else {
                Some(quotient)
            }
        }
    }
}
