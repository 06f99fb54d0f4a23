//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model the lendgine domain:
//! tokens, exact rationals, token amounts, prices, bound pairs, lendgines
//! and their state snapshots. Types use validated constructors to enforce
//! invariants, and every magnitude is an exact [`Fraction`].

mod amount;
mod decimals;
mod fraction;
mod lendgine;
mod pair;
mod percent;
mod price;
mod rounding;
mod token;
mod token_address;

pub use amount::TokenAmount;
pub use decimals::Decimals;
pub use fraction::Fraction;
pub use lendgine::{Lendgine, LendgineInfo, LendginePosition};
pub use pair::{Pair, PairInfo};
pub use percent::Percent;
pub use price::Price;
pub use rounding::Rounding;
pub use token::{sort_tokens, Token};
pub use token_address::TokenAddress;
