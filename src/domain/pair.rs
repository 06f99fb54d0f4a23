//! Bounded AMM pair identity and reserve snapshot.

use super::{Price, Token, TokenAmount};
use crate::error::EngineError;

/// A bound market: an AMM pair between a base token and a speculative
/// token whose curve is capped at an upper price `bound`.
///
/// The bound is a price of the speculative token in the base token.
/// `lp` is the pair's liquidity-share token. A `Pair` is configuration
/// and never changes once constructed.
///
/// # Invariants
///
/// - `base != speculative`
/// - `bound` is quoted from `speculative` to `base` and is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    base: Token,
    speculative: Token,
    lp: Token,
    bound: Price,
}

impl Pair {
    /// Creates a new `Pair`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] if the two tokens are equal
    ///   or the bound is zero.
    /// - [`EngineError::MismatchedDenomination`] if the bound is not quoted
    ///   from `speculative` to `base`.
    pub fn new(
        base: Token,
        speculative: Token,
        lp: Token,
        bound: Price,
    ) -> crate::error::Result<Self> {
        if base == speculative {
            return Err(EngineError::InvalidConfiguration(
                "pair requires two distinct tokens",
            ));
        }
        if bound.base_token() != speculative || bound.quote_token() != base {
            return Err(EngineError::MismatchedDenomination);
        }
        if bound.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "pair bound must be positive",
            ));
        }
        Ok(Self {
            base,
            speculative,
            lp,
            bound,
        })
    }

    /// Returns the base (numeraire) token.
    #[must_use]
    pub const fn base_token(&self) -> Token {
        self.base
    }

    /// Returns the speculative token.
    #[must_use]
    pub const fn speculative_token(&self) -> Token {
        self.speculative
    }

    /// Returns the liquidity-share token.
    #[must_use]
    pub const fn lp_token(&self) -> Token {
        self.lp
    }

    /// Returns the upper price bound of the curve.
    #[must_use]
    pub const fn bound(&self) -> &Price {
        &self.bound
    }
}

/// Point-in-time reserves and share supply of a [`Pair`].
///
/// Re-read from the outside world on every refresh; the engine never
/// mutates a snapshot in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInfo {
    /// Reserve of the base token.
    pub base_amount: TokenAmount,
    /// Reserve of the speculative token.
    pub speculative_amount: TokenAmount,
    /// Outstanding liquidity-share supply.
    pub total_lp_supply: TokenAmount,
}

impl PairInfo {
    /// Checks that every field is denominated in the matching token of
    /// `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] on any mismatch.
    pub fn validate(&self, pair: &Pair) -> crate::error::Result<()> {
        if self.base_amount.token() != pair.base
            || self.speculative_amount.token() != pair.speculative
            || self.total_lp_supply.token() != pair.lp
        {
            return Err(EngineError::MismatchedDenomination);
        }
        Ok(())
    }
}
