//! Lendgine identity, global state snapshot, and per-holder position.

use super::{Price, Token, TokenAddress, TokenAmount};
use crate::error::EngineError;

/// A leveraged-position market over a bounded pair.
///
/// `token0` is the numeraire and `token1` the collateral; the `bound` is
/// quoted from `token0` to `token1`. The `lendgine` token is the unit of
/// liquidity, position size and debt balance, and its address is the
/// market's contract address.
///
/// # Invariants
///
/// - `token0 != token1`
/// - `bound` is quoted from `token0` to `token1` and is strictly positive.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::{Decimals, Fraction, Lendgine, Price, Token, TokenAddress};
///
/// let d18 = Decimals::MAX;
/// let usdc = Token::new(1, TokenAddress::from_bytes([1u8; 20]), d18);
/// let weth = Token::new(1, TokenAddress::from_bytes([2u8; 20]), d18);
/// let share = Token::new(1, TokenAddress::from_bytes([3u8; 20]), d18);
///
/// let bound = Price::from_fraction(&Fraction::from_integer(3000), usdc, weth);
/// let lendgine = Lendgine::new(usdc, weth, share, bound).expect("valid lendgine");
/// assert_eq!(lendgine.address(), share.address());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lendgine {
    token0: Token,
    token1: Token,
    lendgine: Token,
    bound: Price,
}

impl Lendgine {
    /// Creates a new `Lendgine`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] if `token0 == token1` or the
    ///   bound is zero.
    /// - [`EngineError::MismatchedDenomination`] if the bound is not quoted
    ///   from `token0` to `token1`.
    pub fn new(
        token0: Token,
        token1: Token,
        lendgine: Token,
        bound: Price,
    ) -> crate::error::Result<Self> {
        if token0 == token1 {
            return Err(EngineError::InvalidConfiguration(
                "lendgine requires two distinct tokens",
            ));
        }
        if bound.base_token() != token0 || bound.quote_token() != token1 {
            return Err(EngineError::MismatchedDenomination);
        }
        if bound.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "lendgine bound must be positive",
            ));
        }
        Ok(Self {
            token0,
            token1,
            lendgine,
            bound,
        })
    }

    /// Returns the numeraire token.
    #[must_use]
    pub const fn token0(&self) -> Token {
        self.token0
    }

    /// Returns the collateral token.
    #[must_use]
    pub const fn token1(&self) -> Token {
        self.token1
    }

    /// Returns the liquidity / position / debt token.
    #[must_use]
    pub const fn lendgine_token(&self) -> Token {
        self.lendgine
    }

    /// Returns the market's contract address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.lendgine.address()
    }

    /// Returns the bound price.
    #[must_use]
    pub const fn bound(&self) -> &Price {
        &self.bound
    }
}

/// Global state of a [`Lendgine`] at `last_update`.
///
/// Liquidity, supply and position-size fields are denominated in the
/// lendgine token; the reward accumulator is a price from the lendgine
/// token to `token1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendgineInfo {
    /// Liquidity currently available (supplied and not borrowed).
    pub total_liquidity: TokenAmount,
    /// Liquidity currently borrowed.
    pub total_liquidity_borrowed: TokenAmount,
    /// Outstanding debt-token balance.
    pub total_supply: TokenAmount,
    /// Sum of all lender position sizes.
    pub total_position_size: TokenAmount,
    /// Collateral owed per unit of position size since inception.
    pub reward_per_position_stored: Price,
    /// Reserve of `token0` held by the market.
    pub reserve0: TokenAmount,
    /// Reserve of `token1` held by the market.
    pub reserve1: TokenAmount,
    /// Unix timestamp (seconds) of the last accrual.
    pub last_update: u64,
}

impl LendgineInfo {
    /// The state of a freshly deployed lendgine.
    #[must_use]
    pub fn empty(lendgine: &Lendgine) -> Self {
        let share = lendgine.lendgine;
        Self {
            total_liquidity: TokenAmount::zero(share),
            total_liquidity_borrowed: TokenAmount::zero(share),
            total_supply: TokenAmount::zero(share),
            total_position_size: TokenAmount::zero(share),
            reward_per_position_stored: Price::zero(share, lendgine.token1),
            reserve0: TokenAmount::zero(lendgine.token0),
            reserve1: TokenAmount::zero(lendgine.token1),
            last_update: 0,
        }
    }

    /// Returns `totalLiquidity + totalLiquidityBorrowed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] if the two fields
    /// carry different tokens.
    pub fn total_liquidity_supplied(&self) -> crate::error::Result<TokenAmount> {
        self.total_liquidity
            .checked_add(&self.total_liquidity_borrowed)
    }

    /// Checks that every field is denominated as described on the type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] on any mismatch.
    pub fn validate(&self, lendgine: &Lendgine) -> crate::error::Result<()> {
        let share = lendgine.lendgine;
        let shares_ok = [
            &self.total_liquidity,
            &self.total_liquidity_borrowed,
            &self.total_supply,
            &self.total_position_size,
        ]
        .iter()
        .all(|amount| amount.token() == share);
        let reward = &self.reward_per_position_stored;
        if !shares_ok
            || reward.base_token() != share
            || reward.quote_token() != lendgine.token1
            || self.reserve0.token() != lendgine.token0
            || self.reserve1.token() != lendgine.token1
        {
            return Err(EngineError::MismatchedDenomination);
        }
        Ok(())
    }
}

/// One holder's lender position in a [`Lendgine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendginePosition {
    /// Position size in lendgine-token units.
    pub size: TokenAmount,
    /// Accumulator value at the last reconciliation.
    pub reward_per_position_paid: Price,
    /// Collateral (`token1`) owed and not yet collected.
    pub tokens_owed: TokenAmount,
}

impl LendginePosition {
    /// An empty position.
    #[must_use]
    pub fn empty(lendgine: &Lendgine) -> Self {
        Self {
            size: TokenAmount::zero(lendgine.lendgine),
            reward_per_position_paid: Price::zero(lendgine.lendgine, lendgine.token1),
            tokens_owed: TokenAmount::zero(lendgine.token1),
        }
    }

    /// Checks that every field is denominated as described on the type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MismatchedDenomination`] on any mismatch.
    pub fn validate(&self, lendgine: &Lendgine) -> crate::error::Result<()> {
        let paid = &self.reward_per_position_paid;
        if self.size.token() != lendgine.lendgine
            || paid.base_token() != lendgine.lendgine
            || paid.quote_token() != lendgine.token1
            || self.tokens_owed.token() != lendgine.token1
        {
            return Err(EngineError::MismatchedDenomination);
        }
        Ok(())
    }
}
