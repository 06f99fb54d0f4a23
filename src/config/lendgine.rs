//! Declarative token and lendgine configuration.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::domain::{Decimals, Lendgine, Price, Token, TokenAddress};
use crate::error::EngineError;
use crate::traits::FromConfig;

/// Identity of one token as it appears in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Chain the token lives on.
    pub chain_id: u64,
    /// `0x`-prefixed contract address.
    pub address: TokenAddress,
    /// Decimal precision, `0..=18`.
    pub decimals: u8,
}

impl TokenConfig {
    /// Validates the decimal precision.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrecision`] if `decimals > 18`.
    pub fn validate(&self) -> crate::error::Result<()> {
        Decimals::new(self.decimals).map(|_| ())
    }
}

impl FromConfig<TokenConfig> for Token {
    fn from_config(config: &TokenConfig) -> crate::error::Result<Self> {
        let decimals = Decimals::new(config.decimals)?;
        Ok(Token::new(config.chain_id, config.address, decimals))
    }
}

/// Raw-unit bound ratio, `numerator / denominator` raw `token1` units per
/// raw `token0` unit, each written as a decimal integer string so values
/// beyond 64 bits survive JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundConfig {
    /// Raw `token0` units.
    pub denominator: String,
    /// Raw `token1` units.
    pub numerator: String,
}

impl BoundConfig {
    fn parse(value: &str) -> crate::error::Result<BigInt> {
        value
            .parse::<BigInt>()
            .map_err(|_| EngineError::InvalidConfiguration("bound must be a decimal integer"))
    }

    /// Decodes the bound into a price from `token0` to `token1`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] if either part is not a
    ///   decimal integer.
    /// - [`EngineError::DivisionByZero`] if the denominator is zero.
    pub fn to_price(&self, token0: Token, token1: Token) -> crate::error::Result<Price> {
        Price::new(
            token0,
            token1,
            Self::parse(&self.denominator)?,
            Self::parse(&self.numerator)?,
        )
    }
}

/// Configuration of one deployed lendgine.
///
/// # Validation
///
/// - All three tokens decode and live on the same chain.
/// - `token0` and `token1` are distinct.
/// - The bound decodes to a strictly positive price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendgineConfig {
    /// Numeraire token.
    pub token0: TokenConfig,
    /// Collateral token.
    pub token1: TokenConfig,
    /// Liquidity / position / debt token; its address is the market's.
    pub lendgine: TokenConfig,
    /// Upper price bound.
    pub bound: BoundConfig,
}

impl LendgineConfig {
    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the error [`Lendgine::from_config`] would return.
    pub fn validate(&self) -> crate::error::Result<()> {
        Lendgine::from_config(self).map(|_| ())
    }
}

impl FromConfig<LendgineConfig> for Lendgine {
    fn from_config(config: &LendgineConfig) -> crate::error::Result<Self> {
        let token0 = Token::from_config(&config.token0)?;
        let token1 = Token::from_config(&config.token1)?;
        let lendgine = Token::from_config(&config.lendgine)?;
        if token0.chain_id() != token1.chain_id() || token0.chain_id() != lendgine.chain_id() {
            return Err(EngineError::InvalidConfiguration(
                "lendgine tokens must share a chain",
            ));
        }
        let bound = config.bound.to_price(token0, token1)?;
        if bound.raw().is_negative() {
            return Err(EngineError::InvalidConfiguration(
                "lendgine bound must be positive",
            ));
        }
        Lendgine::new(token0, token1, lendgine, bound)
    }
}
