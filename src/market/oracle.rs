//! Robust aggregation of external reference prices.
//!
//! Reference markets disagree slightly and some are missing at any given
//! moment. The engine filters out absent quotes and takes the exact
//! median of the rest: the middle quote for an odd count, the exact
//! rational mean of the two middle quotes for an even count.
//!
//! # Examples
//!
//! ```
//! use lendgine_engine::domain::{Decimals, Fraction, Price, Token, TokenAddress};
//! use lendgine_engine::market::median_price;
//!
//! let usdc = Token::new(1, TokenAddress::from_bytes([1u8; 20]), Decimals::MAX);
//! let weth = Token::new(1, TokenAddress::from_bytes([2u8; 20]), Decimals::MAX);
//! let at = |s: &str| Some(Price::from_fraction(&Fraction::from_decimal_str(s).expect("decimal"), weth, usdc));
//!
//! let median = median_price([at("1.00"), at("1.02"), None, at("0.98"), at("1.01")]).expect("quotes present");
//! assert_eq!(median.to_fraction(), Fraction::from_decimal_str("1.005").expect("decimal"));
//! ```

use tracing::debug;

use crate::domain::{Fraction, Price, Token};
use crate::error::EngineError;
use crate::traits::ReferencePriceSource;

/// Returns the exact median of the present prices.
///
/// The result carries the inputs' base and quote tokens.
///
/// # Errors
///
/// - [`EngineError::NoData`] if no price is present.
/// - [`EngineError::MismatchedDenomination`] if the present prices do not
///   all share one base and quote.
pub fn median_price<I>(prices: I) -> crate::error::Result<Price>
where
    I: IntoIterator<Item = Option<Price>>,
{
    let mut present: Vec<Price> = prices.into_iter().flatten().collect();
    let Some(first) = present.first() else {
        return Err(EngineError::NoData("no reference prices"));
    };
    let (base, quote) = (first.base_token(), first.quote_token());
    if present
        .iter()
        .any(|price| price.base_token() != base || price.quote_token() != quote)
    {
        return Err(EngineError::MismatchedDenomination);
    }
    present.sort_by(|a, b| a.raw().cmp(b.raw()));

    let count = present.len();
    let mid = count / 2;
    let median = if count % 2 == 1 {
        present.swap_remove(mid)
    } else {
        let sum = present[mid - 1].raw() + present[mid].raw();
        let mean = sum.checked_div(&Fraction::from_integer(2u8))?;
        Price::from_raw(base, quote, mean)
    };
    debug!(sources = count, median = %median, "aggregated reference prices");
    Ok(median)
}

/// Re-quotes `price` so that its base token is `base`, inverting it when
/// it is quoted the other way round.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if `base` is neither of the
///   price's tokens.
/// - [`EngineError::DivisionByZero`] if an inversion is needed and the
///   price is zero.
pub fn orient_price(price: &Price, base: Token) -> crate::error::Result<Price> {
    if price.base_token() == base {
        Ok(price.clone())
    } else if price.quote_token() == base {
        price.invert()
    } else {
        Err(EngineError::MismatchedDenomination)
    }
}

/// Orients every present price to quote from `base`, then takes the
/// median.
///
/// # Errors
///
/// The errors of [`orient_price`] and [`median_price`].
pub fn median_price_for<I>(base: Token, prices: I) -> crate::error::Result<Price>
where
    I: IntoIterator<Item = Option<Price>>,
{
    let oriented = prices
        .into_iter()
        .map(|price| price.map(|p| orient_price(&p, base)).transpose())
        .collect::<crate::error::Result<Vec<_>>>()?;
    median_price(oriented)
}

/// Fetches every quote from `source` and takes the median.
///
/// # Errors
///
/// Propagates source errors and the errors of [`median_price`].
pub fn median_from_source<S>(source: &S) -> crate::error::Result<Price>
where
    S: ReferencePriceSource + ?Sized,
{
    median_price(source.reference_prices()?)
}
