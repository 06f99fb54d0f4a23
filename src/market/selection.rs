//! Navigation across the bound-markets of one token pair.
//!
//! A lendgine is *long* relative to a base token when the base token is
//! its `token0`; otherwise it is *short*. Long bounds are quoted from the
//! base token and short bounds from the speculative token, so a price in
//! long orientation must be inverted before it can be compared against
//! short bounds.

use tracing::trace;

use crate::domain::{Lendgine, Price, Token};
use crate::error::EngineError;

/// Returns `true` if `lendgine` gives long exposure relative to `base`.
#[must_use]
pub fn is_long_lendgine(lendgine: &Lendgine, base: Token) -> bool {
    lendgine.token0() == base
}

/// Splits `lendgines` into `(longs, shorts)` relative to `base`,
/// preserving input order within each side.
#[must_use]
pub fn partition_by_orientation<'a, I>(
    lendgines: I,
    base: Token,
) -> (Vec<&'a Lendgine>, Vec<&'a Lendgine>)
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    lendgines
        .into_iter()
        .partition(|lendgine| is_long_lendgine(lendgine, base))
}

/// Long lendgines relative to `base`, in input order.
#[must_use]
pub fn pick_long<'a, I>(lendgines: I, base: Token) -> Vec<&'a Lendgine>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    partition_by_orientation(lendgines, base).0
}

/// Short lendgines relative to `base`, in input order.
#[must_use]
pub fn pick_short<'a, I>(lendgines: I, base: Token) -> Vec<&'a Lendgine>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    partition_by_orientation(lendgines, base).1
}

/// Reference point for a neighbor search.
#[derive(Debug, Clone, Copy)]
pub enum Anchor<'a> {
    /// An explicit price, in the candidates' bound orientation.
    Price(&'a Price),
    /// An existing lendgine; its bound is the reference.
    Lendgine(&'a Lendgine),
}

impl<'a> Anchor<'a> {
    /// Returns the reference price.
    #[must_use]
    pub fn price(&self) -> &'a Price {
        match *self {
            Self::Price(price) => price,
            Self::Lendgine(lendgine) => lendgine.bound(),
        }
    }
}

impl<'a> From<&'a Price> for Anchor<'a> {
    fn from(price: &'a Price) -> Self {
        Self::Price(price)
    }
}

impl<'a> From<&'a Lendgine> for Anchor<'a> {
    fn from(lendgine: &'a Lendgine) -> Self {
        Self::Lendgine(lendgine)
    }
}

/// Sorts candidates by bound after checking that every bound shares the
/// anchor's denominations and that no two bounds coincide.
fn sorted_candidates<'a, I>(
    reference: &Price,
    candidates: I,
) -> crate::error::Result<Vec<&'a Lendgine>>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    let mut sorted: Vec<&Lendgine> = candidates.into_iter().collect();
    if sorted
        .iter()
        .any(|candidate| !candidate.bound().same_denominations(reference))
    {
        return Err(EngineError::MismatchedDenomination);
    }
    sorted.sort_by(|a, b| a.bound().raw().cmp(b.bound().raw()));
    if sorted
        .windows(2)
        .any(|pair| pair[0].bound().raw() == pair[1].bound().raw())
    {
        return Err(EngineError::DuplicateBound);
    }
    Ok(sorted)
}

/// Returns the candidate with the smallest bound strictly above the
/// anchor, or `None` if there is none.
///
/// # Errors
///
/// - [`EngineError::MismatchedDenomination`] if a candidate's bound is not
///   quoted like the anchor.
/// - [`EngineError::DuplicateBound`] if two candidates share a bound.
pub fn next_highest<'a, 'b, I>(
    anchor: impl Into<Anchor<'b>>,
    candidates: I,
) -> crate::error::Result<Option<&'a Lendgine>>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    let reference = anchor.into().price();
    let found = sorted_candidates(reference, candidates)?
        .into_iter()
        .find(|candidate| candidate.bound().raw() > reference.raw());
    trace!(reference = %reference, found = ?found.map(Lendgine::address), "next highest lendgine");
    Ok(found)
}

/// Returns the candidate with the largest bound strictly below the
/// anchor, or `None` if there is none.
///
/// # Errors
///
/// Same as [`next_highest`].
pub fn next_lowest<'a, 'b, I>(
    anchor: impl Into<Anchor<'b>>,
    candidates: I,
) -> crate::error::Result<Option<&'a Lendgine>>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    let reference = anchor.into().price();
    let found = sorted_candidates(reference, candidates)?
        .into_iter()
        .rev()
        .find(|candidate| candidate.bound().raw() < reference.raw());
    trace!(reference = %reference, found = ?found.map(Lendgine::address), "next lowest lendgine");
    Ok(found)
}

/// Picks the lendgine a trading view opens on.
///
/// `price` is the market price quoted from `base` (long orientation).
/// Preference order: the next long bound above `price`, the next long
/// bound below it, then the same two searches over the shorts against the
/// inverted price.
///
/// # Errors
///
/// - [`EngineError::NoData`] if no lendgine qualifies.
/// - [`EngineError::DivisionByZero`] if the shorts must be searched and
///   `price` is zero.
/// - The errors of [`next_highest`] / [`next_lowest`].
pub fn select_default_lendgine<'a, I>(
    price: &Price,
    lendgines: I,
    base: Token,
) -> crate::error::Result<&'a Lendgine>
where
    I: IntoIterator<Item = &'a Lendgine>,
{
    let (longs, shorts) = partition_by_orientation(lendgines, base);
    if let Some(found) = next_highest(price, longs.iter().copied())? {
        return Ok(found);
    }
    if let Some(found) = next_lowest(price, longs.iter().copied())? {
        return Ok(found);
    }
    if shorts.is_empty() {
        return Err(EngineError::NoData("no lendgine for this market"));
    }
    let inverted = price.invert()?;
    if let Some(found) = next_highest(&inverted, shorts.iter().copied())? {
        return Ok(found);
    }
    next_lowest(&inverted, shorts.iter().copied())?
        .ok_or(EngineError::NoData("no lendgine for this market"))
}
