//! Seams to the external data-fetching layer.
//!
//! The engine performs no I/O. Whatever reads protocol state (an RPC
//! client, an indexer, a test fixture) implements these traits, and the
//! helpers in [`accounting`](crate::accounting) and
//! [`market`](crate::market) consume already-resolved snapshots through
//! them. Retries and timeouts belong to the implementor.

use crate::domain::{Lendgine, LendgineInfo, LendginePosition, Pair, PairInfo, Price, TokenAddress};

/// Supplies point-in-time protocol state on demand.
pub trait StateReader {
    /// Reserves and LP supply of `pair`.
    ///
    /// # Errors
    ///
    /// Any error the implementor cannot recover from.
    fn pair_info(&self, pair: &Pair) -> crate::error::Result<PairInfo>;

    /// Global state of `lendgine` as of its last on-chain update.
    ///
    /// # Errors
    ///
    /// Any error the implementor cannot recover from.
    fn lendgine_info(&self, lendgine: &Lendgine) -> crate::error::Result<LendgineInfo>;

    /// Lender position of `owner` in `lendgine`; an empty position when
    /// the owner has never deposited.
    ///
    /// # Errors
    ///
    /// Any error the implementor cannot recover from.
    fn position(
        &self,
        lendgine: &Lendgine,
        owner: &TokenAddress,
    ) -> crate::error::Result<LendginePosition>;

    /// Current wall-clock time in Unix seconds.
    fn now(&self) -> u64;
}

/// Supplies reference prices for oracle aggregation.
pub trait ReferencePriceSource {
    /// Returns every reference price the source knows about. Absent
    /// entries are `None` and are skipped by aggregation.
    ///
    /// # Errors
    ///
    /// Any error the implementor cannot recover from.
    fn reference_prices(&self) -> crate::error::Result<Vec<Option<Price>>>;
}
