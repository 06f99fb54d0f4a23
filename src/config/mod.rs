//! Protocol configuration structs.
//!
//! This module contains the [`RateModel`] table of named deployments and
//! the declarative [`LendgineConfig`] / [`ProtocolConfig`] blueprints the
//! engine builds its immutable [`Lendgine`](crate::domain::Lendgine) set
//! from. Configuration is read-only: the engine never mutates it.

mod lendgine;
mod protocol;
mod rate_model;

pub use lendgine::{BoundConfig, LendgineConfig, TokenConfig};
pub use protocol::ProtocolConfig;
pub use rate_model::RateModel;
