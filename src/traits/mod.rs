//! Core trait abstractions.
//!
//! This module defines [`FromConfig`] for configuration-driven
//! construction, and [`StateReader`] / [`ReferencePriceSource`], the seams
//! through which external collaborators hand snapshots to the engine.

mod from_config;
mod state_reader;

pub use from_config::FromConfig;
pub use state_reader::{ReferencePriceSource, StateReader};
