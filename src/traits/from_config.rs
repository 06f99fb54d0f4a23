//! Generic construction trait for domain values built from configuration.
//!
//! [`FromConfig`] provides a uniform interface for turning a declarative
//! configuration struct into the validated domain value it describes.
//!
//! # Validation Contract
//!
//! Implementations **must** validate every configuration invariant during
//! construction. A successfully constructed value is guaranteed to satisfy
//! the invariants of its type. Common validations include:
//!
//! - Token decimals are within `0..=18`
//! - A lendgine's two tokens are distinct and live on one chain
//! - The bound decodes to a strictly positive price
//!
//! # No Generic Blanket Implementation
//!
//! There is no `impl<T> FromConfig<T>` blanket: each value type
//! explicitly implements the trait for its own config type.

/// Generic construction trait for building a value from a configuration.
///
/// # Implementors
///
/// - `impl FromConfig<TokenConfig> for Token`
/// - `impl FromConfig<LendgineConfig> for Lendgine`
pub trait FromConfig<C> {
    /// Creates a new value from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`](crate::error::EngineError::InvalidConfiguration)
    ///   if any parameter is out of range or inconsistent.
    /// - [`EngineError::InvalidPrecision`](crate::error::EngineError::InvalidPrecision)
    ///   if token decimals are unsupported.
    fn from_config(config: &C) -> crate::error::Result<Self>
    where
        Self: Sized;
}
