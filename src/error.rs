//! Unified error types for the lendgine engine.
//!
//! All fallible operations across the crate return [`EngineError`],
//! so callers can fall back to an "unavailable" state on any of them
//! without matching per-module error types.

use thiserror::Error;

/// Errors surfaced by the valuation and accrual engine.
///
/// Zero denominators that are expected steady states (an empty pool, a
/// market with no borrows) never reach this type: those paths return a
/// defined degenerate value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A division whose denominator is exactly zero was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// A computation required at least one value and received none.
    #[error("no data: {0}")]
    NoData(&'static str),

    /// An input violated a documented precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),

    /// Two quantities of different denominations were combined without
    /// an explicit price conversion.
    #[error("mismatched denominations")]
    MismatchedDenomination,

    /// Two candidate lendgines share the same bound.
    #[error("duplicate lendgine bound in candidate set")]
    DuplicateBound,

    /// A subtraction would produce a negative quantity.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// Token decimals are outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A quantity could not be constructed or parsed.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A token or contract address could not be decoded.
    #[error("invalid address: {0}")]
    InvalidAddress(&'static str),

    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A configuration document could not be decoded.
    #[error("configuration decode failed: {0}")]
    Config(String),
}

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = core::result::Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = EngineError::NoData("oracle prices");
        assert_eq!(err.to_string(), "no data: oracle prices");
    }

    #[test]
    fn json_errors_convert_to_config() {
        let parsed: core::result::Result<u8, _> = serde_json::from_str("not json");
        let Err(json_err) = parsed else {
            panic!("expected decode failure");
        };
        let err = EngineError::from(json_err);
        assert!(matches!(err, EngineError::Config(_)));
    }
}
