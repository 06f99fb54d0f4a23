//! Top-level protocol configuration.
//!
//! [`ProtocolConfig`] is the read-only description of one protocol
//! deployment: which rate model it runs and which lendgines it has
//! deployed. It is usually loaded once from JSON:
//!
//! ```
//! use lendgine_engine::config::{ProtocolConfig, RateModel};
//!
//! let json = r#"{ "rate_model": "pmmp", "lendgines": [] }"#;
//! let config = ProtocolConfig::from_json(json).expect("valid document");
//! assert_eq!(config.rate_model(), RateModel::Pmmp);
//! assert!(config.lendgines().expect("valid lendgines").is_empty());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LendgineConfig, RateModel};
use crate::domain::Lendgine;
use crate::error::EngineError;
use crate::math::RateParams;
use crate::traits::FromConfig;

/// Rate model and deployed lendgines of one protocol deployment.
///
/// # Validation
///
/// - Every lendgine configuration is valid.
/// - No two lendgines share a contract address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    rate_model: RateModel,
    #[serde(default)]
    lendgines: Vec<LendgineConfig>,
}

impl ProtocolConfig {
    /// Creates a new `ProtocolConfig`.
    ///
    /// # Errors
    ///
    /// Returns the first error [`validate`](Self::validate) reports.
    pub fn new(
        rate_model: RateModel,
        lendgines: Vec<LendgineConfig>,
    ) -> crate::error::Result<Self> {
        let config = Self {
            rate_model,
            lendgines,
        };
        config.validate()?;
        Ok(config)
    }

    /// Decodes and validates a JSON document.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Config`] if the document is not valid JSON of the
    ///   expected shape.
    /// - Any error [`validate`](Self::validate) reports.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            rate_model = %config.rate_model,
            lendgines = config.lendgines.len(),
            "loaded protocol configuration"
        );
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - Any error a lendgine configuration reports.
    /// - [`EngineError::InvalidConfiguration`] if two lendgines share an
    ///   address.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.lendgines().map(|_| ())
    }

    /// Returns the deployment's rate model.
    #[must_use]
    pub const fn rate_model(&self) -> RateModel {
        self.rate_model
    }

    /// Returns the jump-rate parameters of the deployment's rate model.
    #[must_use]
    pub fn rate_params(&self) -> RateParams {
        self.rate_model.params()
    }

    /// Returns the raw lendgine configurations.
    #[must_use]
    pub fn lendgine_configs(&self) -> &[LendgineConfig] {
        &self.lendgines
    }

    /// Builds the immutable lendgine set, in document order.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn lendgines(&self) -> crate::error::Result<Vec<Lendgine>> {
        let mut seen = HashSet::with_capacity(self.lendgines.len());
        self.lendgines
            .iter()
            .map(|cfg| {
                let lendgine = Lendgine::from_config(cfg)?;
                if !seen.insert(lendgine.address()) {
                    return Err(EngineError::InvalidConfiguration(
                        "duplicate lendgine address",
                    ));
                }
                Ok(lendgine)
            })
            .collect()
    }
}
