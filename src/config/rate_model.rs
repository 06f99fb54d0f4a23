//! Named protocol deployments and their jump-rate parameters.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::math::RateParams;

/// Protocol variant a lendgine was deployed under.
///
/// Each variant maps to one fixed [`RateParams`] set; the table is
/// process-wide and immutable. Serialized as its lowercase name.
///
/// # Examples
///
/// ```
/// use lendgine_engine::config::RateModel;
///
/// let model: RateModel = "stpmmp".parse().expect("known variant");
/// assert_eq!(model, RateModel::Stpmmp);
/// assert_eq!(model.to_string(), "stpmmp");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RateModel {
    /// Power-maker market pair.
    #[default]
    Pmmp,
    /// Short-term power-maker market pair.
    Stpmmp,
}

impl RateModel {
    /// Returns the jump-rate parameters of this deployment.
    #[must_use]
    pub fn params(self) -> RateParams {
        match self {
            Self::Pmmp => RateParams::pmmp(),
            Self::Stpmmp => RateParams::stpmmp(),
        }
    }

    /// Returns the lowercase variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pmmp => "pmmp",
            Self::Stpmmp => "stpmmp",
        }
    }
}

impl fmt::Display for RateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateModel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pmmp" => Ok(Self::Pmmp),
            "stpmmp" => Ok(Self::Stpmmp),
            _ => Err(EngineError::InvalidConfiguration("unknown rate model")),
        }
    }
}
