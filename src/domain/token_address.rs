//! EVM account address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A 20-byte EVM address identifying a token or protocol contract.
///
/// Parses from and serializes to `0x`-prefixed hex. Ordering is
/// lexicographic over the raw bytes, which is the ordering the protocol
/// uses to sort a token pair.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::TokenAddress;
///
/// let addr: TokenAddress = "0x0000000000000000000000000000000000000001".parse().expect("hex");
/// assert_eq!(addr.as_bytes()[19], 1);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAddress([u8; 20]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 20])
    }
}

impl FromStr for TokenAddress {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| EngineError::InvalidAddress("expected 20 bytes of hex"))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenAddress> for String {
    fn from(value: TokenAddress) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
