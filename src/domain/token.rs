//! Token identity type (a denomination).

use core::hash::{Hash, Hasher};

use super::{Decimals, TokenAddress};

/// A fungible unit of account: a token contract on a given chain with a
/// fixed decimal precision.
///
/// Two tokens are the same denomination iff their identifiers match,
/// i.e. they live on the same chain at the same address. Decimals are
/// carried for unit conversion but take no part in equality.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::{Decimals, Token, TokenAddress};
///
/// let addr = TokenAddress::from_bytes([1u8; 20]);
/// let usdc = Token::new(1, addr, Decimals::new(6).expect("valid"));
///
/// assert_eq!(usdc.address(), addr);
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Token {
    chain_id: u64,
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(chain_id: u64, address: TokenAddress, decimals: Decimals) -> Self {
        Self {
            chain_id,
            address,
            decimals,
        }
    }

    /// Returns the chain the token is deployed on.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if this token sorts before `other` in the
    /// protocol's canonical pair ordering (ascending address).
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.address < other.address
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// Orders two tokens canonically, lower address first.
#[must_use]
pub fn sort_tokens(a: Token, b: Token) -> (Token, Token) {
    if a.sorts_before(&b) {
        (a, b)
    } else {
        (b, a)
    }
}
