//! Relative paths of the Lisk Service endpoints this client reads.

use std::fmt;

/// Read-only Lisk Service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Generators,
    Blocks,
    Transactions,
    TokenAccountExists,
    TokenBalances,
    TokenConstants,
    BlockchainApps,
    MarketPrices,
}

impl Endpoint {
    /// Every endpoint, in the order the client exposes them.
    pub const ALL: [Self; 8] = [
        Self::Generators,
        Self::Blocks,
        Self::Transactions,
        Self::TokenAccountExists,
        Self::TokenBalances,
        Self::TokenConstants,
        Self::BlockchainApps,
        Self::MarketPrices,
    ];

    /// Path relative to the service base URL. Always starts with `/`.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Generators => "/generators",
            Self::Blocks => "/blocks",
            Self::Transactions => "/transactions",
            Self::TokenAccountExists => "/token/account/exists",
            Self::TokenBalances => "/token/balances",
            Self::TokenConstants => "/token/constants",
            Self::BlockchainApps => "/blockchain/apps",
            Self::MarketPrices => "/market/prices",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
