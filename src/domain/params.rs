//! Per-endpoint request parameters with their defaults.
//!
//! Each structure turns into a [`QueryParams`] in the exact order the service
//! documents its parameters. Optional text fields are dropped when absent or
//! empty; `limit` and `offset` are always sent.

use super::query::QueryParams;

// ============================================================================
// Constants
// ============================================================================

/// Default page size for paginated endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default page offset for paginated endpoints.
pub const DEFAULT_OFFSET: u32 = 0;

/// Token ID of LSK on the Lisk testnet, used when no token is given.
pub const DEFAULT_TOKEN_ID: &str = "0200000000000000";

// ============================================================================
// Generators
// ============================================================================

/// Filters for `GET /generators`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorsQuery {
    /// Text search in name, address or public key.
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for GeneratorsQuery {
    fn default() -> Self {
        Self {
            search: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl GeneratorsQuery {
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("search", self.search.as_deref())
            .with("limit", self.limit)
            .with("offset", self.offset)
    }
}

// ============================================================================
// Transactions
// ============================================================================

/// Builds the query for `GET /transactions` filtered by one transaction ID.
#[must_use]
pub fn transaction_query(transaction_id: &str) -> QueryParams {
    QueryParams::new().with("transactionID", transaction_id)
}

// ============================================================================
// Token account existence
// ============================================================================

/// Parameters for `GET /token/account/exists`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountExistsQuery {
    pub address: String,
    pub token_id: String,
}

impl AccountExistsQuery {
    /// Query for `address` holding the default LSK token.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token_id: DEFAULT_TOKEN_ID.to_string(),
        }
    }

    /// Use a specific token. An empty ID keeps the default.
    #[must_use]
    pub fn token_id(mut self, token_id: impl Into<String>) -> Self {
        let token_id = token_id.into();
        if !token_id.is_empty() {
            self.token_id = token_id;
        }
        self
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("address", &self.address)
            .with("tokenID", &self.token_id)
    }
}

// ============================================================================
// Token balances
// ============================================================================

/// Parameters for `GET /token/balances`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalancesQuery {
    pub address: String,
    /// Restrict the result to one token; `None` or empty lists every token.
    pub token_id: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl TokenBalancesQuery {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token_id: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }

    #[must_use]
    pub fn token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("address", &self.address)
            .with_opt("tokenID", self.token_id.as_deref())
            .with("limit", self.limit)
            .with("offset", self.offset)
    }
}

// ============================================================================
// Blockchain applications
// ============================================================================

/// Filters for `GET /blockchain/apps`.
///
/// `chain_id` and `status` accept the service's CSV form
/// (e.g. `activated,registered`); `chain_name` and `search` are matched
/// case-insensitively by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockchainAppsQuery {
    pub chain_id: Option<String>,
    pub chain_name: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for BlockchainAppsQuery {
    fn default() -> Self {
        Self {
            chain_id: None,
            chain_name: None,
            status: None,
            search: None,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl BlockchainAppsQuery {
    #[must_use]
    pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    #[must_use]
    pub fn chain_name(mut self, chain_name: impl Into<String>) -> Self {
        self.chain_name = Some(chain_name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("chainID", self.chain_id.as_deref())
            .with_opt("chainName", self.chain_name.as_deref())
            .with_opt("status", self.status.as_deref())
            .with_opt("search", self.search.as_deref())
            .with("limit", self.limit)
            .with("offset", self.offset)
    }
}

// ============================================================================
// Tests
// ============================================================================
