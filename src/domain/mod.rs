//! Domain types for the Lisk Service client.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by every request
//! - [`endpoint`] - Relative paths of the supported endpoints
//! - [`query`] - Ordered query-string construction and decoding
//! - [`params`] - Per-endpoint parameters and their defaults

// ============================================================================
// Module Declarations
// ============================================================================

pub mod endpoint;
pub mod error;
pub mod params;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use endpoint::Endpoint;
pub use error::{Result, ServiceError};
pub use params::{
    AccountExistsQuery, BlockchainAppsQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_TOKEN_ID,
    GeneratorsQuery, TokenBalancesQuery, transaction_query,
};
pub use query::{QueryParams, decode_query};
