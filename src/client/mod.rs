//! HTTP clients for the Lisk Service API.
//!
//! - [`http`] - reqwest-backed transport and its configuration
//! - [`lisk`] - `LiskClient` with one method per supported endpoint
//!
//! # Example
//!
//! ```no_run
//! use lisk_service_client::client::LiskClient;
//! use lisk_service_client::ServiceConfig;
//!
//! let client = LiskClient::new(ServiceConfig::default())?;
//! # Ok::<(), lisk_service_client::ServiceError>(())
//! ```

pub mod http;
pub mod lisk;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, HttpConfig, Transport};
pub use lisk::LiskClient;
