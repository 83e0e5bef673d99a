//! Minimal async client for the Lisk Service indexing REST API.
//!
//! Each supported endpoint is one GET request whose JSON body is returned
//! untouched as a [`serde_json::Value`]. Optional query parameters are only
//! sent when they carry a value; `limit` and `offset` always default to 10
//! and 0.
//!
//! # Quick start
//!
//! ```no_run
//! use lisk_service_client::{LiskClient, Operation, ServiceConfig, report};
//!
//! #[tokio::main]
//! async fn main() -> lisk_service_client::Result<()> {
//!     let client = LiskClient::new(ServiceConfig::from_env()?)?;
//!     let mut sink = report::ConsoleSink::console();
//!     report::run(&client, &Operation::MarketPrices, &mut sink).await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod operation;
pub mod report;

#[cfg(test)]
mod test_utils;

pub use client::{HttpClient, HttpConfig, LiskClient, Transport};
pub use config::ServiceConfig;
pub use domain::{
    AccountExistsQuery, BlockchainAppsQuery, Endpoint, GeneratorsQuery, QueryParams, Result,
    ServiceError, TokenBalancesQuery,
};
pub use operation::Operation;
