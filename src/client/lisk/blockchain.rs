//! Blockchain application listing for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{BlockchainAppsQuery, Endpoint, Result};

impl<T: Transport> LiskClient<T> {
    /// Fetch registered blockchain applications with optional filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_blockchain_apps(&self, query: &BlockchainAppsQuery) -> Result<Value> {
        self.get(Endpoint::BlockchainApps, &query.to_query()).await
    }
}
