//! Generator listing for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{Endpoint, GeneratorsQuery, Result};

impl<T: Transport> LiskClient<T> {
    /// Fetch block generators, optionally filtered by a text search over
    /// name, address or public key.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_generators(&self, query: &GeneratorsQuery) -> Result<Value> {
        self.get(Endpoint::Generators, &query.to_query()).await
    }
}
