//! Transaction lookup for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{Endpoint, Result, transaction_query};

impl<T: Transport> LiskClient<T> {
    /// Fetch a single transaction by ID.
    ///
    /// The service answers with its usual list envelope; an unknown ID
    /// yields an empty `data` array rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or JSON parsing fails.
    pub async fn get_transaction_by_id(&self, transaction_id: &str) -> Result<Value> {
        self.get(Endpoint::Transactions, &transaction_query(transaction_id)).await
    }
}
