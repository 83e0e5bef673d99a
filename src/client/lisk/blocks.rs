//! Block listing for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{Endpoint, QueryParams, Result};

impl<T: Transport> LiskClient<T> {
    /// Fetch the latest blocks using the service's default paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_blocks(&self) -> Result<Value> {
        self.get(Endpoint::Blocks, &QueryParams::new()).await
    }
}
