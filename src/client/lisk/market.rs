//! Market price lookup for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{Endpoint, QueryParams, Result};

impl<T: Transport> LiskClient<T> {
    /// Fetch current market prices for the tracked trading pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_market_prices(&self) -> Result<Value> {
        self.get(Endpoint::MarketPrices, &QueryParams::new()).await
    }
}
