//! Token module queries for LiskClient.

use serde_json::Value;

use super::LiskClient;
use crate::client::http::Transport;
use crate::domain::{AccountExistsQuery, Endpoint, QueryParams, Result, TokenBalancesQuery};

impl<T: Transport> LiskClient<T> {
    /// Check whether an account holds an entry for the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn check_account_exists(&self, query: &AccountExistsQuery) -> Result<Value> {
        self.get(Endpoint::TokenAccountExists, &query.to_query()).await
    }

    /// Fetch token balances of an account, optionally for one token only.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_token_balances(&self, query: &TokenBalancesQuery) -> Result<Value> {
        self.get(Endpoint::TokenBalances, &query.to_query()).await
    }

    /// Fetch the token module constants (e.g. account initialization fees).
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails.
    pub async fn get_token_module_constants(&self) -> Result<Value> {
        self.get(Endpoint::TokenConstants, &QueryParams::new()).await
    }
}
