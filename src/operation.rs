//! One request descriptor per supported endpoint call.
//!
//! An [`Operation`] carries everything needed to perform a call and to
//! describe it on the console: the label printed before a payload and the
//! context printed before a failure.

use serde_json::Value;

use crate::client::http::Transport;
use crate::client::lisk::LiskClient;
use crate::domain::{
    AccountExistsQuery, BlockchainAppsQuery, Endpoint, GeneratorsQuery, Result, TokenBalancesQuery,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Generators(GeneratorsQuery),
    Blocks,
    Transaction { transaction_id: String },
    AccountExists(AccountExistsQuery),
    TokenBalances(TokenBalancesQuery),
    TokenConstants,
    BlockchainApps(BlockchainAppsQuery),
    MarketPrices,
}

impl Default for Operation {
    /// The example call run when nothing else is requested.
    fn default() -> Self {
        Self::Generators(GeneratorsQuery::default().search("genesis_84").limit(5))
    }
}

impl Operation {
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Generators(_) => Endpoint::Generators,
            Self::Blocks => Endpoint::Blocks,
            Self::Transaction { .. } => Endpoint::Transactions,
            Self::AccountExists(_) => Endpoint::TokenAccountExists,
            Self::TokenBalances(_) => Endpoint::TokenBalances,
            Self::TokenConstants => Endpoint::TokenConstants,
            Self::BlockchainApps(_) => Endpoint::BlockchainApps,
            Self::MarketPrices => Endpoint::MarketPrices,
        }
    }

    /// Label printed in front of a successful payload.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Generators(_) => "Generators:",
            Self::Blocks => "Blocks:",
            Self::Transaction { .. } => "Transaction:",
            Self::AccountExists(_) => "Account exists:",
            Self::TokenBalances(_) => "Token balances:",
            Self::TokenConstants => "Token Module Constants:",
            Self::BlockchainApps(_) => "Blockchain Applications:",
            Self::MarketPrices => "Market Prices:",
        }
    }

    /// What was being attempted, for failure messages.
    #[must_use]
    pub fn failure_context(&self) -> String {
        match self {
            Self::Generators(_) => "Error fetching generators".to_string(),
            Self::Blocks => "Error fetching blocks".to_string(),
            Self::Transaction { transaction_id } => {
                format!("Error fetching transaction {transaction_id}")
            }
            Self::AccountExists(q) => format!(
                "Error checking account {} for tokenID {}",
                q.address, q.token_id
            ),
            Self::TokenBalances(q) => {
                format!("Error fetching token balances for address {}", q.address)
            }
            Self::TokenConstants => "Error fetching token module constants".to_string(),
            Self::BlockchainApps(_) => "Error fetching blockchain applications".to_string(),
            Self::MarketPrices => "Error fetching market prices".to_string(),
        }
    }

    /// Perform the call.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying request returned.
    pub async fn execute<T: Transport>(&self, client: &LiskClient<T>) -> Result<Value> {
        match self {
            Self::Generators(q) => client.get_generators(q).await,
            Self::Blocks => client.get_blocks().await,
            Self::Transaction { transaction_id } => {
                client.get_transaction_by_id(transaction_id).await
            }
            Self::AccountExists(q) => client.check_account_exists(q).await,
            Self::TokenBalances(q) => client.get_token_balances(q).await,
            Self::TokenConstants => client.get_token_module_constants().await,
            Self::BlockchainApps(q) => client.get_blockchain_apps(q).await,
            Self::MarketPrices => client.get_market_prices().await,
        }
    }
}
