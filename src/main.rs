use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use lisk_service_client::domain::{DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_TOKEN_ID};
use lisk_service_client::{
    AccountExistsQuery, BlockchainAppsQuery, GeneratorsQuery, LiskClient, Operation,
    ServiceConfig, TokenBalancesQuery, report,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query a Lisk Service indexer and print the JSON it returns
#[derive(Debug, Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Service base URL (overrides LISK_SERVICE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Endpoint to call; defaults to a generator search for "genesis_84"
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Args)]
struct Page {
    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,
    /// Number of results to skip
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    offset: u32,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List block generators
    Generators {
        /// Text search in name, address or public key
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    /// List the latest blocks
    Blocks,
    /// Look up a transaction by ID
    Transaction {
        /// Transaction ID
        id: String,
    },
    /// Check whether an account holds a token
    AccountExists {
        /// Lisk account address
        address: String,
        /// Token ID
        #[arg(long, default_value = DEFAULT_TOKEN_ID)]
        token_id: String,
    },
    /// List token balances of an account
    Balances {
        /// Lisk account address
        address: String,
        /// Restrict to one token ID
        #[arg(long)]
        token_id: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    /// Show token module constants
    TokenConstants,
    /// List blockchain applications
    Apps {
        /// Chain ID(s), comma separated
        #[arg(long)]
        chain_id: Option<String>,
        /// Chain name (case-insensitive)
        #[arg(long)]
        chain_name: Option<String>,
        /// Application status(es), comma separated
        #[arg(long)]
        status: Option<String>,
        /// Text search in chain name
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    /// Show market prices
    MarketPrices,
}

impl From<Commands> for Operation {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Generators { search, page } => {
                let mut query = GeneratorsQuery::default()
                    .limit(page.limit)
                    .offset(page.offset);
                query.search = search;
                Operation::Generators(query)
            }
            Commands::Blocks => Operation::Blocks,
            Commands::Transaction { id } => Operation::Transaction { transaction_id: id },
            Commands::AccountExists { address, token_id } => {
                Operation::AccountExists(AccountExistsQuery::new(address).token_id(token_id))
            }
            Commands::Balances {
                address,
                token_id,
                page,
            } => {
                let mut query = TokenBalancesQuery::new(address)
                    .limit(page.limit)
                    .offset(page.offset);
                query.token_id = token_id;
                Operation::TokenBalances(query)
            }
            Commands::TokenConstants => Operation::TokenConstants,
            Commands::Apps {
                chain_id,
                chain_name,
                status,
                search,
                page,
            } => Operation::BlockchainApps(BlockchainAppsQuery {
                chain_id,
                chain_name,
                status,
                search,
                limit: page.limit,
                offset: page.offset,
            }),
            Commands::MarketPrices => Operation::MarketPrices,
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env must be applied before the configuration reads the environment
    let dotenv = dotenvy::dotenv();

    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
    }

    let cli = Cli::parse();

    let mut config = ServiceConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = LiskClient::new(config)?;
    tracing::info!(base_url = client.config().base_url(), "using Lisk Service");
    let operation = cli.command.map(Operation::from).unwrap_or_default();

    let mut sink = report::ConsoleSink::console();
    if report::run(&client, &operation, &mut sink).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
