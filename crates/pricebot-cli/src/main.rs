mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pricebot-cli")]
#[command(about = "Wildberries product search from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog and print the extracted products.
    Search {
        /// Free-text product query, e.g. "кроссовки nike".
        query: String,
        /// Maximum number of results (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
        /// Print records as JSON instead of the human-readable listing.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pricebot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query, limit, json } => {
            search::run_search(&config, &query, limit, json).await
        }
    }
}
