//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load and validate configuration from environment
//! - Initialize the repository adapter
//! - Create the aggregation service with the HTTP adapters
//! - Execute one pipeline run (or a maintenance subcommand)

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_pipeline::outbound::{ReqwestFetcher, TelegramNotifier};
use rates_pipeline::RateService;
use rates_repo::build_repo;
use rates_types::RateRepository;

#[derive(Parser)]
#[command(name = "rates-bot")]
#[command(author, version, about = "Multi-source MYR exchange rate bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch rates from every source, record and publish them (default)
    Run,
    /// Create the database schema and exit
    InitDb,
    /// Print the newest recorded rate per source and currency
    Latest,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_pipeline=debug,rates_scrape=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::InitDb => init_db().await,
        Commands::Latest => latest().await,
    }
}

async fn run() -> Result<()> {
    // Validate configuration before any fetch is attempted
    let config = config::Config::from_env()?;

    tracing::info!("Exchange rate bot started");
    tracing::info!(sources = config.sources.len(), "Using database: {}", config.database_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let fetcher = ReqwestFetcher::new(config.render_url.clone())?;
    let notifier = TelegramNotifier::new(&config.telegram_bot_token, &config.telegram_chat_id)?;

    let mut service = RateService::new(fetcher, repo, notifier, config.sources);
    if let Some(dir) = config.debug_dir {
        service = service.with_debug_dir(dir);
    }

    // A run that obtained zero rates propagates here and exits non-zero.
    let snapshot = service.run().await?;

    tracing::info!(
        sources = snapshot.source_count(),
        quotes = snapshot.quote_count(),
        "Exchange rate bot completed successfully"
    );
    Ok(())
}

async fn init_db() -> Result<()> {
    let database_url = config::database_url()?;
    let _ = build_repo(&database_url).await?;
    tracing::info!("Database schema created");
    Ok(())
}

async fn latest() -> Result<()> {
    let database_url = config::database_url()?;
    let repo = build_repo(&database_url).await?;

    let rows = repo.latest_quotes().await?;
    if rows.is_empty() {
        println!("No rates recorded yet");
        return Ok(());
    }

    println!(
        "{:<28} {:<8} {:>10} {:>10}  {}",
        "Source", "Currency", "We Sell", "We Buy", "Observed"
    );
    for row in rows {
        println!(
            "{:<28} {:<8} {:>10.4} {:>10.4}  {}",
            row.source.as_str(),
            row.currency.code(),
            row.sell_rate,
            row.buy_rate,
            row.observed_at
        );
    }
    Ok(())
}
