use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use beachduo_core::config::Config;
use beachduo_core::repositories::{AccountRepository, TournamentRepository};
use beachduo_core::{db, schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize structured logging
    init_tracing(&config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        reset = config.reset_on_startup,
        "Preparing BeachDuo store"
    );

    // Connect to the embedded store
    tracing::info!(database_url = %config.database_url, "Connecting to store...");
    let db = db::connect(&config.database_url).await?;
    tracing::info!("Store connected");

    // Initialize the schema and seed accounts; bail out on failure so the
    // shell never runs against a half-prepared store
    schema::initialize(&db, config.reset_on_startup).await?;
    tracing::info!("Schema ready");

    let tournaments = TournamentRepository::new(db.clone());
    let accounts = AccountRepository::new(db);

    let tournament_count = tournaments.list_all().await?.len();
    let seeded = accounts.find_by_username("Giacomelli").await?.is_some();
    tracing::info!(tournament_count, seeded, "Store prepared");

    Ok(())
}

/// Initialize the `tracing` subscriber with an environment-based filter.
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("beachduo_core={log_level},sea_orm=warn").into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
