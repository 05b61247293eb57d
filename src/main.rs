//! MERGE-BOT database bootstrap.
//!
//! Run-once initializer that brings a MongoDB deployment to the baseline
//! schema the bot expects: the `mergebot` database, its four collections,
//! and a unique index on each collection's `_id`.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB connection and schema bootstrap

mod config;
mod database;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use database::{schema, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mergebot_init=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting MERGE-BOT database bootstrap...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded successfully");

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.database_url, schema::DB_NAME).await?;
    info!("Database connected");

    // Bring the schema to its baseline state
    schema::initialize(db.db()).await?;

    Ok(())
}
