//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool, migrations};

use super::require_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Also insert the stock categories and sample questions
    #[arg(long)]
    pub seed: bool,
}

/// Create tables, optionally seeding starter data
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Failed to run migrations")?;

    if args.seed {
        migrations::seed(&pool).await.context("Failed to seed starter data")?;
        tracing::info!("Starter data in place");
    }

    pool.close().await;
    Ok(())
}
