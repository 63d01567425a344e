//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::QUESTIONS_PER_PAGE;
use trivia_server::db::{create_pool_with_options, migrations, DEFAULT_MAX_CONNECTIONS};
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig, TriviaStore};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000", env = "TRIVIA_BIND")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve sample data from memory instead of Postgres
    #[arg(long)]
    pub in_memory: bool,

    /// Questions per page on listing endpoints
    #[arg(long, default_value_t = QUESTIONS_PER_PAGE)]
    pub page_size: usize,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    anyhow::ensure!(args.page_size > 0, "--page-size must be at least 1");

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Serving in-memory sample data; changes are lost on exit");
        Arc::new(MemoryStore::with_sample_data())
    } else {
        let database_url = require_database_url(args.database_url)?;
        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool).await.context("Failed to run migrations")?;
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        page_size: args.page_size,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
