use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryAirplaneStore};

#[derive(Parser)]
#[command(name = "airplane-api")]
#[command(about = "Airplane API - CRUD service for airplane records")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Address to bind (overrides AIRPLANE_API_HOST)")]
    pub host: Option<String>,

    #[arg(long, global = true, help = "Port to listen on (overrides AIRPLANE_API_PORT / PORT)")]
    pub port: Option<u16>,

    #[arg(long, global = true, help = "PostgreSQL connection string (overrides DATABASE_URL)")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Keep records in process memory instead of PostgreSQL")]
        in_memory: bool,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,
}

impl Cli {
    /// Apply command line overrides on top of the environment configuration
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        config
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.apply(AppConfig::from_env());
    info!("Starting Airplane API in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve { in_memory: false }) {
        Commands::Serve { in_memory } => serve(config, in_memory).await,
        Commands::Migrate => {
            let database = DatabaseManager::connect(&config.database)?;
            database.migrate().await?;
            database.close().await;
            Ok(())
        }
    }
}

async fn serve(config: AppConfig, in_memory: bool) -> anyhow::Result<()> {
    let state = if in_memory {
        info!("Using in-memory airplane store");
        AppState::new(Arc::new(MemoryAirplaneStore::new()))
    } else {
        let database = DatabaseManager::connect(&config.database)?;
        if config.database.run_migrations {
            database.migrate().await?;
        }
        AppState::postgres(database)
    };
    let database = state.database.clone();

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Airplane API listening on http://{}", bind_addr);

    axum::serve(listener, app(state, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(database) = database {
        database.close().await;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
