//! Entregas Backend Binary
//!
//! Main entry point for the delivery-records HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "mocks")]
use entregas_backend_lib::repository::MockRepository;
use entregas_backend_lib::{
    api::create_app,
    config::Config,
    repository::{DeliveryOperations, Repository},
    services::Services,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "entregas-backend")]
#[command(about = "Delivery records HTTP API", long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Override server host
    #[arg(long)]
    host: Option<String>,

    /// Override server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override database host
    #[arg(long)]
    database_host: Option<String>,

    /// Override database name
    #[arg(long)]
    database_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting entregas backend");

    let config = load_config()?;
    info!("Server will run on {}:{}", config.host, config.port);

    let repository = create_repository(&config).await?;
    let services = Services::new(repository);

    // Start server
    let app = create_app(services);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .context("Failed to bind TCP listener")?;

    info!("Server listening on http://{}:{}", config.host, config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn load_config() -> Result<Config> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?,
        None => {
            debug!("No config file specified, using defaults");
            Config::default()
        }
    };

    config.apply_env_overrides();

    // Apply CLI overrides
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database_host) = args.database_host {
        config.database.host = database_host;
    }
    if let Some(database_name) = args.database_name {
        config.database.dbname = database_name;
    }

    Ok(config)
}

async fn create_repository(config: &Config) -> Result<Arc<dyn DeliveryOperations>> {
    #[cfg(feature = "mocks")]
    {
        if config.database.mock_mode {
            info!("Using mock repository (mock_mode enabled)");
            return Ok(Arc::new(MockRepository::new()));
        }
    }

    // Pool construction runs an eager connectivity check
    let repository = Repository::new(&config.database.url())
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("Connected to PostgreSQL database");
    Ok(Arc::new(repository))
}
