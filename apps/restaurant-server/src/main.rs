mod config;
mod logging;
mod signals;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use clap::{Parser, Subcommand};
use config::{AppConfig, CliOverrides, CorsConfig, DatabaseConfig};
use restaurant_service::RestaurantModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Restaurant Server - menu, table and order management
#[derive(Parser)]
#[command(name = "restaurant-server")]
#[command(about = "Restaurant Server - menu, table and order management")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let mut config = AppConfig::load_layered(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;
    tracing::info!("Restaurant Server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Migrate => migrate(config).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    cors_layer(&config.cors)?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn migrate(config: AppConfig) -> Result<()> {
    let db = connect_database(&config.database).await?;
    RestaurantModule::new(db, config.restaurant).migrate().await
}

/// Keeps the single in-memory SQLite connection out of pool recycling
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    // An in-memory SQLite database lives only as long as its connection.
    // A recycled connection would come back empty and unmigrated.
    if config.url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    }

    options
}

async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    if config.url.contains(":memory:") {
        tracing::info!("Mock mode enabled: using in-memory SQLite");
    }

    Database::connect(connect_options(config))
        .await
        .context("failed to connect to database")
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn build_router(module: &RestaurantModule, cors: &CorsConfig) -> Result<Router> {
    let router = Router::new().route("/health", get(health));

    Ok(module
        .register_rest(router)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = connect_database(&config.database).await?;
    let module = RestaurantModule::new(db, config.restaurant.clone());

    if config.database.auto_migrate {
        module.migrate().await?;
    }

    let app = build_router(&module, &config.cors)?;

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed");
            }
            cancel.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    tracing::info!("Restaurant Server stopped");
    Ok(())
}
