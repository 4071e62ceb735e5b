//! # tubctld — tub control daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging from the configured filter
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository and actuator implementations (adapters)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use tubctl_adapter_actuator_http::HttpActuator;
use tubctl_adapter_http_axum::auth::ProxyHeaderIdentity;
use tubctl_adapter_http_axum::state::AppState;
use tubctl_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteGreetingRepository, SqliteMeasureRepository,
};
use tubctl_app::services::measure_service::MeasureService;
use tubctl_app::services::tub_service::TubService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Adapters
    let greeting_repo = SqliteGreetingRepository::new(pool.clone());
    let measure_repo = SqliteMeasureRepository::new(pool);
    let actuator = HttpActuator::new(&config.actuator.url)?;
    let identity =
        ProxyHeaderIdentity::new(&config.auth.identity_header, config.auth.login_url.as_str())?;
    let zone = config.display_zone()?;

    // Services
    let tub_service = TubService::new(greeting_repo, actuator);
    let measure_service = MeasureService::new(measure_repo);

    // HTTP
    let state = AppState::new(tub_service, measure_service, identity, zone);
    let app = tubctl_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %zone, "tubctld listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tubctld stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
