use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trip_server::config::ServerConfig;
use trip_server::domain::LocalZone;
use trip_server::planner::TripPlanner;
use trip_server::tfnsw::TfnswClient;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env().map_err(|e| format!("unable to read config: {e}"))?;

    let client = TfnswClient::new(config.tfnsw())?;
    let planner = TripPlanner::new(client, LocalZone::load(&config.timezone));
    let zone = planner.zone().to_string();
    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(addr = %config.listen, %zone, "trip server listening");
    info!("  POST /api/trip  - Plan trips");
    info!("  GET  /health    - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
