use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flight_planner::config::{AppConfig, DEFAULT_LOG_FILTER};
use flight_planner::network::FlightNetwork;
use flight_planner::web::{AppState, create_router};

fn init_logger(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}, falling back to {DEFAULT_LOG_FILTER:?}: {err}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_logger(&config.log_filter);

    let network = match &config.network_path {
        Some(path) => FlightNetwork::load(path)?,
        None => {
            info!("No network file configured, starting empty");
            FlightNetwork::new()
        }
    };

    let app = create_router(AppState::new(network));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Flight planner listening");
    info!("  GET    /health");
    info!("  GET    /network");
    info!("  GET    /airports        POST /airports   DELETE /airports/:code");
    info!("  POST   /routes          DELETE /routes/:origin/:destination");
    info!("  POST   /flights         DELETE /flights/:origin/:destination/:airline/:number");
    info!("  POST   /itinerary");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
