//! `order-service` binary: loads configuration, starts the stores and serves the HTTP API
//! until Ctrl-C.

use clap::Parser;
use order_service::config::Config;
use order_service::delivery::HttpDeliveryNotifier;
use order_service::lifecycle::{setup_tracing, OrderSystem};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_tracing(&args.log_level);

    info!("Starting order service");

    let config = Config::load(&args.config)?;
    let notifier =
        HttpDeliveryNotifier::new(config.delivery.base_url.clone(), config.delivery.timeout())?;
    info!(base_url = %config.delivery.base_url, "Delivery notifications enabled");

    let system = OrderSystem::new(&config.store, Arc::new(notifier));

    order_service::api::serve(
        &config.server.bind_address(),
        system.service.clone(),
        shutdown_signal(),
    )
    .await?;

    system.shutdown().await?;
    info!("Order service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
