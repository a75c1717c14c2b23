//! HwSight telemetry server.

use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing::{error, info};

use hwsight_server::net::{client_url, local_ip};
use hwsight_server::{HttpServer, HttpSource, ServerConfig, TelemetryService};

/// Serve normalized Libre Hardware Monitor telemetry to display clients.
#[derive(Parser, Debug)]
#[command(name = "hwsight-server")]
#[command(about = "Serve normalized hardware telemetry to display clients")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format).
    #[arg(short, long)]
    config: Option<String>,

    /// HTTP listen address (overrides config).
    #[arg(long)]
    listen: Option<String>,

    /// Sensor source URL (overrides config).
    #[arg(long)]
    source: Option<String>,

    /// Log level (overrides config).
    #[arg(long)]
    log_level: Option<String>,

    /// Fetch one snapshot, print it as JSON and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        ServerConfig::load_from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    // CLI overrides
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(source) = args.source {
        config.source.url = source;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    hwsight_common::init_tracing(&config.logging)?;

    let source = HttpSource::new(config.source_url()?, config.source.timeout())?;
    let service = TelemetryService::new(source, config.telemetry).with_verbose(config.verbose);

    if args.once {
        let response = service.snapshot().await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        if response.is_error() {
            anyhow::bail!("no telemetry available from {}", config.source.url);
        }
        return Ok(());
    }

    let listen_addr = config.listen_addr()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %config.source.url,
        max_disks = config.telemetry.max_disks,
        "Starting HwSight server"
    );
    info!(
        url = %client_url(listen_addr, local_ip()),
        "Display clients should poll this endpoint"
    );

    // Create shutdown signal
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let http_server = HttpServer::new(service, listen_addr);
    let mut http_task = tokio::spawn(http_server.run(shutdown_rx));

    // Wait for shutdown signal, or for the server to stop on its own
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate() => {
            info!("Received SIGTERM, shutting down...");
        }
        result = &mut http_task => {
            return result?;
        }
    }

    shutdown_tx.send(true)?;

    let _ = tokio::time::timeout(Duration::from_secs(5), http_task).await;

    info!("Server stopped");
    Ok(())
}

#[cfg(unix)]
async fn terminate() {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
