use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdftext_core::{Fetcher, config_file};
use pdftext_mupdf::MupdfBackend;
use pdftext_web::{AppState, Settings};

/// Fetch remote PDFs and serve their extracted text over HTTP
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Port for the local listener (default: $PORT, then config file, then 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Production mode: do not open the local listener
    #[arg(long)]
    production: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = Settings::resolve(
        args.port,
        args.production,
        |key| std::env::var(key).ok(),
        &config_file::load_config(),
    );

    if settings.production {
        tracing::info!("production mode: local listener disabled, the host serves the router");
        return Ok(());
    }

    let state = Arc::new(AppState::new(
        Fetcher::new(settings.user_agent),
        Arc::new(MupdfBackend::new()),
    ));
    let app = pdftext_web::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
