// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::shell::Shell;
use crate::domain::panel_state::PanelState;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_transport::HttpTransport;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::{CommandLine, Commands};
use crate::presentation::handlers::{dashboard_page, health_check};
use crate::presentation::shell_view::render_document;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    // Load configuration
    let config = load_dashboard_config()?;

    // Initialize tracing; stdout is reserved for rendered pages
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Create transport (infrastructure layer)
    let transport = Arc::new(HttpTransport::new(
        config.api_base_url.clone(),
        config.request_timeout(),
    )?);
    tracing::info!("Using dashboard API at {}", config.api_base_url);

    // Mount the shell, which mounts its panel and starts the fetch
    let shell = Shell::mount(config.title.clone(), transport);

    match commands.command() {
        Commands::Serve => serve(shell, &config.listen_addr).await,
        Commands::Render => render(shell).await,
    }
}

async fn serve(shell: Shell, listen_addr: &str) -> anyhow::Result<()> {
    let state = Arc::new(AppState { shell });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = listen_addr.parse()?;
    tracing::info!("Starting lucas-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

async fn render(shell: Shell) -> anyhow::Result<()> {
    let state = shell.panel().settled().await;
    tracing::debug!("Panel settled: {:?}", state);
    println!("{}", render_document(&shell));
    shell.unmount().await?;

    if let PanelState::Failed(message) = state {
        anyhow::bail!("Dashboard panel failed: {}", message);
    }
    Ok(())
}
