#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use portfolio::content::SiteContent;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    log_content_summary();

    let app = routes::app(&config)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, public_dir = %config.public_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Report the embedded content table, or why it was rejected.
fn log_content_summary() {
    match SiteContent::parse(SiteContent::builtin_json()) {
        Ok(content) => tracing::info!(
            owner = %content.owner,
            projects = content.projects.len(),
            experience = content.experience.len(),
            events = content.events.len(),
            links = content.contact.links.len(),
            "content table loaded"
        ),
        Err(e) => tracing::warn!(error = %e, "content table invalid; page renders defaults"),
    }
}
