mod config;
mod errors;
mod evaluation;
mod history;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::history::HistoryStore;
use crate::llm_client::ChatClient;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting worthit API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key.is_none() {
        info!("no API_KEY configured, evaluations will return fallback reports");
    }

    let chat = Arc::new(ChatClient::new(&config));
    info!("chat client initialized (model: {})", config.api_model);

    let store = HistoryStore::new(config.history_path.clone());
    info!("history store at {}", config.history_path.display());

    let state = AppState {
        chat,
        store,
        session: Arc::new(Mutex::new(Session::new())),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // local single-user tool, UI served separately

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
