//! Priorscope Web Server
//!
//! Run with: cargo run -p priorscope-web

use std::net::SocketAddr;
use std::sync::Arc;

use priorscope_store::{JsonFileStore, MemoryStore};
use priorscope_web::state::AppState;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port: u16 = std::env::var("PRIORSCOPE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    // File-backed store when a data dir is configured, memory otherwise.
    let state = match std::env::var("PRIORSCOPE_DATA_DIR") {
        Ok(dir) => {
            info!(dir = %dir, "using JSON file store");
            let store = JsonFileStore::open(dir).await?;
            AppState::new(Arc::new(store), format!("http://127.0.0.1:{port}"))
        }
        Err(_) => {
            info!("no PRIORSCOPE_DATA_DIR set, using in-memory store");
            AppState::new(Arc::new(MemoryStore::new()), format!("http://127.0.0.1:{port}"))
        }
    };

    let app = priorscope_web::router::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
