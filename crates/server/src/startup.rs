use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::comments::CommentService;
use service::runtime;
use service::storage::json_file::JsonFileStore;

/// Initialize logging via shared common utils; `LOG_FORMAT=json` switches output
fn init_logging() {
    if env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Resolve where the comment document lives: configs, then `COMMENTS_PATH`,
/// then the built-in default
fn load_storage_path() -> String {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.storage.path,
        Err(_) => {
            let mut storage = configs::StorageConfig::default();
            storage.normalize_from_env();
            storage.path
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let storage_path = load_storage_path();
    let parent = std::path::Path::new(&storage_path).parent();
    if let Some(dir) = parent.filter(|p| !p.as_os_str().is_empty()) {
        runtime::ensure_env(&dir.to_string_lossy()).await?;
    }

    // Comment store backed by the JSON document
    let store = JsonFileStore::new(&storage_path).await?;
    let state = ServerState { comments: Arc::new(CommentService::new(store)) };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, %storage_path, "starting comments api");
    println!("Server running on port {}", addr.port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
