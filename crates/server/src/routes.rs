use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::comments::CommentService;
use service::storage::json_file::JsonFileStore;

use crate::openapi::ApiDoc;

pub mod comments;

/// Shared state handed to every comment handler.
#[derive(Clone)]
pub struct ServerState {
    pub comments: Arc<CommentService<JsonFileStore>>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router, including health, comment CRUD, and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes
    let public = Router::new().route("/health", get(health));

    // Comment CRUD routes
    let api = Router::new()
        .route(
            "/api/comments",
            get(comments::list).post(comments::create).patch(comments::update),
        )
        .route("/api/comments/:id", get(comments::get).delete(comments::delete));

    // Interactive API documentation
    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    // Compose
    public
        .merge(api)
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // span per request with method and path at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // response event carries status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and transport failures logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
