use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::store::PostStore;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
///
/// The store is the only shared object, and it holds no collection data:
/// every request round-trips through the backing document.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

// ============================================================================
// Server Setup
// ============================================================================

pub fn build_app(
    state: AppState,
    request_timeout_seconds: u64,
    static_dir: Option<PathBuf>,
) -> Router {
    // /search must be its own route; it would otherwise be captured by {id}.
    let api = Router::new()
        .route("/posts", get(handlers::list).post(handlers::create))
        .route("/posts/search", get(handlers::search))
        .route(
            "/posts/{id}",
            get(handlers::get_one)
                .put(handlers::update)
                .delete(handlers::delete),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )));

    let app = Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive());

    // Static file passthrough for anything outside /api.
    match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}
