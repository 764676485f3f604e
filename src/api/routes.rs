use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Libraries
        .route(
            "/users/:user_id/games",
            get(handlers::get_library).put(handlers::put_library),
        )
        .route("/users/:user_id/games/stats", get(handlers::get_library_stats))
        // Compatibility
        .route(
            "/users/:user_id/compatibility/:other_id",
            get(handlers::compare_users),
        )
        .route("/compare", post(handlers::compare_libraries))
}
