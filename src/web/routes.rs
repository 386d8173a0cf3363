use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::app::AppState;
use crate::core::error::AppError;
use crate::web::handlers::board;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Board routes
        .route("/board/create", post(board::create_post))
        .route("/board/list", get(board::list_posts))
        .route("/board/:id", get(board::get_post))

        // Health check
        .route("/health", get(health_check))

        // Error bodies for unmatched paths and methods
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
