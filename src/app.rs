use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Assembles the HTTP surface. CORS is deliberately permissive: the RSVP
/// form is served from a different origin than this API.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::healthcheck))
        .route("/sheets/add-guest", post(handlers::add_guest))
        .route("/sheets/update-guest/:row_index", put(handlers::update_guest))
        .route("/sheets/guests", get(handlers::list_guests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
