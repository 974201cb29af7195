use crate::handlers;
use crate::middleware::rate_limit;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Creates all API routes with state. The rate limiter wraps every
/// route, including the health check.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/whois/{domain}", get(handlers::whois_lookup))
        .route("/ptr/{ip}", get(handlers::ptr_record))
        .route("/{domain}", get(handlers::query_all_records))
        .route("/{domain}/{querytype}", get(handlers::query_record))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .with_state(state)
}
