use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;

/// Wraps every route: a rejected request never reaches its handler.
/// Identity is the client IP; requests without connection info (e.g.
/// in-process tests) share one bucket.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let identity = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if let Err(err) = state.rate_limiter.admit(&identity) {
        return ApiError::from(err).into_response();
    }

    next.run(request).await
}
