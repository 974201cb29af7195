use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use resolvd_domain::DomainError;
use tracing::debug;

/// Plain `OK` when the upstream resolver answers the probe query.
pub async fn health_check(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    debug!("Health check requested");
    state.check_health.execute().await.map_err(|_| {
        ApiError(DomainError::UpstreamUnreachable(
            "DNS server is not reachable".to_string(),
        ))
    })?;
    Ok("OK")
}
