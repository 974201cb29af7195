use crate::dto::WhoisEntry;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

/// `GET /whois/{domain}` — the referral chain, one entry per hop.
#[instrument(skip(state), name = "api_whois_lookup")]
pub async fn whois_lookup(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<Vec<WhoisEntry>>, ApiError> {
    let chain = state.whois_lookup.execute(&domain).await?;
    Ok(Json(chain.iter().map(WhoisEntry::from).collect()))
}
