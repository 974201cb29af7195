use crate::dto::{MessageResponse, QuestionDto};
use crate::error::ApiError;
use crate::respond::{json_or_jsonp, CallbackParams};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use resolvd_domain::RecordType;
use tracing::instrument;

/// `GET /ptr/{ip}` — reverse lookup through the same resolver and cache.
#[instrument(skip(state, params), name = "api_ptr_record")]
pub async fn ptr_record(
    State(state): State<AppState>,
    Path(ip): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, ApiError> {
    let (arpa, records) = state.reverse_lookup.execute(&ip).await?;

    let message = MessageResponse::new(
        QuestionDto::new(arpa.to_string(), RecordType::PTR.as_str()),
        &records,
    );
    Ok(json_or_jsonp(&params, &message))
}
