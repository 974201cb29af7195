use crate::dto::{MessageResponse, QuestionDto};
use crate::error::ApiError;
use crate::respond::{json_or_jsonp, CallbackParams};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use resolvd_domain::{DomainError, RecordType};
use tracing::instrument;

/// `GET /{domain}/{querytype}` — single-type query.
#[instrument(skip(state, params), name = "api_query_record")]
pub async fn query_record(
    State(state): State<AppState>,
    Path((domain, querytype)): Path<(String, String)>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, ApiError> {
    let record_type: RecordType = querytype
        .parse()
        .map_err(|_| DomainError::RecordTypeNotAllowed(querytype.clone()))?;

    let (fqdn, records) = state.resolve_record.execute(&domain, record_type).await?;

    let message = MessageResponse::new(QuestionDto::new(fqdn.to_string(), record_type.as_str()), &records);
    Ok(json_or_jsonp(&params, &message))
}

/// `GET /{domain}` — one query per type in the fixed order, with absent
/// types silently skipped.
#[instrument(skip(state, params), name = "api_query_all_records")]
pub async fn query_all_records(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, ApiError> {
    let (fqdn, records) = state.resolve_all_types.execute(&domain).await?;

    let message = MessageResponse::new(QuestionDto::new(fqdn.to_string(), ""), &records);
    Ok(json_or_jsonp(&params, &message))
}
