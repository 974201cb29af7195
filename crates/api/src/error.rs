use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resolvd_domain::DomainError;
use serde::Serialize;
use tracing::error;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

/// Wraps a `DomainError` for rendering as a JSON error response.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidDomainName(_) | DomainError::InvalidIpAddress(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::RecordTypeNotAllowed(_) => StatusCode::FORBIDDEN,
            DomainError::WhoisServerNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            DomainError::UpstreamUnreachable(_)
            | DomainError::UpstreamRejected(_)
            | DomainError::WhoisUnreachable(_)
            | DomainError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(code = status.as_u16(), message = %self.0, "Request failed");

        let body = ErrorBody {
            code: status.as_u16(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
