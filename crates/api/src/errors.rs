use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use whois_dns_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // Capacity exhaustion is reported like a missing record.
            DomainError::RecordNotFound(_) | DomainError::CapacityExceeded { .. } => {
                (StatusCode::NOT_FOUND, "not found".to_string())
            }

            DomainError::InvalidHost(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
