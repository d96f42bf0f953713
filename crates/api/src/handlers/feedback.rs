use crate::{dto::FeedbackResponse, errors::ApiError, state::AppState, utils::request_host};
use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, Uri},
    Json,
};
use std::net::SocketAddr;
use tracing::instrument;
use whois_dns_domain::DomainError;

#[instrument(skip(state, headers), name = "api_get_feedback")]
pub async fn get_feedback(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let host = request_host(&headers, &uri)
        .ok_or_else(|| DomainError::InvalidHost("missing Host header".to_string()))?;

    let record = state
        .consume_feedback
        .execute(host, &remote.to_string())?;

    Ok(Json(FeedbackResponse::from(record)))
}
