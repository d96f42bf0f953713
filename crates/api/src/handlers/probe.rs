use crate::{
    errors::ApiError,
    state::AppState,
    utils::{request_host, request_scheme},
};
use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::{debug, instrument};
use whois_dns_domain::DomainError;

/// Registers a fresh correlation key and redirects the caller to its
/// unique hostname.
#[instrument(skip(state, headers), name = "api_register_probe")]
pub async fn register_probe(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ApiError> {
    let host = request_host(&headers, &uri)
        .ok_or_else(|| DomainError::InvalidHost("missing Host header".to_string()))?;

    let registration = state
        .register_probe
        .execute(host, &remote.to_string())?;

    let location = format!(
        "{}://{}/feedback",
        request_scheme(&headers, &uri),
        registration.redirect_host
    );

    debug!(key = %registration.key, location = %location, "Redirecting to probe host");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
