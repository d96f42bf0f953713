use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use whois_dns_api::{create_probe_routes, AppState};
use whois_dns_domain::DomainError;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> Result<(), DomainError> {
    info!(bind_address = %bind_addr, "Starting web server");

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| DomainError::TransportError(format!("HTTP bind {}: {}", bind_addr, e)))?;

    info!("Web server started successfully");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| DomainError::TransportError(format!("HTTP server: {}", e)))
}

fn create_app(state: AppState) -> Router {
    create_probe_routes(state).layer(TraceLayer::new_for_http())
}
