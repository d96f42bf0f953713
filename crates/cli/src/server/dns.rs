use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;
use whois_dns_domain::DomainError;
use whois_dns_infrastructure::dns::CorrelationDnsHandler;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: CorrelationDnsHandler,
    enable_tcp: bool,
) -> Result<(), DomainError> {
    info!(
        bind_address = %bind_addr,
        tcp = enable_tcp,
        answer = %handler.answer_address(),
        "Starting DNS server"
    );

    let mut server = ServerFuture::new(handler);
    server.register_socket(UdpSocket::bind(bind_addr).await.map_err(|e| {
        DomainError::TransportError(format!("DNS UDP bind {}: {}", bind_addr, e))
    })?);

    if enable_tcp {
        let listener = TcpListener::bind(bind_addr).await.map_err(|e| {
            DomainError::TransportError(format!("DNS TCP bind {}: {}", bind_addr, e))
        })?;
        server.register_listener(listener, TCP_TIMEOUT);
    }

    info!("DNS server ready on {}", bind_addr);

    server
        .block_until_done()
        .await
        .map_err(|e| DomainError::TransportError(format!("DNS server: {}", e)))
}
