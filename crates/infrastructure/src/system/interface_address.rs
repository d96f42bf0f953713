use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, warn};
use whois_dns_domain::DomainError;

/// First non-loopback, non-link-local IPv4 address among the host's interfaces.
pub fn detect_answer_address() -> Result<Ipv4Addr, DomainError> {
    let interfaces = local_ip_address::list_afinet_netifas().map_err(|e| {
        warn!(error = %e, "Failed to enumerate network interfaces");
        DomainError::NoUsableAddress
    })?;

    first_usable_ipv4(interfaces).ok_or(DomainError::NoUsableAddress)
}

pub fn first_usable_ipv4<I>(interfaces: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = (String, IpAddr)>,
{
    interfaces.into_iter().find_map(|(name, ip)| match ip {
        IpAddr::V4(ipv4)
            if !ipv4.is_loopback() && !ipv4.is_unspecified() && !ipv4.is_link_local() =>
        {
            debug!(interface = %name, address = %ipv4, "Using interface address for A answers");
            Some(ipv4)
        }
        _ => None,
    })
}
