use std::net::IpAddr;
use std::sync::Arc;

use crate::correlation_key::normalize_fqdn;

/// A single DNS question as seen by the correlation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsObservation {
    pub name: Arc<str>,
    pub peer: IpAddr,
    /// `addr/source-prefix`, present only when the query carried the
    /// EDNS0 client-subnet option.
    pub client_subnet: Option<String>,
}

impl DnsObservation {
    pub fn new(name: &str, peer: IpAddr, client_subnet: Option<String>) -> Self {
        Self {
            name: Arc::from(normalize_fqdn(name)),
            peer,
            client_subnet,
        }
    }
}
