use std::time::SystemTime;
use whois_dns_domain::DomainError;

/// Per-request input mixed into a generated label.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    pub remote_addr: String,
    pub requested_at: SystemTime,
}

impl ProbeContext {
    pub fn new(remote_addr: impl Into<String>) -> Self {
        Self {
            remote_addr: remote_addr.into(),
            requested_at: SystemTime::now(),
        }
    }
}

/// Produces the DNS-safe label that makes a probe hostname unique.
pub trait LabelGenerator: Send + Sync {
    fn generate(&self, context: &ProbeContext) -> Result<String, DomainError>;
}
