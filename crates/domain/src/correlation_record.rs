use std::sync::Arc;
use std::time::{Duration, Instant};

/// One correlation unit, keyed by the fully qualified probe hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationRecord {
    pub key: Arc<str>,
    pub created_at: Instant,
    pub http_remote_addr: Option<String>,
    pub dns_remote_addr: Option<String>,
    pub edns_client_subnet: Option<String>,
}

impl CorrelationRecord {
    pub fn new(key: Arc<str>, created_at: Instant) -> Self {
        Self {
            key,
            created_at,
            http_remote_addr: None,
            dns_remote_addr: None,
            edns_client_subnet: None,
        }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// A record is stale once it has lived for the full window.
    pub fn is_expired(&self, now: Instant, max_age: Duration) -> bool {
        self.age(now) >= max_age
    }

    /// Last write wins; a missing subnet leaves the previous one in place.
    pub fn observe_dns(&mut self, peer: String, client_subnet: Option<String>) {
        self.dns_remote_addr = Some(peer);
        if let Some(subnet) = client_subnet {
            self.edns_client_subnet = Some(subnet);
        }
    }

    pub fn mark_consumed(&mut self, http_remote_addr: String) {
        self.http_remote_addr = Some(http_remote_addr);
    }
}
