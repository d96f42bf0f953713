#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use whois_dns_application::ports::CorrelationStore;
use whois_dns_domain::{CorrelationRecord, DnsObservation, DomainError};

/// Store double that only tracks sweep activity.
pub struct CountingStore {
    sweep_calls: AtomicU64,
    pending_expired: AtomicUsize,
    last_max_age_ms: AtomicU64,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            sweep_calls: AtomicU64::new(0),
            pending_expired: AtomicUsize::new(0),
            last_max_age_ms: AtomicU64::new(0),
        }
    }

    pub fn with_expired(count: usize) -> Self {
        let store = Self::new();
        store.pending_expired.store(count, Ordering::Relaxed);
        store
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_calls.load(Ordering::Relaxed)
    }

    pub fn pending_expired(&self) -> usize {
        self.pending_expired.load(Ordering::Relaxed)
    }

    pub fn last_max_age(&self) -> Duration {
        Duration::from_millis(self.last_max_age_ms.load(Ordering::Relaxed))
    }
}

impl CorrelationStore for CountingStore {
    fn register(&self, _key: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn observe(&self, _observation: &DnsObservation) -> bool {
        false
    }

    fn consume(&self, _key: &str, _http_remote_addr: &str) -> Option<CorrelationRecord> {
        None
    }

    fn sweep(&self, _now: Instant, max_age: Duration) -> usize {
        self.sweep_calls.fetch_add(1, Ordering::Relaxed);
        self.last_max_age_ms
            .store(max_age.as_millis() as u64, Ordering::Relaxed);
        self.pending_expired.swap(0, Ordering::Relaxed)
    }

    fn active_count(&self) -> usize {
        0
    }

    fn capacity(&self) -> usize {
        0
    }
}
