use std::time::{Duration, Instant};
use whois_dns_domain::{CorrelationRecord, DnsObservation, DomainError};

/// Port for the shared correlation record table.
///
/// Every method is a single atomic step with respect to other calls on the
/// same key; implementations must keep the active count consistent with
/// inserts and removals under concurrency.
pub trait CorrelationStore: Send + Sync {
    /// Inserts a fresh record stamped with the current time.
    ///
    /// Fails with `CapacityExceeded` when the limit is reached and with
    /// `DuplicateKey` when the key is already live; neither mutates the store.
    fn register(&self, key: &str) -> Result<(), DomainError>;

    /// Records the resolving peer for a live key. Returns whether the key existed.
    fn observe(&self, observation: &DnsObservation) -> bool;

    /// Removes the record, stamping the HTTP caller address on the returned snapshot.
    fn consume(&self, key: &str, http_remote_addr: &str) -> Option<CorrelationRecord>;

    /// Evicts every record at least `max_age` old at `now`; returns how many were removed.
    fn sweep(&self, now: Instant, max_age: Duration) -> usize;

    fn active_count(&self) -> usize;

    fn capacity(&self) -> usize;
}
