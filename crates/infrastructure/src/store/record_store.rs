use ahash::RandomState;
use dashmap::{DashMap, Entry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use whois_dns_application::ports::CorrelationStore;
use whois_dns_domain::{normalize_fqdn, CorrelationRecord, DnsObservation, DomainError};

/// Capacity-bounded correlation table.
///
/// Records live in a sharded `DashMap`, so operations on different keys only
/// contend when they hash to the same shard. The live count is a slot counter
/// that is reserved with a CAS before insertion and released exactly once by
/// whichever call actually removed the entry (`consume` or `sweep`).
pub struct InMemoryRecordStore {
    records: DashMap<Arc<str>, CorrelationRecord, RandomState>,
    slots: AtomicUsize,
    limit: usize,
}

impl InMemoryRecordStore {
    pub fn new(limit: usize) -> Self {
        info!(limit, "Initializing correlation record store");

        Self {
            records: DashMap::with_hasher(RandomState::new()),
            slots: AtomicUsize::new(0),
            limit,
        }
    }

    /// Registers `key` as if it had been created at `created_at`.
    pub fn register_at(&self, key: &str, created_at: Instant) -> Result<(), DomainError> {
        let key: Arc<str> = Arc::from(normalize_fqdn(key));

        self.reserve_slot()?;

        match self.records.entry(Arc::clone(&key)) {
            Entry::Vacant(entry) => {
                entry.insert(CorrelationRecord::new(key, created_at));
                Ok(())
            }
            Entry::Occupied(_) => {
                self.release_slot();
                Err(DomainError::DuplicateKey(key.to_string()))
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<CorrelationRecord> {
        self.records
            .get(normalize_fqdn(key).as_str())
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn reserve_slot(&self) -> Result<(), DomainError> {
        self.slots
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |slots| {
                (slots < self.limit).then_some(slots + 1)
            })
            .map(|_| ())
            .map_err(|_| DomainError::CapacityExceeded { limit: self.limit })
    }

    fn release_slot(&self) {
        // Only reached after a successful reservation or removal, so the
        // counter is never zero here.
        self.slots.fetch_sub(1, Ordering::AcqRel);
    }
}

impl CorrelationStore for InMemoryRecordStore {
    fn register(&self, key: &str) -> Result<(), DomainError> {
        self.register_at(key, Instant::now())
    }

    fn observe(&self, observation: &DnsObservation) -> bool {
        match self.records.get_mut(&*observation.name) {
            Some(mut entry) => {
                entry.observe_dns(
                    observation.peer.to_string(),
                    observation.client_subnet.clone(),
                );
                true
            }
            None => false,
        }
    }

    fn consume(&self, key: &str, http_remote_addr: &str) -> Option<CorrelationRecord> {
        let (_, mut record) = self.records.remove(normalize_fqdn(key).as_str())?;
        self.release_slot();

        record.mark_consumed(http_remote_addr.to_string());
        Some(record)
    }

    fn sweep(&self, now: Instant, max_age: Duration) -> usize {
        // Collect first so no shard lock is held while removing.
        let stale: Vec<Arc<str>> = self
            .records
            .iter()
            .filter(|entry| entry.is_expired(now, max_age))
            .map(|entry| Arc::clone(entry.key()))
            .collect();

        let mut evicted = 0;
        for key in stale {
            if self
                .records
                .remove_if(&key, |_, record| record.is_expired(now, max_age))
                .is_some()
            {
                self.release_slot();
                evicted += 1;
                debug!(key = %key, "Correlation record expired");
            }
        }

        evicted
    }

    fn active_count(&self) -> usize {
        self.slots.load(Ordering::Acquire)
    }

    fn capacity(&self) -> usize {
        self.limit
    }
}
