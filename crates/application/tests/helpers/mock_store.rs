#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use whois_dns_application::ports::{CorrelationStore, LabelGenerator, ProbeContext};
use whois_dns_domain::{CorrelationRecord, DnsObservation, DomainError};

/// Single-lock store; good enough to drive use cases deterministically.
pub struct MockCorrelationStore {
    records: Mutex<HashMap<String, CorrelationRecord>>,
    limit: usize,
    sweep_calls: AtomicU64,
}

impl MockCorrelationStore {
    pub fn new(limit: usize) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            limit,
            sweep_calls: AtomicU64::new(0),
        }
    }

    pub fn insert_at(&self, key: &str, created_at: Instant) {
        self.records.lock().unwrap().insert(
            key.to_string(),
            CorrelationRecord::new(Arc::from(key), created_at),
        );
    }

    pub fn get(&self, key: &str) -> Option<CorrelationRecord> {
        self.records.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.records.lock().unwrap().keys().cloned().collect()
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_calls.load(Ordering::Relaxed)
    }
}

impl CorrelationStore for MockCorrelationStore {
    fn register(&self, key: &str) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        if records.len() >= self.limit {
            return Err(DomainError::CapacityExceeded { limit: self.limit });
        }
        if records.contains_key(key) {
            return Err(DomainError::DuplicateKey(key.to_string()));
        }
        records.insert(
            key.to_string(),
            CorrelationRecord::new(Arc::from(key), Instant::now()),
        );
        Ok(())
    }

    fn observe(&self, observation: &DnsObservation) -> bool {
        match self.records.lock().unwrap().get_mut(&*observation.name) {
            Some(record) => {
                record.observe_dns(
                    observation.peer.to_string(),
                    observation.client_subnet.clone(),
                );
                true
            }
            None => false,
        }
    }

    fn consume(&self, key: &str, http_remote_addr: &str) -> Option<CorrelationRecord> {
        let mut record = self.records.lock().unwrap().remove(key)?;
        record.mark_consumed(http_remote_addr.to_string());
        Some(record)
    }

    fn sweep(&self, now: Instant, max_age: Duration) -> usize {
        self.sweep_calls.fetch_add(1, Ordering::Relaxed);
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now, max_age));
        before - records.len()
    }

    fn active_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn capacity(&self) -> usize {
        self.limit
    }
}

/// Hands out a fixed sequence of labels, repeating the last one when exhausted.
pub struct SequenceLabelGenerator {
    labels: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    contexts: Mutex<Vec<ProbeContext>>,
}

impl SequenceLabelGenerator {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            labels: Mutex::new(labels.iter().map(|l| l.to_string()).collect()),
            last: Mutex::new(labels.last().map(|l| l.to_string()).unwrap_or_default()),
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.contexts.lock().unwrap().len()
    }

    pub fn last_remote_addr(&self) -> Option<String> {
        self.contexts
            .lock()
            .unwrap()
            .last()
            .map(|c| c.remote_addr.clone())
    }
}

impl LabelGenerator for SequenceLabelGenerator {
    fn generate(&self, context: &ProbeContext) -> Result<String, DomainError> {
        self.contexts.lock().unwrap().push(context.clone());
        match self.labels.lock().unwrap().pop_front() {
            Some(label) => Ok(label),
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }
}
