use std::sync::Arc;
use tracing::{debug, instrument, warn};
use whois_dns_domain::{probe_key, validate_host, DomainError};

use crate::ports::{CorrelationStore, LabelGenerator, ProbeContext};

/// Generation attempts before a label collision is reported to the caller.
const MAX_LABEL_ATTEMPTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRegistration {
    pub label: String,
    pub key: String,
    /// Host the client should be redirected to (`label.host`, port preserved).
    pub redirect_host: String,
}

pub struct RegisterProbeUseCase {
    store: Arc<dyn CorrelationStore>,
    generator: Arc<dyn LabelGenerator>,
}

impl RegisterProbeUseCase {
    pub fn new(store: Arc<dyn CorrelationStore>, generator: Arc<dyn LabelGenerator>) -> Self {
        Self { store, generator }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, host: &str, remote_addr: &str) -> Result<ProbeRegistration, DomainError> {
        validate_host(host)?;
        let host = host.trim();

        let mut last_error = None;
        for _ in 0..MAX_LABEL_ATTEMPTS {
            let label = self.generator.generate(&ProbeContext::new(remote_addr))?;
            let key = probe_key(&label, host);

            match self.store.register(&key) {
                Ok(()) => {
                    debug!(key = %key, active = self.store.active_count(), "Correlation record created");
                    return Ok(ProbeRegistration {
                        redirect_host: format!("{}.{}", label, host),
                        label,
                        key,
                    });
                }
                Err(DomainError::DuplicateKey(key)) => {
                    warn!(key = %key, "Generated label collided with a live record");
                    last_error = Some(DomainError::DuplicateKey(key));
                }
                Err(e) => {
                    debug!(error = %e, limit = self.store.capacity(), "Correlation record rejected");
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or(DomainError::EntropyUnavailable))
    }
}
