use std::sync::Arc;
use tracing::{debug, instrument};
use whois_dns_domain::{feedback_key, validate_host, CorrelationRecord, DomainError};

use crate::ports::CorrelationStore;

pub struct ConsumeFeedbackUseCase {
    store: Arc<dyn CorrelationStore>,
}

impl ConsumeFeedbackUseCase {
    pub fn new(store: Arc<dyn CorrelationStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, host: &str, caller_addr: &str) -> Result<CorrelationRecord, DomainError> {
        validate_host(host)?;
        let key = feedback_key(host);

        let record = self
            .store
            .consume(&key, caller_addr)
            .ok_or_else(|| DomainError::RecordNotFound(key.clone()))?;

        debug!(
            key = %key,
            dns_remote_addr = ?record.dns_remote_addr,
            edns_client_subnet = ?record.edns_client_subnet,
            "Correlation record consumed"
        );

        Ok(record)
    }
}
