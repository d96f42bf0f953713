use std::sync::Arc;
use tracing::debug;
use whois_dns_domain::DnsObservation;

use crate::ports::CorrelationStore;

pub struct ObserveDnsQueryUseCase {
    store: Arc<dyn CorrelationStore>,
}

impl ObserveDnsQueryUseCase {
    pub fn new(store: Arc<dyn CorrelationStore>) -> Self {
        Self { store }
    }

    /// Unknown, expired and foreign names are a normal outcome and return `false`.
    pub fn execute(&self, observation: &DnsObservation) -> bool {
        let found = self.store.observe(observation);
        if found {
            debug!(
                name = %observation.name,
                peer = %observation.peer,
                client_subnet = ?observation.client_subnet,
                "Correlation record updated from DNS"
            );
        }
        found
    }
}
