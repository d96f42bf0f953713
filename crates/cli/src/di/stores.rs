use std::sync::Arc;
use whois_dns_application::ports::{CorrelationStore, LabelGenerator};
use whois_dns_domain::Config;
use whois_dns_infrastructure::labels::SecureLabelGenerator;
use whois_dns_infrastructure::store::InMemoryRecordStore;

pub struct Stores {
    pub records: Arc<dyn CorrelationStore>,
    pub labels: Arc<dyn LabelGenerator>,
}

impl Stores {
    pub fn new(config: &Config) -> Self {
        Self {
            records: Arc::new(InMemoryRecordStore::new(config.records.max_active)),
            labels: Arc::new(SecureLabelGenerator::new()),
        }
    }
}
