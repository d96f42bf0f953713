use super::Stores;
use std::sync::Arc;
use whois_dns_application::use_cases::{
    ConsumeFeedbackUseCase, ObserveDnsQueryUseCase, RegisterProbeUseCase,
    SweepExpiredRecordsUseCase,
};
use whois_dns_domain::Config;

pub struct UseCases {
    pub register_probe: Arc<RegisterProbeUseCase>,
    pub observe_dns: Arc<ObserveDnsQueryUseCase>,
    pub consume_feedback: Arc<ConsumeFeedbackUseCase>,
    pub sweep_expired: Arc<SweepExpiredRecordsUseCase>,
}

impl UseCases {
    pub fn new(stores: &Stores, config: &Config) -> Self {
        Self {
            register_probe: Arc::new(RegisterProbeUseCase::new(
                stores.records.clone(),
                stores.labels.clone(),
            )),
            observe_dns: Arc::new(ObserveDnsQueryUseCase::new(stores.records.clone())),
            consume_feedback: Arc::new(ConsumeFeedbackUseCase::new(stores.records.clone())),
            sweep_expired: Arc::new(SweepExpiredRecordsUseCase::new(
                stores.records.clone(),
                config.records.expire_window(),
            )),
        }
    }
}
