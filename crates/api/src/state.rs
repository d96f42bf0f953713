use std::sync::Arc;
use whois_dns_application::use_cases::{ConsumeFeedbackUseCase, RegisterProbeUseCase};

#[derive(Clone)]
pub struct AppState {
    pub register_probe: Arc<RegisterProbeUseCase>,
    pub consume_feedback: Arc<ConsumeFeedbackUseCase>,
}
