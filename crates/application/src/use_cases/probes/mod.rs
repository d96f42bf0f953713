mod consume_feedback;
mod observe_dns_query;
mod register_probe;
mod sweep_expired;

pub use consume_feedback::ConsumeFeedbackUseCase;
pub use observe_dns_query::ObserveDnsQueryUseCase;
pub use register_probe::{ProbeRegistration, RegisterProbeUseCase};
pub use sweep_expired::{SweepExpiredRecordsUseCase, SweepOutcome};
