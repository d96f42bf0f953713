pub mod probes;

pub use probes::{
    ConsumeFeedbackUseCase, ObserveDnsQueryUseCase, ProbeRegistration, RegisterProbeUseCase,
    SweepExpiredRecordsUseCase, SweepOutcome,
};
