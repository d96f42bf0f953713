mod correlation_store;
mod label_generator;

pub use correlation_store::CorrelationStore;
pub use label_generator::{LabelGenerator, ProbeContext};
