//! whois-dns domain layer
pub mod config;
pub mod correlation_key;
pub mod correlation_record;
pub mod dns_observation;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use correlation_key::{feedback_key, normalize_fqdn, probe_key, strip_port, validate_host};
pub use correlation_record::CorrelationRecord;
pub use dns_observation::DnsObservation;
pub use errors::DomainError;
