use ring::rand::{SecureRandom, SystemRandom};
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::time::UNIX_EPOCH;
use whois_dns_application::ports::{LabelGenerator, ProbeContext};
use whois_dns_domain::DomainError;

/// Hex characters in every generated label.
pub const LABEL_LEN: usize = 32;

const RANDOM_BYTES: usize = 16;

/// Label generator backed by the operating system CSPRNG.
///
/// Each label hashes 128 fresh random bits together with the request
/// context, so knowing the request time or address does not help predict it.
pub struct SecureLabelGenerator {
    rng: SystemRandom,
}

impl SecureLabelGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SecureLabelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelGenerator for SecureLabelGenerator {
    fn generate(&self, context: &ProbeContext) -> Result<String, DomainError> {
        let mut entropy = [0u8; RANDOM_BYTES];
        self.rng
            .fill(&mut entropy)
            .map_err(|_| DomainError::EntropyUnavailable)?;

        let requested_at = context
            .requested_at
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let mut hasher = Sha256::new();
        hasher.update(entropy);
        hasher.update(context.remote_addr.as_bytes());
        hasher.update(requested_at.to_be_bytes());
        let digest = hasher.finalize();

        let mut label = String::with_capacity(LABEL_LEN);
        for byte in &digest[..LABEL_LEN / 2] {
            let _ = write!(label, "{:02x}", byte);
        }
        Ok(label)
    }
}
