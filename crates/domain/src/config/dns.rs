use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// TTL carried by every synthesized answer, so resolvers never cache a probe name.
pub const ANSWER_TTL: u32 = 0;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DnsConfig {
    /// Address returned in every A answer. Detected from the host's
    /// interfaces when unset.
    pub answer_address: Option<Ipv4Addr>,
}
