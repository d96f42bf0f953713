use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_listen: String,

    pub dns_listen: String,

    /// Also serve DNS over TCP on `dns_listen`.
    pub dns_tcp: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_listen: "0.0.0.0:80".to_string(),
            dns_listen: "0.0.0.0:53".to_string(),
            dns_tcp: false,
        }
    }
}
