use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "whois-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/whois-dns/config.toml";

/// Main configuration structure for whois-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen addresses for the HTTP and DNS sides
    #[serde(default)]
    pub server: ServerConfig,

    /// Synthesized answer settings
    #[serde(default)]
    pub dns: DnsConfig,

    /// Correlation record limits and expiry
    #[serde(default)]
    pub records: RecordsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. whois-dns.toml in current directory
    /// 3. /etc/whois-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(addr) = overrides.http_listen {
            self.server.http_listen = addr;
        }
        if let Some(addr) = overrides.dns_listen {
            self.server.dns_listen = addr;
        }
        if overrides.dns_tcp {
            self.server.dns_tcp = true;
        }
        if let Some(address) = overrides.answer_address {
            self.dns.answer_address = Some(address);
        }
        if let Some(max_active) = overrides.max_active {
            self.records.max_active = max_active;
        }
        if let Some(secs) = overrides.expire_secs {
            self.records.expire_secs = secs;
        }
        if let Some(secs) = overrides.sweep_interval_secs {
            self.records.sweep_interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.verbose {
            self.logging.verbose = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_listen(&self.server.http_listen, "HTTP")?;
        parse_listen(&self.server.dns_listen, "DNS")?;

        if self.records.max_active == 0 {
            return Err(ConfigError::Validation(
                "Active record limit cannot be 0".to_string(),
            ));
        }
        if self.records.expire_secs == 0 {
            return Err(ConfigError::Validation(
                "Record expiry window cannot be 0".to_string(),
            ));
        }
        if self.records.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Sweep interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn http_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen(&self.server.http_listen, "HTTP")
    }

    pub fn dns_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen(&self.server.dns_listen, "DNS")
    }
}

/// Accepts `host:port` as well as the bare `:port` shorthand.
fn parse_listen(addr: &str, label: &str) -> Result<SocketAddr, ConfigError> {
    let candidate = if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    };

    candidate.parse().map_err(|_| {
        ConfigError::Validation(format!("Invalid {} listen address: {}", label, addr))
    })
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub http_listen: Option<String>,
    pub dns_listen: Option<String>,
    pub dns_tcp: bool,
    pub answer_address: Option<Ipv4Addr>,
    pub max_active: Option<usize>,
    pub expire_secs: Option<u64>,
    pub sweep_interval_secs: Option<u64>,
    pub log_level: Option<String>,
    pub verbose: bool,
}
