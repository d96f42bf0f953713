use tracing::info;
use whois_dns_domain::{CliOverrides, Config, DomainError};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, DomainError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        http_listen = %config.server.http_listen,
        dns_listen = %config.server.dns_listen,
        dns_tcp = config.server.dns_tcp,
        max_active = config.records.max_active,
        expire_secs = config.records.expire_secs,
        sweep_interval_secs = config.records.sweep_interval_secs,
        "Configuration loaded"
    );
}
