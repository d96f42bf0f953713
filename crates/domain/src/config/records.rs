use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    #[serde(default = "default_max_active")]
    pub max_active: usize,

    #[serde(default = "default_expire_secs")]
    pub expire_secs: u64,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl RecordsConfig {
    pub fn expire_window(&self) -> Duration {
        Duration::from_secs(self.expire_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_active: default_max_active(),
            expire_secs: default_expire_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_max_active() -> usize {
    500_000
}

fn default_expire_secs() -> u64 {
    5
}

fn default_sweep_interval_secs() -> u64 {
    5
}
