use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, ConfigResult};
use crate::services::algorithm::Algorithm;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub algorithm: String,
    pub speed_ms: u64,
    pub heuristic_scale: f64,
    pub start_node: String,
    pub end_node: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: "dijkstra".to_string(),
            speed_ms: 300,
            heuristic_scale: 100.0,
            start_node: "A".to_string(),
            end_node: "Z".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 解析所配置的策略名称
    pub fn algorithm(&self) -> ConfigResult<Algorithm> {
        self.algorithm.parse()
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.speed_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "speed_ms",
                reason: "replay interval must be positive".to_string(),
            });
        }
        if self.heuristic_scale <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "heuristic_scale",
                reason: "heuristic scale must be positive".to_string(),
            });
        }
        self.algorithm()?;
        Ok(())
    }
}
