//! 配置错误类型
//!
//! 涵盖配置文件加载与校验相关的错误

use thiserror::Error;

/// 配置操作结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置相关错误
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(String),

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("序列化错误: {0}")]
    Serialize(String),

    #[error("未知算法: {0}")]
    UnknownAlgorithm(String),

    #[error("无效配置项 {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}
