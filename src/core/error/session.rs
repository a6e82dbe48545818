//! 会话错误类型
//!
//! 涵盖回放会话状态机相关的错误

use thiserror::Error;

/// 会话操作结果类型别名
pub type SessionResult<T> = Result<T, SessionError>;

/// 会话相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("非法状态转换: {operation} 不允许在 {from} 状态下执行")]
    InvalidTransition {
        from: &'static str,
        operation: &'static str,
    },

    #[error("无效配置: {0}")]
    InvalidConfiguration(String),

    #[error("节点不存在: {0}")]
    UnknownNode(String),
}
