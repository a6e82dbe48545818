//! 引擎错误类型
//!
//! 涵盖最短路径策略执行相关的错误

use thiserror::Error;

/// 引擎操作结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;

/// 最短路径引擎相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("节点不存在: {0}")]
    NodeNotFound(String),
}
