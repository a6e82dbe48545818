//! 图构建错误类型
//!
//! 涵盖图模型构建校验相关的错误

use thiserror::Error;

/// 图构建结果类型别名
pub type GraphResult<T> = Result<T, GraphError>;

/// 图构建相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("节点ID重复: {0}")]
    DuplicateNodeId(String),

    #[error("边 {edge} 引用了不存在的节点: {node}")]
    UnknownEndpoint { edge: String, node: String },
}
