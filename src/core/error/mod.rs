//! 统一错误处理系统 for Pathviz
//!
//! ## 设计理念
//!
//! 1. **按需设计**：根据错误复杂度选择合适的结构
//!    - 引擎错误和图构建错误使用枚举设计，简洁高效
//!    - 会话错误保留状态转换上下文，便于定位非法操作
//!
//! 2. **分层转换**：子模块错误使用 `#[from]` 注解自动转换为统一错误
//!
//! 3. **统一接口**：`PathvizResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

// 子模块
pub mod config;
pub mod engine;
pub mod graph;
pub mod session;

// 重新导出所有错误类型
pub use config::{ConfigError, ConfigResult};
pub use engine::{EngineError, EngineResult};
pub use graph::{GraphError, GraphResult};
pub use session::{SessionError, SessionResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum PathvizError {
    #[error("引擎错误: {0}")]
    Engine(#[from] EngineError),

    #[error("图构建错误: {0}")]
    Graph(#[from] GraphError),

    #[error("会话错误: {0}")]
    Session(#[from] SessionError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 统一的结果类型
pub type PathvizResult<T> = Result<T, PathvizError>;
