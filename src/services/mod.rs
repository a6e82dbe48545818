//! 服务层模块
//!
//! 包含最短路径策略与回放会话服务

pub mod algorithm;
pub mod pacer;
pub mod session;

// 重新导出常用服务类型
pub use algorithm::{AStar, Algorithm, AlgorithmResult, Bfs, Dijkstra};
pub use pacer::{ReplayPacer, TokioPacer};
pub use session::{Mode, PlaybackSession, SessionOptions, SessionSnapshot, SpeedPreset};
