//! 最短路径策略模块
//!
//! 包含三种可互换的搜索策略实现，共享同一结果契约

pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod result;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, EngineError, EngineResult};
use crate::graph::Graph;

// 重新导出常用策略结构体
pub use astar::{AStar, DEFAULT_HEURISTIC_SCALE};
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
pub use result::AlgorithmResult;

/// 搜索策略选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// 以默认参数执行所选策略
    pub fn execute(&self, graph: &Graph, start: &str, end: &str) -> EngineResult<AlgorithmResult> {
        self.execute_scaled(graph, start, end, DEFAULT_HEURISTIC_SCALE)
    }

    /// 执行所选策略；`heuristic_scale` 仅被启发式策略使用
    pub fn execute_scaled(
        &self,
        graph: &Graph,
        start: &str,
        end: &str,
        heuristic_scale: f64,
    ) -> EngineResult<AlgorithmResult> {
        match self {
            Algorithm::Bfs => Bfs::shortest_path(graph, start, end),
            Algorithm::Dijkstra => Dijkstra::shortest_path(graph, start, end),
            Algorithm::AStar => AStar::with_heuristic_scale(graph, start, end, heuristic_scale),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// 校验起终点均存在；失败立即返回，不产生任何部分结果
pub(crate) fn ensure_endpoints(graph: &Graph, start: &str, end: &str) -> EngineResult<()> {
    for id in [start, end] {
        if !graph.contains_node(id) {
            return Err(EngineError::NodeNotFound(id.to_string()));
        }
    }
    Ok(())
}

/// 从前驱表回溯重建路径：自终点回溯至起点后反转
///
/// 前驱链无法回到起点时返回空路径，表示不可达。
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    start: &str,
    end: &str,
) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;

    while current != start {
        match predecessors.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
