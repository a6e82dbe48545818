//! A*算法模块
//!
//! 包含启发式最短路径策略实现，启发式为按比例缩放的欧几里得直线距离

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::error::{EngineError, EngineResult};
use crate::graph::{Graph, Node};

use super::reconstruct_path;
use super::result::AlgorithmResult;

/// 默认启发式缩放因子
///
/// 与内置演示图的坐标尺度匹配，使启发式量级与典型边权相当；
/// 坐标尺度不同的图应通过 [`AStar::with_heuristic_scale`] 自行调整。
pub const DEFAULT_HEURISTIC_SCALE: f64 = 100.0;

/// A*策略结构体
pub struct AStar;

/// A*候选节点结构体，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    node: String,
    /// 从起点到当前节点的实际代价
    g_score: f64,
    /// g_score 加启发式估计
    f_score: f64,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：f_score小的优先，相等时节点ID小者优先
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 缩放后的欧几里得直线距离估计
fn heuristic(node: &Node, goal: &Node, scale: f64) -> f64 {
    let dx = node.x - goal.x;
    let dy = node.y - goal.y;
    (dx * dx + dy * dy).sqrt() / scale
}

impl AStar {
    /// 使用默认缩放因子查找最短路径
    pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> EngineResult<AlgorithmResult> {
        Self::with_heuristic_scale(graph, start, end, DEFAULT_HEURISTIC_SCALE)
    }

    /// 使用指定启发式缩放因子查找最短路径
    ///
    /// `scale` 必须为正数。缩放后的启发式不高估实际代价时，
    /// 结果与 Dijkstra 的总权重一致。候选节点在被选中的瞬间记录到
    /// 访问轨迹；选中终点时立即终止。
    pub fn with_heuristic_scale(
        graph: &Graph,
        start: &str,
        end: &str,
        scale: f64,
    ) -> EngineResult<AlgorithmResult> {
        let start_node = graph
            .node(start)
            .ok_or_else(|| EngineError::NodeNotFound(start.to_string()))?;
        let goal = graph
            .node(end)
            .ok_or_else(|| EngineError::NodeNotFound(end.to_string()))?;

        let mut g_scores: HashMap<String, f64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut closed: HashSet<String> = HashSet::new();
        let mut open: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut visited_order: Vec<String> = Vec::new();

        // 初始化代价
        for node in graph.nodes() {
            g_scores.insert(node.id.clone(), AlgorithmResult::UNREACHABLE);
        }
        g_scores.insert(start.to_string(), 0.0);

        open.push(Candidate {
            node: start.to_string(),
            g_score: 0.0,
            f_score: heuristic(start_node, goal, scale),
        });

        while let Some(current) = open.pop() {
            if closed.contains(&current.node) {
                continue;
            }

            visited_order.push(current.node.clone());

            if current.node == end {
                let path = reconstruct_path(&predecessors, start, end);
                return Ok(AlgorithmResult {
                    visited_order,
                    path,
                    distance: current.g_score,
                });
            }

            closed.insert(current.node.clone());

            for (neighbor, weight) in graph.neighbors(&current.node) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current.g_score + weight;
                if tentative_g
                    < *g_scores.get(&neighbor).unwrap_or(&AlgorithmResult::UNREACHABLE)
                {
                    predecessors.insert(neighbor.clone(), current.node.clone());
                    g_scores.insert(neighbor.clone(), tentative_g);

                    // 图构建已校验端点存在，此处回退到0只是兜底
                    let h = graph
                        .node(&neighbor)
                        .map(|n| heuristic(n, goal, scale))
                        .unwrap_or(0.0);
                    open.push(Candidate {
                        node: neighbor,
                        g_score: tentative_g,
                        f_score: tentative_g + h,
                    });
                }
            }
        }

        // 边界耗尽：终点不可达
        Ok(AlgorithmResult::unreachable(visited_order))
    }
}
