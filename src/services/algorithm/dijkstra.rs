//! Dijkstra算法模块
//!
//! 包含带权图最短路径策略实现，距离语义为路径权重之和

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::error::EngineResult;
use crate::graph::Graph;

use super::result::AlgorithmResult;
use super::{ensure_endpoints, reconstruct_path};

/// Dijkstra策略结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
///
/// 反转比较构成最小堆；距离相等时节点ID小者优先，构成确定性的平局规则。
#[derive(Debug, Clone, PartialEq)]
struct NodeDistance {
    node: String,
    distance: f64,
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 查找从起点到终点的最短路径
    ///
    /// 节点在最终确定（出堆）瞬间记录到访问轨迹；终点被确定时立即终止，
    /// 堆耗尽而终点未确定即为不可达。
    pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> EngineResult<AlgorithmResult> {
        ensure_endpoints(graph, start, end)?;

        let mut distances: HashMap<String, f64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut finalized: HashSet<String> = HashSet::new();
        let mut to_visit: BinaryHeap<NodeDistance> = BinaryHeap::new();
        let mut visited_order: Vec<String> = Vec::new();

        // 初始化距离
        for node in graph.nodes() {
            distances.insert(node.id.clone(), AlgorithmResult::UNREACHABLE);
        }
        distances.insert(start.to_string(), 0.0);

        to_visit.push(NodeDistance {
            node: start.to_string(),
            distance: 0.0,
        });

        while let Some(NodeDistance { node, distance }) = to_visit.pop() {
            if finalized.contains(&node) {
                continue;
            }

            finalized.insert(node.clone());
            visited_order.push(node.clone());

            if node == end {
                let path = reconstruct_path(&predecessors, start, end);
                return Ok(AlgorithmResult {
                    visited_order,
                    path,
                    distance,
                });
            }

            for (neighbor, weight) in graph.neighbors(&node) {
                if finalized.contains(&neighbor) {
                    continue;
                }

                let new_distance = distance + weight;
                if new_distance < *distances.get(&neighbor).unwrap_or(&AlgorithmResult::UNREACHABLE)
                {
                    distances.insert(neighbor.clone(), new_distance);
                    predecessors.insert(neighbor.clone(), node.clone());
                    to_visit.push(NodeDistance {
                        node: neighbor,
                        distance: new_distance,
                    });
                }
            }
        }

        // 堆耗尽：终点不可达
        Ok(AlgorithmResult::unreachable(visited_order))
    }
}
