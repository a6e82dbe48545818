//! BFS算法模块
//!
//! 包含无信息广度优先策略实现，距离语义为跳数

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::error::EngineResult;
use crate::graph::Graph;

use super::result::AlgorithmResult;
use super::{ensure_endpoints, reconstruct_path};

/// BFS策略结构体
pub struct Bfs;

impl Bfs {
    /// 使用BFS查找最短路径（按跳数度量）
    ///
    /// 节点在发现（入队）时标记已访问并记录前驱，保证不会重复入队；
    /// 访问轨迹则在出队瞬间记录。终点出队时立即终止，作为轨迹最后一项。
    pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> EngineResult<AlgorithmResult> {
        ensure_endpoints(graph, start, end)?;

        let mut queue: VecDeque<String> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut visited_order: Vec<String> = Vec::new();

        queue.push_back(start.to_string());
        visited.insert(start.to_string());

        while let Some(current) = queue.pop_front() {
            visited_order.push(current.clone());

            if current == end {
                break;
            }

            for (neighbor, _weight) in graph.neighbors(&current) {
                if !visited.contains(&neighbor) {
                    visited.insert(neighbor.clone());
                    predecessors.insert(neighbor.clone(), current.clone());
                    queue.push_back(neighbor);
                }
            }
        }

        let path = reconstruct_path(&predecessors, start, end);
        if path.is_empty() {
            return Ok(AlgorithmResult::unreachable(visited_order));
        }

        // BFS的距离语义是路径跳数，而非权重之和
        let distance = (path.len() - 1) as f64;
        Ok(AlgorithmResult {
            visited_order,
            path,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn diamond() -> Graph {
        let nodes = vec![
            Node::new("a", "A", 0.0, 0.0),
            Node::new("b", "B", 10.0, 0.0),
            Node::new("c", "C", 5.0, 8.0),
            Node::new("d", "D", 15.0, 8.0),
        ];
        let edges = vec![
            Edge::new("e1", "a", "b", 4.0),
            Edge::new("e2", "a", "c", 2.0),
            Edge::new("e3", "b", "c", 1.0),
            Edge::new("e4", "b", "d", 5.0),
            Edge::new("e5", "c", "d", 8.0),
        ];
        Graph::new(nodes, edges).expect("Graph should build in test")
    }

    #[test]
    fn test_shortest_path_by_hops() {
        let result = Bfs::shortest_path(&diamond(), "a", "d").expect("Path should exist in test");

        // BFS忽略权重，选跳数最少的路线
        assert_eq!(result.path, ids(&["a", "b", "d"]));
        assert_eq!(result.distance, 2.0);
    }

    #[test]
    fn test_visited_order_fifo() {
        let result = Bfs::shortest_path(&diamond(), "a", "d").expect("Path should exist in test");

        // 出队顺序：起点、按边表顺序发现的邻居、终点最后
        assert_eq!(result.visited_order, ids(&["a", "b", "c", "d"]));
        assert_eq!(result.visited_order.last().map(String::as_str), Some("d"));
    }

    #[test]
    fn test_same_node() {
        let result = Bfs::shortest_path(&diamond(), "a", "a").expect("Path should exist in test");
        assert_eq!(result.path, ids(&["a"]));
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.visited_order, ids(&["a"]));
    }

    #[test]
    fn test_no_path() {
        let nodes = vec![
            Node::new("a", "A", 0.0, 0.0),
            Node::new("b", "B", 1.0, 0.0),
            Node::new("x", "X", 9.0, 9.0),
        ];
        let edges = vec![Edge::new("e1", "a", "b", 1.0)];
        let graph = Graph::new(nodes, edges).expect("Graph should build in test");

        let result = Bfs::shortest_path(&graph, "a", "x").expect("Run should succeed in test");
        assert!(!result.is_reachable());
        assert!(result.distance.is_infinite());
        // 轨迹包含从起点可达的所有节点
        assert_eq!(result.visited_order, ids(&["a", "b"]));
    }

    #[test]
    fn test_self_loop_ignored() {
        let nodes = vec![Node::new("a", "A", 0.0, 0.0), Node::new("b", "B", 1.0, 0.0)];
        let edges = vec![
            Edge::new("e1", "a", "a", 3.0),
            Edge::new("e2", "a", "b", 1.0),
        ];
        let graph = Graph::new(nodes, edges).expect("Graph should build in test");

        let result = Bfs::shortest_path(&graph, "a", "b").expect("Path should exist in test");
        assert_eq!(result.path, ids(&["a", "b"]));
        assert_eq!(result.visited_order, ids(&["a", "b"]));
    }
}
