//! 图模型核心模块
//!
//! 包含不可变图模型：节点、无向带权边，以及邻居查询

pub mod demo;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

/// 图节点
///
/// 坐标仅由启发式策略和展示层使用，无权/代价策略忽略它们。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }
}

/// 无向带权边
///
/// 权重必须非负；负权重是未检查的前置条件违规。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// 不可变图模型
///
/// 构建后只读；节点迭代顺序为插入顺序，保持稳定。
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
}

impl Graph {
    /// 构建图模型，校验节点ID唯一且所有边引用已存在的节点
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
        }

        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &edges {
            for endpoint in [edge.from.as_str(), edge.to.as_str()] {
                if !ids.contains(endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
        })
    }

    /// 按插入顺序返回全部节点
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 按ID查找节点
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 查询邻居：扫描边表，匹配任一端点，返回 (邻居ID, 边权重)
    ///
    /// 边是无向的，自环只产生一个指向自身的邻居。
    pub fn neighbors(&self, id: &str) -> Vec<(String, f64)> {
        let mut result = Vec::new();
        for edge in &self.edges {
            if edge.from == id {
                result.push((edge.to.clone(), edge.weight));
            } else if edge.to == id {
                result.push((edge.from.clone(), edge.weight));
            }
        }
        result
    }
}
