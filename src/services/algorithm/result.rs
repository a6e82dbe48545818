//! 算法结果契约
//!
//! `visited_order` 即回放轨迹：按策略最终确定节点的精确顺序记录，
//! 下游回放依赖该顺序，禁止去重、缓冲或重排。

use serde::{Deserialize, Serialize};

/// 一次最短路径运行的完整结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// 节点最终确定（出队）顺序，无重复，长度不超过节点总数
    pub visited_order: Vec<String>,
    /// 起点到终点的完整路径（含两端）；不可达时为空
    pub path: Vec<String>,
    /// 按策略自身语义计算的总代价；不可达时为正无穷哨兵值
    pub distance: f64,
}

impl AlgorithmResult {
    /// 不可达哨兵距离
    pub const UNREACHABLE: f64 = f64::INFINITY;

    /// 构造不可达结果：空路径加哨兵距离
    pub fn unreachable(visited_order: Vec<String>) -> Self {
        Self {
            visited_order,
            path: Vec::new(),
            distance: Self::UNREACHABLE,
        }
    }

    /// 终点是否可达
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}
