//! 内置演示图数据
//!
//! 26个节点、70条无向带权边的演示数据集，用于示例程序与集成测试。
//! A 到 Z 的最优路径为 A-F-L-Q-Z，总代价 32；其余路线均更长。

use super::{Edge, Graph, Node};

/// 演示图的默认起点
pub const DEMO_START: &str = "A";
/// 演示图的默认终点
pub const DEMO_END: &str = "Z";

/// 构建内置演示图
pub fn demo_graph() -> Graph {
    let nodes = vec![
        // 最优链路节点
        Node::new("A", "A", 80.0, 300.0),
        Node::new("F", "F", 220.0, 280.0),
        Node::new("L", "L", 380.0, 260.0),
        Node::new("Q", "Q", 540.0, 280.0),
        Node::new("Z", "Z", 720.0, 300.0),
        // 起点附近
        Node::new("B", "B", 120.0, 180.0),
        Node::new("C", "C", 140.0, 420.0),
        Node::new("D", "D", 180.0, 120.0),
        Node::new("E", "E", 160.0, 500.0),
        // 前中段
        Node::new("G", "G", 260.0, 160.0),
        Node::new("H", "H", 280.0, 400.0),
        Node::new("I", "I", 240.0, 520.0),
        Node::new("J", "J", 300.0, 80.0),
        // 中段
        Node::new("K", "K", 340.0, 140.0),
        Node::new("M", "M", 420.0, 380.0),
        Node::new("N", "N", 360.0, 480.0),
        Node::new("O", "O", 440.0, 100.0),
        // 后中段
        Node::new("P", "P", 500.0, 160.0),
        Node::new("R", "R", 580.0, 400.0),
        Node::new("S", "S", 520.0, 480.0),
        Node::new("T", "T", 600.0, 100.0),
        // 终点附近
        Node::new("U", "U", 640.0, 180.0),
        Node::new("V", "V", 660.0, 420.0),
        Node::new("W", "W", 700.0, 500.0),
        Node::new("X", "X", 680.0, 80.0),
        Node::new("Y", "Y", 760.0, 180.0),
    ];

    let edges = vec![
        // 最优链路: A-F-L-Q-Z，总计 32
        Edge::new("e1", "A", "F", 8.0),
        Edge::new("e2", "F", "L", 7.0),
        Edge::new("e3", "L", "Q", 9.0),
        Edge::new("e4", "Q", "Z", 8.0),
        // A 的其他出边
        Edge::new("e5", "A", "B", 5.0),
        Edge::new("e6", "A", "C", 9.0),
        Edge::new("e7", "A", "D", 6.0),
        Edge::new("e8", "A", "E", 11.0),
        // B
        Edge::new("e9", "B", "D", 4.0),
        Edge::new("e10", "B", "F", 7.0),
        Edge::new("e11", "B", "G", 6.0),
        // C
        Edge::new("e12", "C", "E", 5.0),
        Edge::new("e13", "C", "H", 7.0),
        Edge::new("e14", "C", "I", 8.0),
        // D
        Edge::new("e15", "D", "J", 5.0),
        Edge::new("e16", "D", "G", 6.0),
        Edge::new("e17", "D", "K", 7.0),
        // E
        Edge::new("e18", "E", "I", 6.0),
        Edge::new("e19", "E", "H", 8.0),
        // G
        Edge::new("e20", "G", "J", 5.0),
        Edge::new("e21", "G", "K", 4.0),
        Edge::new("e22", "G", "F", 8.0),
        // H
        Edge::new("e23", "H", "M", 6.0),
        Edge::new("e24", "H", "N", 5.0),
        Edge::new("e25", "H", "L", 10.0),
        // I
        Edge::new("e26", "I", "N", 7.0),
        Edge::new("e27", "I", "M", 8.0),
        // J
        Edge::new("e28", "J", "K", 6.0),
        Edge::new("e29", "J", "O", 7.0),
        // K
        Edge::new("e30", "K", "O", 5.0),
        Edge::new("e31", "K", "L", 9.0),
        // L
        Edge::new("e32", "L", "M", 8.0),
        Edge::new("e33", "L", "P", 10.0),
        Edge::new("e34", "L", "O", 7.0),
        // M
        Edge::new("e35", "M", "N", 5.0),
        Edge::new("e36", "M", "R", 7.0),
        Edge::new("e37", "M", "Q", 11.0),
        // N
        Edge::new("e38", "N", "S", 6.0),
        Edge::new("e39", "N", "R", 8.0),
        // O
        Edge::new("e40", "O", "P", 6.0),
        Edge::new("e41", "O", "T", 7.0),
        // P
        Edge::new("e42", "P", "Q", 10.0),
        Edge::new("e43", "P", "T", 6.0),
        Edge::new("e44", "P", "U", 7.0),
        // Q
        Edge::new("e45", "Q", "R", 9.0),
        Edge::new("e46", "Q", "U", 10.0),
        Edge::new("e47", "Q", "Y", 12.0),
        // R
        Edge::new("e48", "R", "S", 6.0),
        Edge::new("e49", "R", "V", 7.0),
        Edge::new("e50", "R", "Z", 11.0),
        // S
        Edge::new("e51", "S", "V", 6.0),
        Edge::new("e52", "S", "W", 8.0),
        // T
        Edge::new("e53", "T", "X", 5.0),
        Edge::new("e54", "T", "U", 6.0),
        // U
        Edge::new("e55", "U", "Y", 7.0),
        Edge::new("e56", "U", "X", 6.0),
        Edge::new("e57", "U", "V", 9.0),
        // V
        Edge::new("e58", "V", "W", 5.0),
        Edge::new("e59", "V", "Z", 9.0),
        // W
        Edge::new("e60", "W", "Z", 10.0),
        // X
        Edge::new("e61", "X", "Y", 6.0),
        Edge::new("e62", "X", "Z", 12.0),
        // Y
        Edge::new("e63", "Y", "Z", 11.0),
        // 跨层连接
        Edge::new("e64", "B", "K", 12.0),
        Edge::new("e65", "C", "M", 14.0),
        Edge::new("e66", "D", "O", 13.0),
        Edge::new("e67", "E", "S", 16.0),
        Edge::new("e68", "G", "P", 11.0),
        Edge::new("e69", "J", "T", 10.0),
        Edge::new("e70", "N", "V", 12.0),
    ];

    Graph::new(nodes, edges).expect("demo graph data is statically valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_graph_shape() {
        let graph = demo_graph();
        assert_eq!(graph.node_count(), 26);
        assert_eq!(graph.edges().len(), 70);
        assert!(graph.contains_node(DEMO_START));
        assert!(graph.contains_node(DEMO_END));
    }

    #[test]
    fn test_demo_graph_connected_at_endpoints() {
        let graph = demo_graph();
        assert_eq!(graph.neighbors(DEMO_START).len(), 5);
        assert!(!graph.neighbors(DEMO_END).is_empty());
    }
}
