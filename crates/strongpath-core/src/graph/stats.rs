//! Summary statistics for a graph.
//!
//! # Statistics Provided
//!
//! - **vertex_count** / **edge_count**.
//! - **density**: `edge_count / (vertex_count * (vertex_count - 1))`, the
//!   share of possible directed edges present. Zero for graphs with fewer
//!   than two vertices.
//! - **scc_count**: number of strongly connected components, via
//!   [`petgraph::algo::kosaraju_scc`]. Computed independently of the
//!   shortest-path engine, so it doubles as a check on the generator's
//!   connectivity guarantee.
//! - **is_strongly_connected**: `scc_count <= 1`.
//! - **max_in_degree** / **max_out_degree**.
//! - **total_weight**: sum of all edge weights.

use petgraph::Direction;
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::graph::model::{Graph, Weight};

/// Summary statistics for a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// `edge_count / (vertex_count * (vertex_count - 1))`.
    pub density: f64,
    /// Number of strongly connected components.
    pub scc_count: usize,
    /// `true` when every vertex reaches every other vertex.
    pub is_strongly_connected: bool,
    /// Highest number of incoming edges on one vertex.
    pub max_in_degree: usize,
    /// Highest number of outgoing edges from one vertex.
    pub max_out_degree: usize,
    /// Sum of all edge weights.
    pub total_weight: u64,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let dg = to_digraph(graph);

        let vertex_count = dg.node_count();
        let edge_count = dg.edge_count();
        let scc_count = kosaraju_scc(&dg).len();

        let degree = |direction: Direction| {
            dg.node_indices()
                .map(|idx| dg.neighbors_directed(idx, direction).count())
                .max()
                .unwrap_or(0)
        };

        Self {
            vertex_count,
            edge_count,
            density: compute_density(vertex_count, edge_count),
            scc_count,
            is_strongly_connected: scc_count <= 1,
            max_in_degree: degree(Direction::Incoming),
            max_out_degree: degree(Direction::Outgoing),
            total_weight: dg.edge_weights().map(|&w| u64::from(w)).sum(),
        }
    }
}

/// Copy `graph` into a petgraph [`DiGraph`]. Node `i` is the `i`-th vertex
/// in insertion order and carries the vertex label.
#[must_use]
pub fn to_digraph(graph: &Graph) -> DiGraph<&str, Weight> {
    let mut dg = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for vertex in graph.vertices() {
        dg.add_node(vertex);
    }
    for (src, edges) in graph.adjacency.iter().enumerate() {
        for edge in edges {
            dg.add_edge(NodeIndex::new(src), NodeIndex::new(edge.target), edge.weight);
        }
    }
    dg
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(vertex_count: usize, edge_count: usize) -> f64 {
    if vertex_count < 2 {
        return 0.0_f64;
    }
    let max_edges = vertex_count.saturating_mul(vertex_count - 1) as f64;
    edge_count as f64 / max_edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build::GraphBuilder;

    #[test]
    fn empty_graph_stats() {
        let stats = GraphStats::from_graph(&GraphBuilder::new().build());
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert_eq!(stats.scc_count, 0);
        assert!(stats.is_strongly_connected);
        assert!((stats.density - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_weight, 0);
    }

    #[test]
    fn three_cycle_is_one_component() {
        let g = GraphBuilder::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "A", 1)])
            .expect("valid");
        let stats = GraphStats::from_graph(&g);
        assert_eq!(stats.scc_count, 1);
        assert!(stats.is_strongly_connected);
        assert!((stats.density - 0.5).abs() < 1e-10, "3 / (3 * 2)");
        assert_eq!(stats.total_weight, 3);
    }

    #[test]
    fn chain_is_not_strongly_connected() {
        let g = GraphBuilder::from_edges([("A", "B", 1), ("B", "C", 2), ("C", "D", 3)])
            .expect("valid");
        let stats = GraphStats::from_graph(&g);
        assert_eq!(stats.scc_count, 4);
        assert!(!stats.is_strongly_connected);
        assert_eq!(stats.max_in_degree, 1);
        assert_eq!(stats.max_out_degree, 1);
        assert_eq!(stats.total_weight, 6);
    }

    #[test]
    fn density_of_huge_vertex_count_does_not_overflow() {
        let density = compute_density(usize::MAX, 10);
        assert!(density >= 0.0 && density < 1e-15);
    }

    #[test]
    fn hub_degrees() {
        let g = GraphBuilder::from_edges([("A", "C", 1), ("B", "C", 1), ("D", "C", 1), ("C", "E", 1)])
            .expect("valid");
        let stats = GraphStats::from_graph(&g);
        assert_eq!(stats.max_in_degree, 3);
        assert_eq!(stats.max_out_degree, 1);
    }

    #[test]
    fn digraph_preserves_labels_and_weights() {
        let g = GraphBuilder::from_edges([("A", "B", 4)]).expect("valid");
        let dg = to_digraph(&g);
        assert_eq!(dg[NodeIndex::new(0)], "A");
        assert_eq!(dg[NodeIndex::new(1)], "B");
        let edge = dg
            .find_edge(NodeIndex::new(0), NodeIndex::new(1))
            .expect("edge");
        assert_eq!(dg[edge], 4);
    }
}
