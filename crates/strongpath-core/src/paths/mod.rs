//! Shortest-path engine.
//!
//! ```text
//! Graph ──dijkstra(source)──▶ ShortestPaths { DistanceMap, PredecessorMap }
//!                                   │
//!                                   ├─ reconstruct_path ─▶ [source, …, target]
//!                                   └─ metrics::eccentricity / radius / diameter
//! ```

pub mod dijkstra;
pub mod reconstruct;

use serde::Serialize;
use tracing::instrument;

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;

pub use dijkstra::{DistanceMap, PredecessorMap, ShortestPaths, dijkstra};
pub use reconstruct::reconstruct_path;

/// A shortest path together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Vertices from source to target, both included.
    pub vertices: Vec<String>,
    /// Sum of the edge weights along the path.
    pub total_weight: u64,
}

impl Path {
    /// Number of edges traversed.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// First vertex.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    /// Last vertex.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }
}

/// Shortest path from `source` to `target`, or `None` when `target` is
/// unreachable.
///
/// # Errors
///
/// Returns [`GraphError::UnknownVertex`] if either endpoint is not in `graph`.
#[instrument(skip(graph))]
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<Option<Path>> {
    if !graph.contains(target) {
        return Err(GraphError::UnknownVertex(target.to_string()));
    }
    Ok(dijkstra(graph, source)?.path_to(target))
}
