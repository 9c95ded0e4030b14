//! Single-source shortest paths (Dijkstra).
//!
//! # Algorithm
//!
//! Binary-heap Dijkstra with lazy deletion:
//!
//! 1. Every vertex starts at an infinite distance except the source (0).
//! 2. Pop the smallest `(distance, vertex)` entry. Entries whose distance is
//!    worse than the recorded best are stale and skipped.
//! 3. Relax each outgoing edge: when `d + w` beats the recorded distance of
//!    the target, record it, remember the predecessor and push the target.
//!
//! Equal-distance entries are popped in no guaranteed order; any order
//! yields correct distances. Complexity: `O((V + E) log V)`.
//!
//! All working state is local to one call. Nothing is cached between calls,
//! so repeated queries from the same source redo the work.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::{instrument, trace};

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::paths::reconstruct::reconstruct_path;
use crate::paths::Path;

/// Shortest known distance from a fixed source to every vertex.
///
/// Unreachable vertices are present with an infinite distance, reported as
/// `None` by [`DistanceMap::get`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DistanceMap {
    distances: HashMap<String, Option<u64>>,
}

impl DistanceMap {
    /// Finite distance to `vertex`; `None` when unreachable or unknown.
    #[must_use]
    pub fn get(&self, vertex: &str) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// `true` if `vertex` has a finite distance.
    #[must_use]
    pub fn is_reachable(&self, vertex: &str) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of vertices tracked (reachable or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// `true` when no vertex is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Every tracked vertex with its distance, `None` meaning infinite.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u64>)> + '_ {
        self.distances.iter().map(|(v, d)| (v.as_str(), *d))
    }
}

/// Vertex immediately preceding each reached vertex on a shortest path.
///
/// The source and unreachable vertices have no entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PredecessorMap {
    predecessors: HashMap<String, String>,
}

impl PredecessorMap {
    /// Predecessor of `vertex`, if recorded.
    #[must_use]
    pub fn get(&self, vertex: &str) -> Option<&str> {
        self.predecessors.get(vertex).map(String::as_str)
    }

    /// `true` if `vertex` has a recorded predecessor.
    #[must_use]
    pub fn contains(&self, vertex: &str) -> bool {
        self.predecessors.contains_key(vertex)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// `true` when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// `(vertex, predecessor)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.predecessors
            .iter()
            .map(|(v, p)| (v.as_str(), p.as_str()))
    }
}

impl FromIterator<(String, String)> for PredecessorMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            predecessors: iter.into_iter().collect(),
        }
    }
}

/// Output of one [`dijkstra`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The vertex the run started from.
    pub source: String,
    /// Distances from `source`.
    pub distances: DistanceMap,
    /// Predecessors on the discovered shortest paths.
    pub predecessors: PredecessorMap,
}

impl ShortestPaths {
    /// Finite distance from the source to `target`.
    #[must_use]
    pub fn distance(&self, target: &str) -> Option<u64> {
        self.distances.get(target)
    }

    /// Number of vertices with a finite distance, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|(v, _)| self.distances.is_reachable(v))
            .count()
    }

    /// Shortest path from the source to `target`, or `None` when unreachable.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor chain is inconsistent with the distances,
    /// which a map produced by [`dijkstra`] never is.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Option<Path> {
        let total_weight = self.distances.get(target)?;
        let vertices = reconstruct_path(&self.predecessors, &self.source, target);
        Some(Path {
            vertices,
            total_weight,
        })
    }
}

/// Run Dijkstra from `source` over `graph`.
///
/// # Errors
///
/// Returns [`GraphError::UnknownVertex`] if `source` is not in `graph`.
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &Graph, source: &str) -> Result<ShortestPaths> {
    let src = graph
        .index_of(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;

    let run = dijkstra_indexed(graph, src);

    let distances = graph
        .vertices()
        .zip(&run.distances)
        .map(|(vertex, &d)| (vertex.to_string(), d))
        .collect();
    let predecessors = graph
        .vertices()
        .zip(&run.predecessors)
        .filter_map(|(vertex, pred)| {
            pred.map(|p| (vertex.to_string(), graph.label(p).to_string()))
        })
        .collect();

    Ok(ShortestPaths {
        source: source.to_string(),
        distances: DistanceMap { distances },
        predecessors,
    })
}

/// Index-addressed Dijkstra state. `None` distance means infinite.
pub(crate) struct IndexedRun {
    pub(crate) distances: Vec<Option<u64>>,
    pub(crate) predecessors: Vec<Option<usize>>,
}

pub(crate) fn dijkstra_indexed(graph: &Graph, src: usize) -> IndexedRun {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[src] = Some(0);
    heap.push(Reverse((0_u64, src)));

    let mut settled: usize = 0;
    let mut relaxed: usize = 0;

    while let Some(Reverse((d, u))) = heap.pop() {
        if distances[u].is_some_and(|best| d > best) {
            continue;
        }
        settled += 1;

        for edge in &graph.adjacency[u] {
            let alt = d.saturating_add(u64::from(edge.weight));
            let v = edge.target;
            if distances[v].is_none_or(|best| alt < best) {
                distances[v] = Some(alt);
                predecessors[v] = Some(u);
                heap.push(Reverse((alt, v)));
                relaxed += 1;
            }
        }
    }
    trace!(settled, relaxed, "dijkstra finished");

    IndexedRun {
        distances,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build::GraphBuilder;

    fn diamond() -> Graph {
        GraphBuilder::from_edges([
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 1),
        ])
        .expect("valid edges")
    }

    #[test]
    fn distances_from_source() {
        let sp = dijkstra(&diamond(), "A").expect("A exists");
        assert_eq!(sp.distance("A"), Some(0));
        assert_eq!(sp.distance("B"), Some(1));
        assert_eq!(sp.distance("C"), Some(3));
        assert_eq!(sp.distance("D"), Some(4));
        assert_eq!(sp.reachable_count(), 4);
    }

    #[test]
    fn predecessors_follow_shortest_edges() {
        let sp = dijkstra(&diamond(), "A").expect("A exists");
        assert_eq!(sp.predecessors.get("A"), None);
        assert_eq!(sp.predecessors.get("B"), Some("A"));
        assert_eq!(sp.predecessors.get("C"), Some("B"));
        assert_eq!(sp.predecessors.get("D"), Some("C"));
        assert_eq!(sp.predecessors.len(), 3);

        let mut pairs: Vec<(&str, &str)> = sp.predecessors.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, [("B", "A"), ("C", "B"), ("D", "C")]);
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let sp = dijkstra(&diamond(), "C").expect("C exists");
        assert_eq!(sp.distance("D"), Some(1));
        assert_eq!(sp.distance("A"), None);
        assert_eq!(sp.distance("B"), None);
        assert_eq!(sp.distances.len(), 4, "all vertices tracked");
        assert!(!sp.predecessors.contains("A"));
        assert!(sp.distances.is_reachable("D"));
        assert!(sp.distances.is_reachable("C"));
        assert!(!sp.distances.is_reachable("A"));
        assert!(!sp.distances.is_reachable("Z"), "unknown vertex");
        assert_eq!(sp.reachable_count(), 2);
        assert!(sp.path_to("A").is_none());
    }

    #[test]
    fn unknown_source_is_invalid() {
        let err = dijkstra(&diamond(), "Z").unwrap_err();
        assert_eq!(err, GraphError::UnknownVertex("Z".into()));
    }

    #[test]
    fn stale_heap_entries_are_skipped() {
        // C is first reached at 10 directly, then improved to 3 via B.
        let g = GraphBuilder::from_edges([
            ("A", "C", 10),
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 1),
        ])
        .expect("valid edges");
        let sp = dijkstra(&g, "A").expect("A exists");
        assert_eq!(sp.distance("C"), Some(3));
        assert_eq!(sp.distance("D"), Some(4));
        assert_eq!(sp.predecessors.get("C"), Some("B"));
    }

    #[test]
    fn zero_weight_edges_are_allowed() {
        let g = GraphBuilder::from_edges([("A", "B", 0), ("B", "C", 0), ("A", "C", 1)])
            .expect("valid edges");
        let sp = dijkstra(&g, "A").expect("A exists");
        assert_eq!(sp.distance("C"), Some(0));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = diamond();
        let first = dijkstra(&g, "A").expect("A exists");
        let second = dijkstra(&g, "A").expect("A exists");
        assert_eq!(first, second);
    }

    #[test]
    fn path_to_self_is_single_vertex() {
        let sp = dijkstra(&diamond(), "B").expect("B exists");
        let path = sp.path_to("B").expect("self is reachable");
        assert_eq!(path.vertices, ["B"]);
        assert_eq!(path.total_weight, 0);
    }
}
