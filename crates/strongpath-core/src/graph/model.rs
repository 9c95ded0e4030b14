//! The immutable graph value.
//!
//! A [`Graph`] maps each vertex to an ordered list of outgoing weighted edges.
//! Vertices keep their insertion order, and so do the edges leaving each
//! vertex; the order only affects iteration and display.
//!
//! Graphs are only produced by [`GraphBuilder`](crate::graph::build::GraphBuilder)
//! or the generator, both of which enforce the invariants:
//!
//! - every edge target is a vertex of the graph,
//! - no self-loops,
//! - at most one edge per ordered pair.

use std::collections::HashMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Edge weight. Unsigned, so the non-negativity Dijkstra relies on holds by
/// construction.
pub type Weight = u32;

/// Outgoing edge stored in the adjacency lists, addressed by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) target: usize,
    pub(crate) weight: Weight,
}

/// Borrowed view of an outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRef<'a> {
    /// Destination vertex.
    pub target: &'a str,
    /// Edge weight.
    pub weight: Weight,
}

/// Directed, edge-weighted graph keyed by string vertex IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) vertices: Vec<String>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    /// `true` if `vertex` belongs to the graph.
    #[must_use]
    pub fn contains(&self, vertex: &str) -> bool {
        self.index.contains_key(vertex)
    }

    /// Outgoing edges of `vertex` in insertion order, or `None` for an
    /// unknown vertex.
    #[must_use]
    pub fn edges_from(&self, vertex: &str) -> Option<impl ExactSizeIterator<Item = EdgeRef<'_>>> {
        let idx = self.index_of(vertex)?;
        Some(self.edge_refs(idx))
    }

    /// Weight of the edge `from -> to`, if present.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.adjacency[from]
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// `true` if the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.weight(from, to).is_some()
    }

    /// All edges as `(source, target, weight)` triples, grouped by source in
    /// vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(src, edges)| {
            edges.iter().map(move |edge| {
                (
                    self.vertices[src].as_str(),
                    self.vertices[edge.target].as_str(),
                    edge.weight,
                )
            })
        })
    }

    pub(crate) fn index_of(&self, vertex: &str) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn label(&self, idx: usize) -> &str {
        &self.vertices[idx]
    }

    fn edge_refs(&self, idx: usize) -> impl ExactSizeIterator<Item = EdgeRef<'_>> + '_ {
        self.adjacency[idx].iter().map(move |edge| EdgeRef {
            target: self.label(edge.target),
            weight: edge.weight,
        })
    }
}

/// Serializes as an ordered map `vertex -> [{target, weight}, ...]`.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Outgoing<'a>(&'a Graph, usize);

        impl Serialize for Outgoing<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.adjacency[self.1].len()))?;
                for edge in self.0.edge_refs(self.1) {
                    seq.serialize_element(&edge)?;
                }
                seq.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.vertices.len()))?;
        for (idx, vertex) in self.vertices.iter().enumerate() {
            map.serialize_entry(vertex, &Outgoing(self, idx))?;
        }
        map.end()
    }
}
