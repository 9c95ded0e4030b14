//! Eccentricity, radius and diameter.
//!
//! Eccentricity is all-or-nothing: a vertex that cannot reach every other
//! vertex has no eccentricity at all, rather than the maximum over the
//! vertices it does reach.
//!
//! `radius` and `diameter` run one independent Dijkstra per vertex, for
//! `O(V (V + E) log V)` overall. No all-pairs sharing is attempted.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::paths::dijkstra::dijkstra_indexed;

/// A vertex and its eccentricity (`None` when some vertex is unreachable
/// from it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexEccentricity {
    pub vertex: String,
    pub eccentricity: Option<u64>,
}

/// Longest shortest-path distance from `source`, or `None` if any vertex is
/// unreachable from it.
///
/// # Errors
///
/// Returns [`GraphError::UnknownVertex`] if `source` is not in `graph`.
pub fn eccentricity(graph: &Graph, source: &str) -> Result<Option<u64>> {
    let src = graph
        .index_of(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;
    Ok(eccentricity_of(graph, src))
}

/// Eccentricity of every vertex, in vertex order.
#[must_use]
pub fn eccentricities(graph: &Graph) -> Vec<VertexEccentricity> {
    graph
        .vertices()
        .enumerate()
        .map(|(idx, vertex)| VertexEccentricity {
            vertex: vertex.to_string(),
            eccentricity: eccentricity_of(graph, idx),
        })
        .collect()
}

/// Smallest defined eccentricity. `None` for an empty graph or when no
/// vertex reaches all others.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn radius(graph: &Graph) -> Option<u64> {
    let radius = defined(graph).min();
    debug!(?radius, "radius computed");
    radius
}

/// Largest defined eccentricity. `None` for an empty graph or when no
/// vertex reaches all others.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn diameter(graph: &Graph) -> Option<u64> {
    let diameter = defined(graph).max();
    debug!(?diameter, "diameter computed");
    diameter
}

/// Vertices whose eccentricity equals the radius.
#[must_use]
pub fn center(graph: &Graph) -> Vec<String> {
    let all = eccentricities(graph);
    let radius = all.iter().filter_map(|e| e.eccentricity).min();
    matching(all, radius)
}

/// Vertices whose eccentricity equals the diameter.
#[must_use]
pub fn periphery(graph: &Graph) -> Vec<String> {
    let all = eccentricities(graph);
    let diameter = all.iter().filter_map(|e| e.eccentricity).max();
    matching(all, diameter)
}

fn eccentricity_of(graph: &Graph, src: usize) -> Option<u64> {
    let run = dijkstra_indexed(graph, src);
    run.distances
        .into_iter()
        .try_fold(0_u64, |acc, d| d.map(|d| acc.max(d)))
}

fn defined(graph: &Graph) -> impl Iterator<Item = u64> + '_ {
    (0..graph.vertex_count()).filter_map(|idx| eccentricity_of(graph, idx))
}

fn matching(all: Vec<VertexEccentricity>, wanted: Option<u64>) -> Vec<String> {
    let Some(wanted) = wanted else {
        return Vec::new();
    };
    all.into_iter()
        .filter(|e| e.eccentricity == Some(wanted))
        .map(|e| e.vertex)
        .collect()
}
