//! Validated construction of hand-built graphs.
//!
//! [`GraphBuilder`] is the mutable scratch side of [`Graph`]: vertices and
//! edges are accumulated and checked one at a time, then [`GraphBuilder::build`]
//! freezes the result. Referencing an undeclared vertex in an edge declares
//! it, so a built graph never has dangling edges.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::model::{Edge, Graph, Weight};

/// Incremental, validating builder for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph straight from an edge list. Vertices appear in the order
    /// they are first mentioned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::DuplicateEdge`] for
    /// an invalid edge.
    pub fn from_edges<'a, I>(edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut builder = Self::new();
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Declare a vertex with no edges yet.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if it was already declared,
    /// either directly or through an edge.
    pub fn add_vertex(&mut self, vertex: &str) -> Result<&mut Self> {
        if self.index.contains_key(vertex) {
            return Err(GraphError::DuplicateVertex(vertex.to_string()));
        }
        self.intern(vertex);
        Ok(self)
    }

    /// Add the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] when `from == to` and
    /// [`GraphError::DuplicateEdge`] when the pair already has an edge.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<&mut Self> {
        if from == to {
            return Err(GraphError::SelfLoop(from.to_string()));
        }
        let src = self.intern(from);
        let dst = self.intern(to);
        if self.adjacency[src].iter().any(|edge| edge.target == dst) {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.adjacency[src].push(Edge {
            target: dst,
            weight,
        });
        Ok(self)
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    ///
    /// Same as [`GraphBuilder::add_edge`] for either direction.
    pub fn add_symmetric_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<&mut Self> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Freeze into an immutable [`Graph`].
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            vertices: self.vertices,
            index: self.index,
            adjacency: self.adjacency,
        }
    }

    fn intern(&mut self, vertex: &str) -> usize {
        if let Some(&idx) = self.index.get(vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(vertex.to_string());
        self.index.insert(vertex.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }
}
