//! Generator configuration.
//!
//! Every field has a serde default so a partially specified config (for
//! example one deserialized from a JSON report) fills the rest from
//! [`GeneratorConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::model::Weight;

/// Parameters for [`crate::graph::generate::generate_with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of vertices, labelled `"1"..="vertex_count"`.
    #[serde(default = "default_vertex_count")]
    pub vertex_count: usize,
    /// Requested number of directed edges. Raised to the cycle size when
    /// lower; see [`GeneratorConfig::effective_edge_count`].
    #[serde(default = "default_edge_count")]
    pub edge_count: usize,
    /// Smallest edge weight drawn (inclusive).
    #[serde(default = "default_min_weight")]
    pub min_weight: Weight,
    /// Largest edge weight drawn (inclusive).
    #[serde(default = "default_max_weight")]
    pub max_weight: Weight,
    /// Seed for reproducible graphs. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertex_count: default_vertex_count(),
            edge_count: default_edge_count(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Same as [`GeneratorConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the vertex count.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Builder: set the requested edge count.
    #[must_use]
    pub const fn with_edge_count(mut self, edge_count: usize) -> Self {
        self.edge_count = edge_count;
        self
    }

    /// Builder: set the inclusive weight range.
    #[must_use]
    pub const fn with_weight_range(mut self, min: Weight, max: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Builder: fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of edges closing the Hamiltonian cycle. A single vertex needs
    /// none, since its only cycle would be a self-loop.
    #[must_use]
    pub const fn cycle_edge_count(&self) -> usize {
        if self.vertex_count < 2 {
            0
        } else {
            self.vertex_count
        }
    }

    /// Edge count the generator actually produces: the request, raised to
    /// the cycle size when lower.
    #[must_use]
    pub fn effective_edge_count(&self) -> usize {
        self.edge_count.max(self.cycle_edge_count())
    }

    /// Distinct ordered pairs available without self-loops: `n * (n - 1)`.
    #[must_use]
    pub const fn max_edge_count(&self) -> usize {
        self.vertex_count
            .saturating_mul(self.vertex_count.saturating_sub(1))
    }

    /// Check the config can be generated.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NoVertices`] for a zero vertex count.
    /// - [`GraphError::InvalidWeightRange`] when `min_weight` is zero or
    ///   exceeds `max_weight`.
    /// - [`GraphError::TooManyEdges`] when the effective edge count exceeds
    ///   [`GeneratorConfig::max_edge_count`].
    pub fn validate(&self) -> Result<()> {
        if self.vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GraphError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        let requested = self.effective_edge_count();
        let max = self.max_edge_count();
        if requested > max {
            return Err(GraphError::TooManyEdges {
                requested,
                max,
                vertices: self.vertex_count,
            });
        }
        Ok(())
    }
}

const fn default_vertex_count() -> usize {
    10
}

const fn default_edge_count() -> usize {
    15
}

const fn default_min_weight() -> Weight {
    1
}

const fn default_max_weight() -> Weight {
    10
}
