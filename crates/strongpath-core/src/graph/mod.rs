//! Graph model, construction and generation.
//!
//! # Overview
//!
//! ```text
//! generate(n, s) ──┐
//!                  ├──▶ Graph (immutable) ──▶ paths::dijkstra / metrics
//! GraphBuilder ────┘          │
//!                             └──▶ stats::GraphStats (petgraph)
//! ```
//!
//! [`Graph`] is never mutated after construction. Both the generator and
//! [`GraphBuilder`] accumulate into local scratch state and hand back a
//! frozen value.

pub mod build;
pub mod generate;
pub mod model;
pub mod stats;

pub use build::GraphBuilder;
pub use generate::{generate, generate_with_config, generate_with_rng};
pub use model::{EdgeRef, Graph, Weight};
pub use stats::{GraphStats, to_digraph};
