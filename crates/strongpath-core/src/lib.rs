#![forbid(unsafe_code)]
//! strongpath-core library.
//!
//! Random strongly-connected weighted digraphs and the shortest-path metrics
//! computed over them.
//!
//! # Conventions
//!
//! - **Errors**: [`GraphError`] for invalid arguments; `Option` for "no such
//!   path" and "undefined metric".
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`) and
//!   `#[instrument]` on the entry points.
//!
//! # Example
//!
//! ```rust
//! use strongpath_core::{generate, radius, diameter, shortest_path};
//!
//! let graph = generate(10, 15)?;
//! let path = shortest_path(&graph, "1", "2")?.expect("strongly connected");
//! assert_eq!(path.source(), Some("1"));
//! assert!(radius(&graph) <= diameter(&graph));
//! # Ok::<(), strongpath_core::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod paths;

pub use config::GeneratorConfig;
pub use error::{GraphError, Result};
pub use graph::{
    EdgeRef, Graph, GraphBuilder, GraphStats, Weight, generate, generate_with_config,
    generate_with_rng,
};
pub use metrics::{
    VertexEccentricity, center, diameter, eccentricities, eccentricity, periphery, radius,
};
pub use paths::{
    DistanceMap, Path, PredecessorMap, ShortestPaths, dijkstra, reconstruct_path, shortest_path,
};
