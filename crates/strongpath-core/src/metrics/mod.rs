//! Distance-based graph metrics built on the shortest-path engine.

pub mod eccentricity;

pub use eccentricity::{
    VertexEccentricity, center, diameter, eccentricities, eccentricity, periphery, radius,
};
