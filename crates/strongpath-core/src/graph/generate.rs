//! Random strongly-connected graph generation.
//!
//! # Algorithm
//!
//! 1. Label the vertices `"1"..="n"`.
//! 2. Shuffle them and link the shuffled order into one directed cycle
//!    (last back to first). Following the cycle reaches every vertex from
//!    every other, which is the whole strong-connectivity guarantee.
//! 3. Rejection-sample extra ordered pairs `(src, dst)` until the effective
//!    edge count is reached, skipping self-loops and pairs already present.
//!
//! Every edge gets an independent uniform weight from the configured range
//! (`[1, 10]` by default).
//!
//! Step 3 only terminates because the target never exceeds `n * (n - 1)`;
//! [`GeneratorConfig::validate`] rejects larger requests up front.

use std::collections::{HashMap, HashSet};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::graph::model::{Edge, Graph};

/// Generate a strongly-connected graph with `vertex_count` vertices and
/// `max(edge_count, vertex_count)` edges, weights in `[1, 10]`.
///
/// # Errors
///
/// See [`GeneratorConfig::validate`]: zero vertices, or more edges than the
/// vertices can hold.
pub fn generate(vertex_count: usize, edge_count: usize) -> Result<Graph> {
    let config = GeneratorConfig::new()
        .with_vertex_count(vertex_count)
        .with_edge_count(edge_count);
    generate_with_config(&config)
}

/// Generate from a full config, seeding from `config.seed` when set.
///
/// # Errors
///
/// See [`GeneratorConfig::validate`].
pub fn generate_with_config(config: &GeneratorConfig) -> Result<Graph> {
    match config.seed {
        Some(seed) => generate_with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(config, &mut rand::thread_rng()),
    }
}

/// Generate using the caller's RNG. `config.seed` is ignored.
///
/// # Errors
///
/// See [`GeneratorConfig::validate`].
#[instrument(
    skip_all,
    fields(vertices = config.vertex_count, requested_edges = config.edge_count)
)]
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Graph> {
    config.validate()?;

    let n = config.vertex_count;
    let target = config.effective_edge_count();
    let weights = Uniform::new_inclusive(config.min_weight, config.max_weight);

    let vertices: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    let index: HashMap<String, usize> = vertices
        .iter()
        .enumerate()
        .map(|(idx, label)| (label.clone(), idx))
        .collect();

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); n];
    let mut present: HashSet<(usize, usize)> = HashSet::with_capacity(target);

    // Cycle over a random permutation.
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    if n >= 2 {
        for (pos, &src) in order.iter().enumerate() {
            let dst = order[(pos + 1) % n];
            adjacency[src].push(Edge {
                target: dst,
                weight: rng.sample(weights),
            });
            present.insert((src, dst));
        }
    }
    debug!(cycle_edges = present.len(), "closed random cycle");

    let mut rejected: usize = 0;
    while present.len() < target {
        let src = rng.gen_range(0..n);
        let dst = rng.gen_range(0..n);
        if src == dst || !present.insert((src, dst)) {
            rejected += 1;
            continue;
        }
        let weight = rng.sample(weights);
        trace!(src, dst, weight, "extra edge");
        adjacency[src].push(Edge {
            target: dst,
            weight,
        });
    }
    debug!(
        edges = present.len(),
        extra_edges = present.len() - config.cycle_edge_count(),
        rejected,
        "graph generated"
    );

    Ok(Graph {
        vertices,
        index,
        adjacency,
    })
}
