//! The end-to-end run: generate, measure, sample.

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::{IteratorRandom, index};
use serde::Serialize;
use strongpath_core::{
    GeneratorConfig, Graph, GraphStats, Path, diameter, eccentricity, generate_with_rng, radius,
    shortest_path,
};
use tracing::{debug, instrument};

/// Everything the CLI prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub config: GeneratorConfig,
    pub effective_edge_count: usize,
    pub stats: GraphStats,
    pub graph: Graph,
    pub radius: Option<u64>,
    pub diameter: Option<u64>,
    pub sample_path: SamplePath,
    pub sample_eccentricity: SampleEccentricity,
}

/// Shortest path between a randomly chosen pair of vertices.
#[derive(Debug, Serialize)]
pub struct SamplePath {
    pub from: String,
    pub to: String,
    pub path: Option<Path>,
}

/// Eccentricity of a randomly chosen vertex.
#[derive(Debug, Serialize)]
pub struct SampleEccentricity {
    pub vertex: String,
    pub eccentricity: Option<u64>,
}

/// Generate a graph from `config` and compute the report, drawing the graph
/// and the sampled vertices from `rng`.
#[instrument(skip(rng))]
pub fn run<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Report> {
    let graph = generate_with_rng(config, rng).context("generate graph")?;
    let stats = GraphStats::from_graph(&graph);
    debug!(
        scc_count = stats.scc_count,
        density = stats.density,
        "graph statistics"
    );

    let radius = radius(&graph);
    let diameter = diameter(&graph);

    let (from, to) = random_pair(&graph, rng).context("graph has no vertices")?;
    let path = shortest_path(&graph, &from, &to).context("sample shortest path")?;

    let vertex = graph
        .vertices()
        .choose(rng)
        .context("graph has no vertices")?
        .to_string();
    let ecc = eccentricity(&graph, &vertex).context("sample eccentricity")?;

    Ok(Report {
        config: config.clone(),
        effective_edge_count: config.effective_edge_count(),
        stats,
        graph,
        radius,
        diameter,
        sample_path: SamplePath { from, to, path },
        sample_eccentricity: SampleEccentricity {
            vertex,
            eccentricity: ecc,
        },
    })
}

/// Two distinct vertices when the graph has at least two, otherwise the
/// lone vertex paired with itself.
fn random_pair<R: Rng>(graph: &Graph, rng: &mut R) -> Option<(String, String)> {
    let vertices: Vec<&str> = graph.vertices().collect();
    match vertices.len() {
        0 => None,
        1 => Some((vertices[0].to_string(), vertices[0].to_string())),
        n => {
            let picks = index::sample(rng, n, 2);
            Some((
                vertices[picks.index(0)].to_string(),
                vertices[picks.index(1)].to_string(),
            ))
        }
    }
}
