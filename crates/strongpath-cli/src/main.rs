#![forbid(unsafe_code)]

mod args;
mod output;
mod run;

use std::env;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use output::OutputMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strongpath_core::GeneratorConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "strongpath: random strongly-connected graphs and their distance metrics",
    long_about = None,
    after_help = "EXAMPLES:\n    # Default graph (10 vertices, 15 edges)\n    strongpath\n\n    # Larger graph, reproducible\n    strongpath -N 50 -S 200 --seed 42\n\n    # Emit machine-readable output\n    strongpath -N 8 --json"
)]
pub(crate) struct Cli {
    /// Number of vertices (default 10).
    #[arg(short = 'N', long = "vertices", value_name = "COUNT")]
    vertices: Option<usize>,

    /// Number of edges; raised to the vertex count when lower (default 15).
    #[arg(short = 'S', long = "edges", value_name = "COUNT")]
    edges: Option<usize>,

    /// Seed the RNG for a reproducible graph and sample picks.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Generator config from the flags, filling gaps from the defaults.
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        match self.vertices {
            Some(n) => config.vertex_count = n,
            None => info!(
                default = config.vertex_count,
                "-N not given, using default vertex count"
            ),
        }
        match self.edges {
            Some(s) => config.edge_count = s,
            None => {
                info!(
                    default = config.edge_count,
                    "-S not given, using default edge count"
                );
                // The default must fit small graphs; an explicit -S is never capped.
                let max = config.max_edge_count();
                if config.edge_count > max {
                    config.edge_count = max;
                    info!(
                        capped = max,
                        vertices = config.vertex_count,
                        "default edge count capped to what the graph can hold"
                    );
                }
            }
        }
        config.seed = self.seed;
        config
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("STRONGPATH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "strongpath=debug,strongpath_core=debug,info"
        } else {
            "strongpath=info,warn"
        })
    });

    let format = env::var("STRONGPATH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let (argv, ignored) = args::retain_known(env::args_os());
    let cli = Cli::parse_from(argv);

    init_tracing(cli.verbose);
    for arg in &ignored {
        warn!(arg = %arg.to_string_lossy(), "ignoring unknown argument");
    }
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = cli.generator_config();
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let report = run::run(&config, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render_report(&report, cli.output_mode(), &mut out).context("write report")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
