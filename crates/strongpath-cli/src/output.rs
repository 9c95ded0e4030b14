//! Report rendering for human and JSON output.

use std::io::{self, Write};

use strongpath_core::Graph;

use crate::run::Report;

/// Shared width for human section separators.
pub const RULE_WIDTH: usize = 72;

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text sections for people.
    Human,
    /// One pretty-printed JSON object.
    Json,
}

/// Write a section heading followed by a separator.
pub fn section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)
}

/// Render a left-aligned key/value line.
pub fn kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

fn or_undefined(value: Option<u64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

/// Write `report` in the requested mode.
///
/// # Errors
///
/// Returns any error from the underlying writer or JSON encoder.
pub fn render_report(report: &Report, mode: OutputMode, w: &mut dyn Write) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *w, report)?;
            writeln!(w)
        }
        OutputMode::Human => render_human(report, w),
    }
}

fn render_human(report: &Report, w: &mut dyn Write) -> io::Result<()> {
    section(
        w,
        &format!(
            "Graph ({} vertices, {} edges)",
            report.stats.vertex_count, report.stats.edge_count
        ),
    )?;
    render_graph(&report.graph, w)?;
    writeln!(w)?;

    section(w, "Metrics")?;
    kv(w, "radius", or_undefined(report.radius))?;
    kv(w, "diameter", or_undefined(report.diameter))?;
    kv(w, "density", format!("{:.3}", report.stats.density))?;
    kv(w, "components", report.stats.scc_count.to_string())?;
    writeln!(w)?;

    let sample = &report.sample_path;
    section(w, &format!("Shortest path {} -> {}", sample.from, sample.to))?;
    match &sample.path {
        Some(path) => {
            kv(w, "path", path.vertices.join(" -> "))?;
            kv(w, "weight", path.total_weight.to_string())?;
        }
        None => kv(w, "path", "unreachable")?,
    }
    writeln!(w)?;

    let sample = &report.sample_eccentricity;
    section(w, &format!("Eccentricity of {}", sample.vertex))?;
    kv(w, "eccentricity", or_undefined(sample.eccentricity))
}

/// One line per vertex: `v -> target (weight), ...`.
pub fn render_graph(graph: &Graph, w: &mut dyn Write) -> io::Result<()> {
    for vertex in graph.vertices() {
        let edges: Vec<String> = graph
            .edges_from(vertex)
            .into_iter()
            .flatten()
            .map(|edge| format!("{} ({})", edge.target, edge.weight))
            .collect();
        if edges.is_empty() {
            writeln!(w, "{vertex} -> (none)")?;
        } else {
            writeln!(w, "{vertex} -> {}", edges.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strongpath_core::GraphBuilder;

    #[test]
    fn graph_lines_list_edges_in_order() {
        let g = GraphBuilder::from_edges([("1", "2", 3), ("1", "3", 9), ("2", "1", 1)])
            .expect("valid edges");
        let mut buf = Vec::new();
        render_graph(&g, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "1 -> 2 (3), 3 (9)\n2 -> 1 (1)\n3 -> (none)\n");
    }

    #[test]
    fn kv_aligns_keys() {
        let mut buf = Vec::new();
        kv(&mut buf, "radius", "7").expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "radius:        7\n");
    }

    #[test]
    fn undefined_values_are_spelled_out() {
        assert_eq!(or_undefined(None), "undefined");
        assert_eq!(or_undefined(Some(4)), "4");
    }
}
