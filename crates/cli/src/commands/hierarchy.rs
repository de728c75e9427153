//! `hiergraph hierarchy`: parse a search log and draw it.

use crate::cli::{HierarchyArgs, HierarchyFormat};
use crate::output::{read_file, Input, Sink};
use anyhow::{Context, Result};
use hiergraph_graph::{
    render_graphml, render_hierarchy_svg, render_hierarchy_tree, HierarchyExport, HierarchyGraph,
    HierarchyStyle, LevelLayout, RenderError,
};
use hiergraph_parser::{parse_hierarchy, DiagnosticReporter, HierarchyLog};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

const BUNDLED_LOG: &str = include_str!("../../data/hierarchy.log");
const DEFAULT_SVG: &str = "hierarchy.svg";

pub fn run(args: &HierarchyArgs) -> Result<()> {
    let input = Input::load(args.input.as_deref(), "hierarchy.log (bundled)", BUNDLED_LOG)?;
    let log = parse_hierarchy(&input.text);

    if args.explain && !log.diagnostics.is_empty() {
        DiagnosticReporter::new(input.name.as_str(), &input.text)
            .report_all(&log.diagnostics)
            .context("failed to print diagnostics")?;
    }

    let graph = HierarchyGraph::from_log(&log);
    let layout = LevelLayout::from_log(&log);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        levels = layout.rows().len(),
        "built hierarchy graph"
    );

    let sink = sink_for(args);
    // Keep stdout clean when it carries GraphML or JSON
    if sink.is_stdout() && args.format.is_machine_readable() {
        write_summary(&mut io::stderr().lock(), &log, &graph, &layout)?;
    } else {
        write_summary(&mut io::stdout().lock(), &log, &graph, &layout)?;
    }

    let unplaced = graph.unplaced_nodes(&layout);
    if args.strict && !unplaced.is_empty() {
        return Err(RenderError::UnplacedNodes {
            nodes: unplaced.iter().map(|id| id.to_string()).collect(),
        }
        .into());
    }

    let rendered = match args.format {
        HierarchyFormat::Svg => {
            let style = load_style(args)?;
            render_hierarchy_svg(&graph, &layout, &style)?
        }
        HierarchyFormat::Tree => render_hierarchy_tree(&graph),
        HierarchyFormat::Graphml => render_graphml(&graph, &layout)?,
        HierarchyFormat::Json => {
            let export = HierarchyExport::new(&log, &graph, &layout);
            let mut json = serde_json::to_string_pretty(&export)?;
            json.push('\n');
            json
        }
    };

    sink.write(&rendered)
}

fn sink_for(args: &HierarchyArgs) -> Sink {
    match (&args.output, args.format) {
        (Some(path), _) if path.as_os_str() == "-" => Sink::Stdout,
        (Some(path), _) => Sink::File(path.clone()),
        (None, HierarchyFormat::Svg) => Sink::File(PathBuf::from(DEFAULT_SVG)),
        (None, _) => Sink::Stdout,
    }
}

fn load_style(args: &HierarchyArgs) -> Result<HierarchyStyle> {
    let mut style = match &args.style {
        Some(path) => serde_json::from_str(&read_file(path)?)
            .with_context(|| format!("invalid style file {}", path.display()))?,
        None => HierarchyStyle::default(),
    };
    style.strict |= args.strict;
    Ok(style)
}

/// The found / not-found listing, nodes that cannot be placed, then one
/// line per skipped log line.
fn write_summary(
    out: &mut impl Write,
    log: &HierarchyLog,
    graph: &HierarchyGraph,
    layout: &LevelLayout,
) -> Result<()> {
    let found: Vec<&str> = log.found_nodes();
    let not_found: Vec<&str> = log.not_found.iter().map(String::as_str).collect();
    writeln!(out, "Found nodes: {found:?}")?;
    writeln!(out, "Not found nodes: {not_found:?}")?;

    let unplaced = graph.unplaced_nodes(layout);
    if !unplaced.is_empty() {
        warn!(count = unplaced.len(), "some nodes have no level");
        writeln!(out, "Unplaced nodes (no level): {unplaced:?}")?;
    }
    for diagnostic in &log.diagnostics {
        writeln!(out, "{}", diagnostic.message())?;
    }
    Ok(())
}
