//! `hiergraph graph6`: canonical adjacency lists and panel drawing.

use crate::cli::{Graph6Args, ListingFormat};
use crate::output::{read_file, Sink};
use anyhow::{Context, Result};
use hiergraph_graph::{
    canonicalize_table, render_graph6_panels, CanonicalGraph, CanonicalRepr, FixedLayout, PanelStyle,
};
use hiergraph_parser::Graph6Table;
use std::path::Path;
use tracing::info;

const BUNDLED_TABLE: &str = include_str!("../../data/graph6.json");

pub fn run(args: &Graph6Args) -> Result<()> {
    let table = load_table(args.table.as_deref())?;
    let graphs = canonicalize_table(&table).context("failed to canonicalize graph6 table")?;
    info!(graphs = graphs.len(), "canonicalized graph6 table");

    match args.listing {
        ListingFormat::Text => print!("{}", adjacency_listing(&graphs)),
        ListingFormat::Json => {
            let reprs: Vec<CanonicalRepr> = graphs.iter().map(CanonicalRepr::from).collect();
            println!("{}", serde_json::to_string_pretty(&reprs)?);
        }
    }

    if args.no_render {
        return Ok(());
    }

    let layout = match &args.layout {
        Some(path) => FixedLayout::from_json(&read_file(path)?)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        None => FixedLayout::default(),
    };
    let style = PanelStyle {
        columns: usize::from(args.columns),
        ..PanelStyle::default()
    };

    let svg = render_graph6_panels(&graphs, &layout, &style)?;
    Sink::File(args.output.clone()).write(&svg)
}

/// JSON files are read as `{"code": level}` objects, anything else as text lines.
fn load_table(path: Option<&Path>) -> Result<Graph6Table> {
    let Some(path) = path else {
        return Graph6Table::from_json(BUNDLED_TABLE).context("bundled graph6 table is invalid");
    };

    let source = read_file(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table = if is_json {
        Graph6Table::from_json(&source)
    } else {
        Graph6Table::from_text(&source)
    };
    table.with_context(|| format!("failed to parse graph6 table {}", path.display()))
}

/// One block per graph: title, adjacency lines, then two blank lines.
fn adjacency_listing(graphs: &[CanonicalGraph]) -> String {
    let mut out = String::new();
    for graph in graphs {
        out.push_str(&graph.title());
        out.push_str(" - Adjacency List (Canonical Form)\n");
        for line in graph.adjacency_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("\n\n");
    }
    out
}
