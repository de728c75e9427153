//! CLI command definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hiergraph - view graph6 tables and hierarchy search logs
#[derive(Parser, Debug)]
#[command(name = "hiergraph")]
#[command(version)]
#[command(about = "Render graph6 tables and hierarchy search logs as static graphs")]
#[command(
    long_about = "hiergraph decodes level-tagged graph6 tables into canonical adjacency lists and \
                  panel plots, and turns hierarchy search logs into level-grid graphs with \
                  not-found nodes highlighted. Without an input file, the bundled datasets are used."
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print canonical adjacency lists for a graph6 table and draw it as panels
    Graph6(Graph6Args),

    /// Parse a hierarchy search log and draw it on a level grid
    Hierarchy(HierarchyArgs),
}

#[derive(Args, Debug)]
pub struct Graph6Args {
    /// graph6 table: JSON object `{"code": level}` or text lines `code level`
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Fixed node layout as JSON `{"0": [x, y], ...}`
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Panels per row
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// How to print the adjacency lists
    #[arg(long, value_enum, default_value_t = ListingFormat::Text)]
    pub listing: ListingFormat,

    /// Where to write the SVG panels
    #[arg(short, long, value_name = "FILE", default_value = "graph6.svg")]
    pub output: PathBuf,

    /// Skip drawing; only print adjacency lists
    #[arg(long, default_value_t = false)]
    pub no_render: bool,
}

#[derive(Args, Debug)]
pub struct HierarchyArgs {
    /// Hierarchy log to read, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = HierarchyFormat::Svg)]
    pub format: HierarchyFormat,

    /// Output file (SVG defaults to hierarchy.svg, other formats to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail when a node has no level instead of skipping it
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Pretty-print every skipped line against the source
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    /// SVG style overrides as JSON (colors, spacing, radius, font size)
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingFormat {
    /// `Graph: ... - Adjacency List (Canonical Form)` blocks
    Text,
    /// One JSON document with every canonical graph
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HierarchyFormat {
    /// Level-grid drawing
    Svg,
    /// ASCII tree
    Tree,
    /// GraphML for yEd, Gephi, Cytoscape
    Graphml,
    /// Graph, diagnostics and counts as JSON
    Json,
}

impl HierarchyFormat {
    /// Whether the output is meant to be piped into another program.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, HierarchyFormat::Graphml | HierarchyFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hierarchy_defaults() {
        let cli = Cli::try_parse_from(["hiergraph", "hierarchy"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");

        let Commands::Hierarchy(args) = cli.command else {
            panic!("expected hierarchy command");
        };
        assert!(args.input.is_none());
        assert_eq!(args.format, HierarchyFormat::Svg);
        assert!(!args.strict);
    }

    #[test]
    fn test_graph6_flags() {
        let cli = Cli::try_parse_from([
            "hiergraph", "-vv", "graph6", "--table", "t.txt", "--columns", "3", "--listing", "json",
        ])
        .unwrap();
        assert_eq!(cli.log_filter(), "debug");

        let Commands::Graph6(args) = cli.command else {
            panic!("expected graph6 command");
        };
        assert_eq!(args.table, Some(PathBuf::from("t.txt")));
        assert_eq!(args.columns, 3);
        assert_eq!(args.listing, ListingFormat::Json);
        assert_eq!(args.output, PathBuf::from("graph6.svg"));
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(Cli::try_parse_from(["hiergraph", "graph6", "--columns", "0"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["hiergraph", "-q", "-v", "hierarchy"]).is_err());
    }
}
