//! # hiergraph-graph
//!
//! Graph models, layouts and renderers for hiergraph.
//!
//! This crate turns parsed input from `hiergraph-parser` into petgraph graphs
//! and draws them:
//!
//! - **Hierarchy graphs**: a [`HierarchyLog`] becomes a [`HierarchyGraph`]
//!   whose nodes carry their level and a not-found flag.
//! - **Level layout**: [`LevelLayout`] packs nodes into one row per level, in
//!   the order the parser met them.
//! - **Canonical graph6 graphs**: [`CanonicalGraph`] relabels a decoded
//!   graph6 graph to `0..n-1` and prints its adjacency list.
//! - **Rendering**: SVG for both pipelines, plus an ASCII tree and GraphML for
//!   hierarchy graphs.
//!
//! ## Example
//!
//! ```
//! use hiergraph_parser::parse_hierarchy;
//! use hiergraph_graph::{render_hierarchy_svg, HierarchyGraph, HierarchyStyle, LevelLayout};
//!
//! let log = parse_hierarchy("Cannot find: 2 A -> 1 B\n2 A -> 1 C 1 D\n1 C -> 0 E\n");
//! let graph = HierarchyGraph::from_log(&log);
//! let layout = LevelLayout::from_log(&log);
//!
//! assert!(graph.unplaced_nodes(&layout).contains(&"B"));
//!
//! let svg = render_hierarchy_svg(&graph, &layout, &HierarchyStyle::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod builder;
mod canonical;
mod error;
pub mod export;
pub mod layout;
mod nodes;
mod queries;
pub mod render;

pub use builder::HierarchyGraphBuilder;
pub use canonical::{canonicalize_table, CanonicalGraph};
pub use error::{GraphBuildError, LayoutError, RenderError};
pub use export::{CanonicalRepr, EdgeRepr, GraphRepr, HierarchyExport, NodeRepr, StatsRepr};
pub use layout::{FixedLayout, LevelLayout, Placement, Position};
pub use nodes::{CanonicalNode, HierarchyNode};
pub use render::{
    render_graph6_panels, render_graphml, render_hierarchy_svg, render_hierarchy_tree,
    HierarchyStyle, PanelStyle,
};

use hiergraph_parser::HierarchyLog;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A directed graph built from a hierarchy log.
///
/// Nodes are the edge endpoints in first-encounter order followed by any
/// not-found identifiers that never appear in an edge. Parallel edges from the
/// log collapse into one.
#[derive(Debug)]
pub struct HierarchyGraph {
    /// The underlying directed graph
    graph: DiGraph<HierarchyNode, ()>,

    /// Index of nodes by identifier
    nodes: HashMap<String, NodeIndex>,
}

impl HierarchyGraph {
    /// Build a hierarchy graph from a parsed log.
    pub fn from_log(log: &HierarchyLog) -> Self {
        HierarchyGraphBuilder::new().build(log)
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn inner(&self) -> &DiGraph<HierarchyNode, ()> {
        &self.graph
    }

    /// Get a node by its index.
    pub fn get_node(&self, index: NodeIndex) -> Option<&HierarchyNode> {
        self.graph.node_weight(index)
    }

    /// Look up a node index by identifier.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get(id).copied()
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: &str) -> Option<&HierarchyNode> {
        self.get_index(id).and_then(|idx| self.get_node(idx))
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.graph.node_weights()
    }

    /// Nodes that are not flagged as not-found, in insertion order.
    pub fn found_nodes(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes().filter(|n| !n.not_found)
    }

    /// Nodes flagged as not-found, in insertion order.
    pub fn not_found_nodes(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes().filter(|n| n.not_found)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of distinct edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
