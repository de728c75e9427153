//! # hiergraph
//!
//! Hierarchy search logs and graph6 tables, parsed, laid out and drawn.
//!
//! ## Features
//!
//! | Feature | Crate | Description |
//! |---------|-------|-------------|
//! | (always) | [`hiergraph-parser`] | graph6 decoding, level tables, hierarchy-log parsing |
//! | `graph`  | [`hiergraph-graph`]  | Canonical relabeling, level layout, SVG / tree / GraphML output |
//!
//! `default = ["graph"]`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! hiergraph = "0.1"
//! ```
//!
//! ```rust
//! use hiergraph::parse_hierarchy;
//! use hiergraph::graph::{render_hierarchy_svg, HierarchyGraph, HierarchyStyle, LevelLayout};
//!
//! let log = parse_hierarchy("Cannot find: 1 root -> 0 leaf\n1 root -> 0 a 0 b\n");
//! let graph = HierarchyGraph::from_log(&log);
//! let layout = LevelLayout::from_log(&log);
//!
//! let svg = render_hierarchy_svg(&graph, &layout, &HierarchyStyle::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! [`hiergraph-parser`]: hiergraph_parser
//! [`hiergraph-graph`]: https://docs.rs/hiergraph-graph

pub use hiergraph_parser as parser;

pub use hiergraph_parser::{parse_graph6, parse_hierarchy, Graph6Graph, Graph6Table, HierarchyLog};

#[cfg(feature = "graph")]
pub use hiergraph_graph as graph;
