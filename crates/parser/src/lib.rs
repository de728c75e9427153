//! # hiergraph-parser
//!
//! Text front-ends for hiergraph:
//!
//! - **Hierarchy logs**: line-oriented search traces (`2 ?Vdz{ -> 1 CNR~[`)
//!   become a directed edge list, a level map and a not-found set.
//! - **graph6**: the compact text encoding for small undirected graphs, with a
//!   loader for level-tagged tables of codes.
//!
//! ## Quick Start
//!
//! ```rust
//! use hiergraph_parser::{parse_graph6, parse_hierarchy};
//!
//! let log = parse_hierarchy("Cannot find: 2 ?Vdz{ -> 1 CNR~[\n2 ?Vdz{ -> 1 CNR~[\n");
//! assert_eq!(log.edges.len(), 1);
//! assert_eq!(log.level_of("?Vdz{"), Some(2));
//! assert!(log.is_not_found("CNR~["));
//!
//! let graph = parse_graph6("Bw").unwrap();
//! assert_eq!(graph.order(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! ```
//!
//! Malformed hierarchy lines are skipped rather than rejected; inspect
//! [`HierarchyLog::diagnostics`] or print them with [`DiagnosticReporter`].

pub mod error;
pub mod graph6;
pub mod hierarchy;
pub mod table;

pub use error::{DiagnosticReporter, Graph6Error, TableError};
pub use graph6::{parse_graph6, Graph6Graph, GRAPH6_HEADER};
pub use hierarchy::{parse_hierarchy, DiagnosticKind, Edge, HierarchyLog, ParseDiagnostic};
pub use table::{Graph6Entry, Graph6Table};
