//! Serialization types for graph export.
//!
//! This module contains the data structures used to serialize hierarchy and
//! canonical graphs for external consumption (JSON).

use crate::layout::LevelLayout;
use crate::{CanonicalGraph, HierarchyGraph, HierarchyNode};
use hiergraph_parser::{HierarchyLog, ParseDiagnostic};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

// ============================================================================
// Basic representations
// ============================================================================

/// Serializable representation of a HierarchyGraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRepr {
    pub nodes: Vec<NodeRepr>,
    pub edges: Vec<EdgeRepr>,
    pub not_found: Vec<String>,
    pub unplaced: Vec<String>,
}

impl GraphRepr {
    pub fn new(graph: &HierarchyGraph, layout: &LevelLayout) -> Self {
        let inner = graph.inner();

        let nodes: Vec<NodeRepr> = inner
            .node_indices()
            .filter_map(|idx| {
                graph
                    .get_node(idx)
                    .map(|node| NodeRepr::new(idx.index(), node, layout))
            })
            .collect();

        let edges: Vec<EdgeRepr> = inner
            .edge_references()
            .map(|e| EdgeRepr {
                source: e.source().index(),
                target: e.target().index(),
            })
            .collect();

        Self {
            nodes,
            edges,
            not_found: graph.not_found_nodes().map(|n| n.id.clone()).collect(),
            unplaced: graph
                .unplaced_nodes(layout)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Serializable representation of a HierarchyNode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRepr {
    pub index: usize,
    pub id: String,
    pub level: Option<u64>,
    pub not_found: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl NodeRepr {
    fn new(index: usize, node: &HierarchyNode, layout: &LevelLayout) -> Self {
        let position = layout.position(&node.id);
        Self {
            index,
            id: node.id.clone(),
            level: node.level,
            not_found: node.not_found,
            x: position.map(|p| p.x),
            y: position.map(|p| p.y),
        }
    }
}

/// Serializable representation of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub source: usize,
    pub target: usize,
}

// ============================================================================
// Full export types
// ============================================================================

/// Full hierarchy export: graph, parse diagnostics and summary counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyExport {
    pub version: String,
    pub graph: GraphRepr,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub stats: StatsRepr,
}

impl HierarchyExport {
    pub fn new(log: &HierarchyLog, graph: &HierarchyGraph, layout: &LevelLayout) -> Self {
        let graph_repr = GraphRepr::new(graph, layout);
        let stats = StatsRepr {
            log_edges: log.edge_count(),
            distinct_edges: graph.edge_count(),
            nodes: graph.node_count(),
            levels: layout.rows().len(),
            not_found: graph_repr.not_found.len(),
            unplaced: graph_repr.unplaced.len(),
            skipped_lines: log.diagnostics.len(),
        };

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            graph: graph_repr,
            diagnostics: log.diagnostics.clone(),
            stats,
        }
    }
}

/// Summary counts for a hierarchy export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRepr {
    /// Edges in the log, duplicates included
    pub log_edges: usize,
    pub distinct_edges: usize,
    pub nodes: usize,
    /// Number of distinct levels with at least one placed node
    pub levels: usize,
    pub not_found: usize,
    pub unplaced: usize,
    pub skipped_lines: usize,
}

/// Serializable representation of a CanonicalGraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRepr {
    pub code: String,
    pub level: i64,
    pub order: usize,
    /// Original label of each canonical node
    pub original: Vec<usize>,
    /// Neighbors of each canonical node, ascending
    pub adjacency: Vec<Vec<usize>>,
}

impl From<&CanonicalGraph> for CanonicalRepr {
    fn from(graph: &CanonicalGraph) -> Self {
        let order = graph.node_count();
        Self {
            code: graph.code().to_string(),
            level: graph.level(),
            order,
            original: graph.inner().node_weights().map(|n| n.original).collect(),
            adjacency: (0..order).map(|v| graph.neighbors(v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiergraph_parser::{parse_hierarchy, Graph6Entry};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hierarchy_export() {
        let log = parse_hierarchy("Cannot find: 2 A -> 1 Z\n2 A -> 1 B\n2 A -> 1 B\nnope -> 1 C\n");
        let graph = HierarchyGraph::from_log(&log);
        let layout = LevelLayout::from_log(&log);

        let export = HierarchyExport::new(&log, &graph, &layout);

        assert_eq!(
            export.stats,
            StatsRepr {
                log_edges: 2,
                distinct_edges: 1,
                nodes: 3,
                levels: 2,
                not_found: 2,
                unplaced: 1,
                skipped_lines: 1,
            }
        );
        assert_eq!(export.graph.unplaced, vec!["Z".to_string()]);
        assert_eq!(export.graph.edges, vec![EdgeRepr { source: 0, target: 1 }]);
        assert_eq!(export.graph.nodes[0].y, Some(-2.0));

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["diagnostics"][0]["kind"], "malformed_parent");
        assert_eq!(json["graph"]["nodes"][2]["x"], serde_json::Value::Null);
    }

    #[test]
    fn test_canonical_repr() {
        let graph = CanonicalGraph::from_entry(&Graph6Entry {
            code: "Bw".to_string(),
            level: 1,
        })
        .unwrap();

        let repr = CanonicalRepr::from(&graph);
        assert_eq!(repr.order, 3);
        assert_eq!(repr.original, vec![0, 1, 2]);
        assert_eq!(repr.adjacency, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
    }
}
