//! Builder for constructing a HierarchyGraph from a parsed log.

use crate::nodes::HierarchyNode;
use crate::HierarchyGraph;
use hiergraph_parser::HierarchyLog;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::info;

/// Builder for constructing a hierarchy graph from a log.
#[derive(Debug, Default)]
pub struct HierarchyGraphBuilder {
    graph: DiGraph<HierarchyNode, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl HierarchyGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a HierarchyGraph from a log.
    pub fn build(mut self, log: &HierarchyLog) -> HierarchyGraph {
        // Phase 1: edges, creating endpoint nodes on first sight
        for edge in &log.edges {
            let parent = self.ensure_node(&edge.parent, log);
            let child = self.ensure_node(&edge.child, log);
            self.graph.update_edge(parent, child, ());
        }

        // Phase 2: not-found nodes that never appeared in an edge
        for id in &log.not_found {
            self.ensure_node(id, log);
        }

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built hierarchy graph"
        );

        HierarchyGraph {
            graph: self.graph,
            nodes: self.nodes,
        }
    }

    fn ensure_node(&mut self, id: &str, log: &HierarchyLog) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(HierarchyNode {
            id: id.to_string(),
            level: log.level_of(id),
            not_found: log.is_not_found(id),
        });
        self.nodes.insert(id.to_string(), idx);
        idx
    }
}
