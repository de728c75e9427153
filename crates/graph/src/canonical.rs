//! Canonical relabeling of decoded graph6 graphs.

use crate::error::GraphBuildError;
use crate::nodes::CanonicalNode;
use hiergraph_parser::{parse_graph6, Graph6Entry, Graph6Graph, Graph6Table};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use tracing::debug;

/// An undirected graph relabeled to `0..n-1`, tagged with its source code and
/// level.
#[derive(Debug, Clone)]
pub struct CanonicalGraph {
    code: String,
    level: i64,
    graph: UnGraph<CanonicalNode, ()>,
}

impl CanonicalGraph {
    /// Decode and relabel one table entry.
    pub fn from_entry(entry: &Graph6Entry) -> Result<Self, GraphBuildError> {
        let decoded = parse_graph6(&entry.code).map_err(|source| GraphBuildError::Decode {
            code: entry.code.clone(),
            source,
        })?;
        Ok(Self::from_decoded(&entry.code, entry.level, &decoded))
    }

    /// Relabel an already decoded graph.
    ///
    /// Nodes keep their decode order; node `i` becomes canonical index `i`
    /// and remembers its original label.
    pub fn from_decoded(code: &str, level: i64, decoded: &Graph6Graph) -> Self {
        let mut graph = UnGraph::with_capacity(decoded.order(), decoded.edge_count());
        let relabel: HashMap<usize, NodeIndex> = (0..decoded.order())
            .map(|original| (original, graph.add_node(CanonicalNode { original })))
            .collect();

        for &(u, v) in decoded.edges() {
            if let (Some(&a), Some(&b)) = (relabel.get(&u), relabel.get(&v)) {
                graph.add_edge(a, b, ());
            }
        }

        debug!(code, nodes = graph.node_count(), edges = graph.edge_count(), "canonicalized graph6");

        Self {
            code: code.to_string(),
            level,
            graph,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    /// Get the underlying petgraph.
    pub fn inner(&self) -> &UnGraph<CanonicalNode, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Label the canonical node `node` had before relabeling.
    pub fn original_label(&self, node: usize) -> Option<usize> {
        self.graph.node_weight(NodeIndex::new(node)).map(|n| n.original)
    }

    /// Canonical neighbors of `node`, ascending.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        if node >= self.graph.node_count() {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(node))
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Adjacency list, one line per node: `"v n1 n2 ..."`.
    ///
    /// Each undirected edge is listed once, on the line of its smaller
    /// endpoint.
    pub fn adjacency_lines(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|idx| {
                let v = idx.index();
                std::iter::once(v)
                    .chain(self.neighbors(v).into_iter().filter(|&n| n >= v))
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Panel / report heading.
    pub fn title(&self) -> String {
        format!("Graph: {} (Level {})", self.code, self.level)
    }
}

/// Decode and relabel every entry of a table, in table order.
///
/// Stops at the first code that fails to decode.
pub fn canonicalize_table(table: &Graph6Table) -> Result<Vec<CanonicalGraph>, GraphBuildError> {
    table.iter().map(CanonicalGraph::from_entry).collect()
}
