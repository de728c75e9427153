//! ASCII rendering for graph visualization.
//!
//! Provides a terminal-friendly tree view of hierarchy graphs.

use crate::HierarchyGraph;
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// Render a hierarchy graph as an ASCII tree.
///
/// Trees start at every node without a parent. Each label shows the node's
/// level, and not-found nodes are marked with `✗`. A node that was already
/// expanded is printed again with `↩` instead of repeating its subtree.
pub fn render_hierarchy_tree(graph: &HierarchyGraph) -> String {
    let inner = graph.inner();

    let labels: Vec<String> = inner.node_weights().map(|n| n.label()).collect();

    // Children in edge insertion order
    let mut edges: HashMap<usize, Vec<usize>> = HashMap::new();
    for edge in inner.edge_references() {
        edges
            .entry(edge.source().index())
            .or_default()
            .push(edge.target().index());
    }

    render_ascii_tree(&labels, &edges)
}

/// Render nodes and edges as an ASCII tree structure.
pub fn render_ascii_tree(labels: &[String], edges: &HashMap<usize, Vec<usize>>) -> String {
    let mut output = String::new();
    if labels.is_empty() {
        return output;
    }

    let mut visited: HashSet<usize> = HashSet::new();

    // Find root nodes (nodes with no incoming edges)
    let has_incoming: HashSet<usize> = edges.values().flatten().copied().collect();
    let roots: Vec<usize> = (0..labels.len())
        .filter(|i| !has_incoming.contains(i))
        .collect();

    // If no roots found (everything has incoming), start from node 0
    let start_nodes = if roots.is_empty() { vec![0] } else { roots };

    for (i, &root) in start_nodes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_node(&mut output, labels, edges, root, "", true, &mut visited);
    }

    output
}

fn render_node(
    output: &mut String,
    labels: &[String],
    edges: &HashMap<usize, Vec<usize>>,
    node: usize,
    prefix: &str,
    is_last: bool,
    visited: &mut HashSet<usize>,
) {
    let is_root = prefix.is_empty();
    let connector = if is_root {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };

    let label = labels.get(node).map(|s| s.as_str()).unwrap_or("?");

    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(label);

    // Already expanded elsewhere (shared child or cycle)
    if !visited.insert(node) {
        output.push_str(" ↩\n");
        return;
    }
    output.push('\n');

    let Some(children) = edges.get(&node) else {
        return;
    };

    let child_prefix = if is_root {
        "   ".to_string()
    } else if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    for (i, &child) in children.iter().enumerate() {
        let child_is_last = i + 1 == children.len();
        render_node(output, labels, edges, child, &child_prefix, child_is_last, visited);
    }
}
