//! Query operations on the hierarchy graph.

use crate::layout::LevelLayout;
use crate::nodes::HierarchyNode;
use crate::HierarchyGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

impl HierarchyGraph {
    /// Identifiers of the nodes `id` points to, in edge insertion order.
    pub fn children(&self, id: &str) -> Vec<&str> {
        self.neighbors_in(id, Direction::Outgoing)
    }

    /// Identifiers of the nodes pointing to `id`, in edge insertion order.
    pub fn parents(&self, id: &str) -> Vec<&str> {
        self.neighbors_in(id, Direction::Incoming)
    }

    /// Nodes with no incoming edge, in insertion order.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Nodes whose last recorded level is `level`.
    pub fn nodes_at_level(&self, level: u64) -> Vec<&HierarchyNode> {
        self.nodes().filter(|n| n.level == Some(level)).collect()
    }

    /// Nodes the layout has no position for.
    pub fn unplaced_nodes(&self, layout: &LevelLayout) -> Vec<&str> {
        self.nodes()
            .filter(|n| !layout.contains(&n.id))
            .map(|n| n.id.as_str())
            .collect()
    }

    fn neighbors_in(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(idx) = self.get_index(id) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        edges.sort_by_key(|e| e.id());

        edges
            .into_iter()
            .filter_map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                self.get_node(other).map(|n| n.id.as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{HierarchyGraph, LevelLayout};
    use hiergraph_parser::parse_hierarchy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_children_and_parents() {
        let log = parse_hierarchy("2 A -> 1 B 1 C\n2 D -> 1 C\n");
        let graph = HierarchyGraph::from_log(&log);

        assert_eq!(graph.children("A"), vec!["B", "C"]);
        assert_eq!(graph.parents("C"), vec!["A", "D"]);
        assert!(graph.children("missing").is_empty());
    }

    #[test]
    fn test_roots() {
        let log = parse_hierarchy("2 A -> 1 B\n2 D -> 1 B\n1 B -> 0 E\n");
        let graph = HierarchyGraph::from_log(&log);

        let roots: Vec<&str> = graph
            .roots()
            .into_iter()
            .filter_map(|idx| graph.get_node(idx))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(roots, vec!["A", "D"]);
    }

    #[test]
    fn test_nodes_at_level() {
        let log = parse_hierarchy("2 A -> 1 B 1 C\n");
        let graph = HierarchyGraph::from_log(&log);

        let ids: Vec<&str> = graph.nodes_at_level(1).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C"]);
    }

    #[test]
    fn test_unplaced_nodes_are_the_levelless_ones() {
        let log = parse_hierarchy("Cannot find: 3 X -> 2 Y\n2 Y -> 1 Z\n");
        let graph = HierarchyGraph::from_log(&log);
        let layout = LevelLayout::from_log(&log);

        assert_eq!(graph.unplaced_nodes(&layout), vec!["X"]);
    }
}
