//! Node types for hierarchy and canonical graphs.

use serde::{Deserialize, Serialize};

/// A node of a hierarchy graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Opaque identifier (usually a graph6-like code)
    pub id: String,
    /// Last level recorded for this node, if any
    pub level: Option<u64>,
    /// Whether the node was named by a `Cannot find` line
    pub not_found: bool,
}

impl HierarchyNode {
    /// Get a human-readable label for this node.
    pub fn label(&self) -> String {
        let mut label = match self.level {
            Some(level) => format!("{} (L{})", self.id, level),
            None => self.id.clone(),
        };
        if self.not_found {
            label.push_str(" ✗");
        }
        label
    }

    /// Whether the layout can place this node.
    pub fn is_placed(&self) -> bool {
        self.level.is_some()
    }
}

/// A node of a canonically relabeled graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalNode {
    /// The node's label before relabeling
    pub original: usize,
}
