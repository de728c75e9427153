//! Error types for graph building, layout and rendering.

use hiergraph_parser::Graph6Error;
use thiserror::Error;

/// Errors that can occur when building graphs from parsed input.
#[derive(Debug, Error)]
pub enum GraphBuildError {
    /// A table entry is not valid graph6
    #[error("cannot decode graph6 code '{code}': {source}")]
    Decode {
        code: String,
        #[source]
        source: Graph6Error,
    },
}

/// Errors from loading a fixed layout table.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The JSON document could not be parsed
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A key is not a node index
    #[error("layout key '{0}' is not a node index")]
    InvalidIndex(String),
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A canonical node index has no entry in the fixed layout
    #[error("no fixed position for node {node} of graph '{graph}'")]
    MissingFixedPosition { graph: String, node: usize },

    /// Nodes without a level cannot be placed (strict mode only)
    #[error("{} node(s) have no level and cannot be placed: {}", .nodes.len(), .nodes.join(", "))]
    UnplacedNodes { nodes: Vec<String> },

    /// Writing the output failed
    #[error("formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}

