//! Graph rendering utilities.
//!
//! This module provides output formats for hiergraph graphs:
//! - SVG for hierarchy graphs (level grid, two-tone nodes) and graph6 panels
//! - ASCII tree rendering for terminal display
//! - GraphML export for external visualization tools

mod ascii;
mod graphml;
mod svg;

pub use ascii::{render_ascii_tree, render_hierarchy_tree};
pub use graphml::render_graphml;
pub use svg::{render_graph6_panels, render_hierarchy_svg};

use serde::{Deserialize, Serialize};

/// Drawing options for hierarchy SVGs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyStyle {
    pub found_color: String,
    pub not_found_color: String,
    pub edge_color: String,
    pub node_radius: f64,
    /// Horizontal distance between neighboring slots of a row
    pub cell_width: f64,
    /// Vertical distance between level rows
    pub cell_height: f64,
    pub margin: f64,
    pub font_size: f64,
    /// Fail instead of skipping nodes that have no level
    pub strict: bool,
}

impl Default for HierarchyStyle {
    fn default() -> Self {
        Self {
            found_color: "lightblue".to_string(),
            not_found_color: "red".to_string(),
            edge_color: "black".to_string(),
            node_radius: 28.0,
            cell_width: 90.0,
            cell_height: 180.0,
            margin: 60.0,
            font_size: 10.0,
            strict: false,
        }
    }
}

/// Drawing options for the graph6 panel grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub columns: usize,
    pub panel_width: f64,
    pub panel_height: f64,
    /// Inner padding between a panel's border and its outermost nodes
    pub padding: f64,
    pub title_height: f64,
    pub node_color: String,
    pub edge_color: String,
    pub node_radius: f64,
    pub font_size: f64,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            columns: 2,
            panel_width: 500.0,
            panel_height: 500.0,
            padding: 40.0,
            title_height: 36.0,
            node_color: "lightblue".to_string(),
            edge_color: "black".to_string(),
            node_radius: 16.0,
            font_size: 10.0,
        }
    }
}

/// Escape special XML characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hello""#), "say &quot;hello&quot;");
    }

    #[test]
    fn test_style_deserializes_partially() {
        let style: HierarchyStyle = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(style.strict);
        assert_eq!(style.not_found_color, "red");
    }
}
