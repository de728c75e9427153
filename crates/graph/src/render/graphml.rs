//! GraphML export for graph visualization.
//!
//! GraphML is an XML-based format for graph exchange that is widely supported
//! by graph visualization tools like yEd, Gephi, Cytoscape, etc.

use super::escape_xml;
use crate::error::RenderError;
use crate::layout::LevelLayout;
use crate::HierarchyGraph;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

/// Render a hierarchy graph as GraphML XML.
///
/// The output includes:
/// - Node attributes: label, level (when known), not_found, x/y (when placed)
/// - Directed edges without attributes
pub fn render_graphml(graph: &HierarchyGraph, layout: &LevelLayout) -> Result<String, RenderError> {
    let inner = graph.inner();
    let mut output = String::new();

    // XML header and GraphML schema
    writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(output, r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns""#)?;
    writeln!(output, r#"         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#)?;
    writeln!(output, r#"         xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns"#)?;
    writeln!(output, r#"         http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#)?;

    // Define node attributes
    writeln!(output, r#"  <key id="label" for="node" attr.name="label" attr.type="string"/>"#)?;
    writeln!(output, r#"  <key id="level" for="node" attr.name="level" attr.type="int"/>"#)?;
    writeln!(
        output,
        r#"  <key id="not_found" for="node" attr.name="not_found" attr.type="boolean">"#
    )?;
    writeln!(output, r#"    <default>false</default>"#)?;
    writeln!(output, r#"  </key>"#)?;
    writeln!(output, r#"  <key id="x" for="node" attr.name="x" attr.type="double"/>"#)?;
    writeln!(output, r#"  <key id="y" for="node" attr.name="y" attr.type="double"/>"#)?;

    // Start graph
    writeln!(output, r#"  <graph id="G" edgedefault="directed">"#)?;

    // Output nodes
    for idx in inner.node_indices() {
        let Some(node) = graph.get_node(idx) else {
            continue;
        };

        writeln!(output, r#"    <node id="n{}">"#, idx.index())?;
        writeln!(output, r#"      <data key="label">{}</data>"#, escape_xml(&node.id))?;
        if let Some(level) = node.level {
            writeln!(output, r#"      <data key="level">{}</data>"#, level)?;
        }
        if node.not_found {
            writeln!(output, r#"      <data key="not_found">true</data>"#)?;
        }
        if let Some(p) = layout.position(&node.id) {
            writeln!(output, r#"      <data key="x">{}</data>"#, p.x)?;
            writeln!(output, r#"      <data key="y">{}</data>"#, p.y)?;
        }
        writeln!(output, r#"    </node>"#)?;
    }

    // Output edges
    for (edge_id, edge) in inner.edge_references().enumerate() {
        writeln!(
            output,
            r#"    <edge id="e{}" source="n{}" target="n{}"/>"#,
            edge_id,
            edge.source().index(),
            edge.target().index()
        )?;
    }

    // Close graph and graphml
    writeln!(output, r#"  </graph>"#)?;
    writeln!(output, r#"</graphml>"#)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiergraph_parser::parse_hierarchy;

    #[test]
    fn test_graphml_nodes_and_edges() {
        let log = parse_hierarchy("Cannot find: 2 A -> 1 Z\n2 A -> 1 B 1 C\n");
        let graph = HierarchyGraph::from_log(&log);
        let layout = LevelLayout::from_log(&log);

        let xml = render_graphml(&graph, &layout).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<node ").count(), 4);
        assert_eq!(xml.matches("<edge ").count(), 2);
        assert_eq!(xml.matches(r#"<data key="not_found">true</data>"#).count(), 2);
        assert!(xml.contains(r#"<edge id="e0" source="n0" target="n1"/>"#));
        assert!(xml.contains(r#"<data key="level">2</data>"#));
        // Z has no level, so neither a level nor coordinates
        assert_eq!(xml.matches(r#"<data key="x">"#).count(), 3);
    }
}
