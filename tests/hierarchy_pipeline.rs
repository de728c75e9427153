use hiergraph::graph::{
    render_graphml, render_hierarchy_svg, render_hierarchy_tree, HierarchyExport, HierarchyGraph,
    HierarchyStyle, LevelLayout, Position,
};
use hiergraph::parse_hierarchy;
use pretty_assertions::assert_eq;

const LOG: &str = include_str!("../crates/cli/data/hierarchy.log");

#[test]
fn test_bundled_log_parses_cleanly() {
    let log = parse_hierarchy(LOG);

    assert!(log.diagnostics.is_empty(), "unexpected diagnostics: {:?}", log.diagnostics);
    assert_eq!(log.edge_count(), 479);
    assert_eq!(log.levels.len(), 97);
    assert_eq!(log.not_found.len(), 36);
    assert_eq!(log.found_nodes().len(), 61);

    let first: Vec<(&str, u64)> = log.levels.iter().take(3).map(|(id, l)| (id.as_str(), *l)).collect();
    assert_eq!(first, vec![("CNR~[", 1), ("CLm~{", 0), ("?Vdz{", 2)]);
}

#[test]
fn test_bundled_graph_collapses_duplicate_edges() {
    let log = parse_hierarchy(LOG);
    let graph = HierarchyGraph::from_log(&log);

    assert_eq!(graph.node_count(), 97);
    assert_eq!(graph.edge_count(), 206);
    assert_eq!(graph.not_found_nodes().count(), 36);
    assert_eq!(graph.found_nodes().count(), 61);
    assert_eq!(graph.roots().len(), 30);
}

#[test]
fn test_bundled_layout_rows() {
    let log = parse_hierarchy(LOG);
    let layout = LevelLayout::from_log(&log);

    let row_sizes: Vec<(u64, usize)> = layout.rows().iter().map(|(l, ids)| (*l, ids.len())).collect();
    assert_eq!(row_sizes, vec![(0, 5), (1, 36), (2, 38), (3, 18)]);
    assert_eq!(layout.max_row_len(), 38);
    assert_eq!(layout.level_range(), Some((0, 3)));

    assert_eq!(layout.position("CNR~["), Some(Position::new(0.0, -1.0)));
    assert_eq!(layout.position("CLm~{"), Some(Position::new(0.0, 0.0)));
    assert_eq!(layout.position("?Vdz{"), Some(Position::new(0.0, -2.0)));
    assert_eq!(layout.position("?Z\\z{"), Some(Position::new(1.0, -1.0)));
}

#[test]
fn test_bundled_svg_has_every_node() {
    let log = parse_hierarchy(LOG);
    let graph = HierarchyGraph::from_log(&log);
    let layout = LevelLayout::from_log(&log);

    let style = HierarchyStyle {
        strict: true,
        ..HierarchyStyle::default()
    };
    let svg = render_hierarchy_svg(&graph, &layout, &style).unwrap();

    assert_eq!(svg.matches("<circle").count(), 97);
    assert_eq!(svg.matches("<line").count(), 206);
    let (_, not_found_group) = svg.split_once(r#"<g class="not-found" fill="red""#).unwrap();
    assert_eq!(not_found_group.matches("<circle").count(), 36);
}

#[test]
fn test_unplaced_node_is_skipped_or_rejected() {
    let log = parse_hierarchy("Cannot find: 2 A -> 1 Ghost\n2 A -> 1 B\n");
    let graph = HierarchyGraph::from_log(&log);
    let layout = LevelLayout::from_log(&log);

    let svg = render_hierarchy_svg(&graph, &layout, &HierarchyStyle::default()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(!svg.contains("Ghost"));

    let strict = HierarchyStyle {
        strict: true,
        ..HierarchyStyle::default()
    };
    let err = render_hierarchy_svg(&graph, &layout, &strict).unwrap_err();
    assert!(err.to_string().contains("Ghost"));
}

#[test]
fn test_alternate_outputs() {
    let log = parse_hierarchy("Cannot find: 1 R -> 0 X\n1 R -> 0 X 0 Y\n");
    let graph = HierarchyGraph::from_log(&log);
    let layout = LevelLayout::from_log(&log);

    assert_eq!(render_hierarchy_tree(&graph), "R (L1) ✗\n   ├── X (L0) ✗\n   └── Y (L0)\n");

    let xml = render_graphml(&graph, &layout).unwrap();
    assert_eq!(xml.matches("<node ").count(), 3);

    let export = HierarchyExport::new(&log, &graph, &layout);
    let json = serde_json::to_value(&export).unwrap();
    assert_eq!(json["stats"]["distinct_edges"], 2);
    assert_eq!(json["graph"]["not_found"], serde_json::json!(["R", "X"]));
}
