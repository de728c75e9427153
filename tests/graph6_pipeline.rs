use hiergraph::graph::{
    canonicalize_table, render_graph6_panels, FixedLayout, PanelStyle, Position, RenderError,
};
use hiergraph::{parse_graph6, Graph6Table};
use pretty_assertions::assert_eq;

const TABLE: &str = include_str!("../crates/cli/data/graph6.json");

#[test]
fn test_bundled_table_canonicalizes() {
    let table = Graph6Table::from_json(TABLE).unwrap();
    let graphs = canonicalize_table(&table).unwrap();

    let titles: Vec<String> = graphs.iter().map(|g| g.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Graph: G?|v]{ (Level 1)",
            "Graph: G?Vdz{ (Level 2)",
            "Graph: GCNR~[ (Level 1)",
            "Graph: GCLm~{ (Level 0)",
        ]
    );
    assert!(graphs.iter().all(|g| g.node_count() == 8));

    assert_eq!(
        graphs[0].adjacency_lines(),
        vec!["0 4 6 7", "1 4 5 6 7", "2 4 5 6", "3 4 5 7", "4 6 7", "5 6 7", "6 7", "7"]
    );
    assert_eq!(graphs[2].edge_count(), 17);
    assert_eq!(
        graphs[2].adjacency_lines(),
        vec!["0 3 5 7", "1 5 6 7", "2 4 6 7", "3 4 5 6", "4 6 7", "5 6 7", "6 7", "7"]
    );
}

#[test]
fn test_bundled_codes_reencode() {
    let table = Graph6Table::from_json(TABLE).unwrap();
    for entry in table.iter() {
        let decoded = parse_graph6(&entry.code).unwrap();
        assert_eq!(decoded.to_graph6(), entry.code);
    }
}

#[test]
fn test_panels_use_default_layout() {
    let table = Graph6Table::from_json(TABLE).unwrap();
    let graphs = canonicalize_table(&table).unwrap();

    let svg = render_graph6_panels(&graphs, &FixedLayout::default(), &PanelStyle::default()).unwrap();

    assert_eq!(svg.matches(r#"class="panel""#).count(), 4);
    assert_eq!(svg.matches("<circle").count(), 32);
    assert!(svg.contains("Graph: GCLm~{ (Level 0)"));
}

#[test]
fn test_layout_too_small_for_graph() {
    let table = Graph6Table::from_json(TABLE).unwrap();
    let graphs = canonicalize_table(&table).unwrap();
    let layout: FixedLayout = (0..4).map(|i| (i, Position::new(i as f64, 0.0))).collect();

    match render_graph6_panels(&graphs, &layout, &PanelStyle::default()) {
        Err(RenderError::MissingFixedPosition { graph, node }) => {
            assert_eq!(graph, "G?|v]{");
            assert_eq!(node, 4);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
