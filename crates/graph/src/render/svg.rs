//! SVG output.
//!
//! Hierarchy graphs are drawn on the level grid: edges first as arrows, then
//! found nodes, then not-found nodes on top. graph6 graphs are drawn as a
//! grid of titled panels sharing one fixed layout.

use super::{escape_xml, HierarchyStyle, PanelStyle};
use crate::error::RenderError;
use crate::layout::{FixedLayout, LevelLayout, Position};
use crate::nodes::HierarchyNode;
use crate::{CanonicalGraph, HierarchyGraph};
use petgraph::visit::EdgeRef;
use std::fmt::Write;
use tracing::{debug, warn};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const PANEL_BORDER: &str = "#cccccc";

/// Render a hierarchy graph on its level layout.
///
/// Nodes without a level are skipped together with their edges, or rejected
/// with [`RenderError::UnplacedNodes`] when `style.strict` is set.
pub fn render_hierarchy_svg(
    graph: &HierarchyGraph,
    layout: &LevelLayout,
    style: &HierarchyStyle,
) -> Result<String, RenderError> {
    let unplaced = graph.unplaced_nodes(layout);
    if !unplaced.is_empty() {
        if style.strict {
            return Err(RenderError::UnplacedNodes {
                nodes: unplaced.iter().map(|id| id.to_string()).collect(),
            });
        }
        for id in &unplaced {
            warn!(node = %id, "node has no level; skipping it and its edges");
        }
    }

    let canvas = LevelCanvas::new(layout, style);
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="sans-serif">"#,
        w = canvas.width,
        h = canvas.height,
    )?;
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <marker id="arrow" markerWidth="10" markerHeight="10" refX="10" refY="5" orient="auto" markerUnits="userSpaceOnUse">"#
    )?;
    writeln!(out, r#"      <path d="M0,0 L10,5 L0,10 z" fill="{}"/>"#, escape_xml(&style.edge_color))?;
    writeln!(out, "    </marker>")?;
    writeln!(out, "  </defs>")?;

    // Edges first so they sit behind the nodes
    writeln!(
        out,
        r#"  <g class="edges" stroke="{}" stroke-width="1.5">"#,
        escape_xml(&style.edge_color)
    )?;
    let mut drawn = 0usize;
    for edge in graph.inner().edge_references() {
        let (Some(source), Some(target)) = (graph.get_node(edge.source()), graph.get_node(edge.target()))
        else {
            continue;
        };
        let (Some(a), Some(b)) = (canvas.point(&source.id), canvas.point(&target.id)) else {
            continue;
        };
        let Some((start, end)) = trim_segment(a, b, style.node_radius) else {
            continue;
        };
        writeln!(
            out,
            r#"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" marker-end="url(#arrow)"/>"#,
            start.x, start.y, end.x, end.y
        )?;
        drawn += 1;
    }
    writeln!(out, "  </g>")?;

    write_node_group(&mut out, "found", graph.found_nodes(), &canvas, &style.found_color, style)?;
    write_node_group(
        &mut out,
        "not-found",
        graph.not_found_nodes(),
        &canvas,
        &style.not_found_color,
        style,
    )?;

    writeln!(out, "</svg>")?;

    debug!(edges = drawn, skipped = unplaced.len(), "rendered hierarchy svg");
    Ok(out)
}

/// Render canonical graph6 graphs as a grid of panels.
///
/// Every canonical node index must have an entry in `layout`.
pub fn render_graph6_panels(
    graphs: &[CanonicalGraph],
    layout: &FixedLayout,
    style: &PanelStyle,
) -> Result<String, RenderError> {
    let columns = style.columns.max(1);
    let rows = graphs.len().div_ceil(columns);
    let width = columns as f64 * style.panel_width;
    let height = rows as f64 * style.panel_height;

    let frame = PanelFrame::new(layout, style);
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" font-family="sans-serif">"#
    )?;

    for (i, graph) in graphs.iter().enumerate() {
        let origin = Position::new(
            (i % columns) as f64 * style.panel_width,
            (i / columns) as f64 * style.panel_height,
        );

        let points = (0..graph.node_count())
            .map(|node| {
                layout
                    .position(node)
                    .map(|p| frame.to_pixels(origin, p))
                    .ok_or_else(|| RenderError::MissingFixedPosition {
                        graph: graph.code().to_string(),
                        node,
                    })
            })
            .collect::<Result<Vec<Position>, RenderError>>()?;

        writeln!(out, r#"  <g class="panel" id="panel-{i}">"#)?;
        writeln!(
            out,
            r#"    <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="white" stroke="{PANEL_BORDER}"/>"#,
            origin.x, origin.y, style.panel_width, style.panel_height
        )?;
        writeln!(
            out,
            r#"    <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{}">{}</text>"#,
            origin.x + style.panel_width / 2.0,
            origin.y + style.title_height * 0.7,
            style.font_size + 2.0,
            escape_xml(&graph.title())
        )?;

        writeln!(
            out,
            r#"    <g class="edges" stroke="{}" stroke-width="1.5">"#,
            escape_xml(&style.edge_color)
        )?;
        for edge in graph.inner().edge_references() {
            let (Some(a), Some(b)) = (points.get(edge.source().index()), points.get(edge.target().index()))
            else {
                continue;
            };
            writeln!(
                out,
                r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
                a.x, a.y, b.x, b.y
            )?;
        }
        writeln!(out, "    </g>")?;

        for (node, p) in points.iter().enumerate() {
            writeln!(
                out,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="black"/>"#,
                p.x,
                p.y,
                style.node_radius,
                escape_xml(&style.node_color)
            )?;
            writeln!(
                out,
                r#"    <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="{}">{node}</text>"#,
                p.x, p.y, style.font_size
            )?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

/// Maps level-layout coordinates to pixels.
struct LevelCanvas<'a> {
    layout: &'a LevelLayout,
    top: f64,
    cell_width: f64,
    cell_height: f64,
    margin: f64,
    width: f64,
    height: f64,
}

impl<'a> LevelCanvas<'a> {
    fn new(layout: &'a LevelLayout, style: &HierarchyStyle) -> Self {
        let (min_level, max_level) = layout.level_range().unwrap_or((0, 0));
        let columns = layout.max_row_len().saturating_sub(1) as f64;
        let rows = (max_level - min_level) as f64;

        Self {
            layout,
            top: -(min_level as f64),
            cell_width: style.cell_width,
            cell_height: style.cell_height,
            margin: style.margin,
            width: 2.0 * style.margin + columns * style.cell_width,
            height: 2.0 * style.margin + rows * style.cell_height,
        }
    }

    fn point(&self, id: &str) -> Option<Position> {
        self.layout.position(id).map(|p| {
            Position::new(
                self.margin + p.x * self.cell_width,
                self.margin + (self.top - p.y) * self.cell_height,
            )
        })
    }
}

/// Maps fixed-layout coordinates into a panel, centered and y-flipped.
struct PanelFrame {
    lo: Position,
    hi: Position,
    scale: f64,
    offset: Position,
    title_height: f64,
    padding: f64,
}

impl PanelFrame {
    fn new(layout: &FixedLayout, style: &PanelStyle) -> Self {
        let (lo, hi) = layout.bounds().unwrap_or_default();
        let span_x = hi.x - lo.x;
        let span_y = hi.y - lo.y;
        let inner_w = (style.panel_width - 2.0 * style.padding).max(0.0);
        let inner_h = (style.panel_height - style.title_height - 2.0 * style.padding).max(0.0);

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (inner_w / span_x).min(inner_h / span_y),
            (true, false) => inner_w / span_x,
            (false, true) => inner_h / span_y,
            (false, false) => 0.0,
        };

        Self {
            lo,
            hi,
            scale,
            offset: Position::new((inner_w - span_x * scale) / 2.0, (inner_h - span_y * scale) / 2.0),
            title_height: style.title_height,
            padding: style.padding,
        }
    }

    fn to_pixels(&self, origin: Position, p: Position) -> Position {
        Position::new(
            origin.x + self.padding + self.offset.x + (p.x - self.lo.x) * self.scale,
            origin.y + self.title_height + self.padding + self.offset.y + (self.hi.y - p.y) * self.scale,
        )
    }
}

fn write_node_group<'n>(
    out: &mut String,
    class: &str,
    nodes: impl Iterator<Item = &'n HierarchyNode>,
    canvas: &LevelCanvas<'_>,
    fill: &str,
    style: &HierarchyStyle,
) -> Result<(), RenderError> {
    writeln!(out, r#"  <g class="{class}" fill="{}" stroke="black">"#, escape_xml(fill))?;
    for node in nodes {
        let Some(p) = canvas.point(&node.id) else {
            continue;
        };
        let id = escape_xml(&node.id);
        writeln!(
            out,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}"><title>{id}</title></circle>"#,
            p.x, p.y, style.node_radius
        )?;
        writeln!(
            out,
            r#"    <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-size="{}" font-weight="bold" fill="black" stroke="none">{id}</text>"#,
            p.x, p.y, style.font_size
        )?;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

/// Pull both ends of `a -> b` in by `radius` so arrows stop at the circle.
fn trim_segment(a: Position, b: Position, radius: f64) -> Option<(Position, Position)> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length = dx.hypot(dy);
    if length <= 2.0 * radius {
        return None;
    }
    let (ux, uy) = (dx / length, dy / length);
    Some((
        Position::new(a.x + ux * radius, a.y + uy * radius),
        Position::new(b.x - ux * radius, b.y - uy * radius),
    ))
}
