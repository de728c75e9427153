//! Node layouts.
//!
//! - [`LevelLayout`] gives every node of a level map a grid cell: one row per
//!   level, nodes packed left to right in encounter order.
//! - [`FixedLayout`] maps canonical node indices to hand-picked coordinates.
//!
//! Both use math orientation (y grows upwards); renderers flip it.

use crate::error::LayoutError;
use hiergraph_parser::HierarchyLog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a node ended up in a [`LevelLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub level: u64,
    /// Zero-based slot within the level's row
    pub column: usize,
    pub position: Position,
}

/// Per-level grid layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelLayout {
    placements: IndexMap<String, Placement>,
}

impl LevelLayout {
    /// Assign grid positions to every node of a level map.
    ///
    /// Iteration follows the map's order. A node gets `x` equal to the number
    /// of nodes already placed on its level and `y = -level`.
    pub fn assign(levels: &IndexMap<String, u64>) -> Self {
        let mut next_column: HashMap<u64, usize> = HashMap::new();
        let mut placements = IndexMap::with_capacity(levels.len());

        for (id, &level) in levels {
            let slot = next_column.entry(level).or_insert(0);
            let column = *slot;
            *slot += 1;

            placements.insert(
                id.clone(),
                Placement {
                    level,
                    column,
                    position: Position::new(column as f64, -(level as f64)),
                },
            );
        }

        debug!(nodes = placements.len(), rows = next_column.len(), "assigned level layout");

        Self { placements }
    }

    /// Lay out the level map of a parsed log.
    pub fn from_log(log: &HierarchyLog) -> Self {
        Self::assign(&log.levels)
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.placements.get(id).map(|p| p.position)
    }

    pub fn placement(&self, id: &str) -> Option<&Placement> {
        self.placements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.placements.contains_key(id)
    }

    /// Placements in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.placements.iter().map(|(id, p)| (id.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Node ids per level, levels ascending, ids left to right.
    pub fn rows(&self) -> BTreeMap<u64, Vec<&str>> {
        let mut rows: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
        for (id, placement) in &self.placements {
            rows.entry(placement.level).or_default().push(id.as_str());
        }
        rows
    }

    /// Number of slots in the widest row.
    pub fn max_row_len(&self) -> usize {
        self.rows().values().map(Vec::len).max().unwrap_or(0)
    }

    /// Smallest and largest level, if any node is placed.
    pub fn level_range(&self) -> Option<(u64, u64)> {
        let levels = self.placements.values().map(|p| p.level);
        let min = levels.clone().min()?;
        let max = levels.max()?;
        Some((min, max))
    }
}

/// Hand-picked coordinates for the first nine canonical node indices.
const DEFAULT_FIXED_POSITIONS: [(f64, f64); 9] = [
    (0.3, 0.4),
    (1.0, 0.1),
    (1.7, 0.4),
    (0.0, 1.3),
    (0.8, 1.0),
    (2.0, 1.3),
    (0.3, 2.0),
    (1.0, 2.3),
    (1.7, 2.0),
];

/// A node-index to coordinate lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLayout {
    positions: BTreeMap<usize, Position>,
}

impl Default for FixedLayout {
    fn default() -> Self {
        DEFAULT_FIXED_POSITIONS
            .iter()
            .enumerate()
            .map(|(idx, &(x, y))| (idx, Position::new(x, y)))
            .collect()
    }
}

impl FromIterator<(usize, Position)> for FixedLayout {
    fn from_iter<I: IntoIterator<Item = (usize, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl FixedLayout {
    /// Load a table from JSON: `{"0": [0.3, 0.4], "1": [1.0, 0.1], ...}`.
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        let raw: BTreeMap<String, [f64; 2]> = serde_json::from_str(source)?;
        raw.into_iter()
            .map(|(key, [x, y])| {
                key.trim()
                    .parse::<usize>()
                    .map(|idx| (idx, Position::new(x, y)))
                    .map_err(|_| LayoutError::InvalidIndex(key))
            })
            .collect()
    }

    pub fn position(&self, node: usize) -> Option<Position> {
        self.positions.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounding box `(min, max)` of every position in the table.
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                Position::new(lo.x.min(p.x), lo.y.min(p.y)),
                Position::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiergraph_parser::parse_hierarchy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_level_packs_left_to_right() {
        let log = parse_hierarchy("2 A -> 1 B 1 C\n1 B -> 0 D\n");
        let layout = LevelLayout::from_log(&log);

        assert_eq!(layout.position("A"), Some(Position::new(0.0, -2.0)));
        assert_eq!(layout.position("B"), Some(Position::new(0.0, -1.0)));
        assert_eq!(layout.position("C"), Some(Position::new(1.0, -1.0)));
        assert_eq!(layout.position("D"), Some(Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_encounter_order_gives_increasing_x() {
        let log = parse_hierarchy("3 R -> 1 first\n3 R -> 1 second\n3 R -> 1 third\n");
        let layout = LevelLayout::from_log(&log);

        let xs: Vec<f64> = ["first", "second", "third"]
            .iter()
            .filter_map(|id| layout.position(id))
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_relevelled_node_keeps_first_slot_order() {
        // A is first seen at level 2, then moved to level 1: it is still
        // iterated first, so it takes slot 0 of level 1.
        let log = parse_hierarchy("2 A -> 1 B\n3 C -> 1 A\n");
        let layout = LevelLayout::from_log(&log);

        assert_eq!(layout.placement("A").map(|p| (p.level, p.column)), Some((1, 0)));
        assert_eq!(layout.placement("B").map(|p| (p.level, p.column)), Some((1, 1)));
    }

    #[test]
    fn test_rows_and_ranges() {
        let log = parse_hierarchy("2 A -> 1 B 1 C\n");
        let layout = LevelLayout::from_log(&log);

        let rows = layout.rows();
        assert_eq!(rows.get(&1), Some(&vec!["B", "C"]));
        assert_eq!(rows.get(&2), Some(&vec!["A"]));
        assert_eq!(layout.max_row_len(), 2);
        assert_eq!(layout.level_range(), Some((1, 2)));
        assert_eq!(LevelLayout::default().level_range(), None);
    }

    #[test]
    fn test_default_fixed_layout() {
        let layout = FixedLayout::default();
        assert_eq!(layout.len(), 9);
        assert_eq!(layout.position(4), Some(Position::new(0.8, 1.0)));
        assert_eq!(layout.position(9), None);

        let (lo, hi) = layout.bounds().unwrap();
        assert_eq!(lo, Position::new(0.0, 0.1));
        assert_eq!(hi, Position::new(2.0, 2.3));
    }

    #[test]
    fn test_fixed_layout_from_json() {
        let layout = FixedLayout::from_json(r#"{"0": [0, 0], "10": [1.5, -2]}"#).unwrap();
        assert_eq!(layout.position(10), Some(Position::new(1.5, -2.0)));

        let err = FixedLayout::from_json(r#"{"zero": [0, 0]}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidIndex(key) if key == "zero"));
    }
}
