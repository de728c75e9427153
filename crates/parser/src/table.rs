//! Tables of graph6 codes tagged with a level.
//!
//! Two formats are accepted:
//!
//! ```text
//! {"G?|v]{": 1, "G?Vdz{": 2}          JSON object, key order preserved
//!
//! # code   level                      text, one entry per line
//! G?|v]{  1
//! ```

use crate::error::TableError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One graph6 code and its level label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph6Entry {
    pub code: String,
    pub level: i64,
}

/// An ordered table of graph6 entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph6Table {
    entries: Vec<Graph6Entry>,
}

impl Graph6Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object mapping code to level.
    ///
    /// A repeated key keeps its first position and its last level.
    pub fn from_json(source: &str) -> Result<Self, TableError> {
        let map: IndexMap<String, i64> = serde_json::from_str(source)?;
        Ok(map
            .into_iter()
            .map(|(code, level)| Graph6Entry { code, level })
            .collect())
    }

    /// Parse a whitespace-separated `<code> <level>` table.
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn from_text(source: &str) -> Result<Self, TableError> {
        let mut table = Self::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(code), Some(level), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(TableError::InvalidLine {
                    line: index + 1,
                    content: raw.to_string(),
                });
            };

            let level = level.parse().map_err(|_| TableError::InvalidLevel {
                line: index + 1,
                value: level.to_string(),
            })?;
            table.push(code, level);
        }

        Ok(table)
    }

    /// Append an entry, replacing the level of an existing code in place.
    pub fn push(&mut self, code: impl Into<String>, level: i64) {
        let code = code.into();
        match self.entries.iter_mut().find(|e| e.code == code) {
            Some(existing) => existing.level = level,
            None => self.entries.push(Graph6Entry { code, level }),
        }
    }

    pub fn entries(&self) -> &[Graph6Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Graph6Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Graph6Entry> for Graph6Table {
    fn from_iter<I: IntoIterator<Item = Graph6Entry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.push(entry.code, entry.level);
        }
        table
    }
}

impl<'a> IntoIterator for &'a Graph6Table {
    type Item = &'a Graph6Entry;
    type IntoIter = std::slice::Iter<'a, Graph6Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(table: &Graph6Table) -> Vec<(&str, i64)> {
        table.iter().map(|e| (e.code.as_str(), e.level)).collect()
    }

    #[test]
    fn test_json_keeps_key_order() {
        let table = Graph6Table::from_json(r#"{"GCNR~[": 1, "G?|v]{": 0, "G?Vdz{": 2}"#).unwrap();
        assert_eq!(codes(&table), vec![("GCNR~[", 1), ("G?|v]{", 0), ("G?Vdz{", 2)]);
    }

    #[test]
    fn test_json_rejects_non_object() {
        assert!(matches!(Graph6Table::from_json("[1, 2]"), Err(TableError::Json(_))));
    }

    #[test]
    fn test_text_table_with_comments() {
        let source = "# canonical set\nG?|v]{ 1\n\nGCLm~{  0   # bottom\n";
        let table = Graph6Table::from_text(source).unwrap();
        assert_eq!(codes(&table), vec![("G?|v]{", 1), ("GCLm~{", 0)]);
    }

    #[test]
    fn test_text_table_invalid_line() {
        let err = Graph6Table::from_text("G?|v]{\n").unwrap_err();
        assert!(matches!(err, TableError::InvalidLine { line: 1, .. }));

        let err = Graph6Table::from_text("A_ 1 extra").unwrap_err();
        assert!(matches!(err, TableError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_text_table_invalid_level() {
        let err = Graph6Table::from_text("A_ 1\nBw high\n").unwrap_err();
        match err {
            TableError::InvalidLevel { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_push_replaces_existing_level() {
        let mut table = Graph6Table::new();
        table.push("A_", 1);
        table.push("Bw", 2);
        table.push("A_", 5);
        assert_eq!(codes(&table), vec![("A_", 5), ("Bw", 2)]);
    }
}
