//! Parser for hierarchy search logs.
//!
//! A hierarchy log is line-oriented text produced by a level-by-level graph
//! search. Three kinds of lines are recognized:
//!
//! ```text
//! Cannot find: 2 ?Vdz{ -> 1 CNR~[        not-found diagnostic
//! 2 ?Vdz{ -> 1 ?Z\z{ 1 ?lv]{              one parent, one or more children
//!                                         blank (ignored)
//! ```
//!
//! Every `<level> <id>` pair records the node's level, overwriting any earlier
//! value. Each child on a structural line adds a directed `parent -> child`
//! edge. Malformed lines never fail the parse; they are collected as
//! [`ParseDiagnostic`]s and logged.

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Marker that identifies a not-found line anywhere within the line.
pub const NOT_FOUND_MARKER: &str = "Cannot find";

/// Separator between the parent segment and the children segment.
pub const ARROW: &str = "->";

/// Whitespace-token positions of the two identifiers in
/// `Cannot find: L1 ID1 -> L2 ID2`.
const NOT_FOUND_ID_TOKENS: (usize, usize) = (3, 6);

static PARENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+) (\S+)").expect("hardcoded regex pattern is valid"));

static CHILD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) (\S+)").expect("hardcoded regex pattern is valid"));

/// A directed edge from a parent node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub parent: String,
    pub child: String,
}

impl Edge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.parent, self.child)
    }
}

/// What went wrong on a skipped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The segment before `->` is not `<digits> <token>`.
    MalformedParent,
    /// A level matches `<digits>` but does not fit in a `u64`. An out-of-range
    /// parent skips the line; an out-of-range child skips only that child.
    LevelOutOfRange,
    /// A `Cannot find` line has fewer than seven whitespace tokens.
    TruncatedNotFound,
}

/// A non-fatal problem found while parsing a hierarchy log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number.
    pub line: usize,
    /// Byte range of the offending text within the whole input.
    pub span: Range<usize>,
    /// The offending text, verbatim.
    pub text: String,
}

impl ParseDiagnostic {
    /// Human-readable message for this diagnostic.
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::MalformedParent => {
                format!("Skipping malformed parent entry: '{}'", self.text)
            }
            DiagnosticKind::LevelOutOfRange => {
                format!("Skipping entry with out-of-range level: '{}'", self.text)
            }
            DiagnosticKind::TruncatedNotFound => {
                format!("Skipping truncated not-found line: '{}'", self.text)
            }
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message())
    }
}

/// Everything extracted from one hierarchy log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLog {
    /// Edges in encounter order, duplicates preserved.
    pub edges: Vec<Edge>,
    /// Node levels, last write wins; ordered by first encounter.
    pub levels: IndexMap<String, u64>,
    /// Identifiers named by `Cannot find` lines.
    pub not_found: IndexSet<String>,
    /// Lines that were skipped, with the reason.
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl HierarchyLog {
    /// Look up the recorded level of a node.
    pub fn level_of(&self, id: &str) -> Option<u64> {
        self.levels.get(id).copied()
    }

    /// Check whether `id` appeared in a `Cannot find` line.
    pub fn is_not_found(&self, id: &str) -> bool {
        self.not_found.contains(id)
    }

    /// Number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.levels.is_empty() && self.not_found.is_empty()
    }

    /// Edge endpoints in first-encounter order (parent before child).
    pub fn edge_nodes(&self) -> IndexSet<&str> {
        self.edges
            .iter()
            .flat_map(|e| [e.parent.as_str(), e.child.as_str()])
            .collect()
    }

    /// Edge endpoints that are not in the not-found set.
    pub fn found_nodes(&self) -> Vec<&str> {
        self.edge_nodes()
            .into_iter()
            .filter(|id| !self.not_found.contains(*id))
            .collect()
    }
}

/// Parse a hierarchy log.
///
/// This never fails: malformed lines are skipped, logged at `warn` level and
/// recorded in [`HierarchyLog::diagnostics`].
pub fn parse_hierarchy(input: &str) -> HierarchyLog {
    let mut log = HierarchyLog::default();
    let mut offset = 0;

    for (index, raw) in input.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        let line_no = index + 1;

        if line.contains(NOT_FOUND_MARKER) {
            parse_not_found(&mut log, line, line_no, start);
        } else if let Some(arrow) = line.find(ARROW) {
            parse_structural(&mut log, line, arrow, line_no, start);
        }
    }

    debug!(
        edges = log.edges.len(),
        levels = log.levels.len(),
        not_found = log.not_found.len(),
        skipped = log.diagnostics.len(),
        "parsed hierarchy log"
    );

    log
}

fn parse_not_found(log: &mut HierarchyLog, line: &str, line_no: usize, start: usize) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (first, second) = NOT_FOUND_ID_TOKENS;

    match (tokens.get(first), tokens.get(second)) {
        (Some(from), Some(to)) => {
            debug!(line = line_no, from = *from, to = *to, "parsed not-found line");
            log.not_found.insert((*from).to_string());
            log.not_found.insert((*to).to_string());
        }
        _ => push_diagnostic(
            log,
            DiagnosticKind::TruncatedNotFound,
            line_no,
            start..start + line.len(),
            line,
        ),
    }
}

fn parse_structural(log: &mut HierarchyLog, line: &str, arrow: usize, line_no: usize, start: usize) {
    let parent_segment = &line[..arrow];
    let children_segment = &line[arrow + ARROW.len()..];
    let children_start = start + arrow + ARROW.len();

    let parent = PARENT_TOKEN
        .captures(parent_segment)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?, caps.get(2)?)));

    let Some((parent_match, parent_level, parent_id)) = parent else {
        push_diagnostic(
            log,
            DiagnosticKind::MalformedParent,
            line_no,
            start..start + parent_segment.len(),
            parent_segment,
        );
        return;
    };
    let Ok(parent_level) = parent_level.as_str().parse::<u64>() else {
        push_diagnostic(
            log,
            DiagnosticKind::LevelOutOfRange,
            line_no,
            start..start + parent_match.end(),
            parent_match.as_str(),
        );
        return;
    };
    let parent_id = parent_id.as_str();
    let edges_before = log.edges.len();

    log.levels.insert(parent_id.to_string(), parent_level);

    for caps in CHILD_TOKEN.captures_iter(children_segment) {
        let (Some(whole), Some(level), Some(child)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        match level.as_str().parse::<u64>() {
            Ok(level) => {
                log.levels.insert(child.as_str().to_string(), level);
                log.edges.push(Edge::new(parent_id, child.as_str()));
            }
            Err(_) => push_diagnostic(
                log,
                DiagnosticKind::LevelOutOfRange,
                line_no,
                children_start + whole.start()..children_start + whole.end(),
                whole.as_str(),
            ),
        }
    }

    debug!(
        line = line_no,
        parent = parent_id,
        level = parent_level,
        children = log.edges.len() - edges_before,
        "parsed structural line"
    );
}

fn push_diagnostic(
    log: &mut HierarchyLog,
    kind: DiagnosticKind,
    line: usize,
    span: Range<usize>,
    text: &str,
) {
    let diagnostic = ParseDiagnostic {
        kind,
        line,
        span,
        text: text.to_string(),
    };
    warn!(line, "{}", diagnostic.message());
    log.diagnostics.push(diagnostic);
}
