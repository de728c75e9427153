//! graph6 codec for small undirected graphs.
//!
//! The format packs `N(n)` followed by the upper triangle of the adjacency
//! matrix, column by column (`x(0,1), x(0,2), x(1,2), x(0,3), ...`), six bits
//! per printable byte in the range `63..=126`.

use crate::error::Graph6Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional header that may precede a graph6 string.
pub const GRAPH6_HEADER: &str = ">>graph6<<";

const BIAS: u8 = 63;
const MAX_BYTE: u8 = 126;
const BITS_PER_BYTE: usize = 6;
const SMALL_ORDER_MAX: usize = 62;
const MEDIUM_ORDER_MAX: usize = 258_047;
const LARGE_ORDER_MAX: usize = 68_719_476_735;

/// A decoded simple undirected graph on nodes `0..order`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Graph6Graph {
    order: usize,
    /// Sorted, deduplicated, each pair with `u < v`.
    edges: Vec<(usize, usize)>,
}

impl Graph6Graph {
    /// Build a graph from an edge list.
    ///
    /// Pairs are normalized to `u < v`; self-loops, duplicates and endpoints
    /// outside `0..order` are dropped.
    pub fn from_edges(order: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut edges: Vec<(usize, usize)> = edges
            .into_iter()
            .filter(|&(u, v)| u != v && u < order && v < order)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        Self { order, edges }
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Edges as `(u, v)` pairs with `u < v`, sorted.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges.binary_search(&(u.min(v), u.max(v))).is_ok()
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| match (a == v, b == v) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Encode this graph as a graph6 string (without header).
    pub fn to_graph6(&self) -> String {
        let mut out = String::new();
        encode_order(self.order, &mut out);

        let mut chunk = 0u8;
        let mut filled = 0usize;
        for (i, j) in upper_triangle(self.order) {
            chunk = (chunk << 1) | u8::from(self.has_edge(i, j));
            filled += 1;
            if filled == BITS_PER_BYTE {
                out.push(char::from(chunk + BIAS));
                chunk = 0;
                filled = 0;
            }
        }
        if filled > 0 {
            chunk <<= BITS_PER_BYTE - filled;
            out.push(char::from(chunk + BIAS));
        }

        out
    }
}

impl fmt::Display for Graph6Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_graph6())
    }
}

impl std::str::FromStr for Graph6Graph {
    type Err = Graph6Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_graph6(s)
    }
}

/// Decode a graph6 string.
///
/// Surrounding whitespace and an optional `>>graph6<<` header are accepted.
pub fn parse_graph6(code: &str) -> Result<Graph6Graph, Graph6Error> {
    let trimmed = code.trim();
    let body = trimmed.strip_prefix(GRAPH6_HEADER).unwrap_or(trimmed).as_bytes();

    if body.is_empty() {
        return Err(Graph6Error::Empty);
    }
    if let Some((position, &byte)) = body
        .iter()
        .enumerate()
        .find(|(_, b)| !(BIAS..=MAX_BYTE).contains(*b))
    {
        return Err(Graph6Error::InvalidByte { position, byte });
    }

    let (order, data) = decode_order(body)?;

    let bits = order
        .checked_mul(order.saturating_sub(1))
        .map(|n| n / 2)
        .ok_or(Graph6Error::TooLarge { order })?;
    let expected = bits.div_ceil(BITS_PER_BYTE);
    if data.len() != expected {
        return Err(Graph6Error::LengthMismatch {
            expected,
            found: data.len(),
        });
    }

    let bit_stream = data.iter().flat_map(|&byte| {
        (0..BITS_PER_BYTE)
            .rev()
            .map(move |shift| ((byte - BIAS) >> shift) & 1 == 1)
    });
    let edges = upper_triangle(order)
        .zip(bit_stream)
        .filter_map(|(pair, set)| set.then_some(pair));

    Ok(Graph6Graph::from_edges(order, edges))
}

/// Split `N(n)` off the front of `body`.
fn decode_order(body: &[u8]) -> Result<(usize, &[u8]), Graph6Error> {
    let (width, rest) = match body {
        [MAX_BYTE, MAX_BYTE, rest @ ..] => (6, rest),
        [MAX_BYTE, rest @ ..] => (3, rest),
        [first, rest @ ..] => return Ok((usize::from(first - BIAS), rest)),
        [] => return Err(Graph6Error::Empty),
    };

    if rest.len() < width {
        return Err(Graph6Error::TruncatedOrder);
    }
    let (digits, data) = rest.split_at(width);
    let order = digits
        .iter()
        .fold(0usize, |acc, &b| (acc << BITS_PER_BYTE) | usize::from(b - BIAS));

    Ok((order, data))
}

fn encode_order(order: usize, out: &mut String) {
    if order <= SMALL_ORDER_MAX {
        out.push(char::from(order as u8 + BIAS));
        return;
    }

    let width = if order <= MEDIUM_ORDER_MAX {
        out.push(char::from(MAX_BYTE));
        3
    } else {
        out.push(char::from(MAX_BYTE));
        out.push(char::from(MAX_BYTE));
        6
    };

    let order = order.min(LARGE_ORDER_MAX);
    for k in (0..width).rev() {
        let digit = ((order >> (k * BITS_PER_BYTE)) & 0x3f) as u8;
        out.push(char::from(digit + BIAS));
    }
}

/// Upper-triangle pairs in graph6 column order.
fn upper_triangle(order: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..order).flat_map(|j| (0..j).map(move |i| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_small_graphs() {
        // "A_" is K2, "Bw" is K3.
        let k2 = parse_graph6("A_").unwrap();
        assert_eq!(k2.order(), 2);
        assert_eq!(k2.edges(), &[(0, 1)]);

        let k3 = parse_graph6("Bw").unwrap();
        assert_eq!(k3.edges(), &[(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_decode_order_eight() {
        let g = parse_graph6("G?|v]{").unwrap();
        assert_eq!(g.order(), 8);
        assert!(g.edge_count() > 0);
        assert!(g.edges().iter().all(|&(u, v)| u < v && v < 8));
    }

    #[test]
    fn test_header_and_whitespace_are_accepted() {
        let plain = parse_graph6("Bw").unwrap();
        assert_eq!(parse_graph6(">>graph6<<Bw\n").unwrap(), plain);
        assert_eq!(parse_graph6("  Bw  ").unwrap(), plain);
    }

    #[test]
    fn test_reencode_matches_input() {
        for code in ["G?|v]{", "G?Vdz{", "GCNR~[", "GCLm~{", "A_", "Bw", "@"] {
            let g = parse_graph6(code).unwrap();
            assert_eq!(g.to_graph6(), code, "re-encoding {code}");
        }
    }

    #[test]
    fn test_medium_order_encoding() {
        let g = Graph6Graph::from_edges(63, [(0, 62)]);
        let code = g.to_graph6();
        assert!(code.starts_with("~??~"));
        assert_eq!(parse_graph6(&code).unwrap(), g);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_graph6("   "), Err(Graph6Error::Empty));
        assert_eq!(parse_graph6(">>graph6<<"), Err(Graph6Error::Empty));
    }

    #[test]
    fn test_invalid_byte() {
        assert_eq!(
            parse_graph6("G? v]{"),
            Err(Graph6Error::InvalidByte {
                position: 2,
                byte: b' '
            })
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            parse_graph6("G?|v]"),
            Err(Graph6Error::LengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_truncated_order() {
        assert_eq!(parse_graph6("~?"), Err(Graph6Error::TruncatedOrder));
    }

    #[test]
    fn test_neighbors_sorted() {
        let g = Graph6Graph::from_edges(4, [(3, 1), (1, 0), (2, 1), (1, 1)]);
        assert_eq!(g.neighbors(1), vec![0, 2, 3]);
        assert_eq!(g.edge_count(), 3);
        assert!(g.has_edge(3, 1));
        assert!(!g.has_edge(0, 3));
    }
}
