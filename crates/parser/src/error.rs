//! Error types and diagnostic reporting.
//!
//! Decoding and table loading fail with typed errors ([`Graph6Error`],
//! [`TableError`]). Hierarchy parsing never fails; its skipped lines are
//! [`ParseDiagnostic`]s, which [`DiagnosticReporter`] pretty-prints using the
//! [ariadne](https://crates.io/crates/ariadne) crate.

use crate::hierarchy::{DiagnosticKind, ParseDiagnostic};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io::{self, Write};
use std::ops::Range;
use thiserror::Error;

/// Errors from decoding a graph6 string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Graph6Error {
    /// Nothing left after trimming whitespace and the header
    #[error("empty graph6 string")]
    Empty,

    /// A byte outside the printable range `63..=126`
    #[error("invalid graph6 byte {byte:#04x} at position {position}")]
    InvalidByte { position: usize, byte: u8 },

    /// The multi-byte node count is cut short
    #[error("truncated graph6 node count")]
    TruncatedOrder,

    /// The adjacency data has the wrong number of bytes for the node count
    #[error("expected {expected} bytes of adjacency data but got {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The node count is too large to address
    #[error("graph6 node count {order} is too large")]
    TooLarge { order: usize },
}

/// Errors from loading a graph6 table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The JSON table could not be parsed
    #[error("invalid JSON table: {0}")]
    Json(#[from] serde_json::Error),

    /// A text-table line is not `<code> <level>`
    #[error("line {line}: expected `<graph6> <level>`, found '{content}'")]
    InvalidLine { line: usize, content: String },

    /// A text-table level is not an integer
    #[error("line {line}: invalid level '{value}'")]
    InvalidLevel { line: usize, value: String },
}

/// Pretty-prints hierarchy parse diagnostics against their source text.
pub struct DiagnosticReporter<'src> {
    source_name: String,
    source: &'src str,
    color: bool,
}

impl<'src> DiagnosticReporter<'src> {
    pub fn new(source_name: impl Into<String>, source: &'src str) -> Self {
        Self {
            source_name: source_name.into(),
            source,
            color: true,
        }
    }

    /// Enable or disable ANSI colors in the output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Report a diagnostic to stderr.
    pub fn report(&self, diagnostic: &ParseDiagnostic) -> io::Result<()> {
        self.build_report(diagnostic)
            .eprint((&self.source_name, Source::from(self.source)))
    }

    /// Report a diagnostic to `writer`.
    pub fn write_report<W: Write>(&self, diagnostic: &ParseDiagnostic, writer: W) -> io::Result<()> {
        self.build_report(diagnostic)
            .write((&self.source_name, Source::from(self.source)), writer)
    }

    /// Report every diagnostic, stopping at the first I/O failure.
    pub fn report_all<'a>(
        &self,
        diagnostics: impl IntoIterator<Item = &'a ParseDiagnostic>,
    ) -> io::Result<()> {
        diagnostics.into_iter().try_for_each(|d| self.report(d))
    }

    fn build_report(&self, diagnostic: &ParseDiagnostic) -> Report<'_, (&String, Range<usize>)> {
        let span = self.char_span(&diagnostic.span);

        let label = match diagnostic.kind {
            DiagnosticKind::MalformedParent => "expected `<level> <id>` before `->`",
            DiagnosticKind::LevelOutOfRange => "level does not fit in 64 bits",
            DiagnosticKind::TruncatedNotFound => "expected `Cannot find: L1 ID1 -> L2 ID2`",
        };

        Report::build(ReportKind::Warning, &self.source_name, span.start)
            .with_config(Config::default().with_color(self.color))
            .with_message(diagnostic.message())
            .with_label(
                Label::new((&self.source_name, span))
                    .with_color(Color::Yellow)
                    .with_message(label),
            )
            .with_note("the line was skipped; parsing continued")
            .finish()
    }

    /// Diagnostic spans are byte ranges; ariadne indexes sources by char.
    fn char_span(&self, bytes: &Range<usize>) -> Range<usize> {
        let chars_before = |byte: usize| {
            self.source
                .get(..byte)
                .map_or_else(|| self.source.chars().count(), |prefix| prefix.chars().count())
        };
        chars_before(bytes.start)..chars_before(bytes.end)
    }
}
