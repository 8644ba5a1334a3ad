//! Merged cell span resolution.
//!
//! Spans live in row/column index space. Lookups scan the list in order and
//! the first match wins, so overlapping spans resolve by registration order.
//! `validate_spans` can reject overlaps up front.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A rectangular merged region anchored at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeSpan {
    pub row: usize,
    pub col: usize,
    pub rowspan: usize,
    pub colspan: usize,
}

impl MergeSpan {
    pub fn new(row: usize, col: usize, rowspan: usize, colspan: usize) -> Self {
        Self {
            row,
            col,
            rowspan,
            colspan,
        }
    }

    /// True when the span covers (`row`, `col`). Zero-sized spans cover nothing.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row.saturating_add(self.rowspan)
            && col >= self.col
            && col < self.col.saturating_add(self.colspan)
    }

    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    fn is_empty(&self) -> bool {
        self.rowspan == 0 || self.colspan == 0
    }
}

/// Outcome of resolving one cell against the span list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanResolution {
    /// Top-left cell of a span. A zero dimension means render nothing.
    Anchor { rowspan: usize, colspan: usize },
    /// Covered by another cell's span, emit no node
    Suppressed,
    /// Plain 1x1 cell
    Unmerged,
}

impl SpanResolution {
    /// The cell produces no node at all.
    pub fn renders_nothing(self) -> bool {
        match self {
            Self::Anchor { rowspan, colspan } => rowspan == 0 || colspan == 0,
            Self::Suppressed => true,
            Self::Unmerged => false,
        }
    }
}

/// Resolve (`row`, `col`) against `spans`, first match wins.
pub fn resolve(spans: &[MergeSpan], row: usize, col: usize) -> SpanResolution {
    for span in spans {
        if span.is_anchor(row, col) {
            return SpanResolution::Anchor {
                rowspan: span.rowspan,
                colspan: span.colspan,
            };
        }
        if !span.is_empty() && span.covers(row, col) {
            return SpanResolution::Suppressed;
        }
    }
    SpanResolution::Unmerged
}

/// Check that no two spans share a cell.
///
/// # Errors
/// Returns `GridError::OverlappingSpans` naming the first overlapping pair.
pub fn validate_spans(spans: &[MergeSpan]) -> Result<()> {
    for (i, a) in spans.iter().enumerate() {
        if a.is_empty() {
            continue;
        }
        for (j, b) in spans.iter().enumerate().skip(i + 1) {
            if b.is_empty() {
                continue;
            }
            let row = a.row.max(b.row);
            let col = a.col.max(b.col);
            if a.covers(row, col) && b.covers(row, col) {
                return Err(GridError::OverlappingSpans {
                    first: i,
                    second: j,
                    row,
                    col,
                });
            }
        }
    }
    Ok(())
}

/// A span list that has passed overlap validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeList {
    spans: Vec<MergeSpan>,
}

impl MergeList {
    /// Register spans after checking them for overlaps.
    ///
    /// # Errors
    /// Returns `GridError::OverlappingSpans` when two spans share a cell.
    pub fn checked(spans: Vec<MergeSpan>) -> Result<Self> {
        if let Err(err) = validate_spans(&spans) {
            log::warn!("rejected merge span list: {err}");
            return Err(err);
        }
        Ok(Self { spans })
    }

    pub fn resolve(&self, row: usize, col: usize) -> SpanResolution {
        resolve(&self.spans, row, col)
    }

    pub fn spans(&self) -> &[MergeSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<MergeSpan> {
        self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
