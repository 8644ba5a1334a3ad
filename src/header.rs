//! Grouped header columns to header rows.

use serde::Serialize;

use crate::types::Column;

/// One header cell with its transient spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub id: String,
    pub title: String,
    /// 1-based depth in the column tree
    pub level: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub parent_id: Option<String>,
}

struct Entry<'c> {
    column: &'c Column,
    level: usize,
    parent: Option<usize>,
    is_group: bool,
    col_span: usize,
}

/// Convert a grouped column tree into header rows.
///
/// Visible groups span the sum of their visible children and one row; leaves
/// span down to the last header row. Hidden columns are skipped with their
/// subtrees. Rows list cells in pre-order.
pub fn convert_header_columns_to_rows(columns: &[Column]) -> Vec<Vec<HeaderCell>> {
    let mut entries: Vec<Entry<'_>> = Vec::new();
    let mut stack: Vec<(&Column, usize, Option<usize>)> =
        columns.iter().rev().map(|c| (c, 1, None)).collect();
    while let Some((column, level, parent)) = stack.pop() {
        if !column.visible {
            continue;
        }
        let index = entries.len();
        let is_group = column.has_visible_children();
        entries.push(Entry {
            column,
            level,
            parent,
            is_group,
            col_span: 0,
        });
        if is_group {
            stack.extend(column.children.iter().rev().map(|c| (c, level + 1, Some(index))));
        }
    }

    // children follow their parent in pre-order, so a reverse walk sees
    // every child span before the parent needs it
    for index in (0..entries.len()).rev() {
        let Some(entry) = entries.get_mut(index) else {
            continue;
        };
        if !entry.is_group {
            entry.col_span = 1;
        }
        let (span, parent) = (entry.col_span, entry.parent);
        if let Some(parent) = parent.and_then(|p| entries.get_mut(p)) {
            parent.col_span += span;
        }
    }

    let max_level = entries.iter().map(|e| e.level).max().unwrap_or(1);
    let mut rows: Vec<Vec<HeaderCell>> = vec![Vec::new(); max_level];
    for entry in &entries {
        let row_span = if entry.is_group {
            1
        } else {
            max_level - entry.level + 1
        };
        let parent_id = entry
            .parent
            .and_then(|p| entries.get(p))
            .map(|p| p.column.id.clone());
        if let Some(row) = rows.get_mut(entry.level - 1) {
            row.push(HeaderCell {
                id: entry.column.id.clone(),
                title: entry.column.title.clone(),
                level: entry.level,
                col_span: entry.col_span,
                row_span,
                parent_id,
            });
        }
    }
    rows
}
