//! Scroll targets that bring a row or column into view.

use crate::types::{Column, FixedSide, RowIndex};

/// Scroll position and visible extent of the main body along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll: f64,
    pub client: f64,
}

/// Offset and size of a rendered element along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub offset: f64,
    pub size: f64,
}

/// Position of a row or column computed from sizes instead of the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Position in the visible order
    pub index: usize,
    /// Sum of the sizes before it
    pub offset: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowLocation {
    /// The row element is rendered
    Rendered(ElementBox),
    /// Virtual-y rendering, row is outside the rendered window
    Virtual(Extent),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnLocation {
    /// Fixed columns never scroll
    Fixed,
    Rendered(ElementBox),
    /// Virtual-x rendering, column is outside the rendered window
    Virtual(Extent),
    Missing,
}

/// Total widths of the left and right fixed columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedWidths {
    pub left: f64,
    pub right: f64,
}

pub fn fixed_widths(columns: &[Column]) -> FixedWidths {
    columns
        .iter()
        .fold(FixedWidths::default(), |mut acc, column| {
            match column.fixed {
                Some(FixedSide::Left) => acc.left += column.width,
                Some(FixedSide::Right) => acc.right += column.width,
                None => {}
            }
            acc
        })
}

/// Offset of `rowid` in `order` from measured heights, falling back to
/// `default_height` for unmeasured rows.
pub fn virtual_row_extent<'r>(
    order: impl IntoIterator<Item = &'r str>,
    rowid: &str,
    rows: &RowIndex,
    default_height: f64,
) -> Option<Extent> {
    let height_of = |id: &str| {
        rows.get(id)
            .map(|meta| meta.height)
            .filter(|h| *h > 0.0)
            .unwrap_or(default_height)
    };
    let mut offset = 0.0;
    for (index, id) in order.into_iter().enumerate() {
        if id == rowid {
            return Some(Extent {
                index,
                offset,
                size: height_of(id),
            });
        }
        offset += height_of(id);
    }
    None
}

/// Offset of a column among the visible columns from their widths.
pub fn virtual_column_extent(columns: &[Column], colid: &str) -> Option<Extent> {
    let mut offset = 0.0;
    for (index, column) in columns.iter().enumerate() {
        if column.id == colid {
            return Some(Extent {
                index,
                offset,
                size: column.width,
            });
        }
        offset += column.width;
    }
    None
}

/// Vertical scroll position that brings a row into view, `None` when it
/// already is (or cannot be located).
///
/// With `all_overflow` every row has the default height, so virtual rows are
/// positioned by index alone.
pub fn row_scroll_target(
    body: Viewport,
    row: RowLocation,
    all_overflow: bool,
    default_height: f64,
) -> Option<f64> {
    match row {
        RowLocation::Rendered(el) => {
            if el.offset < body.scroll || el.offset > body.scroll + body.client {
                Some(el.offset)
            } else if el.offset + el.size >= body.client + body.scroll {
                Some(body.scroll + el.size)
            } else {
                None
            }
        }
        RowLocation::Virtual(extent) => {
            if all_overflow {
                return Some((extent.index as f64 - 1.0) * default_height);
            }
            if extent.offset < body.scroll {
                Some(extent.offset - 1.0)
            } else {
                Some(extent.offset + extent.size - (body.client - 1.0))
            }
        }
        RowLocation::Missing => None,
    }
}

/// Horizontal scroll position that brings a column into view.
pub fn col_scroll_target(body: Viewport, fixed: FixedWidths, column: ColumnLocation) -> Option<f64> {
    match column {
        ColumnLocation::Fixed | ColumnLocation::Missing => None,
        ColumnLocation::Rendered(el) => {
            if el.offset < body.scroll + fixed.left {
                Some(el.offset - fixed.left - 1.0)
            } else if el.offset + el.size - body.scroll > body.client - fixed.right {
                Some(el.offset + el.size - (body.client - fixed.right - 1.0))
            } else {
                None
            }
        }
        ColumnLocation::Virtual(extent) => {
            if extent.offset < body.scroll {
                Some(extent.offset - fixed.left - 1.0)
            } else {
                Some(extent.offset + extent.size - (body.client - fixed.right - 1.0))
            }
        }
    }
}
