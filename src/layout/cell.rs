//! Per-cell layout: overflow, fixed visibility, spans, edit and validation
//! decoration, wired events.

use super::tree_line::render_line;
use crate::controller::{RenderPass, TableController};
use crate::merge::{self, SpanResolution};
use crate::render::{CellEvents, CellParams, ClassList, Node, RenderedCell, Style};
use crate::types::{
    Column, EditMode, Overflow, PaneSide, Record, SelectCellToRow, Seq, ValidError, ValidMessage,
};

/// Minimum cell height used by virtual rendering when a row was never measured.
pub const DEFAULT_CELL_HEIGHT: f64 = 24.0;

/// Row-level inputs shared by every cell of one row.
#[derive(Debug, Clone)]
pub struct RowContext<'r> {
    pub record: &'r Record,
    pub rowid: &'r str,
    pub level: usize,
    /// Position among the row's siblings
    pub sibling_index: usize,
    /// Slot indices of the row's siblings
    pub items: &'r [usize],
    /// Measured height, 0 when unknown
    pub height: f64,
    /// Row part of the cell params; column fields are filled per cell
    pub params: CellParams,
}

impl<'r> RowContext<'r> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        record: &'r Record,
        rowid: &'r str,
        seq: Seq,
        level: usize,
        row_index: usize,
        visible_row_index: usize,
        data_row_index: usize,
        pane: PaneSide,
    ) -> Self {
        Self {
            record,
            rowid,
            level,
            sibling_index: 0,
            items: &[],
            height: 0.0,
            params: CellParams {
                rowid: rowid.to_string(),
                colid: String::new(),
                field: String::new(),
                seq,
                level,
                row_index,
                visible_row_index,
                data_row_index,
                column_index: 0,
                visible_column_index: 0,
                data_column_index: 0,
                pane,
                is_hidden: false,
            },
        }
    }

    /// Attach tree placement and measured height from row metadata.
    pub fn with_tree(mut self, sibling_index: usize, items: &'r [usize], height: f64) -> Self {
        self.sibling_index = sibling_index;
        self.items = items;
        self.height = height;
        self
    }
}

/// A cell is hidden in a pane that does not own its fixed side.
///
/// Fixed panes hide every column not pinned to their side. The main pane
/// hides pinned columns only while columns overflow horizontally, since the
/// fixed panes are drawn over it then.
pub fn is_fixed_hidden(pane: PaneSide, column: &Column, overflow_x: bool) -> bool {
    match pane.fixed() {
        Some(side) => column.fixed != Some(side),
        None => column.fixed.is_some() && overflow_x,
    }
}

/// Whether stored validation errors render inline for this table.
pub fn shows_valid_tip<C: TableController + ?Sized>(pass: &RenderPass<'_, C>) -> bool {
    let valid = &pass.config.valid_config;
    if !pass.config.edit_rules || !valid.show_message {
        return false;
    }
    match valid.message {
        ValidMessage::Default => pass.config.height.is_some() || pass.view.data_len > 1,
        ValidMessage::Inline => true,
        ValidMessage::Tooltip => false,
    }
}

/// Resolve spans for a cell. `None` means the cell emits no node.
fn cell_span<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    params: &CellParams,
) -> Option<(usize, usize)> {
    if !pass.view.merge_list.is_empty() {
        return match merge::resolve(
            &pass.view.merge_list,
            params.data_row_index,
            params.data_column_index,
        ) {
            SpanResolution::Anchor { rowspan, colspan } if rowspan > 0 && colspan > 0 => {
                Some((rowspan, colspan))
            }
            SpanResolution::Anchor { .. } | SpanResolution::Suppressed => None,
            SpanResolution::Unmerged => Some((1, 1)),
        };
    }
    if pass.controller.has_span_method() {
        let span = pass.controller.span_method(params).unwrap_or_default();
        if span.rowspan == 0 || span.colspan == 0 {
            return None;
        }
        return Some((span.rowspan, span.colspan));
    }
    Some((1, 1))
}

fn wired_events<C: TableController + ?Sized>(pass: &RenderPass<'_, C>, overflow: Overflow) -> CellEvents {
    let config = pass.config;
    let show_all = config.show_all_tooltips();
    let has_tooltip = config.tooltip_config.is_some();

    let mut events = CellEvents::CLICK | CellEvents::DBL_CLICK;
    events.set(
        CellEvents::MOUSE_ENTER,
        overflow.is_title() || overflow.is_tooltip() || show_all || has_tooltip,
    );
    events.set(
        CellEvents::MOUSE_LEAVE,
        overflow.is_tooltip() || show_all || has_tooltip,
    );
    events.set(
        CellEvents::MOUSE_DOWN,
        config.checkbox_config.range || config.mouse_config.is_some(),
    );
    events
}

fn content_wrapper(overflow: Overflow, max_height: Option<f64>, children: Vec<Node>) -> Node {
    let mut class = ClassList::from(&["vxe-cell"][..]);
    class.push_if(overflow.is_title(), "c--title");
    class.push_if(overflow.is_tooltip(), "c--tooltip");
    class.push_if(overflow.is_ellipsis(), "c--ellipsis");
    let mut style = Style::new();
    if let Some(height) = max_height {
        style.set_px("max-height", height);
    }
    Node::element("div", class, style, children)
}

fn valid_tip<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    error: &ValidError,
    params: &CellParams,
) -> Node {
    let valid = &pass.config.valid_config;
    let mut class = ClassList::from(&["vxe-cell--valid-error-tip"][..]);
    class.extend_from(valid.class_name.as_deref());
    let mut style = Style::new();
    if let Some(width) = error.max_width {
        style.set_px("width", width);
    }

    let message = pass.controller.render_valid(error, params).unwrap_or_else(|| {
        vec![Node::element(
            "span",
            ClassList::from(&["vxe-cell--valid-error-msg"][..]),
            Style::new(),
            vec![Node::text(error.content.clone())],
        )]
    });
    let theme = format!(
        "vxe-cell--valid-error-theme-{}",
        valid.theme.as_deref().unwrap_or("normal")
    );
    let wrapper = Node::div(
        ClassList::from(&["vxe-cell--valid-error-wrapper", theme.as_str()][..]),
        message,
    );
    Node::element("div", class, style, vec![wrapper])
}

fn shows_area_status(select: Option<&SelectCellToRow>, position: usize, column: &Column) -> bool {
    match select {
        Some(SelectCellToRow::First(enabled)) => *enabled && position == 0,
        Some(SelectCellToRow::Field(field)) => *field == column.field,
        None => false,
    }
}

/// Lay out one body cell.
///
/// `position` is the column's place in the pane column list of length
/// `pane_len`. Returns `None` when span resolution says the cell renders
/// nothing.
pub fn render_cell<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    row: &RowContext<'_>,
    column: &Column,
    position: usize,
    pane_len: usize,
) -> Option<RenderedCell> {
    let config = pass.config;
    let view = pass.view;
    let controller = pass.controller;
    let colid = column.id.as_str();

    let renderer_conf = column.renderer().and_then(|r| controller.renderer(&r.name));
    let overflow = Overflow::resolve(column.overflow, config.show_overflow);
    let has_ellipsis = overflow.has_ellipsis();
    let is_edit = column.is_edit();

    let mut params = row.params.clone();
    params.colid = column.id.clone();
    params.field = column.field.clone();
    params.column_index = pass.column_index(column);
    params.visible_column_index = position;
    params.data_column_index = pass.visible_column_index(column);
    params.is_hidden = is_fixed_hidden(params.pane, column, view.overflow_x);

    let (rowspan, colspan) = cell_span(pass, &params)?;
    // merged cells stay visible, hiding them breaks the span layout
    if params.is_hidden && (rowspan > 1 || colspan > 1) {
        params.is_hidden = false;
    }
    let is_hidden = params.is_hidden;

    let is_dirty = !is_hidden
        && column.renderer().is_some()
        && config
            .edit_config
            .as_ref()
            .is_some_and(|edit| edit.show_status || edit.show_update_status)
        && controller.is_updated(row.rowid, &column.field);
    let is_active = is_edit
        && config.edit_config.as_ref().is_some_and(|edit| {
            controller.active_edit().is_some_and(|active| {
                active.rowid == row.rowid
                    && (active.colid.as_deref() == Some(colid) || edit.mode == EditMode::Row)
            })
        });
    let valid_error = controller.valid_error(row.rowid, colid);

    let max_height = if has_ellipsis {
        config.ellipsis_height()
    } else {
        None
    };
    let all_overflow = config
        .show_overflow
        .is_some_and(|mode| mode.has_ellipsis() && view.is_all_overflow);

    let mut children = Vec::new();
    if is_hidden && all_overflow {
        children.push(content_wrapper(overflow, max_height, Vec::new()));
    } else {
        children.extend(render_line(pass, row, column));
        let mut wrapper = content_wrapper(
            overflow,
            max_height,
            controller.render_cell(row.record, column, &params),
        );
        if overflow.is_title() {
            wrapper = wrapper.with_attr("title", controller.cell_label(row.record, column));
        }
        children.push(wrapper);
        if let Some(error) = valid_error.filter(|_| shows_valid_tip(pass)) {
            children.push(valid_tip(pass, error, &params));
        }
    }

    let mouse_area = config.mouse_config.as_ref().is_some_and(|m| m.area);
    if mouse_area
        && shows_area_status(
            config.area_config.select_cell_to_row.as_ref(),
            position,
            column,
        )
    {
        children.push(Node::div(
            ClassList::from(&["vxe-cell--area-status"][..]),
            Vec::new(),
        ));
    }

    let mut style = Style::new();
    if let Some(height) = max_height {
        style.set_px("height", height);
    } else if !has_ellipsis && (view.scroll_x_load || view.scroll_y_load) {
        let height = if row.height > 0.0 {
            row.height
        } else {
            DEFAULT_CELL_HEIGHT
        };
        style.set_px("height", height);
    }
    if let Some(conf) = renderer_conf {
        for (property, value) in &conf.cell_style {
            style.set(property, value.clone());
        }
    }

    let align = column
        .align
        .or(renderer_conf.and_then(|conf| conf.cell_align))
        .or(config.align);
    let mut class = ClassList::from(&["vxe-body--column", colid][..]);
    if let Some(align) = align {
        class.push(&format!("col--{}", align.as_str()));
    }
    if let Some(vertical) = config.cell_config.vertical_align {
        class.push(&format!("col--vertical-{}", vertical.as_str()));
    }
    if let Some(kind) = column.column_type.as_deref() {
        class.push(&format!("col--{kind}"));
    }
    class.push_if(position + 1 == pane_len, "col--last");
    class.push_if(column.tree_node, "col--tree-node");
    class.push_if(is_edit, "col--edit");
    class.push_if(has_ellipsis, "col--ellipsis");
    class.push_if(is_hidden, "fixed--hidden");
    class.push_if(is_dirty, "col--dirty");
    class.push_if(is_active, "col--active");
    class.push_if(valid_error.is_some(), "col--valid-error");
    class.push_if(
        view.current_column.as_deref() == Some(colid),
        "col--current",
    );
    class.extend_from(renderer_conf.and_then(|conf| conf.cell_class_name.as_deref()));
    class.extend_from(column.class_name.as_deref());
    class.extend_from(config.cell_class_name.as_deref());

    let key = if config.uses_column_identity() {
        column.id.clone()
    } else {
        position.to_string()
    };

    Some(RenderedCell {
        key,
        class,
        style,
        rowspan: (rowspan > 1).then_some(rowspan),
        colspan: (colspan > 1).then_some(colspan),
        overflow,
        events: wired_events(pass, overflow),
        params,
        children,
    })
}
