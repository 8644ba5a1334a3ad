//! Execution of the handlers wired on rendered cells and rows.

use serde::Serialize;

use crate::controller::{RowDrag, TableController};
use crate::render::{CellEvents, CellParams, RenderedCell, RenderedRow, RowEvents};
use crate::types::{TableConfig, ViewState};

/// Hover handlers stay quiet while a column is resized and for
/// `delay_hover_ms` after the last scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverGuard {
    pub resizing: bool,
    pub last_scroll_ms: Option<f64>,
    pub delay_hover_ms: f64,
}

impl HoverGuard {
    pub fn new(config: &TableConfig, view: &ViewState, last_scroll_ms: Option<f64>) -> Self {
        Self {
            resizing: view.resizing,
            last_scroll_ms,
            delay_hover_ms: config.delay_hover,
        }
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.resizing
            || self
                .last_scroll_ms
                .is_some_and(|last| now_ms < last + self.delay_hover_ms)
    }
}

/// Events forwarded to the controller's generic dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
pub enum BodyEvent {
    CellMouseenter(CellParams),
    CellMouseleave(CellParams),
}

impl BodyEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CellMouseenter(_) => "cell-mouseenter",
            Self::CellMouseleave(_) => "cell-mouseleave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEventKind {
    MouseEnter,
    MouseLeave,
    MouseDown,
    Click,
    DblClick,
}

impl CellEventKind {
    fn flag(self) -> CellEvents {
        match self {
            Self::MouseEnter => CellEvents::MOUSE_ENTER,
            Self::MouseLeave => CellEvents::MOUSE_LEAVE,
            Self::MouseDown => CellEvents::MOUSE_DOWN,
            Self::Click => CellEvents::CLICK,
            Self::DblClick => CellEvents::DBL_CLICK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEventKind {
    MouseEnter,
    MouseLeave,
    Drag(RowDrag),
}

impl RowEventKind {
    fn flag(self) -> RowEvents {
        match self {
            Self::MouseEnter => RowEvents::MOUSE_ENTER,
            Self::MouseLeave => RowEvents::MOUSE_LEAVE,
            Self::Drag(RowDrag::Start) => RowEvents::DRAG_START,
            Self::Drag(RowDrag::End) => RowEvents::DRAG_END,
            Self::Drag(RowDrag::Over) => RowEvents::DRAG_OVER,
        }
    }
}

/// Run the handler wired for `kind` on `cell`.
///
/// Returns false when no handler is wired or the hover guard swallowed it.
pub fn dispatch_cell_event<C: TableController + ?Sized>(
    controller: &mut C,
    config: &TableConfig,
    cell: &RenderedCell,
    kind: CellEventKind,
    guard: &HoverGuard,
    now_ms: f64,
) -> bool {
    if !cell.events.contains(kind.flag()) {
        return false;
    }
    let params = &cell.params;
    let overflow = cell.overflow;
    let tooltip = overflow.is_tooltip() || config.show_all_tooltips();
    match kind {
        CellEventKind::MouseEnter => {
            if guard.is_active(now_ms) {
                log::debug!("cell mouseenter on {} suppressed by hover guard", params.colid);
                return false;
            }
            if overflow.is_title() {
                controller.update_cell_title(params);
            } else if tooltip {
                controller.trigger_body_tooltip(params);
            }
            controller.dispatch_event(BodyEvent::CellMouseenter(params.clone()));
        }
        CellEventKind::MouseLeave => {
            if guard.is_active(now_ms) {
                return false;
            }
            if tooltip {
                controller.handle_target_leave();
            }
            controller.dispatch_event(BodyEvent::CellMouseleave(params.clone()));
        }
        CellEventKind::MouseDown => controller.trigger_cell_mousedown(params),
        CellEventKind::Click => controller.trigger_cell_click(params),
        CellEventKind::DblClick => controller.trigger_cell_dblclick(params),
    }
    true
}

/// Run the handler wired for `kind` on `row`.
pub fn dispatch_row_event<C: TableController + ?Sized>(
    controller: &mut C,
    row: &RenderedRow,
    kind: RowEventKind,
    guard: &HoverGuard,
    now_ms: f64,
) -> bool {
    if !row.events.contains(kind.flag()) {
        return false;
    }
    match kind {
        RowEventKind::MouseEnter => {
            if guard.is_active(now_ms) {
                return false;
            }
            controller.trigger_hover(&row.rowid, row.row_index);
        }
        RowEventKind::MouseLeave => {
            if guard.is_active(now_ms) {
                return false;
            }
            controller.clear_hover_row();
        }
        RowEventKind::Drag(drag) => controller.handle_row_drag(drag, &row.rowid),
    }
    true
}
