//! Scroll synchronization across body, header and footer panes.
//!
//! This module provides:
//! - A fixed registry of pane roles and the `ScrollPane` trait
//! - Body scroll propagation guarded by a single phase enum
//! - Wheel smoothing that keeps fixed panes in lockstep with the main pane
//! - Scroll-into-view targets and scroll-location restore

mod pane;
mod restore;
mod state;
mod sync;
mod visible;
mod wheel;

use serde::Serialize;

use crate::types::PaneSide;

pub use pane::{MemoryPane, PaneRegistry, PaneRole, ScrollPane};
pub use restore::{clear_scroll, restore_scroll_location, ScrollSettled};
pub use state::{ScrollPhase, ScrollState, SCROLL_SETTLE_MS};
pub use sync::{handle_body_scroll, SyncOutcome};
pub use visible::{
    col_scroll_target, fixed_widths, row_scroll_target, virtual_column_extent,
    virtual_row_extent, ColumnLocation, ElementBox, Extent, FixedWidths, RowLocation, Viewport,
};
pub use wheel::{
    QueuedTicks, TickOutcome, TickScheduler, WheelAccumulator, WheelContext, WheelDirection,
    WheelOptions, WheelOutcome, WheelSmoother, MIN_WHEEL_STEP, WHEEL_TICK_MS,
};

/// Pane geometry attached to wheel-driven scroll notices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollDims {
    pub scroll_height: f64,
    pub scroll_width: f64,
    pub body_height: f64,
    pub body_width: f64,
}

/// Scroll notification handed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollNotice {
    /// Always `"body"` for notices raised here
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub fixed: PaneSide,
    pub is_x: bool,
    pub is_y: bool,
    pub scroll_top: f64,
    pub scroll_left: f64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub dims: Option<ScrollDims>,
}

impl ScrollNotice {
    pub fn body(fixed: PaneSide, is_x: bool, is_y: bool, scroll_top: f64, scroll_left: f64) -> Self {
        Self {
            kind: "body",
            fixed,
            is_x,
            is_y,
            scroll_top,
            scroll_left,
            dims: None,
        }
    }
}

/// Controller-side receiver of scroll activity.
pub trait ScrollSink {
    /// Vertical position changed (drives virtual-y windowing).
    fn trigger_scroll_y(&mut self, _top: f64) {}

    /// Horizontal position changed (drives virtual-x windowing).
    fn trigger_scroll_x(&mut self, _left: f64) {}

    /// Generic callback after a body scroll propagated.
    fn handle_scroll(&mut self, _notice: &ScrollNotice) {}

    /// Public `scroll` event raised by wheel smoothing ticks.
    fn dispatch_scroll(&mut self, _notice: &ScrollNotice) {}

    fn clear_hover_row(&mut self) {}

    /// Programmatic scroll. `None` leaves that axis alone.
    fn scroll_to(&mut self, _left: Option<f64>, _top: Option<f64>) {}

    fn clear_scroll(&mut self) {}
}

/// True when two scroll positions differ.
pub(crate) fn moved(a: f64, b: f64) -> bool {
    (a - b).abs() > f64::EPSILON
}
