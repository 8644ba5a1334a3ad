//! Native scroll propagation between panes.

use super::{moved, PaneRegistry, PaneRole, ScrollNotice, ScrollPane, ScrollSink, ScrollState};
use crate::types::PaneSide;

/// What a native scroll event led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Another subsystem or pane owns propagation
    Blocked,
    /// A required pane is not mounted
    Unmounted,
    Propagated { is_x: bool, is_y: bool },
}

/// Body panes that mirror a vertical scroll from `origin`.
fn vertical_targets(origin: PaneSide) -> [PaneRole; 2] {
    match origin {
        PaneSide::Left => [PaneRole::MainBody, PaneRole::RightBody],
        PaneSide::Right => [PaneRole::MainBody, PaneRole::LeftBody],
        PaneSide::Main => [PaneRole::LeftBody, PaneRole::RightBody],
    }
}

/// Handle a native scroll event fired by the body pane of `origin`.
///
/// Only axes that moved since the last recorded position propagate, so the
/// echo events raised by the writes below find nothing to do. Vertical
/// propagation, controller notification included, finishes before the
/// horizontal axis is looked at.
pub fn handle_body_scroll<P, S>(
    state: &mut ScrollState,
    panes: &mut PaneRegistry<P>,
    sink: &mut S,
    origin: PaneSide,
    now_ms: f64,
) -> SyncOutcome
where
    P: ScrollPane,
    S: ScrollSink + ?Sized,
{
    if !state.admits(origin, now_ms) {
        log::debug!(
            "scroll from {} pane dropped in phase {:?}",
            origin.as_str(),
            state.phase
        );
        return SyncOutcome::Blocked;
    }
    let Some(main) = panes.get(PaneRole::MainBody) else {
        return SyncOutcome::Unmounted;
    };
    let scroll_left = main.scroll_left();
    let Some(scroll_top) = panes
        .get(PaneRole::body(origin))
        .map(ScrollPane::scroll_top)
    else {
        return SyncOutcome::Unmounted;
    };

    let is_y = moved(scroll_top, state.last_scroll_top);
    let is_x = moved(scroll_left, state.last_scroll_left);
    state.begin_body(origin, now_ms);

    if is_y {
        for role in vertical_targets(origin) {
            panes.set_top(role, scroll_top);
        }
        panes.set_top(PaneRole::ScrollYHandle, scroll_top);
        sink.trigger_scroll_y(scroll_top);
    }
    if is_x {
        for role in [PaneRole::ScrollXHandle, PaneRole::Header, PaneRole::Footer] {
            panes.set_left(role, scroll_left);
        }
        sink.trigger_scroll_x(scroll_left);
    }

    state.last_scroll_top = scroll_top;
    state.last_scroll_left = scroll_left;
    state.last_scroll_ms = Some(now_ms);
    sink.handle_scroll(&ScrollNotice::body(origin, is_x, is_y, scroll_top, scroll_left));
    SyncOutcome::Propagated { is_x, is_y }
}
