//! Programmatic scroll clearing and restoring.

use super::{moved, PaneRegistry, PaneRole, ScrollPane, ScrollSink, ScrollState};

/// Completion of a scroll operation. Produced whether or not anything moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSettled {
    pub moved: bool,
}

/// Reset every mounted pane to the origin and forget the recorded positions.
pub fn clear_scroll<P: ScrollPane>(state: &mut ScrollState, panes: &mut PaneRegistry<P>) {
    for role in PaneRole::ALL {
        if let Some(pane) = panes.get_mut(role) {
            pane.set_scroll_top(0.0);
            pane.set_scroll_left(0.0);
        }
    }
    state.reset();
}

/// Clear the scroll position, then scroll back to (`left`, `top`).
///
/// When both are zero nothing is restored, but the result still reports a
/// settled scroll so callers can await it uniformly.
pub fn restore_scroll_location<S: ScrollSink + ?Sized>(
    state: &mut ScrollState,
    sink: &mut S,
    left: f64,
    top: f64,
) -> ScrollSettled {
    sink.clear_scroll();
    if !moved(left, 0.0) && !moved(top, 0.0) {
        return ScrollSettled { moved: false };
    }
    state.reset();
    sink.scroll_to(Some(left), Some(top));
    ScrollSettled { moved: true }
}
