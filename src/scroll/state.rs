//! Per-table scroll state.

use crate::types::PaneSide;

/// A body propagation older than this no longer blocks other panes (ms).
pub const SCROLL_SETTLE_MS: f64 = 100.0;

/// Who currently owns scroll propagation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A body pane is propagating its position to the others
    Body { origin: PaneSide, since_ms: f64 },
    /// Virtual scrolling is repositioning panes
    Virtual,
    /// The footer drives horizontal scroll
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub last_scroll_top: f64,
    pub last_scroll_left: f64,
    /// Timestamp of the last user scroll, read by the hover guard
    pub last_scroll_ms: Option<f64>,
    pub phase: ScrollPhase,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body pane currently propagating, if its phase has not settled.
    pub fn body_origin(&self, now_ms: f64) -> Option<PaneSide> {
        match self.phase {
            ScrollPhase::Body { origin, since_ms } if now_ms < since_ms + SCROLL_SETTLE_MS => {
                Some(origin)
            }
            _ => None,
        }
    }

    /// Whether a native scroll from `origin` may propagate now.
    pub fn admits(&self, origin: PaneSide, now_ms: f64) -> bool {
        match self.phase {
            ScrollPhase::Virtual | ScrollPhase::Footer => false,
            ScrollPhase::Idle | ScrollPhase::Body { .. } => {
                !matches!(self.body_origin(now_ms), Some(current) if current != origin)
            }
        }
    }

    pub fn begin_body(&mut self, origin: PaneSide, now_ms: f64) {
        self.phase = ScrollPhase::Body {
            origin,
            since_ms: now_ms,
        };
    }

    pub fn begin_virtual(&mut self) {
        self.phase = ScrollPhase::Virtual;
    }

    pub fn begin_footer(&mut self) {
        self.phase = ScrollPhase::Footer;
    }

    /// Release propagation ownership.
    pub fn settle(&mut self) {
        self.phase = ScrollPhase::Idle;
    }

    /// Forget positions and ownership, as after a programmatic clear.
    pub fn reset(&mut self) {
        self.last_scroll_top = 0.0;
        self.last_scroll_left = 0.0;
        self.phase = ScrollPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_phase_expires() {
        let mut state = ScrollState::new();
        state.begin_body(PaneSide::Left, 1_000.0);
        assert!(!state.admits(PaneSide::Main, 1_050.0));
        assert!(state.admits(PaneSide::Left, 1_050.0));
        assert!(state.admits(PaneSide::Main, 1_100.0));
    }

    #[test]
    fn test_virtual_and_footer_block_everything() {
        let mut state = ScrollState::new();
        state.begin_virtual();
        assert!(!state.admits(PaneSide::Main, 0.0));
        state.begin_footer();
        assert!(!state.admits(PaneSide::Main, 1e9));
        state.settle();
        assert!(state.admits(PaneSide::Right, 0.0));
    }
}
