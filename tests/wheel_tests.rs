//! Tests for wheel smoothing across the body panes.
//!
//! Ticks are queued instead of timed, so each test drives the animation by
//! popping ticks until the queue drains.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{mounted_panes, top, writes};
use gridview::scroll::{
    MemoryPane, PaneRegistry, PaneRole, QueuedTicks, ScrollNotice, ScrollState, TickOutcome,
    WheelContext, WheelOptions, WheelOutcome, WheelSmoother,
};
use gridview::snapshot::TableEvent;
use gridview::{PaneSide, TableState};

/// Wheel harness: three body panes with 800px of scroll range.
struct Rig {
    state: ScrollState,
    panes: PaneRegistry<MemoryPane>,
    sink: TableState,
    ticks: QueuedTicks,
    options: WheelOptions,
}

impl Rig {
    fn new() -> Self {
        Self {
            state: ScrollState::new(),
            panes: mounted_panes(),
            sink: TableState::default(),
            ticks: QueuedTicks::new(),
            options: WheelOptions {
                wheel_mode: true,
                ..WheelOptions::default()
            },
        }
    }

    fn ctx(&mut self) -> WheelContext<'_, MemoryPane, TableState, QueuedTicks> {
        WheelContext {
            state: &mut self.state,
            panes: &mut self.panes,
            sink: &mut self.sink,
            scheduler: &mut self.ticks,
            options: self.options,
        }
    }

    fn wheel(&mut self, smoother: &mut WheelSmoother, delta_y: f64) -> WheelOutcome {
        let mut ctx = self.ctx();
        smoother.on_wheel(&mut ctx, 0.0, delta_y, 0.0)
    }

    /// Run queued ticks until none are left. Returns the number run.
    fn run_ticks(&mut self, smoother: &mut WheelSmoother) -> usize {
        let mut count = 0;
        while self.ticks.pop().is_some() {
            let mut ctx = self.ctx();
            smoother.on_tick(&mut ctx);
            count += 1;
        }
        count
    }

    fn set_top(&mut self, role: PaneRole, value: f64) {
        self.panes.get_mut(role).unwrap().top = value;
    }

    /// Positions reported by the `scroll` notices, in order.
    fn scroll_tops(&self) -> Vec<f64> {
        self.notices().iter().map(|n| n.scroll_top).collect()
    }

    fn notices(&self) -> Vec<ScrollNotice> {
        self.sink
            .events
            .iter()
            .filter_map(|e| match e {
                TableEvent::Scroll { notice } => Some(*notice),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// ANIMATION
// ============================================================================

/// Test 1: a 120px gesture lands exactly on 120 in growing steps
#[test]
fn test_gesture_animates_to_target() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    let outcome = rig.wheel(&mut smoother, 120.0);
    assert_eq!(outcome, WheelOutcome::Smoothing);
    assert!(outcome.prevents_default());
    // the first step is applied synchronously
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 5.0);
    assert!(smoother.is_pending());

    assert_eq!(rig.run_ticks(&mut smoother), 6);
    assert_eq!(
        rig.scroll_tops(),
        vec![5.0, 12.0, 22.0, 37.0, 59.0, 92.0, 120.0]
    );
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 120.0);
    assert!(smoother.accumulator().is_drained());
    assert!(!smoother.is_pending());
}

/// Test 2: fixed panes stay in lockstep with the main pane
#[test]
fn test_fixed_panes_mirror_main() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);
    rig.wheel(&mut smoother, 120.0);

    let mut last = 0.0;
    loop {
        let main = top(&rig.panes, PaneRole::MainBody);
        assert!(main >= last, "scroll went backwards: {last} -> {main}");
        assert_eq!(top(&rig.panes, PaneRole::LeftBody), main);
        assert_eq!(top(&rig.panes, PaneRole::RightBody), main);
        last = main;
        if rig.ticks.pop().is_none() {
            break;
        }
        let mut ctx = rig.ctx();
        smoother.on_tick(&mut ctx);
    }
    assert_eq!(last, 120.0);
}

/// Test 3: wheeling over a fixed pane drives the main pane
#[test]
fn test_fixed_pane_origin() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Left);
    assert_eq!(rig.wheel(&mut smoother, 40.0), WheelOutcome::Smoothing);
    rig.run_ticks(&mut smoother);

    assert_eq!(top(&rig.panes, PaneRole::MainBody), 40.0);
    assert_eq!(top(&rig.panes, PaneRole::LeftBody), 40.0);
    assert!(rig
        .notices()
        .iter()
        .all(|n| n.fixed == PaneSide::Left && n.is_y && !n.is_x));
}

/// Test 4: upward gestures move up
#[test]
fn test_upward_gesture() {
    let mut rig = Rig::new();
    rig.set_top(PaneRole::MainBody, 400.0);
    rig.state.last_scroll_top = 400.0;
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, -50.0);
    rig.run_ticks(&mut smoother);
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 350.0);
    assert_eq!(rig.scroll_tops()[0], 395.0);
}

/// Test 5: steps stop at the edge even with distance left
#[test]
fn test_animation_stops_at_edge() {
    let mut rig = Rig::new();
    rig.set_top(PaneRole::MainBody, 780.0);
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, 120.0);
    assert_eq!(rig.run_ticks(&mut smoother), 2);
    assert_eq!(rig.scroll_tops(), vec![785.0, 792.0, 800.0]);
    assert!(!smoother.accumulator().is_drained());
    assert!(rig.ticks.is_empty());
}

/// Test 6: a new gesture mid-animation replaces the pending tick
#[test]
fn test_new_gesture_replaces_pending_tick() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, 100.0);
    assert_eq!(rig.ticks.len(), 1);
    rig.wheel(&mut smoother, 100.0);
    assert_eq!(rig.ticks.len(), 1);

    rig.run_ticks(&mut smoother);
    // 95 left over from the first gesture carries into the second
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 200.0);
}

/// Test 7: reversing mid-animation drops the remaining distance
#[test]
fn test_reversal_drops_remaining() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, 100.0);
    {
        rig.ticks.pop();
        let mut ctx = rig.ctx();
        assert_eq!(smoother.on_tick(&mut ctx), TickOutcome::Continue);
    }
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 12.0);

    rig.wheel(&mut smoother, -10.0);
    rig.run_ticks(&mut smoother);
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 2.0);
}

// ============================================================================
// PASS-THROUGH
// ============================================================================

/// Test 8: at the edge the gesture is left to the page
#[test]
fn test_boundary_passes_through() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    let up = rig.wheel(&mut smoother, -30.0);
    assert_eq!(up, WheelOutcome::AtBoundary);
    assert!(!up.prevents_default());

    rig.set_top(PaneRole::MainBody, 800.0);
    assert_eq!(rig.wheel(&mut smoother, 30.0), WheelOutcome::AtBoundary);

    for role in [PaneRole::MainBody, PaneRole::LeftBody, PaneRole::RightBody] {
        assert_eq!(writes(&rig.panes, role), 0);
    }
    assert!(rig.sink.events.is_empty());
    assert!(rig.ticks.is_empty());
}

/// Test 9: the boundary is checked on the pane under the pointer
#[test]
fn test_boundary_checked_on_origin() {
    let mut rig = Rig::new();
    rig.set_top(PaneRole::MainBody, 300.0);
    let mut smoother = WheelSmoother::new(PaneSide::Right);
    assert_eq!(rig.wheel(&mut smoother, -30.0), WheelOutcome::AtBoundary);
}

/// Test 10: outside wheel mode the native scroll is left alone
#[test]
fn test_default_mode_passes_through() {
    let mut rig = Rig::new();
    rig.options.wheel_mode = false;
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    let outcome = rig.wheel(&mut smoother, 120.0);
    assert_eq!(outcome, WheelOutcome::Ignored);
    assert!(!outcome.prevents_default());
    for role in [PaneRole::MainBody, PaneRole::LeftBody, PaneRole::RightBody] {
        assert_eq!(writes(&rig.panes, role), 0);
    }
    assert!(rig.sink.events.is_empty());
    assert!(rig.ticks.is_empty());
    assert!(!smoother.is_pending());
    assert_eq!(rig.state.last_scroll_top, 0.0);
}

/// Test 11: the mode comes from `scrollY.mode`
#[test]
fn test_options_read_scroll_mode() {
    let wheel = TableState::from_json(
        r#"{"config": {"scrollY": {"mode": "wheel"}, "rowConfig": {"isHover": true}}}"#,
    )
    .unwrap();
    let options = WheelOptions::new(&wheel.config, &wheel.view);
    assert!(options.wheel_mode);
    assert!(options.hover_rows);
    assert!(wheel.render(PaneSide::Left).wheel);

    let native = TableState::from_json(r#"{"config": {"scrollY": {"mode": "default"}}}"#).unwrap();
    assert!(!WheelOptions::new(&native.config, &native.view).wheel_mode);
    assert!(!native.render(PaneSide::Main).wheel);
}

#[test]
fn test_horizontal_only_gesture_ignored() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);
    let outcome = {
        let mut ctx = rig.ctx();
        smoother.on_wheel(&mut ctx, 40.0, 0.0, 0.0)
    };
    assert_eq!(outcome, WheelOutcome::Ignored);
    assert!(rig.sink.events.is_empty());
}

#[test]
fn test_unmounted_main_ignored() {
    let mut rig = Rig::new();
    rig.panes.unmount(PaneRole::MainBody);
    let mut smoother = WheelSmoother::new(PaneSide::Left);
    assert_eq!(rig.wheel(&mut smoother, 50.0), WheelOutcome::Ignored);
}

// ============================================================================
// NOTIFICATIONS AND TEARDOWN
// ============================================================================

#[test]
fn test_hover_cleared_and_virtual_notified() {
    let mut rig = Rig::new();
    rig.options = WheelOptions {
        wheel_mode: true,
        hover_rows: true,
        scroll_x_load: false,
        scroll_y_load: true,
    };
    rig.panes
        .mount(PaneRole::MainYSpace, MemoryPane::new(0.0, 4_800.0));
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, 60.0);

    assert_eq!(rig.sink.events[0], TableEvent::ClearHover);
    assert!(matches!(rig.sink.events[1], TableEvent::Scroll { .. }));
    assert_eq!(rig.sink.events[2], TableEvent::ScrollY { top: 60.0 });

    let dims = rig.notices()[0].dims.unwrap();
    assert_eq!(dims.scroll_height, 1_000.0);
    assert_eq!(dims.body_height, 4_800.0);
    assert_eq!(dims.body_width, 500.0);
    assert_eq!(rig.state.last_scroll_top, 60.0);
    assert_eq!(rig.state.last_scroll_ms, Some(0.0));
}

#[test]
fn test_teardown_cancels_pending_tick() {
    let mut rig = Rig::new();
    let mut smoother = WheelSmoother::new(PaneSide::Main);

    rig.wheel(&mut smoother, 120.0);
    assert!(smoother.is_pending());
    smoother.teardown(&mut rig.ticks);

    assert!(!smoother.is_pending());
    assert!(rig.ticks.is_empty());
    assert_eq!(smoother.accumulator().remaining(), 0.0);
    assert_eq!(top(&rig.panes, PaneRole::MainBody), 5.0);
}
