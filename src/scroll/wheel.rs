//! Wheel smoothing.
//!
//! Native wheel momentum moves each scroll container on its own schedule, so
//! fixed panes drift behind the main pane. In wheel mode the gesture is
//! intercepted and replayed as a short step animation that writes every body
//! pane on the same tick.

use super::{
    moved, PaneRegistry, PaneRole, ScrollDims, ScrollNotice, ScrollPane, ScrollSink, ScrollState,
};
use crate::types::{PaneSide, TableConfig, ViewState};

/// Delay between animation steps (ms).
pub const WHEEL_TICK_MS: u32 = 10;

/// Smallest animation step in pixels.
pub const MIN_WHEEL_STEP: f64 = 5.0;

/// Schedules the next animation tick.
pub trait TickScheduler {
    /// Request a tick after `delay_ms`. Returns a handle for `cancel`.
    fn schedule(&mut self, delay_ms: u32) -> Option<i32>;
    fn cancel(&mut self, handle: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    fn of(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    fn sign(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }

    /// Whether `top` is already at the edge this direction travels towards.
    fn at_boundary(self, top: f64, max_top: f64) -> bool {
        match self {
            Self::Up => top <= 0.0,
            Self::Down => top >= max_top,
        }
    }
}

/// Distance bookkeeping of one smoothing animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelAccumulator {
    /// Distance the animation covers in total
    pub target: f64,
    /// Last step applied
    pub step: f64,
    pub traveled: f64,
    pub last_direction: Option<WheelDirection>,
}

impl WheelAccumulator {
    /// Start an animation for a new gesture.
    ///
    /// A same-direction gesture carries over the distance the previous
    /// animation had not covered yet. A reversal drops it.
    pub fn start(&mut self, direction: WheelDirection, distance: f64) {
        let remaining = if self.last_direction == Some(direction) {
            (self.target - self.traveled).max(0.0)
        } else {
            0.0
        };
        self.last_direction = Some(direction);
        self.target = distance + remaining;
        self.step = 0.0;
        self.traveled = 0.0;
    }

    /// Next step distance, growing by half each tick and clipped so the total
    /// lands exactly on the target. `None` once drained.
    pub fn next_step(&mut self) -> Option<f64> {
        let remaining = self.target - self.traveled;
        if remaining <= 0.0 {
            return None;
        }
        let step = (self.step * 1.5).floor().max(MIN_WHEEL_STEP).min(remaining);
        self.step = step;
        self.traveled = if step < remaining {
            self.traveled + step
        } else {
            self.target
        };
        Some(step)
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.traveled).max(0.0)
    }

    pub fn is_drained(&self) -> bool {
        self.remaining() <= 0.0
    }
}

/// Table flags the smoother reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelOptions {
    /// `scrollY.mode` is `wheel`; otherwise gestures keep their native scrolling
    pub wheel_mode: bool,
    /// Row hover highlighting is on and must be cleared on wheel
    pub hover_rows: bool,
    pub scroll_x_load: bool,
    pub scroll_y_load: bool,
}

impl WheelOptions {
    pub fn new(config: &TableConfig, view: &ViewState) -> Self {
        Self {
            wheel_mode: config.wheel_mode(),
            hover_rows: config.hover_rows(),
            scroll_x_load: view.scroll_x_load,
            scroll_y_load: view.scroll_y_load,
        }
    }
}

/// Everything a wheel gesture or tick touches.
pub struct WheelContext<'a, P, S: ?Sized, T: ?Sized> {
    pub state: &'a mut ScrollState,
    pub panes: &'a mut PaneRegistry<P>,
    pub sink: &'a mut S,
    pub scheduler: &'a mut T,
    pub options: WheelOptions,
}

/// Result of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Nothing to do (not in wheel mode, no vertical delta, or panes missing)
    Ignored,
    /// Already at the edge the gesture points to; let the page scroll
    AtBoundary,
    /// The gesture was taken over; the host must prevent the default action
    Smoothing,
}

impl WheelOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Smoothing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another tick is scheduled
    Continue,
    Finished,
}

/// Wheel smoothing animation of one body pane.
#[derive(Debug, Default)]
pub struct WheelSmoother {
    acc: WheelAccumulator,
    pending: Option<i32>,
    origin: PaneSide,
    is_x: bool,
    is_y: bool,
}

impl WheelSmoother {
    pub fn new(origin: PaneSide) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    pub fn accumulator(&self) -> &WheelAccumulator {
        &self.acc
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel<T: TickScheduler + ?Sized>(&mut self, scheduler: &mut T) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    /// Handle a wheel event over the pane.
    pub fn on_wheel<P, S, T>(
        &mut self,
        ctx: &mut WheelContext<'_, P, S, T>,
        delta_x: f64,
        delta_y: f64,
        now_ms: f64,
    ) -> WheelOutcome
    where
        P: ScrollPane,
        S: ScrollSink + ?Sized,
        T: TickScheduler + ?Sized,
    {
        if !ctx.options.wheel_mode || !moved(delta_y, 0.0) {
            return WheelOutcome::Ignored;
        }
        let Some(main_left) = ctx.panes.get(PaneRole::MainBody).map(ScrollPane::scroll_left) else {
            return WheelOutcome::Ignored;
        };
        let Some(pane) = ctx.panes.get(PaneRole::body(self.origin)) else {
            return WheelOutcome::Ignored;
        };
        let direction = WheelDirection::of(delta_y);
        if direction.at_boundary(pane.scroll_top(), pane.max_scroll_top()) {
            return WheelOutcome::AtBoundary;
        }

        let scroll_top = pane.scroll_top() + delta_y;
        let scroll_left = main_left + delta_x;
        let is_x = moved(scroll_left, ctx.state.last_scroll_left);
        let is_y = moved(scroll_top, ctx.state.last_scroll_top);
        if !is_y {
            return WheelOutcome::Ignored;
        }

        ctx.state.last_scroll_top = scroll_top;
        ctx.state.last_scroll_left = scroll_left;
        ctx.state.last_scroll_ms = Some(now_ms);
        if ctx.options.hover_rows {
            ctx.sink.clear_hover_row();
        }

        self.cancel(&mut *ctx.scheduler);
        self.acc.start(direction, delta_y.abs());
        self.is_x = is_x;
        self.is_y = is_y;
        self.step(ctx);

        if ctx.options.scroll_y_load {
            ctx.sink.trigger_scroll_y(scroll_top);
        }
        WheelOutcome::Smoothing
    }

    /// Run a scheduled tick.
    pub fn on_tick<P, S, T>(&mut self, ctx: &mut WheelContext<'_, P, S, T>) -> TickOutcome
    where
        P: ScrollPane,
        S: ScrollSink + ?Sized,
        T: TickScheduler + ?Sized,
    {
        self.pending = None;
        self.step(ctx)
    }

    /// Cancel any pending tick. Call before the panes go away.
    pub fn teardown<T: TickScheduler + ?Sized>(&mut self, scheduler: &mut T) {
        self.cancel(scheduler);
        self.acc = WheelAccumulator::default();
    }

    fn step<P, S, T>(&mut self, ctx: &mut WheelContext<'_, P, S, T>) -> TickOutcome
    where
        P: ScrollPane,
        S: ScrollSink + ?Sized,
        T: TickScheduler + ?Sized,
    {
        let Some(direction) = self.acc.last_direction else {
            return TickOutcome::Finished;
        };
        let Some(step) = self.acc.next_step() else {
            return TickOutcome::Finished;
        };
        let Some(main) = ctx.panes.get_mut(PaneRole::MainBody) else {
            return TickOutcome::Finished;
        };

        main.set_scroll_top(main.scroll_top() + step * direction.sign());
        let top = main.scroll_top();
        let max_top = main.max_scroll_top();
        let mut dims = ScrollDims {
            scroll_height: main.scroll_height(),
            scroll_width: main.scroll_width(),
            body_height: main.client_height(),
            body_width: main.client_width(),
        };
        let scroll_left = main.scroll_left();
        ctx.panes.set_top(PaneRole::LeftBody, top);
        ctx.panes.set_top(PaneRole::RightBody, top);

        if ctx.options.scroll_y_load {
            if let Some(space) = ctx.panes.get(PaneRole::MainYSpace) {
                dims.body_height = space.client_height();
            }
        }
        if ctx.options.scroll_x_load {
            if let Some(space) = ctx.panes.get(PaneRole::MainXSpace) {
                dims.body_width = space.client_width();
            }
        }
        log::trace!(
            "wheel step {step} to {top} ({}/{})",
            self.acc.traveled,
            self.acc.target
        );

        let outcome = if !self.acc.is_drained() && !direction.at_boundary(top, max_top) {
            self.pending = ctx.scheduler.schedule(WHEEL_TICK_MS);
            TickOutcome::Continue
        } else {
            TickOutcome::Finished
        };

        let mut notice = ScrollNotice::body(self.origin, self.is_x, self.is_y, top, scroll_left);
        notice.dims = Some(dims);
        ctx.sink.dispatch_scroll(&notice);
        outcome
    }
}

/// Scheduler that queues ticks for the caller to run, for hosts without a
/// timer (tests, the CLI).
#[derive(Debug, Default)]
pub struct QueuedTicks {
    queue: Vec<i32>,
    next_handle: i32,
}

impl QueuedTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest queued tick.
    pub fn pop(&mut self) -> Option<i32> {
        if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl TickScheduler for QueuedTicks {
    fn schedule(&mut self, _delay_ms: u32) -> Option<i32> {
        self.next_handle += 1;
        self.queue.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel(&mut self, handle: i32) {
        self.queue.retain(|&h| h != handle);
    }
}
