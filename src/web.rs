//! Browser bindings for pane scroll synchronization.
//!
//! `ScrollBridge` owns the shared scroll state behind `Rc<RefCell<..>>`.
//! The host forwards `scroll` and `wheel` events from each pane element;
//! wheel ticks run on `setTimeout`. Controller notifications are queued while
//! the state is borrowed and handed to the JS callback afterwards, so the
//! callback may call back into the bridge.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::GridError;
use crate::scroll::{
    clear_scroll, handle_body_scroll, restore_scroll_location, PaneRegistry, PaneRole,
    ScrollNotice, ScrollPane, ScrollSink, ScrollState, TickScheduler, WheelContext, WheelOptions,
    WheelSmoother, WHEEL_TICK_MS,
};
use crate::snapshot::TableEvent;
use crate::types::PaneSide;

pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// A DOM element read and written through its scroll properties.
struct DomPane(HtmlElement);

impl DomPane {
    fn get(&self, prop: &str) -> f64 {
        Reflect::get(&self.0, &JsValue::from_str(prop))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set(&self, prop: &str, value: f64) {
        if Reflect::set(&self.0, &JsValue::from_str(prop), &JsValue::from_f64(value)).is_err() {
            log::warn!("failed to set {prop}");
        }
    }
}

impl ScrollPane for DomPane {
    fn scroll_top(&self) -> f64 {
        self.get("scrollTop")
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.set("scrollTop", top);
    }

    fn scroll_left(&self) -> f64 {
        self.get("scrollLeft")
    }

    fn set_scroll_left(&mut self, left: f64) {
        self.set("scrollLeft", left);
    }

    fn scroll_height(&self) -> f64 {
        self.get("scrollHeight")
    }

    fn scroll_width(&self) -> f64 {
        self.get("scrollWidth")
    }

    fn client_height(&self) -> f64 {
        self.get("clientHeight")
    }

    fn client_width(&self) -> f64 {
        self.get("clientWidth")
    }
}

/// Queues notifications until the state borrow is released.
#[derive(Default)]
struct QueuedSink {
    queue: Vec<TableEvent>,
}

impl ScrollSink for QueuedSink {
    fn trigger_scroll_y(&mut self, top: f64) {
        self.queue.push(TableEvent::ScrollY { top });
    }

    fn trigger_scroll_x(&mut self, left: f64) {
        self.queue.push(TableEvent::ScrollX { left });
    }

    fn handle_scroll(&mut self, notice: &ScrollNotice) {
        self.queue.push(TableEvent::HandleScroll { notice: *notice });
    }

    fn dispatch_scroll(&mut self, notice: &ScrollNotice) {
        self.queue.push(TableEvent::Scroll { notice: *notice });
    }

    fn clear_hover_row(&mut self) {
        self.queue.push(TableEvent::ClearHover);
    }

    fn scroll_to(&mut self, left: Option<f64>, top: Option<f64>) {
        self.queue.push(TableEvent::ScrollTo { left, top });
    }

    fn clear_scroll(&mut self) {
        self.queue.push(TableEvent::ClearScroll);
    }
}

/// `setTimeout` scheduler bound to one body pane's tick closure.
#[derive(Default)]
struct TimeoutTicks {
    callback: Option<Closure<dyn FnMut()>>,
}

impl TickScheduler for TimeoutTicks {
    fn schedule(&mut self, delay_ms: u32) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.callback.as_ref()?;
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

struct WheelLane {
    smoother: WheelSmoother,
    ticks: TimeoutTicks,
}

impl WheelLane {
    fn new(origin: PaneSide) -> Self {
        Self {
            smoother: WheelSmoother::new(origin),
            ticks: TimeoutTicks::default(),
        }
    }
}

struct BridgeState {
    scroll: ScrollState,
    panes: PaneRegistry<DomPane>,
    sink: QueuedSink,
    options: WheelOptions,
    lanes: [WheelLane; 3],
    callback: Option<Function>,
}

fn lane_index(side: PaneSide) -> usize {
    match side {
        PaneSide::Main => 0,
        PaneSide::Left => 1,
        PaneSide::Right => 2,
    }
}

impl BridgeState {
    /// Run one wheel event or tick against a lane with the shared state.
    fn with_lane<R>(
        &mut self,
        side: PaneSide,
        f: impl FnOnce(&mut WheelSmoother, &mut WheelContext<'_, DomPane, QueuedSink, TimeoutTicks>) -> R,
    ) -> Option<R> {
        let Self {
            scroll,
            panes,
            sink,
            options,
            lanes,
            ..
        } = self;
        let lane = lanes.get_mut(lane_index(side))?;
        let mut ctx = WheelContext {
            state: scroll,
            panes,
            sink,
            scheduler: &mut lane.ticks,
            options: *options,
        };
        Some(f(&mut lane.smoother, &mut ctx))
    }

    fn teardown(&mut self) {
        for lane in &mut self.lanes {
            lane.smoother.teardown(&mut lane.ticks);
        }
    }
}

/// Take queued notifications and deliver them with the state released.
fn flush(state: &Rc<RefCell<BridgeState>>) {
    let (events, callback) = {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        (std::mem::take(&mut s.sink.queue), s.callback.clone())
    };
    let Some(callback) = callback else {
        return;
    };
    for event in events {
        match serde_wasm_bindgen::to_value(&event) {
            Ok(value) => {
                if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                    web_sys::console::error_2(&"scroll callback failed".into(), &err);
                }
            }
            Err(err) => log::warn!("failed to serialize scroll event: {err}"),
        }
    }
}

fn run_tick(weak: &Weak<RefCell<BridgeState>>, side: PaneSide) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    {
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        s.with_lane(side, |smoother, ctx| smoother.on_tick(ctx));
    }
    flush(&state);
}

/// Scroll synchronizer for one table instance.
#[wasm_bindgen]
pub struct ScrollBridge {
    state: Rc<RefCell<BridgeState>>,
}

impl Default for ScrollBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ScrollBridge {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        let state = Rc::new(RefCell::new(BridgeState {
            scroll: ScrollState::new(),
            panes: PaneRegistry::new(),
            sink: QueuedSink::default(),
            options: WheelOptions::default(),
            lanes: [
                WheelLane::new(PaneSide::Main),
                WheelLane::new(PaneSide::Left),
                WheelLane::new(PaneSide::Right),
            ],
            callback: None,
        }));
        {
            let mut s = state.borrow_mut();
            for side in [PaneSide::Main, PaneSide::Left, PaneSide::Right] {
                let weak = Rc::downgrade(&state);
                let closure = Closure::wrap(Box::new(move || {
                    run_tick(&weak, side);
                }) as Box<dyn FnMut()>);
                if let Some(lane) = s.lanes.get_mut(lane_index(side)) {
                    lane.ticks.callback = Some(closure);
                }
            }
        }
        Self { state }
    }

    /// Receives every controller notification as a plain object with a
    /// `kind` field.
    #[wasm_bindgen(js_name = "setCallback")]
    pub fn set_callback(&self, callback: Function) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.callback = Some(callback);
        }
    }

    /// Wheel events are only smoothed while `wheel_mode` is set.
    #[wasm_bindgen(js_name = "setOptions")]
    pub fn set_options(
        &self,
        wheel_mode: bool,
        hover_rows: bool,
        scroll_x_load: bool,
        scroll_y_load: bool,
    ) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.options = WheelOptions {
                wheel_mode,
                hover_rows,
                scroll_x_load,
                scroll_y_load,
            };
        }
    }

    /// Register an element under a role name such as `"left-body-wrapper"`.
    ///
    /// # Errors
    /// Returns an error for unknown role names.
    pub fn mount(&self, role: &str, element: HtmlElement) -> Result<(), JsValue> {
        let role = PaneRole::from_name(role).ok_or_else(|| GridError::UnknownPane(role.to_string()))?;
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.panes.mount(role, DomPane(element));
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error for unknown role names.
    pub fn unmount(&self, role: &str) -> Result<(), JsValue> {
        let role = PaneRole::from_name(role).ok_or_else(|| GridError::UnknownPane(role.to_string()))?;
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.panes.unmount(role);
        }
        Ok(())
    }

    /// Native `scroll` event of a body pane (`"main"`, `"left"`, `"right"`).
    /// Returns whether the scroll propagated.
    ///
    /// # Errors
    /// Returns an error for unknown pane names.
    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&self, pane: &str) -> Result<bool, JsValue> {
        let origin = PaneSide::parse(pane)?;
        let propagated = {
            let Ok(mut s) = self.state.try_borrow_mut() else {
                return Ok(false);
            };
            let BridgeState {
                scroll,
                panes,
                sink,
                ..
            } = &mut *s;
            matches!(
                handle_body_scroll(scroll, panes, sink, origin, now_ms()),
                crate::scroll::SyncOutcome::Propagated { .. }
            )
        };
        flush(&self.state);
        Ok(propagated)
    }

    /// `wheel` event over a body pane. Returns `true` when the host must
    /// call `preventDefault`.
    ///
    /// # Errors
    /// Returns an error for unknown pane names.
    #[wasm_bindgen(js_name = "onWheel")]
    pub fn on_wheel(&self, pane: &str, delta_x: f64, delta_y: f64) -> Result<bool, JsValue> {
        let origin = PaneSide::parse(pane)?;
        let prevent = {
            let Ok(mut s) = self.state.try_borrow_mut() else {
                return Ok(false);
            };
            s.with_lane(origin, |smoother, ctx| {
                smoother.on_wheel(ctx, delta_x, delta_y, now_ms())
            })
            .is_some_and(|outcome| outcome.prevents_default())
        };
        flush(&self.state);
        Ok(prevent)
    }

    /// Scroll activity now belongs to the virtual-scroll handler.
    #[wasm_bindgen(js_name = "beginVirtualScroll")]
    pub fn begin_virtual_scroll(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.scroll.begin_virtual();
        }
    }

    #[wasm_bindgen(js_name = "beginFooterScroll")]
    pub fn begin_footer_scroll(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.scroll.begin_footer();
        }
    }

    /// End the current scroll phase.
    pub fn settle(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.scroll.settle();
        }
    }

    #[wasm_bindgen(js_name = "clearScroll")]
    pub fn clear_scroll(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            let BridgeState { scroll, panes, .. } = &mut *s;
            clear_scroll(scroll, panes);
        }
    }

    /// Returns whether a scroll back to the location was requested.
    #[wasm_bindgen(js_name = "restoreScrollLocation")]
    pub fn restore_scroll_location(&self, left: f64, top: f64) -> bool {
        let moved = {
            let Ok(mut s) = self.state.try_borrow_mut() else {
                return false;
            };
            let BridgeState { scroll, sink, .. } = &mut *s;
            restore_scroll_location(scroll, sink, left, top).moved
        };
        flush(&self.state);
        moved
    }

    /// Cancel pending wheel ticks and drop every pane. Call before the
    /// elements are removed.
    pub fn destroy(&self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.teardown();
            for role in PaneRole::ALL {
                s.panes.unmount(role);
            }
            s.sink.queue.clear();
        }
    }

    /// Tick interval of wheel smoothing, in ms.
    #[wasm_bindgen(js_name = "tickInterval")]
    pub fn tick_interval() -> u32 {
        WHEEL_TICK_MS
    }
}

impl Drop for ScrollBridge {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.teardown();
        }
    }
}
