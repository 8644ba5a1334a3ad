//! gridview - headless body engine for data grids
//!
//! Turns table state into a renderable description of the grid body and keeps
//! the scroll panes of a fixed-column layout in step:
//! - Merged-cell resolution (anchor / suppressed / unmerged)
//! - Cell and row layout with tree lines, row expansion and validation tips
//! - Left, right and main pane assembly
//! - Native scroll propagation and wheel smoothing across panes
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { renderBody, ScrollBridge } from 'gridview';
//! await init();
//! const body = renderBody(snapshotJson, 'left');
//! const bridge = new ScrollBridge();
//! bridge.mount('main-body-wrapper', mainEl);
//! mainEl.addEventListener('wheel', (e) => {
//!   if (bridge.onWheel('main', e.deltaX, e.deltaY)) e.preventDefault();
//! });
//! ```

pub mod body;
pub mod controller;
pub mod error;
pub mod header;
pub mod layout;
pub mod merge;
pub mod render;
pub mod scroll;
pub mod snapshot;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use controller::{RenderPass, TableController};
pub use error::{GridError, Result};
pub use snapshot::{TableSnapshot, TableState};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use web::ScrollBridge;

/// Render one pane's body from a JSON table snapshot and return it as JSON.
///
/// # Arguments
/// * `snapshot` - The table snapshot (config, view state, columns, data)
/// * `pane` - `"main"`, `"left"` or `"right"`
///
/// # Errors
/// Returns an error if the snapshot is invalid or the pane is unknown.
#[wasm_bindgen(js_name = "renderBody")]
pub fn render_body_json(snapshot: &str, pane: &str) -> std::result::Result<String, JsValue> {
    let pane = PaneSide::parse(pane).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let state = TableState::from_json(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&state.render(pane))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Render one pane's body and return it as a `JsValue`.
///
/// # Errors
/// Returns an error if the snapshot is invalid or the pane is unknown.
#[wasm_bindgen(js_name = "renderBodyToJs")]
pub fn render_body_to_js(snapshot: &str, pane: &str) -> std::result::Result<JsValue, JsValue> {
    let pane = PaneSide::parse(pane).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let state = TableState::from_json(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&state.render(pane))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Header rows (with col/row spans) for the snapshot's column tree.
///
/// # Errors
/// Returns an error if the snapshot is invalid.
#[wasm_bindgen(js_name = "headerRows")]
pub fn header_rows_json(snapshot: &str) -> std::result::Result<String, JsValue> {
    let state = TableState::from_json(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&state.header_rows())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
