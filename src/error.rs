//! Structured error types for gridview.
//!
//! The render and scroll paths never fail: missing panes and missing row
//! metadata degrade silently. Errors only surface at the edges, when decoding
//! snapshots, registering spans or addressing panes by name.

/// All errors that can occur at the gridview boundaries.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Snapshot or configuration JSON failed to decode.
    #[error("JSON decode: {0}")]
    Json(#[from] serde_json::Error),

    /// Two merge spans cover the same cell.
    #[error("Merge spans #{first} and #{second} overlap at row {row}, col {col}")]
    OverlappingSpans {
        first: usize,
        second: usize,
        row: usize,
        col: usize,
    },

    /// A pane role or pane side name that is not known.
    #[error("Unknown pane: {0}")]
    UnknownPane(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
