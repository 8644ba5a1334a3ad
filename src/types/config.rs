//! Per-render configuration snapshot.
//!
//! Built once per render pass (usually deserialized from the host's props)
//! and passed by reference into every component. Nothing in the engine
//! mutates it.

use serde::{Deserialize, Serialize};

use super::column::{Align, Overflow, VerticalAlign};
use super::row::DEFAULT_ROW_KEY;

/// Component size. Tree line offsets depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Medium,
    Small,
    Mini,
}

impl Size {
    /// Horizontal tree line correction in pixels.
    pub fn line_offset(size: Option<Self>) -> f64 {
        match size {
            Some(Self::Mini) => 3.0,
            Some(Self::Small) => 2.0,
            Some(Self::Medium) => 1.0,
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowOpts {
    pub key_field: Option<String>,
    pub use_key: bool,
    pub is_hover: bool,
    /// Drag-reorder rows
    pub drag: bool,
    /// Fixed row height in pixels
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnOpts {
    pub use_key: bool,
    /// Drag-reorder columns
    pub drag: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellOpts {
    pub vertical_align: Option<VerticalAlign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOpts {
    pub children_field: String,
    /// Indent per level in pixels
    pub indent: f64,
    pub show_line: bool,
    /// Rows arrive pre-flattened; the body must not expand children itself
    pub transform: bool,
}

impl Default for TreeOpts {
    fn default() -> Self {
        Self {
            children_field: "children".to_string(),
            indent: 20.0,
            show_line: false,
            transform: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Cell,
    Row,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditOpts {
    pub mode: EditMode,
    pub show_status: bool,
    pub show_update_status: bool,
    pub show_insert_status: bool,
}

impl Default for EditOpts {
    fn default() -> Self {
        Self {
            mode: EditMode::Cell,
            show_status: true,
            show_update_status: false,
            show_insert_status: false,
        }
    }
}

/// When validation messages render inline in the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidMessage {
    /// Inline when the table has an explicit height or more than one row
    #[default]
    Default,
    Inline,
    Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidOpts {
    pub show_message: bool,
    pub message: ValidMessage,
    pub theme: Option<String>,
    pub class_name: Option<String>,
}

impl Default for ValidOpts {
    fn default() -> Self {
        Self {
            show_message: true,
            message: ValidMessage::Default,
            theme: None,
            class_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOpts {
    /// Tooltip for every cell regardless of overflow mode
    pub show_all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxOpts {
    /// Drag-select checkbox ranges
    pub range: bool,
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioOpts {
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MouseOpts {
    pub selected: bool,
    /// Cell area selection
    pub area: bool,
    pub extension: bool,
}

/// Row marker column for area selection: `true` marks the first column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectCellToRow {
    First(bool),
    Field(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaOpts {
    pub select_cell_to_row: Option<SelectCellToRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Native scrolling
    #[default]
    Default,
    /// Wheel events are intercepted and smoothed
    Wheel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollYOpts {
    pub mode: ScrollMode,
    /// Row height used by virtual-y rendering
    pub r_height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpandOpts {
    pub height: Option<f64>,
    pub padding: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardOpts {
    pub is_merge: bool,
}

/// Table-wide configuration read by the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Explicit row key field
    pub row_id: Option<String>,
    /// Rows keep a stable identity across renders
    pub row_key: bool,
    pub column_key: bool,
    pub stripe: bool,
    pub highlight_hover_row: bool,
    pub show_overflow: Option<Overflow>,
    pub align: Option<Align>,
    /// Explicit table height in pixels
    pub height: Option<f64>,
    pub cell_class_name: Option<String>,
    pub row_class_name: Option<String>,
    /// Hover handlers stay quiet this long after a scroll (ms)
    pub delay_hover: f64,
    pub empty_text: Option<String>,
    pub size: Option<Size>,
    pub row_config: RowOpts,
    pub column_config: ColumnOpts,
    pub cell_config: CellOpts,
    pub tree_config: Option<TreeOpts>,
    pub edit_config: Option<EditOpts>,
    /// Validation rules are configured
    pub edit_rules: bool,
    pub valid_config: ValidOpts,
    pub tooltip_config: Option<TooltipOpts>,
    pub checkbox_config: CheckboxOpts,
    pub radio_config: RadioOpts,
    pub mouse_config: Option<MouseOpts>,
    pub area_config: AreaOpts,
    #[serde(rename = "scrollY")]
    pub scroll_y: ScrollYOpts,
    pub expand_config: ExpandOpts,
    pub keyboard_config: Option<KeyboardOpts>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_id: None,
            row_key: false,
            column_key: false,
            stripe: false,
            highlight_hover_row: false,
            show_overflow: None,
            align: None,
            height: None,
            cell_class_name: None,
            row_class_name: None,
            delay_hover: 250.0,
            empty_text: None,
            size: None,
            row_config: RowOpts::default(),
            column_config: ColumnOpts::default(),
            cell_config: CellOpts::default(),
            tree_config: None,
            edit_config: None,
            edit_rules: false,
            valid_config: ValidOpts::default(),
            tooltip_config: None,
            checkbox_config: CheckboxOpts::default(),
            radio_config: RadioOpts::default(),
            mouse_config: None,
            area_config: AreaOpts::default(),
            scroll_y: ScrollYOpts::default(),
            expand_config: ExpandOpts::default(),
            keyboard_config: None,
        }
    }
}

impl TableConfig {
    /// Record field holding the row key.
    pub fn row_key_field(&self) -> &str {
        self.row_id
            .as_deref()
            .or(self.row_config.key_field.as_deref())
            .unwrap_or(DEFAULT_ROW_KEY)
    }

    /// Rows are keyed by rowid instead of position.
    pub fn uses_row_identity(&self) -> bool {
        self.row_key || self.row_config.use_key || self.row_config.drag || self.tree_config.is_some()
    }

    /// Cells are keyed by column id instead of position.
    pub fn uses_column_identity(&self) -> bool {
        self.column_key
            || self.column_config.use_key
            || self.row_config.use_key
            || self.column_config.drag
    }

    pub fn show_all_tooltips(&self) -> bool {
        self.tooltip_config.as_ref().is_some_and(|t| t.show_all)
    }

    pub fn hover_rows(&self) -> bool {
        self.row_config.is_hover || self.highlight_hover_row
    }

    /// Body panes take over wheel gestures and smooth them.
    pub fn wheel_mode(&self) -> bool {
        self.scroll_y.mode == ScrollMode::Wheel
    }

    /// Max height applied to clipped cells: virtual row height, else row height.
    pub fn ellipsis_height(&self) -> Option<f64> {
        self.scroll_y
            .r_height
            .filter(|h| *h > 0.0)
            .or(self.row_config.height.filter(|h| *h > 0.0))
    }

    pub fn children_field(&self) -> Option<&str> {
        self.tree_config.as_ref().map(|t| t.children_field.as_str())
    }
}
