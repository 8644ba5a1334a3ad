use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Edge a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

/// One of the three body panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneSide {
    /// The un-fixed, horizontally scrollable pane
    #[default]
    Main,
    /// Pane holding left-fixed columns
    Left,
    /// Pane holding right-fixed columns
    Right,
}

impl PaneSide {
    /// The fixed side this pane renders, `None` for the main pane.
    pub fn fixed(self) -> Option<FixedSide> {
        match self {
            Self::Main => None,
            Self::Left => Some(FixedSide::Left),
            Self::Right => Some(FixedSide::Right),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a pane side. The empty string names the main pane.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "" | "main" => Ok(Self::Main),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(GridError::UnknownPane(other.to_string())),
        }
    }
}

/// How cell content that does not fit is presented.
///
/// Deserializes from `true` (tooltip), `false`/`null` (none) or one of
/// `"title"`, `"tooltip"`, `"ellipsis"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "OverflowRepr", into = "OverflowRepr")]
pub enum Overflow {
    /// Content wraps freely
    #[default]
    None,
    /// Clip and expose the label through the `title` attribute
    Title,
    /// Clip and show a tooltip on hover
    Tooltip,
    /// Clip with an ellipsis only
    Ellipsis,
}

impl Overflow {
    /// True for every clipping mode.
    pub fn has_ellipsis(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_title(self) -> bool {
        matches!(self, Self::Title)
    }

    pub fn is_tooltip(self) -> bool {
        matches!(self, Self::Tooltip)
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Column-level override falls back to the table-wide default.
    pub fn resolve(column: Option<Self>, table: Option<Self>) -> Self {
        column.or(table).unwrap_or_default()
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OverflowRepr {
    Flag(bool),
    Named(String),
}

impl TryFrom<OverflowRepr> for Overflow {
    type Error = String;

    fn try_from(repr: OverflowRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            OverflowRepr::Flag(true) => Ok(Self::Tooltip),
            OverflowRepr::Flag(false) => Ok(Self::None),
            OverflowRepr::Named(name) => match name.as_str() {
                "" => Ok(Self::None),
                "title" => Ok(Self::Title),
                "tooltip" => Ok(Self::Tooltip),
                "ellipsis" => Ok(Self::Ellipsis),
                other => Err(format!("unknown overflow mode `{other}`")),
            },
        }
    }
}

impl From<Overflow> for OverflowRepr {
    fn from(mode: Overflow) -> Self {
        match mode {
            Overflow::None => Self::Flag(false),
            Overflow::Title => Self::Named("title".to_string()),
            Overflow::Tooltip => Self::Named("tooltip".to_string()),
            Overflow::Ellipsis => Self::Named("ellipsis".to_string()),
        }
    }
}

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Reference to a registered cell or edit renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererRef {
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl RendererRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
        }
    }

    /// A renderer counts as configured only when present and not disabled.
    pub fn is_enabled(renderer: Option<&Self>) -> bool {
        renderer.is_some_and(|r| r.enabled)
    }
}

/// Column configuration as seen by the body renderer. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    /// Stable unique id, also emitted as a cell class
    pub id: String,
    /// Record field the column displays
    pub field: String,
    pub title: String,
    /// Special column kind (`seq`, `checkbox`, `radio`, `expand`, `html`)
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub fixed: Option<FixedSide>,
    #[serde(rename = "showOverflow")]
    pub overflow: Option<Overflow>,
    pub align: Option<Align>,
    pub class_name: Option<String>,
    pub cell_render: Option<RendererRef>,
    pub edit_render: Option<RendererRef>,
    /// Column that carries the tree toggle and indentation line
    pub tree_node: bool,
    pub width: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Grouped sub-columns (header groups)
    pub children: Vec<Column>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            id: String::new(),
            field: String::new(),
            title: String::new(),
            column_type: None,
            fixed: None,
            overflow: None,
            align: None,
            class_name: None,
            cell_render: None,
            edit_render: None,
            tree_node: false,
            width: 0.0,
            visible: true,
            children: Vec::new(),
        }
    }
}

impl Column {
    pub fn new(id: &str, field: &str) -> Self {
        Self {
            id: id.to_string(),
            field: field.to_string(),
            title: field.to_string(),
            ..Self::default()
        }
    }

    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    pub fn overflow(mut self, mode: Overflow) -> Self {
        self.overflow = Some(mode);
        self
    }

    pub fn tree_node(mut self) -> Self {
        self.tree_node = true;
        self
    }

    pub fn edit_render(mut self, name: &str) -> Self {
        self.edit_render = Some(RendererRef::new(name));
        self
    }

    pub fn cell_render(mut self, name: &str) -> Self {
        self.cell_render = Some(RendererRef::new(name));
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn group(mut self, children: Vec<Column>) -> Self {
        self.children = children;
        self
    }

    /// The renderer that decorates this cell, edit renderer first.
    pub fn renderer(&self) -> Option<&RendererRef> {
        self.edit_render.as_ref().or(self.cell_render.as_ref())
    }

    pub fn is_edit(&self) -> bool {
        RendererRef::is_enabled(self.edit_render.as_ref())
    }

    /// True when this column groups at least one visible sub-column.
    pub fn has_visible_children(&self) -> bool {
        self.children.iter().any(|c| c.visible)
    }
}

/// Collect visible leaf columns in display order.
pub fn visible_leaf_columns(columns: &[Column]) -> Vec<Column> {
    let mut out = Vec::new();
    let mut stack: Vec<&Column> = columns.iter().rev().collect();
    while let Some(column) = stack.pop() {
        if !column.visible {
            continue;
        }
        if column.has_visible_children() {
            stack.extend(column.children.iter().rev());
        } else {
            out.push(column.clone());
        }
    }
    out
}
