//! Host-agnostic node tree handed to the renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated class list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: &str) {
        if !class.is_empty() && !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    pub fn push_if(&mut self, enabled: bool, class: &str) {
        if enabled {
            self.push(class);
        }
    }

    /// Push every whitespace-separated class of an optional class string.
    pub fn extend_from(&mut self, classes: Option<&str>) {
        for class in classes.unwrap_or_default().split_whitespace() {
            self.push(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[&str]> for ClassList {
    fn from(classes: &[&str]) -> Self {
        let mut list = Self::new();
        for class in classes {
            list.push(class);
        }
        list
    }
}

/// Inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: String) {
        self.0.insert(property.to_string(), value);
    }

    /// Set a pixel length.
    pub fn set_px(&mut self, property: &str, value: f64) {
        self.set(property, format!("{value}px"));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A node of rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "ClassList::is_empty")]
        class: ClassList,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// A `div` with the given classes and children.
    pub fn div(class: ClassList, children: Vec<Node>) -> Self {
        Self::element("div", class, Style::new(), children)
    }

    pub fn element(tag: &str, class: ClassList, style: Style, children: Vec<Node>) -> Self {
        Self::Element {
            tag: tag.to_string(),
            class,
            style,
            attrs: BTreeMap::new(),
            children,
        }
    }

    /// Attach an attribute to an element node; text nodes are left alone.
    pub fn with_attr(mut self, name: &str, value: String) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.insert(name.to_string(), value);
        }
        self
    }

    pub fn class(&self) -> Option<&ClassList> {
        match self {
            Self::Element { class, .. } => Some(class),
            Self::Text { .. } => None,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Element { style, .. } => Some(style),
            Self::Text { .. } => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            Self::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text { .. } => &[],
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Node> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.class().is_some_and(|c| c.contains(class)) {
                return Some(node);
            }
            stack.extend(node.children().iter().rev());
        }
        None
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Text { text } => out.push_str(text),
                Self::Element { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        out
    }
}
