//! Scroll panes and the fixed registry of pane roles.

use crate::types::PaneSide;

/// A scrollable element.
pub trait ScrollPane {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, top: f64);
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&mut self, left: f64);
    fn scroll_height(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn client_height(&self) -> f64;
    fn client_width(&self) -> f64;

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }

    fn max_scroll_left(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

/// Roles a pane element can be mounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneRole {
    MainBody,
    LeftBody,
    RightBody,
    Header,
    Footer,
    ScrollXHandle,
    ScrollYHandle,
    /// Horizontal virtual space inside the main body
    MainXSpace,
    /// Vertical virtual space inside the main body
    MainYSpace,
}

impl PaneRole {
    pub const ALL: [Self; 9] = [
        Self::MainBody,
        Self::LeftBody,
        Self::RightBody,
        Self::Header,
        Self::Footer,
        Self::ScrollXHandle,
        Self::ScrollYHandle,
        Self::MainXSpace,
        Self::MainYSpace,
    ];

    /// Body wrapper role of a pane side.
    pub fn body(side: PaneSide) -> Self {
        match side {
            PaneSide::Main => Self::MainBody,
            PaneSide::Left => Self::LeftBody,
            PaneSide::Right => Self::RightBody,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MainBody => "main-body-wrapper",
            Self::LeftBody => "left-body-wrapper",
            Self::RightBody => "right-body-wrapper",
            Self::Header => "main-header-wrapper",
            Self::Footer => "main-footer-wrapper",
            Self::ScrollXHandle => "scroll-x-handle",
            Self::ScrollYHandle => "scroll-y-handle",
            Self::MainXSpace => "main-body-xSpace",
            Self::MainYSpace => "main-body-ySpace",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Live pane handles by role. Filled on mount, cleared on unmount.
#[derive(Debug, Clone)]
pub struct PaneRegistry<P> {
    main_body: Option<P>,
    left_body: Option<P>,
    right_body: Option<P>,
    header: Option<P>,
    footer: Option<P>,
    scroll_x_handle: Option<P>,
    scroll_y_handle: Option<P>,
    main_x_space: Option<P>,
    main_y_space: Option<P>,
}

impl<P> Default for PaneRegistry<P> {
    fn default() -> Self {
        Self {
            main_body: None,
            left_body: None,
            right_body: None,
            header: None,
            footer: None,
            scroll_x_handle: None,
            scroll_y_handle: None,
            main_x_space: None,
            main_y_space: None,
        }
    }
}

impl<P> PaneRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, role: PaneRole) -> &mut Option<P> {
        match role {
            PaneRole::MainBody => &mut self.main_body,
            PaneRole::LeftBody => &mut self.left_body,
            PaneRole::RightBody => &mut self.right_body,
            PaneRole::Header => &mut self.header,
            PaneRole::Footer => &mut self.footer,
            PaneRole::ScrollXHandle => &mut self.scroll_x_handle,
            PaneRole::ScrollYHandle => &mut self.scroll_y_handle,
            PaneRole::MainXSpace => &mut self.main_x_space,
            PaneRole::MainYSpace => &mut self.main_y_space,
        }
    }

    /// Mount a pane, returning the one it replaces.
    pub fn mount(&mut self, role: PaneRole, pane: P) -> Option<P> {
        self.slot(role).replace(pane)
    }

    pub fn unmount(&mut self, role: PaneRole) -> Option<P> {
        self.slot(role).take()
    }

    pub fn get(&self, role: PaneRole) -> Option<&P> {
        match role {
            PaneRole::MainBody => self.main_body.as_ref(),
            PaneRole::LeftBody => self.left_body.as_ref(),
            PaneRole::RightBody => self.right_body.as_ref(),
            PaneRole::Header => self.header.as_ref(),
            PaneRole::Footer => self.footer.as_ref(),
            PaneRole::ScrollXHandle => self.scroll_x_handle.as_ref(),
            PaneRole::ScrollYHandle => self.scroll_y_handle.as_ref(),
            PaneRole::MainXSpace => self.main_x_space.as_ref(),
            PaneRole::MainYSpace => self.main_y_space.as_ref(),
        }
    }

    pub fn get_mut(&mut self, role: PaneRole) -> Option<&mut P> {
        self.slot(role).as_mut()
    }

    pub fn is_mounted(&self, role: PaneRole) -> bool {
        self.get(role).is_some()
    }
}

impl<P: ScrollPane> PaneRegistry<P> {
    /// Write a vertical position to a pane if it is mounted.
    pub fn set_top(&mut self, role: PaneRole, top: f64) {
        if let Some(pane) = self.get_mut(role) {
            pane.set_scroll_top(top);
        }
    }

    /// Write a horizontal position to a pane if it is mounted.
    pub fn set_left(&mut self, role: PaneRole, left: f64) {
        if let Some(pane) = self.get_mut(role) {
            pane.set_scroll_left(left);
        }
    }
}

/// In-memory pane that clamps positions like a browser scroll container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPane {
    pub top: f64,
    pub left: f64,
    pub scroll_height: f64,
    pub scroll_width: f64,
    pub client_height: f64,
    pub client_width: f64,
    /// Number of position writes received
    pub writes: usize,
}

impl MemoryPane {
    pub fn new(scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_height,
            client_height,
            scroll_width: 0.0,
            client_width: 0.0,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, scroll_width: f64, client_width: f64) -> Self {
        self.scroll_width = scroll_width;
        self.client_width = client_width;
        self
    }
}

impl ScrollPane for MemoryPane {
    fn scroll_top(&self) -> f64 {
        self.top
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.writes += 1;
        self.top = top.clamp(0.0, self.max_scroll_top());
    }

    fn scroll_left(&self) -> f64 {
        self.left
    }

    fn set_scroll_left(&mut self, left: f64) {
        self.writes += 1;
        self.left = left.clamp(0.0, self.max_scroll_left());
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in PaneRole::ALL {
            assert_eq!(PaneRole::from_name(role.name()), Some(role));
        }
        assert_eq!(PaneRole::from_name("main-body-wraper"), None);
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut panes = PaneRegistry::new();
        assert!(panes.mount(PaneRole::LeftBody, MemoryPane::new(500.0, 100.0)).is_none());
        assert!(panes.is_mounted(PaneRole::LeftBody));
        panes.set_top(PaneRole::LeftBody, 40.0);
        panes.set_top(PaneRole::RightBody, 40.0);
        assert_eq!(panes.get(PaneRole::LeftBody).unwrap().top, 40.0);
        assert!(panes.unmount(PaneRole::LeftBody).is_some());
        assert!(panes.get(PaneRole::LeftBody).is_none());
    }

    #[test]
    fn test_memory_pane_clamps() {
        let mut pane = MemoryPane::new(500.0, 100.0);
        pane.set_scroll_top(1_000.0);
        assert_eq!(pane.top, 400.0);
        pane.set_scroll_top(-5.0);
        assert_eq!(pane.top, 0.0);
        assert_eq!(pane.writes, 2);
    }
}
