use crate::models::PageId;

use super::{ScrollMode, Viewport};

/// Vertical offset (px) past which the bar switches to its solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: PageId,
}

impl NavLink {
    pub fn is_active(&self, current: PageId) -> bool {
        self.page == current
    }
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", page: PageId::Home },
    NavLink { label: "About", page: PageId::About },
    NavLink { label: "Services", page: PageId::Services },
    NavLink { label: "Wellness", page: PageId::Wellness },
    NavLink { label: "Contact", page: PageId::Contact },
];

pub fn active_link(current: PageId) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.is_active(current))
}

/// Transient UI state owned by the navigation bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavBarState {
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
}

impl NavBarState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.is_scrolled = scroll_y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    /// A link was picked: navigate, close the menu, then glide back to the top.
    pub fn select<V: Viewport>(
        &mut self,
        page: PageId,
        navigate: impl FnOnce(PageId),
        viewport: &V,
    ) {
        navigate(page);
        self.close_menu();
        viewport.scroll_to_top(ScrollMode::Smooth);
    }
}
