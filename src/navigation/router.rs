use crate::models::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Instant,
    Smooth,
}

/// The scrollable surface the router resets after a page change.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    fn scroll_to_top(&self, mode: ScrollMode);
}

/// Outcome of a single `navigate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Changed { from: PageId, to: PageId },
    Unchanged(PageId),
}

impl Navigation {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Which page is selected. The router is its only writer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_page: PageId,
}

impl NavigationState {
    pub fn new(current_page: PageId) -> Self {
        Self { current_page }
    }

    pub fn current(&self) -> PageId {
        self.current_page
    }

    pub fn navigate(&mut self, page: PageId) -> Navigation {
        if self.current_page == page {
            return Navigation::Unchanged(page);
        }

        let from = std::mem::replace(&mut self.current_page, page);
        Navigation::Changed { from, to: page }
    }
}

/// Owns the current page and resets the viewport whenever it changes.
#[derive(Debug, Clone)]
pub struct Router<V> {
    state: NavigationState,
    viewport: V,
}

impl<V: Viewport> Router<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            state: NavigationState::default(),
            viewport,
        }
    }

    pub fn current(&self) -> PageId {
        self.state.current()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// First render: start at the top of the initial page.
    pub fn mount(&self) {
        self.viewport.scroll_to_top(ScrollMode::Instant);
    }

    pub fn navigate(&mut self, page: PageId) -> Navigation {
        let navigation = self.state.navigate(page);

        match navigation {
            Navigation::Changed { from, to } => {
                log::debug!("navigate {from} -> {to}");
                self.viewport.scroll_to_top(ScrollMode::Instant);
            }
            Navigation::Unchanged(page) => {
                log::trace!("navigate to {page} ignored, already current");
            }
        }

        navigation
    }
}
