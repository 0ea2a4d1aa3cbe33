use std::cell::{Cell, RefCell};

use healsphere::models::*;
use healsphere::navigation::*;

/// In-memory stand-in for the browser window. Records every scroll reset.
#[derive(Debug, Default)]
pub struct FakeViewport {
    scroll_y: Cell<f64>,
    resets: RefCell<Vec<ScrollMode>>,
}

impl FakeViewport {
    pub fn scrolled_to(y: f64) -> Self {
        let viewport = Self::default();
        viewport.scroll_by(y);
        viewport
    }

    pub fn scroll_by(&self, dy: f64) {
        self.scroll_y.set(self.scroll_y.get() + dy);
    }

    pub fn resets(&self) -> Vec<ScrollMode> {
        self.resets.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self, mode: ScrollMode) {
        self.scroll_y.set(0.0);
        self.resets.borrow_mut().push(mode);
    }
}

pub fn get_router_scrolled(y: f64) -> Router<FakeViewport> {
    Router::new(FakeViewport::scrolled_to(y))
}

pub fn get_settled_host(page: PageId) -> TransitionHost {
    let mut host = TransitionHost::new(page, TransitionTimings::default());
    let initial = host.in_flight();
    settle(&mut host, initial);
    host
}

/// Fires every timer the host asks for, in order, until it stops asking.
pub fn settle(host: &mut TransitionHost, mut next: Option<Animation>) -> Vec<Animation> {
    let mut fired = Vec::new();
    while let Some(animation) = next {
        fired.push(animation);
        next = host.complete(animation.ticket);
    }
    fired
}

pub fn get_filled_form() -> ContactForm {
    ContactForm {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        subject: "".to_string(),
        message: "hi".to_string(),
    }
}
