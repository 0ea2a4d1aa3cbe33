use js_sys::Array;
use leptos::prelude::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::models::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::navigation::{ScrollMode, Viewport};

/// The browser window. Only touch it from effects and event handlers; there is
/// no window while rendering on the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_to_top(&self, mode: ScrollMode) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(match mode {
            ScrollMode::Instant => ScrollBehavior::Instant,
            ScrollMode::Smooth => ScrollBehavior::Smooth,
        });
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// A live viewport observation. Dropping it disconnects the observer.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports whether `target` intersects the viewport each time that changes.
/// The observer disconnects itself as soon as `on_change` returns true.
pub fn watch_viewport_entry(
    target: &Element,
    mut on_change: impl FnMut(bool) -> bool + 'static,
) -> Result<ViewportWatch, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if on_change(entry.is_intersecting()) {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    Ok(ViewportWatch {
        observer,
        _callback: callback,
    })
}
