use leptos::ev;
use leptos::prelude::*;

use crate::models::{CursorState, INTERACTIVE_SELECTOR};

/// Pointer-following dot and ring, desktop only.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let state = RwSignal::new(CursorState::default());

    let move_listener = window_event_listener(ev::mousemove, move |ev| {
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        state.update(|s| s.move_to(x, y));
    });

    let hover_listener = window_event_listener(ev::mouseover, move |ev| {
        let target: web_sys::Element = event_target(&ev);
        let hovering = target
            .closest(INTERACTIVE_SELECTOR)
            .ok()
            .flatten()
            .is_some();
        state.update(|s| s.set_hovering(hovering));
    });

    on_cleanup(move || {
        move_listener.remove();
        hover_listener.remove();
    });

    view! {
        <div
            class="cursor-follower hidden lg:block"
            style=move || state.with(|s| s.follower().to_css())
        ></div>
        <div
            class="cursor hidden lg:block"
            style=move || state.with(|s| s.dot().to_css())
        ></div>
    }
}
