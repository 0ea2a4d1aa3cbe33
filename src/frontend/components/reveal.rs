use leptos::html;
use leptos::prelude::*;

use crate::frontend::viewport::{watch_viewport_entry, ViewportWatch};
pub use crate::models::RevealFrom;
use crate::models::{reveal_classes, RevealLatch};

/// Wraps content in an entrance animation that plays the first time it
/// scrolls into view, optionally staggered.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let latch = RwSignal::new(RevealLatch::default());
    // Owned here so the observer is disconnected when the page unmounts.
    let watch = StoredValue::new_local(None::<ViewportWatch>);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if latch.with_untracked(RevealLatch::is_visible) {
            return;
        }

        let observed = watch_viewport_entry(&el, move |intersecting| {
            let mut revealed = false;
            latch.update(|l| revealed = l.observe(intersecting));
            revealed
        });

        match observed {
            Ok(entry) => watch.set_value(Some(entry)),
            Err(err) => {
                log::error!("viewport observer unavailable, showing content: {:?}", err);
                latch.update(RevealLatch::force);
            }
        }
    });

    view! {
        <div
            node_ref=node
            class=move || reveal_classes(from, &class, latch.get())
            style=format!("animation-delay: {}ms;", delay_ms)
        >
            {children()}
        </div>
    }
}

/// Small pill label above hero headings.
#[component]
pub fn Eyebrow(text: &'static str, #[prop(optional)] boxed: bool) -> impl IntoView {
    let classes = if boxed {
        "inline-block px-4 py-2 bg-white/5 backdrop-blur-sm border border-white/10 text-[#00ff88] text-xs tracking-[0.3em] font-medium mb-8"
    } else {
        "text-[#00ff88] text-sm tracking-[0.3em] font-medium mb-6 block"
    };

    view! { <span class=classes>{text}</span> }
}
