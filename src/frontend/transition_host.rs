use leptos::prelude::*;

use crate::frontend::pages::render_page;
use crate::models::PageId;
use crate::navigation::{Animation, TransitionHost, TransitionTimings};

/// Renders the selected page and animates swaps between pages.
///
/// The state machine lives in [`TransitionHost`]; this component only starts
/// the timers it asks for and feeds their tickets back. A new navigation
/// clears whatever timer is pending, so only the newest animation ever reports.
#[component]
pub fn PageTransitionHost(
    #[prop(into)] page: Signal<PageId>,
    on_navigate: Callback<PageId>,
    #[prop(optional)] timings: Option<TransitionTimings>,
) -> impl IntoView {
    let host = RwSignal::new(TransitionHost::new(
        page.get_untracked(),
        timings.unwrap_or_default(),
    ));
    let timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |prev: Option<PageId>| {
        let target = page.get();
        let animation = match prev {
            None => host.with_untracked(TransitionHost::in_flight),
            Some(_) => host.try_update(|h| h.request(target)).flatten(),
        };
        if let Some(animation) = animation {
            schedule(host, timer, animation);
        }
        target
    });

    let displayed = Memo::new(move |_| host.with(|h| h.displayed().page));
    let phase_class = move || host.with(|h| h.displayed().phase.css_class());
    let style = {
        let t = host.with_untracked(TransitionHost::timings);
        format!(
            "--page-enter-ms: {}ms; --page-exit-ms: {}ms;",
            t.enter.as_millis(),
            t.exit.as_millis()
        )
    };

    view! {
        {move || {
            let page = displayed.get();
            view! {
                <div
                    class=move || format!("page-transition {}", phase_class())
                    style=style.clone()
                    data-page=page.as_str()
                >
                    {render_page(page, on_navigate)}
                </div>
            }
        }}
    }
}

fn schedule(
    host: RwSignal<TransitionHost>,
    timer: StoredValue<Option<TimeoutHandle>>,
    animation: Animation,
) {
    timer.update_value(|pending| {
        if let Some(previous) = pending.take() {
            previous.clear();
        }
    });

    let handle = set_timeout_with_handle(
        move || {
            timer.set_value(None);
            if let Some(next) = host.try_update(|h| h.complete(animation.ticket)).flatten() {
                schedule(host, timer, next);
            }
        },
        animation.duration,
    );

    match handle {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(err) => {
            // Without a timer the page would stay mid-animation; settle it now.
            log::error!("Failed to schedule page transition: {:?}", err);
            let mut next = host.try_update(|h| h.complete(animation.ticket)).flatten();
            while let Some(animation) = next {
                next = host.try_update(|h| h.complete(animation.ticket)).flatten();
            }
        }
    }
}
