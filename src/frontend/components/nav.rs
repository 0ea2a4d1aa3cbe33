use leptos::ev;
use leptos::prelude::*;

use crate::frontend::viewport::BrowserViewport;
use crate::models::PageId;
use crate::navigation::{NavBarState, NavLink, Viewport, NAV_LINKS};

#[component]
pub fn Nav(
    #[prop(into)] current_page: Signal<PageId>,
    on_navigate: Callback<PageId>,
) -> impl IntoView {
    let state = RwSignal::new(NavBarState::default());

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let scroll_y = BrowserViewport.scroll_y();
        state.update(|s| s.on_scroll(scroll_y));
    });
    on_cleanup(move || scroll_listener.remove());

    let select = move |page: PageId| {
        state.update(|s| s.select(page, |p| on_navigate.run(p), &BrowserViewport));
    };

    let is_scrolled = move || state.with(|s| s.is_scrolled);
    let menu_open = move || state.with(|s| s.is_mobile_menu_open);

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link: &'static NavLink| {
            let active = move || link.is_active(current_page.get());
            view! {
                <button type="button" on:click=move |_| select(link.page) class="relative group">
                    <span class=move || {
                        if active() {
                            "text-sm font-space font-medium tracking-[0.15em] transition-colors duration-300 text-[#00ff88]"
                        } else {
                            "text-sm font-space font-medium tracking-[0.15em] transition-colors duration-300 text-white/70 hover:text-white"
                        }
                    }>
                        {link.label}
                    </span>
                    <Show when=active>
                        <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-[#00ff88] shadow-[0_0_10px_rgba(0,255,136,0.5)]"></div>
                    </Show>
                </button>
            }
        })
        .collect_view();

    let mobile_links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, link): (usize, &'static NavLink)| {
            let active = move || link.is_active(current_page.get());
            view! {
                <button
                    type="button"
                    on:click=move |_| select(link.page)
                    class="block w-full text-left enter-left"
                    style=format!("animation-delay: {}ms;", index * 100)
                >
                    <span class=move || {
                        if active() {
                            "text-4xl font-space font-medium tracking-tight transition-colors duration-300 text-[#00ff88]"
                        } else {
                            "text-4xl font-space font-medium tracking-tight transition-colors duration-300 text-white/60 hover:text-white"
                        }
                    }>
                        {link.label}
                    </span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "nav-enter fixed top-0 left-0 right-0 z-50 transition-all duration-500 {}",
                if is_scrolled() {
                    "bg-black/95 backdrop-blur-xl border-b border-white/10 shadow-2xl"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="container mx-auto px-6 lg:px-12">
                <div class="flex items-center justify-between h-24">
                    <button type="button" on:click=move |_| select(PageId::Home) class="group relative z-10 hover:scale-105 transition-transform">
                        <div class="flex items-center gap-3">
                            <div class="w-2.5 h-2.5 bg-[#00ff88] rounded-full group-hover:shadow-[0_0_20px_rgba(0,255,136,0.5)] transition-shadow duration-300"></div>
                            <span class="text-2xl font-space font-bold tracking-tight text-white">"HEALSPHERE"</span>
                        </div>
                    </button>

                    <div class="hidden lg:flex items-center gap-12">{desktop_links}</div>

                    <button
                        type="button"
                        on:click=move |_| select(PageId::Contact)
                        class="hidden lg:flex items-center gap-2 px-8 py-3.5 bg-[#00ff88] text-black font-semibold text-sm tracking-wider hover:bg-white transition-all duration-300 group"
                    >
                        <span>"GET STARTED"</span>
                        <span class="group-hover:translate-x-1 transition-transform duration-300">"→"</span>
                    </button>

                    <button
                        type="button"
                        on:click=move |_| state.update(NavBarState::toggle_menu)
                        class="lg:hidden w-10 h-10 flex items-center justify-center text-white relative z-10"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        <Show
                            when=menu_open
                            fallback=|| view! {
                                <svg class="w-6 h-6" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                                <path stroke-linecap="round" d="M6 6l12 12M18 6L6 18"/>
                            </svg>
                        </Show>
                    </button>
                </div>
            </div>

            <div class=move || {
                if menu_open() {
                    "lg:hidden fixed inset-0 bg-black z-0 pt-24 mobile-menu-open"
                } else {
                    "hidden"
                }
            }>
                <div class="container mx-auto px-6 h-full flex flex-col justify-center">
                    <div class="space-y-8">{mobile_links}</div>
                    <div class="mt-16 enter-up" style="animation-delay: 600ms;">
                        <button
                            type="button"
                            on:click=move |_| select(PageId::Contact)
                            class="w-full px-8 py-4 bg-[#00ff88] text-black font-medium text-sm tracking-wider"
                        >
                            "GET STARTED →"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
