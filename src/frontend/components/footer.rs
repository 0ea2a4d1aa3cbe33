use chrono::Datelike;
use leptos::prelude::*;

use super::Reveal;
use crate::frontend::viewport::BrowserViewport;
use crate::models::brand::{
    mailto, OFFICE_ADDRESS, SUPPORT_EMAIL, SUPPORT_PHONE, SUPPORT_PHONE_HREF,
};
use crate::models::{newsletter, PageId};
use crate::navigation::{ScrollMode, Viewport};

const SERVICE_NAMES: [&str; 6] = [
    "AI Diagnostics",
    "Virtual Consultations",
    "Wellness Programs",
    "Health Monitoring",
    "Preventive Care",
    "Emergency Response",
];

const LEGAL_LINKS: [&str; 4] = [
    "Privacy Policy",
    "Terms of Service",
    "HIPAA Compliance",
    "Accessibility",
];

const SOCIALS: [&str; 3] = ["Twitter", "LinkedIn", "Instagram"];

#[component]
pub fn Footer(on_navigate: Callback<PageId>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(None::<&'static str>);

    let go = move |page: PageId| {
        on_navigate.run(page);
        BrowserViewport.scroll_to_top(ScrollMode::Smooth);
    };

    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative bg-black border-t border-white/10">
            <div class="absolute inset-0 grid-background opacity-30"></div>

            <div class="container mx-auto px-6 lg:px-12 py-20 relative z-10">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
                    <div>
                        <div class="flex items-center gap-3 mb-6">
                            <div class="w-2 h-2 bg-[#00ff88] rounded-full"></div>
                            <span class="text-2xl font-space font-medium tracking-tight text-white">"HEALSPHERE"</span>
                        </div>
                        <p class="text-white/60 leading-relaxed mb-6">
                            "Revolutionizing healthcare through cutting-edge technology and compassionate care."
                        </p>
                        <div class="flex items-center gap-2">
                            <div class="w-1 h-1 bg-[#00ff88] rounded-full"></div>
                            <span class="text-sm text-white/40">"Next-gen healthcare platform"</span>
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-medium tracking-wider mb-6">"NAVIGATION"</h4>
                        <ul class="space-y-3">
                            {PageId::ALL
                                .into_iter()
                                .map(|page| view! {
                                    <li>
                                        <button
                                            type="button"
                                            on:click=move |_| go(page)
                                            class="group text-white/60 hover:text-[#00ff88] transition-colors duration-300 flex items-center gap-2"
                                        >
                                            <span>{page.label()}</span>
                                            <span class="text-xs opacity-0 -translate-x-2 group-hover:opacity-100 group-hover:translate-x-0 transition-all duration-300">
                                                "→"
                                            </span>
                                        </button>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-medium tracking-wider mb-6">"SERVICES"</h4>
                        <ul class="space-y-3 text-white/60">
                            {SERVICE_NAMES.map(|name| view! { <li>{name}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-medium tracking-wider mb-6">"CONTACT"</h4>
                        <ul class="space-y-4 text-sm">
                            <li class="flex items-start gap-3">
                                <span class="text-[#00ff88]">"✉"</span>
                                <a href=mailto(SUPPORT_EMAIL) class="text-white/60 hover:text-[#00ff88] transition-colors duration-300">
                                    {SUPPORT_EMAIL}
                                </a>
                            </li>
                            <li class="flex items-start gap-3">
                                <span class="text-[#00ff88]">"☎"</span>
                                <a href=SUPPORT_PHONE_HREF class="text-white/60 hover:text-[#00ff88] transition-colors duration-300">
                                    {SUPPORT_PHONE}
                                </a>
                            </li>
                            <li class="flex items-start gap-3">
                                <span class="text-[#00ff88]">"⌖"</span>
                                <span class="text-white/60">{OFFICE_ADDRESS}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                // Newsletter
                <Reveal class="py-12 border-y border-white/10 mb-12">
                    <div class="max-w-2xl">
                        <h3 class="text-2xl font-space font-medium text-white mb-4">"Stay Updated"</h3>
                        <p class="text-white/60 mb-6">
                            "Get the latest healthcare insights and platform updates delivered to your inbox"
                        </p>
                        <form
                            class="flex gap-4"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                set_subscribed.set(Some(newsletter::subscribe(&email.get_untracked())));
                            }
                        >
                            <input
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                class="flex-1 px-6 py-4 bg-white/5 border border-white/10 text-white placeholder:text-white/40 focus:outline-none focus:border-[#00ff88] transition-colors duration-300"
                            />
                            <button
                                type="submit"
                                class="px-8 py-4 bg-[#00ff88] text-black font-medium tracking-wider hover:bg-white transition-colors duration-300"
                            >
                                "SUBSCRIBE"
                            </button>
                        </form>
                        {move || subscribed.get().map(|message| view! {
                            <p role="status" class="mt-4 text-sm text-[#00ff88]">{message}</p>
                        })}
                    </div>
                </Reveal>

                <div class="flex flex-col md:flex-row justify-between items-center gap-6 text-sm">
                    <div class="text-white/40">{format!("© {year} Healsphere. All rights reserved.")}</div>

                    <div class="flex flex-wrap justify-center gap-8 text-white/40">
                        {LEGAL_LINKS
                            .map(|label| view! {
                                <a href="#" class="hover:text-[#00ff88] transition-colors duration-300">{label}</a>
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-4">
                        {SOCIALS
                            .map(|social| view! {
                                <a
                                    href="#"
                                    aria-label=social
                                    class="w-10 h-10 bg-white/5 border border-white/10 flex items-center justify-center hover:border-[#00ff88] hover:bg-[#00ff88]/10 transition-all duration-300"
                                >
                                    <span class="text-xs text-white/60">{&social[..1]}</span>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
