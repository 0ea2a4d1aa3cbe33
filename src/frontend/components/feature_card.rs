use leptos::prelude::*;

use super::Reveal;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms class="group relative p-8 bg-white/5 backdrop-blur-sm border border-white/10
                    hover:border-[#00ff88]/50 transition-all duration-500">
            <div class="absolute inset-0 bg-gradient-to-br from-[#00ff88]/0 to-[#00ff88]/0
                        group-hover:from-[#00ff88]/5 group-hover:to-transparent transition-all duration-500"></div>
            <div class="relative z-10">
                <span class="text-5xl mb-6 block text-[#00ff88] group-hover:scale-110 transition-transform duration-500">
                    {icon}
                </span>
                <h3 class="text-2xl font-space font-medium mb-4 text-white">{title}</h3>
                <p class="text-white/60 leading-relaxed">{desc}</p>
            </div>
        </Reveal>
    }
}

/// Big-number tile used by the about and wellness stats rows.
#[component]
pub fn StatTile(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms class="group relative p-8 bg-white/5 backdrop-blur-sm border border-white/10
                    hover:border-[#00ff88]/50 transition-all duration-500">
            {icon.map(|icon| view! {
                <span class="text-3xl text-[#00ff88] mb-6 block group-hover:scale-110 transition-transform duration-500">
                    {icon}
                </span>
            })}
            <div class="text-5xl font-space font-bold gradient-text-alt mb-2">{value}</div>
            <div class="text-white/60 tracking-wider">{label}</div>
        </Reveal>
    }
}
