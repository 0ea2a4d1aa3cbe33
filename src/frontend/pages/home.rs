use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::frontend::components::{
    Arrow, ButtonSize, ButtonVariant, Eyebrow, FeatureCard, NavigateButton, Reveal, RevealFrom,
};
use crate::frontend::viewport::BrowserViewport;
use crate::models::{hero_parallax, HeroParallax, PageId};
use crate::navigation::Viewport;

const HERO_STATS: [(&str, &str); 3] = [
    ("10K+", "Active Users"),
    ("98%", "Satisfaction"),
    ("24/7", "Support"),
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "⚡",
        "Lightning Fast",
        "Instant access to healthcare services with real-time consultations and AI-powered diagnostics",
    ),
    (
        "🛡",
        "Secure & Private",
        "Enterprise-grade security with end-to-end encryption protecting your sensitive health data",
    ),
    (
        "♥",
        "Patient-Centric",
        "Personalized care plans tailored to your unique health profile and wellness goals",
    ),
    (
        "✦",
        "AI-Powered",
        "Machine learning algorithms that predict, prevent, and optimize your health outcomes",
    ),
];

#[component]
pub fn HomePage(on_navigate: Callback<PageId>) -> impl IntoView {
    let hero = NodeRef::<html::Section>::new();
    let parallax = RwSignal::new(hero_parallax(0.0, 1.0));

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if let Some(section) = hero.get_untracked() {
            let height = f64::from(section.offset_height());
            parallax.set(hero_parallax(BrowserViewport.scroll_y(), height));
        }
    });
    on_cleanup(move || scroll_listener.remove());

    let background_style =
        move || parallax.with(|p: &HeroParallax| format!("transform: translateY({}%);", p.offset_percent));
    let content_style = move || parallax.with(|p: &HeroParallax| format!("opacity: {};", p.opacity));

    view! {
        <div class="min-h-screen bg-black noise">
            // Hero
            <section node_ref=hero class="relative min-h-screen flex items-center justify-center overflow-hidden pt-24">
                <div class="absolute inset-0 grid-background" style=background_style>
                    <div class="absolute inset-0 bg-gradient-to-b from-transparent via-black/50 to-black"></div>
                </div>

                <div class="absolute inset-0 fade-in-soft">
                    <div class="absolute top-20 left-20 w-64 h-64 bg-[#00ff88] rounded-full blur-[120px] opacity-20"></div>
                    <div class="absolute bottom-40 right-20 w-96 h-96 bg-[#00ccff] rounded-full blur-[120px] opacity-20"></div>
                </div>

                <div class="relative z-10 container mx-auto px-6 lg:px-12 text-center py-20" style=content_style>
                    <Reveal class="mb-8">
                        <span class="inline-block px-6 py-3 bg-white/5 backdrop-blur-sm border border-white/10 text-[#00ff88] text-xs tracking-[0.3em] font-medium">
                            "NEXT-GEN HEALTHCARE"
                        </span>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <h1 class="text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-space font-bold tracking-tighter mb-10 leading-[0.9]">
                            <span class="block gradient-text">"REDEFINING"</span>
                            <span class="block text-white">"WELLNESS"</span>
                        </h1>
                    </Reveal>

                    <Reveal delay_ms=400>
                        <p class="text-lg md:text-xl lg:text-2xl text-white/60 max-w-4xl mx-auto mb-16 leading-relaxed">
                            "Experience the future of healthcare through our revolutionary platform "
                            "that integrates cutting-edge technology with human-centered care"
                        </p>
                    </Reveal>

                    <Reveal delay_ms=600 class="flex flex-col sm:flex-row items-center justify-center gap-6">
                        <NavigateButton to=PageId::Services on_navigate=on_navigate>
                            "EXPLORE PLATFORM"
                            <Arrow/>
                        </NavigateButton>
                        <NavigateButton to=PageId::Contact on_navigate=on_navigate variant=ButtonVariant::Outline>
                            "BOOK CONSULTATION"
                        </NavigateButton>
                    </Reveal>

                    <Reveal delay_ms=800 class="mt-24 grid grid-cols-3 gap-8 max-w-3xl mx-auto">
                        {HERO_STATS
                            .map(|(value, label)| view! {
                                <div class="text-center">
                                    <div class="text-3xl lg:text-4xl font-bold text-white mb-2">{value}</div>
                                    <div class="text-sm text-white/40 tracking-wider">{label}</div>
                                </div>
                            })
                            .collect_view()}
                    </Reveal>
                </div>

                <div class="absolute bottom-12 left-1/2 -translate-x-1/2 fade-in-late">
                    <div class="flex flex-col items-center gap-2 bob">
                        <span class="text-xs text-white/40 tracking-widest">"SCROLL"</span>
                        <div class="w-px h-12 bg-gradient-to-b from-white/40 to-transparent"></div>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-32 relative overflow-hidden">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="text-center mb-20">
                        <Eyebrow text="WHY CHOOSE US"/>
                        <h2 class="text-5xl md:text-6xl lg:text-7xl font-space font-bold tracking-tighter mb-6">
                            <span class="gradient-text-alt">"Built Different"</span>
                        </h2>
                        <p class="text-xl text-white/60 max-w-2xl mx-auto">
                            "Advanced technology meets compassionate care in our revolutionary healthcare ecosystem"
                        </p>
                    </Reveal>

                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES
                            .into_iter()
                            .enumerate()
                            .map(|(index, (icon, title, desc))| {
                                let delay_ms = index as u32 * 100;
                                view! { <FeatureCard icon=icon title=title desc=desc delay_ms=delay_ms/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Large image
            <section class="relative h-screen overflow-hidden">
                <Reveal from=RevealFrom::Zoom class="absolute inset-0">
                    <img
                        src="https://images.unsplash.com/photo-1758691462749-a95ce1bd7f96?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                        alt="Healthcare Professional Consultation"
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent"></div>
                </Reveal>

                <div class="relative z-10 container mx-auto px-6 lg:px-12 h-full flex items-end pb-20">
                    <Reveal delay_ms=300 class="max-w-3xl">
                        <h2 class="text-5xl md:text-6xl lg:text-7xl font-space font-bold tracking-tighter mb-6 text-white">
                            "Technology Meets Humanity"
                        </h2>
                        <p class="text-xl text-white/80 leading-relaxed">
                            "We've reimagined healthcare from the ground up, creating an experience "
                            "that's as intuitive as it is powerful."
                        </p>
                    </Reveal>
                </div>
            </section>

            // CTA
            <section class="py-40 relative overflow-hidden">
                <div class="absolute inset-0">
                    <div class="absolute top-0 left-1/4 w-96 h-96 bg-[#00ff88] rounded-full blur-[150px] opacity-10"></div>
                    <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-[#00ccff] rounded-full blur-[150px] opacity-10"></div>
                </div>

                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="text-center">
                        <h2 class="text-5xl md:text-6xl lg:text-7xl font-space font-bold tracking-tighter mb-8">
                            <span class="gradient-text">"Ready to Transform"</span>
                            <br/>
                            <span class="text-white">"Your Health Journey?"</span>
                        </h2>
                        <p class="text-xl text-white/60 max-w-2xl mx-auto mb-12">
                            "Join thousands of users who have already discovered a better way to manage their health"
                        </p>
                        <NavigateButton to=PageId::Contact on_navigate=on_navigate size=ButtonSize::Large>
                            "GET STARTED NOW"
                            <Arrow/>
                        </NavigateButton>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
