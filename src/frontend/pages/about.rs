use leptos::prelude::*;

use crate::frontend::components::{Eyebrow, Reveal, RevealFrom, StatTile};

const IMPACT: [(&str, &str, &str); 4] = [
    ("10,000+", "Active Users", "👥"),
    ("98%", "Satisfaction Rate", "🏅"),
    ("50+", "Healthcare Professionals", "◎"),
    ("2.5M+", "Consultations Completed", "↗"),
];

const VALUES: [(&str, &str); 3] = [
    (
        "Innovation First",
        "We constantly push boundaries, exploring new technologies and methodologies to deliver breakthrough healthcare solutions.",
    ),
    (
        "Patient-Centric",
        "Every decision we make starts with one question: How does this improve the patient experience and outcomes?",
    ),
    (
        "Data Privacy",
        "Your health data is sacred. We employ military-grade encryption and never compromise on security or privacy.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black noise pt-24">
            <section class="relative min-h-[70vh] flex items-center justify-center overflow-hidden py-20">
                <div class="absolute inset-0 grid-background opacity-50"></div>
                <div class="absolute top-20 right-20 w-96 h-96 bg-[#00ff88] rounded-full blur-[150px] opacity-10"></div>
                <div class="absolute bottom-20 left-20 w-96 h-96 bg-[#00ccff] rounded-full blur-[150px] opacity-10"></div>

                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="max-w-6xl mx-auto">
                        <Eyebrow text="ABOUT HEALSPHERE" boxed=true/>
                        <h1 class="text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-space font-bold tracking-tighter mb-12">
                            <span class="block text-white">"WE'RE"</span>
                            <span class="block gradient-text">"REVOLUTIONIZING"</span>
                            <span class="block text-white">"HEALTHCARE"</span>
                        </h1>
                        <p class="text-xl md:text-2xl text-white/60 max-w-3xl leading-relaxed">
                            "Born from a vision to make healthcare accessible, intelligent, and human-centric, "
                            "Healsphere combines cutting-edge technology with deep medical expertise to create "
                            "the future of wellness."
                        </p>
                    </Reveal>
                </div>
            </section>

            // Mission
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <div class="grid lg:grid-cols-2 gap-20 items-center max-w-7xl mx-auto">
                        <Reveal from=RevealFrom::Left>
                            <Eyebrow text="OUR MISSION"/>
                            <h2 class="text-4xl md:text-5xl lg:text-6xl font-space font-bold tracking-tighter mb-8 text-white">
                                "Empowering Health Through Innovation"
                            </h2>
                            <p class="text-lg text-white/60 leading-relaxed mb-6">
                                "We believe healthcare should be proactive, not reactive. Our platform leverages "
                                "artificial intelligence, predictive analytics, and real-time data to help you "
                                "stay ahead of health issues before they become problems."
                            </p>
                            <p class="text-lg text-white/60 leading-relaxed">
                                "By combining world-class medical professionals with state-of-the-art technology, "
                                "we're creating a healthcare experience that's both deeply personal and incredibly powerful."
                            </p>
                        </Reveal>

                        <Reveal from=RevealFrom::Right class="relative">
                            <div class="aspect-square bg-gradient-to-br from-[#00ff88]/20 to-transparent border border-white/10 p-8 flex items-center justify-center">
                                <img
                                    src="https://images.unsplash.com/photo-1758691463203-cce9d415b2b5?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                                    alt="Medical Technology Innovation"
                                    class="w-full h-full object-cover opacity-80"
                                />
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Impact
            <section class="py-32 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#00ff88]/5 to-transparent"></div>
                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="text-center mb-20">
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter gradient-text-alt mb-6">
                            "Impact in Numbers"
                        </h2>
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                        {IMPACT
                            .into_iter()
                            .enumerate()
                            .map(|(index, (value, label, icon))| {
                                let delay_ms = index as u32 * 100;
                                view! { <StatTile value=value label=label icon=icon delay_ms=delay_ms/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Values
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="text-center mb-20">
                        <Eyebrow text="CORE VALUES"/>
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-6">
                            "What Drives Us Forward"
                        </h2>
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        {VALUES
                            .into_iter()
                            .enumerate()
                            .map(|(index, (title, description))| {
                                let delay_ms = index as u32 * 100;
                                view! {
                                    <Reveal delay_ms=delay_ms class="relative p-10 bg-gradient-to-br from-white/5 to-transparent border border-white/10 group hover:border-[#00ff88]/50 transition-all duration-500">
                                        <div class="text-8xl font-space font-bold text-white/5 mb-4 group-hover:text-[#00ff88]/10 transition-colors duration-500">
                                            {format!("{:02}", index + 1)}
                                        </div>
                                        <h3 class="text-2xl font-space font-medium text-white mb-4">{title}</h3>
                                        <p class="text-white/60 leading-relaxed">{description}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Team
            <section class="py-32 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#00ff88]/5 to-transparent"></div>
                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="max-w-4xl mx-auto text-center">
                        <Eyebrow text="OUR TEAM"/>
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-8">
                            "Built by Experts, For Everyone"
                        </h2>
                        <p class="text-xl text-white/60 leading-relaxed mb-12">
                            "Our multidisciplinary team brings together medical professionals, technologists, "
                            "designers, and researchers, all united by a shared passion for transforming healthcare."
                        </p>
                        <div class="relative h-[500px] overflow-hidden">
                            <img
                                src="https://images.unsplash.com/photo-1615177393114-bd2917a4f74a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                                alt="Team"
                                class="w-full h-full object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black via-transparent to-transparent"></div>
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
