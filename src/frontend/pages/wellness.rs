use leptos::prelude::*;

use crate::frontend::components::{
    ButtonSize, ButtonVariant, Eyebrow, NavigateButton, Reveal, RevealFrom, StatTile,
};
use crate::models::PageId;

struct Program {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    benefits: [&'static str; 4],
}

static PROGRAMS: [Program; 4] = [
    Program {
        icon: "🍏",
        title: "Nutrition Optimization",
        description: "AI-powered meal planning based on your metabolic profile, preferences, and health goals.",
        duration: "8 Weeks",
        benefits: ["Personalized meal plans", "Macro tracking", "Supplement guidance", "Progress analytics"],
    },
    Program {
        icon: "🏋",
        title: "Fitness Evolution",
        description: "Adaptive workout programs that evolve with your progress and adjust to your fitness level.",
        duration: "12 Weeks",
        benefits: ["Custom workouts", "Form analysis", "Performance tracking", "Recovery optimization"],
    },
    Program {
        icon: "☾",
        title: "Sleep Mastery",
        description: "Comprehensive sleep optimization using circadian science and behavioral interventions.",
        duration: "6 Weeks",
        benefits: ["Sleep tracking", "Environment optimization", "Habit formation", "Quality metrics"],
    },
    Program {
        icon: "🍃",
        title: "Stress Management",
        description: "Evidence-based techniques to manage stress and build resilience through mindfulness.",
        duration: "10 Weeks",
        benefits: ["Meditation guides", "Breathing exercises", "Cognitive tools", "Biometric feedback"],
    },
];

const SCIENCE_POINTS: [&str; 4] = [
    "Continuous biometric monitoring",
    "Real-time program adjustments",
    "Personalized recommendations",
    "Evidence-based protocols",
];

const RESULTS: [(&str, &str); 3] = [
    ("87%", "Achieved Goals"),
    ("12K+", "Active Members"),
    ("4.9/5", "Avg Rating"),
];

#[component]
fn ProgramCard(
    program: &'static Program,
    delay_ms: u32,
    on_navigate: Callback<PageId>,
) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms class="group relative p-10 bg-gradient-to-br from-white/5 to-transparent border border-white/10 hover:border-[#00ff88]/50 transition-all duration-500">
            <div class="absolute inset-0 bg-gradient-to-br from-[#00ff88]/0 to-[#00ff88]/0 group-hover:from-[#00ff88]/10 group-hover:to-transparent transition-all duration-500"></div>
            <div class="relative z-10">
                <div class="flex items-start justify-between mb-6">
                    <div class="w-16 h-16 bg-[#00ff88]/10 flex items-center justify-center group-hover:bg-[#00ff88]/20 transition-all duration-500">
                        <span class="text-3xl group-hover:scale-110 transition-transform duration-500">{program.icon}</span>
                    </div>
                    <span class="text-sm text-[#00ff88] tracking-wider">{program.duration}</span>
                </div>
                <h3 class="text-3xl font-space font-medium text-white mb-4 group-hover:text-[#00ff88] transition-colors duration-500">
                    {program.title}
                </h3>
                <p class="text-white/60 leading-relaxed mb-8">{program.description}</p>
                <div class="space-y-3">
                    {program
                        .benefits
                        .map(|benefit| view! {
                            <div class="flex items-center gap-3">
                                <div class="w-1.5 h-1.5 bg-[#00ff88] rounded-full"></div>
                                <span class="text-white/40">{benefit}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="mt-8">
                    <NavigateButton
                        to=PageId::Contact
                        on_navigate=on_navigate
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Small
                        full_width=true
                    >
                        "LEARN MORE"
                    </NavigateButton>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn WellnessPage(on_navigate: Callback<PageId>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black noise pt-24">
            <section class="relative min-h-[70vh] flex items-center justify-center overflow-hidden py-20">
                <div class="absolute inset-0 grid-background opacity-50"></div>
                <div class="absolute top-20 left-20 w-[600px] h-[600px] bg-[#00ff88] rounded-full blur-[200px] opacity-10 pulse-slow"></div>
                <div class="absolute bottom-20 right-20 w-[600px] h-[600px] bg-[#00ccff] rounded-full blur-[200px] opacity-10 pulse-slow"></div>

                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="max-w-5xl mx-auto text-center">
                        <Eyebrow text="WELLNESS PROGRAMS" boxed=true/>
                        <h1 class="text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-space font-bold tracking-tighter mb-8">
                            <span class="block text-white">"OPTIMIZE"</span>
                            <span class="block gradient-text-alt">"EVERY ASPECT"</span>
                            <span class="block text-white">"OF LIFE"</span>
                        </h1>
                        <p class="text-xl text-white/60 max-w-3xl mx-auto leading-relaxed">
                            "Science-backed wellness programs designed to transform your health from the inside out"
                        </p>
                    </Reveal>
                </div>

                <div class="absolute bottom-12 left-1/2 -translate-x-1/2 fade-in-late">
                    <div class="flex flex-col items-center gap-2 bob">
                        <div class="w-px h-12 bg-gradient-to-b from-white/40 to-transparent"></div>
                    </div>
                </div>
            </section>

            // Programs
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="text-center mb-20">
                        <Eyebrow text="FEATURED PROGRAMS"/>
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-6">
                            "Personalized Wellness Journeys"
                        </h2>
                        <p class="text-xl text-white/60 max-w-3xl mx-auto">
                            "Each program adapts to your unique biology, lifestyle, and goals"
                        </p>
                    </Reveal>

                    <div class="grid md:grid-cols-2 gap-8 max-w-6xl mx-auto">
                        {PROGRAMS
                            .iter()
                            .enumerate()
                            .map(|(index, program)| {
                                let delay_ms = index as u32 * 100;
                                view! { <ProgramCard program=program delay_ms=delay_ms on_navigate=on_navigate/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Science
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <div class="grid lg:grid-cols-2 gap-16 items-center max-w-7xl mx-auto">
                        <Reveal from=RevealFrom::Left>
                            <div class="relative aspect-square bg-gradient-to-br from-[#00ff88]/20 to-transparent border border-white/10 overflow-hidden">
                                <img
                                    src="https://images.unsplash.com/photo-1635545999375-057ee4013deb?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                                    alt="Wellness and Meditation"
                                    class="w-full h-full object-cover opacity-80"
                                />
                            </div>
                        </Reveal>

                        <Reveal from=RevealFrom::Right>
                            <Eyebrow text="THE SCIENCE"/>
                            <h2 class="text-4xl md:text-5xl lg:text-6xl font-space font-bold tracking-tighter mb-8 text-white">
                                "Data-Driven Wellness"
                            </h2>
                            <p class="text-lg text-white/60 leading-relaxed mb-6">
                                "Every program is built on the latest scientific research and personalized "
                                "using your biometric data, genetic markers, and lifestyle factors."
                            </p>
                            <p class="text-lg text-white/60 leading-relaxed mb-8">
                                "Our AI continuously analyzes your progress and adjusts your program in "
                                "real-time to ensure optimal results."
                            </p>
                            <div class="space-y-4">
                                {SCIENCE_POINTS
                                    .map(|point| view! {
                                        <div class="flex items-center gap-4">
                                            <div class="w-2 h-2 bg-[#00ff88] rounded-full"></div>
                                            <span class="text-white/80">{point}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Results
            <section class="py-32 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#00ff88]/5 to-transparent"></div>
                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="text-center max-w-4xl mx-auto mb-16">
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter gradient-text mb-8">
                            "Real Results, Real People"
                        </h2>
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto text-center">
                        {RESULTS
                            .into_iter()
                            .enumerate()
                            .map(|(index, (value, label))| {
                                let delay_ms = index as u32 * 100;
                                view! { <StatTile value=value label=label delay_ms=delay_ms/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="text-center max-w-4xl mx-auto">
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-8">
                            "Start Your Transformation"
                        </h2>
                        <p class="text-xl text-white/60 mb-12 leading-relaxed">
                            "Take the first step towards optimal health with a personalized wellness assessment"
                        </p>
                        <NavigateButton to=PageId::Contact on_navigate=on_navigate size=ButtonSize::Large>
                            "BEGIN ASSESSMENT"
                        </NavigateButton>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
