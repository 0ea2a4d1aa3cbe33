use leptos::prelude::*;

use crate::frontend::components::{ButtonSize, Eyebrow, NavigateButton, Reveal};
use crate::models::PageId;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

static SERVICES: [Service; 6] = [
    Service {
        icon: "🧠",
        title: "AI Diagnostics",
        description: "Advanced machine learning algorithms analyze your symptoms and health data to provide instant, accurate preliminary diagnostics.",
        features: ["Real-time analysis", "Pattern recognition", "Predictive insights", "Symptom tracking"],
    },
    Service {
        icon: "📈",
        title: "Virtual Consultations",
        description: "Connect with certified healthcare professionals instantly through our HIPAA-compliant video platform.",
        features: ["24/7 availability", "Instant prescriptions", "Follow-up care", "Specialist access"],
    },
    Service {
        icon: "♥",
        title: "Wellness Programs",
        description: "Personalized health programs designed by experts to help you achieve your wellness goals sustainably.",
        features: ["Custom nutrition plans", "Fitness tracking", "Mental wellness", "Progress monitoring"],
    },
    Service {
        icon: "📱",
        title: "Health Monitoring",
        description: "Continuous health tracking through wearable integration and smart health devices with real-time alerts.",
        features: ["Vital signs tracking", "Anomaly detection", "Smart alerts", "Data visualization"],
    },
    Service {
        icon: "🛡",
        title: "Preventive Care",
        description: "Proactive health screening and risk assessment to catch potential issues before they become serious.",
        features: ["Risk profiling", "Early detection", "Vaccination tracking", "Genetic analysis"],
    },
    Service {
        icon: "⚡",
        title: "Emergency Response",
        description: "Rapid emergency triage and connection to local emergency services with your complete medical history.",
        features: ["Instant triage", "Location services", "Emergency contacts", "Medical records"],
    },
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "01",
        "Create Your Profile",
        "Sign up in minutes and complete your comprehensive health profile with our intuitive onboarding process.",
    ),
    (
        "02",
        "Get Matched",
        "Our AI matches you with the right healthcare professionals and creates personalized care plans.",
    ),
    (
        "03",
        "Access Care",
        "Connect instantly with doctors, track your health metrics, and get the care you need, anytime.",
    ),
];

#[component]
fn ServiceCard(service: &'static Service, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms class="group relative p-8 bg-white/5 backdrop-blur-sm border border-white/10 hover:border-[#00ff88]/50 transition-all duration-500">
            <div class="absolute inset-0 bg-gradient-to-br from-[#00ff88]/0 to-[#00ff88]/0 group-hover:from-[#00ff88]/10 group-hover:to-transparent transition-all duration-500"></div>
            <div class="relative z-10">
                <div class="w-16 h-16 mb-6 bg-[#00ff88]/10 flex items-center justify-center group-hover:bg-[#00ff88]/20 transition-all duration-500">
                    <span class="text-3xl group-hover:scale-110 transition-transform duration-500">{service.icon}</span>
                </div>
                <h3 class="text-2xl font-space font-medium text-white mb-4 group-hover:text-[#00ff88] transition-colors duration-500">
                    {service.title}
                </h3>
                <p class="text-white/60 leading-relaxed mb-6">{service.description}</p>
                <ul class="space-y-2">
                    {service
                        .features
                        .map(|feature| view! {
                            <li class="flex items-center gap-2 text-sm text-white/40">
                                <div class="w-1 h-1 bg-[#00ff88] rounded-full"></div>
                                <span>{feature}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ServicesPage(on_navigate: Callback<PageId>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black noise pt-24">
            <section class="relative min-h-[70vh] flex items-center justify-center overflow-hidden py-20">
                <div class="absolute inset-0 grid-background opacity-50"></div>
                <div class="absolute top-0 right-0 w-[600px] h-[600px] bg-[#00ff88] rounded-full blur-[200px] opacity-10"></div>

                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="max-w-5xl mx-auto text-center">
                        <Eyebrow text="SERVICES & SOLUTIONS" boxed=true/>
                        <h1 class="text-6xl md:text-7xl lg:text-8xl font-space font-bold tracking-tighter mb-8">
                            <span class="block gradient-text-alt">"COMPREHENSIVE"</span>
                            <span class="block text-white">"DIGITAL HEALTH"</span>
                        </h1>
                        <p class="text-xl text-white/60 max-w-3xl mx-auto leading-relaxed">
                            "From AI-powered diagnostics to 24/7 virtual care, our platform delivers "
                            "everything you need for optimal health in one seamless experience"
                        </p>
                    </Reveal>
                </div>
            </section>

            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                        {SERVICES
                            .iter()
                            .enumerate()
                            .map(|(index, service)| {
                                let delay_ms = index as u32 * 100;
                                view! { <ServiceCard service=service delay_ms=delay_ms/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // How it works
            <section class="py-32 relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#00ff88]/5 to-transparent"></div>
                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="text-center mb-20">
                        <Eyebrow text="HOW IT WORKS"/>
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-6">
                            "Seamless Healthcare in 3 Steps"
                        </h2>
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-12 max-w-6xl mx-auto">
                        {STEPS
                            .into_iter()
                            .enumerate()
                            .map(|(index, (step, title, description))| {
                                let delay_ms = index as u32 * 200;
                                let connector = (index + 1 < STEPS.len()).then(|| view! {
                                    <div class="hidden md:block absolute top-12 left-full w-full h-px bg-gradient-to-r from-[#00ff88]/50 to-transparent"></div>
                                });
                                view! {
                                    <Reveal delay_ms=delay_ms class="relative">
                                        <div class="text-8xl font-space font-bold text-white/5 mb-6">{step}</div>
                                        <h3 class="text-2xl font-space font-medium text-white mb-4">{title}</h3>
                                        <p class="text-white/60 leading-relaxed">{description}</p>
                                        {connector}
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="relative max-w-6xl mx-auto">
                        <div class="aspect-video bg-gradient-to-br from-[#00ff88]/20 to-transparent border border-white/10 overflow-hidden">
                            <img
                                src="https://images.unsplash.com/photo-1758691461932-d0aa0ebf6b31?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                                alt="Telemedicine Virtual Consultations"
                                class="w-full h-full object-cover opacity-80"
                            />
                        </div>
                        <div class="mt-12 max-w-3xl">
                            <h3 class="text-4xl font-space font-bold text-white mb-6">"Technology That Works For You"</h3>
                            <p class="text-xl text-white/60 leading-relaxed">
                                "Our platform seamlessly integrates with your life, providing intelligent "
                                "health insights when you need them most. Experience healthcare that adapts "
                                "to you, not the other way around."
                            </p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="py-32 relative overflow-hidden">
                <div class="absolute inset-0">
                    <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-[#00ff88] rounded-full blur-[200px] opacity-10"></div>
                </div>
                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="text-center max-w-4xl mx-auto">
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-8">
                            "Ready to Experience the Future?"
                        </h2>
                        <p class="text-xl text-white/60 mb-12 leading-relaxed">
                            "Join thousands of users who trust Healsphere for their healthcare needs"
                        </p>
                        <NavigateButton to=PageId::Contact on_navigate=on_navigate size=ButtonSize::Large>
                            "START YOUR JOURNEY"
                        </NavigateButton>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
