use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;

use crate::frontend::components::{
    EmailInput, ErrorAlert, Eyebrow, Reveal, RevealFrom, SuccessAlert, TextArea, TextInput,
};
use crate::models::brand::{self, OFFICE_ADDRESS, SUPPORT_EMAIL, SUPPORT_PHONE, SUPPORT_PHONE_HREF};
use crate::models::{ContactForm, ContactNotice};

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM PST"),
    ("Saturday", "10:00 AM - 4:00 PM PST"),
    ("Sunday", "Closed"),
];

const FAQ: [(&str, &str); 3] = [
    (
        "How quickly can I get started?",
        "You can create an account and start using Healsphere in under 5 minutes.",
    ),
    (
        "Is my health data secure?",
        "Yes, we use enterprise-grade encryption and are fully HIPAA compliant.",
    ),
    (
        "Do you accept insurance?",
        "We work with most major insurance providers. Contact us for specific details.",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let notice = RwSignal::new(ContactNotice::Hidden);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };

        let outcome = form.submit();
        match &outcome {
            Ok(_) => {
                set_name.set(form.name);
                set_email.set(form.email);
                set_subject.set(form.subject);
                set_message.set(form.message);
            }
            Err(err) => {
                log::info!("contact form rejected, missing {:?}", err.missing_fields());
            }
        }
        notice.set(ContactNotice::from_submit(&outcome));
    };

    // Typing into any field bubbles up here and dismisses the last notice.
    let on_edit = move |_: Event| {
        notice.maybe_update(ContactNotice::dismiss);
    };

    let notice_view = move || match notice.get() {
        ContactNotice::Hidden => None,
        ContactNotice::Sent(text) => Some(view! { <SuccessAlert message=text/> }.into_any()),
        ContactNotice::Rejected(text) => Some(view! { <ErrorAlert message=text/> }.into_any()),
    };

    let contact_cards = [
        ("✉", "Email", SUPPORT_EMAIL, brand::mailto(SUPPORT_EMAIL)),
        ("☎", "Phone", SUPPORT_PHONE, SUPPORT_PHONE_HREF.to_string()),
        ("⌖", "Office", OFFICE_ADDRESS, "#".to_string()),
    ];

    view! {
        <div class="min-h-screen bg-black noise pt-24">
            <section class="relative min-h-[60vh] flex items-center justify-center overflow-hidden py-20">
                <div class="absolute inset-0 grid-background opacity-50"></div>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-[#00ff88] rounded-full blur-[200px] opacity-10"></div>

                <div class="container mx-auto px-6 lg:px-12 relative z-10">
                    <Reveal class="max-w-5xl mx-auto text-center">
                        <Eyebrow text="GET IN TOUCH" boxed=true/>
                        <h1 class="text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-space font-bold tracking-tighter mb-8">
                            <span class="block text-white">"LET'S"</span>
                            <span class="block gradient-text-alt">"CONNECT"</span>
                        </h1>
                        <p class="text-xl text-white/60 max-w-3xl mx-auto leading-relaxed">
                            "Have questions? Want to learn more? Our team is here to help you "
                            "start your healthcare transformation"
                        </p>
                    </Reveal>
                </div>
            </section>

            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <div class="grid lg:grid-cols-2 gap-16 max-w-7xl mx-auto">
                        // Form
                        <Reveal from=RevealFrom::Left>
                            <h2 class="text-4xl font-space font-bold text-white mb-8">"Send Us a Message"</h2>
                            {notice_view}
                            <form on:submit=on_submit on:input=on_edit class="space-y-6" novalidate=true>
                                <TextInput
                                    label="FULL NAME"
                                    name="name"
                                    placeholder="John Doe"
                                    value=name
                                    set_value=set_name
                                />
                                <EmailInput
                                    label="EMAIL ADDRESS"
                                    placeholder="john@example.com"
                                    value=email
                                    set_value=set_email
                                />
                                <TextInput
                                    label="SUBJECT"
                                    name="subject"
                                    placeholder="How can we help?"
                                    value=subject
                                    set_value=set_subject
                                />
                                <TextArea
                                    label="MESSAGE"
                                    name="message"
                                    placeholder="Tell us more about your needs..."
                                    value=message
                                    set_value=set_message
                                />
                                <button
                                    type="submit"
                                    class="group w-full px-10 py-5 bg-[#00ff88] text-black font-medium tracking-wider relative overflow-hidden"
                                >
                                    <span class="relative z-10">"SEND MESSAGE"</span>
                                    <span class="absolute inset-0 bg-white -translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                                </button>
                            </form>
                        </Reveal>

                        // Contact info
                        <Reveal from=RevealFrom::Right class="space-y-12">
                            <div>
                                <h2 class="text-4xl font-space font-bold text-white mb-8">"Contact Information"</h2>
                                <p class="text-lg text-white/60 leading-relaxed mb-12">
                                    "Reach out through any of these channels. We typically respond "
                                    "within 24 hours during business days."
                                </p>
                            </div>

                            <div class="space-y-6">
                                {contact_cards
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, (icon, title, info, href))| {
                                        let delay_ms = index as u32 * 100;
                                        view! {
                                            <Reveal delay_ms=delay_ms class="group p-6 bg-white/5 backdrop-blur-sm border border-white/10 hover:border-[#00ff88]/50 transition-all duration-500">
                                                <div class="flex items-start gap-4">
                                                    <div class="w-12 h-12 bg-[#00ff88]/10 flex items-center justify-center shrink-0 group-hover:bg-[#00ff88]/20 transition-all duration-500">
                                                        <span class="text-xl text-[#00ff88]">{icon}</span>
                                                    </div>
                                                    <div>
                                                        <h3 class="text-lg font-space font-medium text-white mb-2">{title}</h3>
                                                        <a href=href class="text-white/60 hover:text-[#00ff88] transition-colors duration-300">
                                                            {info}
                                                        </a>
                                                    </div>
                                                </div>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="p-8 bg-gradient-to-br from-[#00ff88]/10 to-transparent border border-[#00ff88]/20">
                                <h3 class="text-xl font-space font-medium text-white mb-4">"Office Hours"</h3>
                                <div class="space-y-2 text-white/60">
                                    {OFFICE_HOURS
                                        .map(|(days, hours)| view! {
                                            <div class="flex justify-between">
                                                <span>{days}</span>
                                                <span>{hours}</span>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Office
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="relative max-w-7xl mx-auto h-[500px] overflow-hidden border border-white/10">
                        <img
                            src="https://images.unsplash.com/photo-1720180246446-d1738fe8ca76?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                            alt="Modern Healthcare Facility"
                            class="w-full h-full object-cover opacity-60"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black via-transparent to-transparent"></div>
                        <div class="absolute bottom-12 left-12">
                            <h3 class="text-4xl font-space font-bold text-white mb-4">"Visit Our Office"</h3>
                            <p class="text-xl text-white/80 max-w-xl">{OFFICE_ADDRESS}</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            // FAQ
            <section class="py-32 relative">
                <div class="container mx-auto px-6 lg:px-12">
                    <Reveal class="text-center max-w-4xl mx-auto mb-16">
                        <h2 class="text-5xl md:text-6xl font-space font-bold tracking-tighter text-white mb-6">
                            "Frequently Asked Questions"
                        </h2>
                        <p class="text-xl text-white/60">
                            "Find quick answers to common questions about our platform and services"
                        </p>
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        {FAQ
                            .into_iter()
                            .enumerate()
                            .map(|(index, (question, answer))| {
                                let delay_ms = index as u32 * 100;
                                view! {
                                    <Reveal delay_ms=delay_ms class="p-8 bg-white/5 backdrop-blur-sm border border-white/10 hover:border-[#00ff88]/50 transition-all duration-500">
                                        <h3 class="text-xl font-space font-medium text-white mb-4">{question}</h3>
                                        <p class="text-white/60 leading-relaxed">{answer}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
