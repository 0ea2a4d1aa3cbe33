use leptos::prelude::*;

use crate::models::PageId;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    Large,
}

/// Call-to-action that switches the visible page.
#[component]
pub fn NavigateButton(
    children: Children,
    to: PageId,
    on_navigate: Callback<PageId>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let size_classes = match size {
        ButtonSize::Small => "px-6 py-3",
        ButtonSize::Regular => "px-10 py-5",
        ButtonSize::Large => "px-12 py-6 text-lg",
    };

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-[#00ff88] text-black relative overflow-hidden",
        ButtonVariant::Outline => "border border-white/20 text-white hover:border-[#00ff88] hover:text-[#00ff88] transition-all duration-300",
    };

    let width = if full_width { "w-full" } else { "" };

    let classes = format!(
        "group font-medium tracking-wider {} {} {}",
        size_classes, variant_classes, width
    );

    // White sweep on hover, primary only.
    let sweep = (variant == ButtonVariant::Primary).then(|| {
        view! {
            <span class="absolute inset-0 bg-white -translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
        }
    });

    view! {
        <button type="button" class=classes on:click=move |_| on_navigate.run(to)>
            <span class="relative z-10 flex items-center justify-center gap-2">
                {children()}
            </span>
            {sweep}
        </button>
    }
}

#[component]
pub fn Arrow() -> impl IntoView {
    view! {
        <span class="inline-block group-hover:translate-x-1 transition-transform duration-300" aria-hidden="true">
            "→"
        </span>
    }
}
