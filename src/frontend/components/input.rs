use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-0 py-4 bg-transparent border-b border-white/20 text-white
                             placeholder-white/30 focus:outline-none focus:border-[#00ff88]
                             transition-colors duration-300";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label for=name.clone() class="block text-sm text-white/60 mb-2 tracking-wider">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder=placeholder
            input_type="email"
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(default = 6)] rows: u32,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm text-white/60 mb-2 tracking-wider">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=format!("{} resize-none", FIELD_CLASSES)
            ></textarea>
        </div>
    }
}
