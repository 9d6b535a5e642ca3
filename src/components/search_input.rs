use leptos::prelude::*;

/// Text box bound to a search signal
#[component]
pub fn SearchInput(query: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-sm">"🔍"</span>
            <input
                type="text"
                class="admin-input pl-10"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Select box bound to a string signal. Options are (value, label).
#[component]
pub fn SelectInput(
    selected: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <select
            class=format!("admin-input {}", class)
            prop:value=move || selected.get()
            on:change=move |ev| selected.set(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                .collect_view()}
        </select>
    }
}
