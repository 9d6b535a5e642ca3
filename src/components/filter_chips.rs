use leptos::prelude::*;

/// Row of toggle buttons selecting one value. Options are (value, label).
#[component]
pub fn FilterChips(
    options: Vec<(String, String)>,
    selected: RwSignal<String>,
    /// Classes for the active chip
    #[prop(into, default = "bg-primary text-black".to_string())]
    active_class: String,
    /// Classes for inactive chips
    #[prop(into, default = "bg-gray-100 text-gray-700 hover:bg-gray-200".to_string())]
    idle_class: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("flex gap-2 flex-wrap {}", class)>
            {options
                .into_iter()
                .map(|(value, label)| {
                    let active_class = active_class.clone();
                    let idle_class = idle_class.clone();
                    let is_active = {
                        let value = value.clone();
                        move || selected.get() == value
                    };
                    view! {
                        <button
                            type="button"
                            class=move || format!(
                                "px-4 py-2 rounded-lg font-medium transition-colors {}",
                                if is_active() { &active_class } else { &idle_class },
                            )
                            on:click=move |_| selected.set(value.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
