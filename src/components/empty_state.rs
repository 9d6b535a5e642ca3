use leptos::prelude::*;

/// Placeholder shown when a filter matches nothing
#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <div class="text-5xl text-gray-400 mb-4">"∅"</div>
            <h3 class="text-lg font-medium text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-500">{message}</p>
        </div>
    }
}
