//! Stat Cards
//!
//! Metric tiles and percentage bars used across the admin panels.

use leptos::prelude::*;

use crate::domain::metric::{width_style, Metric, Share};

/// Tile with a headline value and its change against the last period
#[component]
pub fn MetricCard(metric: Metric, #[prop(optional)] index: usize) -> impl IntoView {
    let change_class = format!("text-sm font-medium {}", metric.change_class());
    view! {
        <div class="admin-card fade-up" style=format!("animation-delay: {}ms;", index * 100)>
            <div class="flex items-center justify-between mb-4">
                <div class=format!("w-12 h-12 rounded-lg {}", metric.color)></div>
                <span class=change_class>{metric.change}</span>
            </div>
            <h3 class="text-2xl font-bold text-gray-900 mb-1">{metric.value}</h3>
            <p class="text-gray-600 text-sm">{metric.label}</p>
        </div>
    }
}

/// Tile with a live count, for panel summaries
#[component]
pub fn CountCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] color: String,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    view! {
        <div class="admin-card fade-up" style=format!("animation-delay: {}ms;", index * 100)>
            <div class=format!("w-12 h-12 {} rounded-lg mb-4", color)></div>
            <h3 class="text-2xl font-bold text-gray-900">{move || value.get()}</h3>
            <p class="text-gray-600 text-sm">{label}</p>
        </div>
    }
}

/// Labelled horizontal percentage bar
#[component]
pub fn ShareBar(share: Share, #[prop(optional, into)] detail: String) -> impl IntoView {
    let right = if detail.is_empty() { format!("{}%", share.percentage) } else { detail };
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <span class="font-medium text-gray-900">{share.label}</span>
                <span class="text-gray-600">{right}</span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2">
                <div
                    class=format!("h-2 rounded-full transition-all duration-500 {}", share.color)
                    style=width_style(share.percentage)
                ></div>
            </div>
        </div>
    }
}
