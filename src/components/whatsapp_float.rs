use leptos::prelude::*;

use crate::commands;
use crate::config::use_config;
use crate::domain::booking::{whatsapp_url, QUICK_MESSAGE};

/// Round WhatsApp button pinned to the bottom-right corner
#[component]
pub fn WhatsAppFloat() -> impl IntoView {
    let config = use_config();
    let url = whatsapp_url(&config.whatsapp_number, QUICK_MESSAGE);

    view! {
        <button
            type="button"
            title="WhatsApp ile yazın"
            class="fixed bottom-6 right-6 z-50 w-14 h-14 rounded-full bg-green-500 hover:bg-green-600 text-white text-2xl shadow-lg flex items-center justify-center transition-transform hover:scale-110"
            on:click=move |_| commands::run("open WhatsApp", commands::open_in_new_tab(&url))
        >
            "💬"
        </button>
    }
}
