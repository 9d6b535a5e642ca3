//! Navigation Bar
//!
//! Fixed top bar with section links. Turns opaque once the page has scrolled
//! past 50 px and collapses into a toggle menu on small screens.

use leptos::ev;
use leptos::prelude::*;
use leptos_motion::is_scrolled_past;

use super::button::{button_classes, ButtonSize, ButtonVariant};

/// Opaque background threshold in pixels
const SCROLLED_THRESHOLD: f64 = 50.0;

/// Section anchors: (href, label)
pub const MENU_ITEMS: &[(&str, &str)] = &[
    ("#ana-sayfa", "Ana Sayfa"),
    ("#hizmetler", "Hizmetler"),
    ("#galeri", "Galeri"),
    ("#hakkimizda", "Hakkımızda"),
    ("#randevu", "Randevu"),
];

#[component]
pub fn Brand(#[prop(optional)] footer: bool) -> impl IntoView {
    let subtitle_class = if footer { "text-sm text-text-secondary" } else { "text-xs text-text-secondary" };
    view! {
        <div class="flex items-center space-x-3">
            <div class="bg-primary p-2 rounded-lg text-black text-xl leading-none">"✂"</div>
            <div>
                <span class="block text-xl font-bold text-primary font-serif">"BIG BOSS"</span>
                <span class=format!("block {}", subtitle_class)>"Premium Kuaför"</span>
            </div>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        set_scrolled.set(is_scrolled_past(y, SCROLLED_THRESHOLD));
    });
    on_cleanup(move || handle.remove());

    let nav_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/95 backdrop-blur-md shadow-lg border-b border-primary/20"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };
    let cta_class = button_classes(ButtonVariant::Primary, ButtonSize::Md, "");
    let mobile_cta_class = button_classes(ButtonVariant::Primary, ButtonSize::Md, "mt-4 w-full");

    view! {
        <nav class=nav_class>
            <div class="container-custom">
                <div class="flex items-center justify-between h-16">
                    <a href="#ana-sayfa"><Brand /></a>

                    // Desktop menu
                    <div class="hidden md:flex items-center space-x-8">
                        {MENU_ITEMS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="nav-link text-text-primary hover:text-primary transition-colors duration-300 font-medium">
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:block">
                        <a href="#randevu" class=cta_class>"Randevu Al"</a>
                    </div>

                    <button
                        type="button"
                        class="md:hidden p-2 text-text-primary hover:text-primary transition-colors text-2xl"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        {move || if is_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || is_open.get()>
                <div class="md:hidden bg-background border-t border-border">
                    <div class="container-custom py-4">
                        <div class="flex flex-col space-y-4">
                            {MENU_ITEMS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class="text-left text-text-primary hover:text-primary transition-colors duration-300 font-medium py-2"
                                        on:click=move |_| set_is_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                            <a
                                href="#randevu"
                                class=mobile_cta_class.clone()
                                on:click=move |_| set_is_open.set(false)
                            >
                                "Randevu Al"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
