//! BIG BOSS Frontend App
//!
//! Picks the admin console or the one-page marketing site from the URL path.

use leptos::prelude::*;
use leptos_motion::{bind_anchor_scroll, bind_wheel_accelerator, PageTransition, ScrollProgress};

use crate::admin::AdminPanel;
use crate::commands;
use crate::components::{Footer, Navbar, WhatsAppFloat};
use crate::config::SiteConfig;
use crate::sections::{About, Appointment, Gallery, Hero, Services};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let path = commands::current_path().unwrap_or_else(|e| {
        log::warn!("[APP] could not read location: {}", e);
        "/".to_string()
    });
    let admin = config.is_admin_path(&path);
    log::info!("[APP] rendering {} for {}", if admin { "admin console" } else { "site" }, path);

    provide_context(config);

    if admin {
        view! { <AdminPanel /> }.into_any()
    } else {
        view! { <MarketingSite /> }.into_any()
    }
}

/// Single scrolling page with the five public sections
#[component]
fn MarketingSite() -> impl IntoView {
    let config = crate::config::use_config();

    let anchors = bind_anchor_scroll(config.anchor_offset_px, config.anchor_scroll_ms);
    on_cleanup(move || anchors.remove());
    let wheel = StoredValue::new_local(
        config
            .wheel_accelerator
            .then(|| bind_wheel_accelerator(config.wheel_scroll_ms))
            .flatten(),
    );
    on_cleanup(move || {
        if let Some(handle) = wheel.try_update_value(Option::take).flatten() {
            handle.remove();
        }
    });

    view! {
        <div class="min-h-screen bg-background">
            <ScrollProgress />
            <WhatsAppFloat />

            <Navbar />
            <PageTransition>
                <main>
                    <Hero />
                    <About />
                    <Services />
                    <Gallery />
                    <Appointment />
                </main>
            </PageTransition>
            <Footer />
        </div>
    }
}
