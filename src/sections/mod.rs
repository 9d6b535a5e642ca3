//! Marketing Sections
//!
//! The one-page site, top to bottom. Each section carries the anchor id the
//! navbar links to.

mod about;
mod appointment;
mod gallery;
mod hero;
mod services;

pub use about::About;
pub use appointment::Appointment;
pub use gallery::Gallery;
pub use hero::Hero;
pub use services::Services;

use leptos::prelude::*;

use crate::commands;

/// Click handler that smooth-scrolls to a section selector such as `#randevu`
fn scroll_to(selector: &'static str) -> Callback<web_sys::MouseEvent> {
    Callback::new(move |_| commands::run("scroll to section", commands::scroll_to_section(selector)))
}

/// Centered gold heading with a lead paragraph
#[component]
fn SectionHeading(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-6 font-serif">
                <span class="text-primary">{title}</span>
            </h2>
            <p class="text-xl text-text-secondary max-w-3xl mx-auto leading-relaxed">{lead}</p>
        </div>
    }
}
