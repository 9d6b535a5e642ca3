//! Button Component
//!
//! Shared button with color variants and three sizes.

use leptos::prelude::*;

use crate::util::cn;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary hover:bg-primary-dark text-black shadow-lg",
            ButtonVariant::Secondary => "border border-primary text-primary hover:bg-primary hover:text-black",
            ButtonVariant::Outline => "border border-border text-text-primary hover:border-primary hover:text-primary",
            ButtonVariant::Ghost => "text-text-primary hover:text-primary",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-3 text-sm",
            ButtonSize::Md => "h-11 px-6 text-base",
            ButtonSize::Lg => "h-12 px-8 text-lg",
        }
    }
}

const BASE_CLASSES: &str = "btn-lift inline-flex items-center justify-center rounded-lg font-semibold transition-all duration-300 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary disabled:pointer-events-none disabled:opacity-50 relative overflow-hidden";

/// Full class list; `extra` wins over variant and size defaults
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&[BASE_CLASSES, variant.classes(), size.classes(), extra])
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    /// `button` unless set; forms pass `submit`
    #[prop(optional, into)]
    button_type: String,
    #[prop(optional, into)] title: String,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
) -> impl IntoView {
    let classes = button_classes(variant, size, &class);
    let button_type = if button_type.is_empty() { "button".to_string() } else { button_type };

    view! {
        <button
            type=button_type
            class=classes
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(classes.contains("bg-primary"));
        assert!(classes.contains("h-11 px-6 text-base"));
    }

    #[test]
    fn test_extra_overrides_size() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg, "w-full h-14");
        assert!(classes.contains("h-14"));
        assert!(!classes.contains("h-12"));
        assert!(classes.ends_with("w-full h-14"));
    }

    #[test]
    fn test_ghost_has_no_background() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, "");
        assert!(!classes.contains("bg-primary"));
        assert!(classes.contains("text-sm"));
    }
}
