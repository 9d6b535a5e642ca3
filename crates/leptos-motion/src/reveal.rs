//! Reveal Wrappers
//!
//! CSS-class based entrance animations. The stylesheet owns the actual
//! transitions; these components only flip the classes.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type ObserverHandle = (
    web_sys::IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
);

/// Fades children in once they scroll into view (one-shot).
///
/// `amount` is the visible fraction required before revealing.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = 0.1)] amount: f64,
    /// Transition delay in milliseconds, for staggering siblings
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let hit = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if hit {
                    set_visible.set(true);
                    observer.disconnect();
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&amount.into());
        match web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(io) => {
                io.observe(&el);
                let previous = observer.try_update_value(|slot| slot.replace((io, on_intersect))).flatten();
                if let Some((old, _)) = previous {
                    old.disconnect();
                }
            }
            // No observer support: show content immediately
            Err(_) => set_visible.set(true),
        }
    });

    on_cleanup(move || {
        if let Some((io, _callback)) = observer.try_update_value(Option::take).flatten() {
            io.disconnect();
        }
    });

    let classes = move || {
        if visible.get() {
            format!("reveal reveal-visible {}", class)
        } else {
            format!("reveal {}", class)
        }
    };

    view! {
        <div node_ref=node class=classes style=format!("transition-delay: {}ms;", delay_ms)>
            {children()}
        </div>
    }
}

/// Slides the whole page in on first render
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let (entered, set_entered) = signal(false);
    request_animation_frame(move || set_entered.set(true));

    view! {
        <div class=move || if entered.get() { "page-transition page-transition-active" } else { "page-transition" }>
            {children()}
        </div>
    }
}
