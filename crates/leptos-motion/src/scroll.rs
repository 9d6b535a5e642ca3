//! Smooth Scrolling
//!
//! Eased window scrolling driven by `requestAnimationFrame`, anchor-link
//! interception, an optional wheel accelerator and a scroll progress bar.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Wheel deltas at or below this magnitude keep the native behavior
pub const WHEEL_THRESHOLD: f64 = 50.0;
/// Distance travelled per accelerated wheel gesture
pub const WHEEL_STEP_PX: f64 = 300.0;

/// Cubic ease-in-out over `t` in `[0, 1]`
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Scroll offset after `elapsed` ms of an animation from `start` covering `distance`.
///
/// Returns the offset and whether the animation has finished.
pub fn scroll_position(start: f64, distance: f64, elapsed: f64, duration: f64) -> (f64, bool) {
    let progress = if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    };
    (start + distance * ease_in_out_cubic(progress), progress >= 1.0)
}

/// Target offset for an accelerated wheel gesture, or `None` for small deltas
pub fn wheel_target(current: f64, delta_y: f64, max_scroll: f64) -> Option<f64> {
    if delta_y.abs() <= WHEEL_THRESHOLD {
        return None;
    }
    let step = if delta_y > 0.0 { WHEEL_STEP_PX } else { -WHEEL_STEP_PX };
    Some((current + step).min(max_scroll).max(0.0))
}

/// Fraction of the page scrolled, clamped to `[0, 1]`
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn current_scroll_y(win: &web_sys::Window) -> f64 {
    win.scroll_y().unwrap_or(0.0)
}

fn max_scroll(win: &web_sys::Window) -> f64 {
    let height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (height - viewport).max(0.0)
}

/// Animate the window scroll offset to `target` over `duration_ms`
pub fn smooth_scroll_to(target: f64, duration_ms: f64) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let start = current_scroll_y(&win);
    let distance = target - start;
    let started_at: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let frame_win = win.clone();

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let t0 = match started_at.get() {
            Some(t) => t,
            None => {
                started_at.set(Some(now));
                now
            }
        };
        let (offset, done) = scroll_position(start, distance, now - t0, duration_ms);
        frame_win.scroll_to_with_x_and_y(0.0, offset);

        if done {
            // Drop the closure; nothing references it after this frame
            let _ = next_frame.borrow_mut().take();
        } else if let Some(cb) = next_frame.borrow().as_ref() {
            let _ = frame_win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

/// Intercept clicks on `#anchor` links and scroll to the target element,
/// stopping `offset_px` above it.
pub fn bind_anchor_scroll(offset_px: f64, duration_ms: f64) -> WindowListenerHandle {
    window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        // A bare "#" keeps the native jump-to-top
        if href.len() <= 1 {
            return;
        }
        let Some(win) = web_sys::window() else {
            return;
        };
        let Some(target) = win
            .document()
            .and_then(|d| d.query_selector(&href).ok().flatten())
        else {
            return;
        };
        ev.prevent_default();
        let top = target.get_bounding_client_rect().top() + current_scroll_y(&win) - offset_px;
        smooth_scroll_to(top, duration_ms);
    })
}

/// Replace large wheel gestures with fixed-size eased scrolls.
///
/// Registered as a non-passive listener so it can cancel the native scroll.
/// Returns `None` when there is no document or registration fails.
pub fn bind_wheel_accelerator(duration_ms: u32) -> Option<WheelAccelerator> {
    let doc = web_sys::window()?.document()?;
    let busy = Rc::new(Cell::new(false));

    let on_wheel = Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |ev: web_sys::WheelEvent| {
        if busy.get() {
            return;
        }
        let Some(win) = web_sys::window() else {
            return;
        };
        let Some(target) = wheel_target(current_scroll_y(&win), ev.delta_y(), max_scroll(&win)) else {
            return;
        };
        ev.prevent_default();
        busy.set(true);
        smooth_scroll_to(target, duration_ms as f64);

        let release = busy.clone();
        gloo_timers::callback::Timeout::new(duration_ms, move || release.set(false)).forget();
    });

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    if doc
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("could not register wheel accelerator");
        return None;
    }
    Some(WheelAccelerator { target: doc, callback: on_wheel })
}

/// Registered wheel listener; dropping it without `remove` leaves a dangling callback
pub struct WheelAccelerator {
    target: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::WheelEvent)>,
}

impl WheelAccelerator {
    /// Detach the listener and free its closure
    pub fn remove(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("wheel", self.callback.as_ref().unchecked_ref());
    }
}

/// Thin bar along the top of the viewport showing page scroll progress
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (fraction, set_fraction) = signal(0.0_f64);

    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some(win) = web_sys::window() {
            let height = win
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(0.0);
            let viewport = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            set_fraction.set(scroll_fraction(current_scroll_y(&win), height, viewport));
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 z-[60] bg-transparent">
            <div
                class="h-full bg-primary origin-left"
                style=move || format!("width: {:.2}%;", fraction.get() * 100.0)
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-9);
        // Slow start, slow finish
        assert!(ease_in_out_cubic(0.1) < 0.1);
        assert!(ease_in_out_cubic(0.9) > 0.9);
    }

    #[test]
    fn test_scroll_position_progress() {
        let (start, done) = scroll_position(100.0, 400.0, 0.0, 1200.0);
        assert_eq!(start, 100.0);
        assert!(!done);

        let (mid, done) = scroll_position(100.0, 400.0, 600.0, 1200.0);
        assert!((mid - 300.0).abs() < 1e-9);
        assert!(!done);

        let (end, done) = scroll_position(100.0, 400.0, 5000.0, 1200.0);
        assert_eq!(end, 500.0);
        assert!(done);
    }

    #[test]
    fn test_zero_duration_jumps() {
        assert_eq!(scroll_position(0.0, 250.0, 0.0, 0.0), (250.0, true));
    }

    #[test]
    fn test_wheel_target() {
        assert_eq!(wheel_target(500.0, 30.0, 2000.0), None);
        assert_eq!(wheel_target(500.0, -50.0, 2000.0), None);
        assert_eq!(wheel_target(500.0, 120.0, 2000.0), Some(800.0));
        assert_eq!(wheel_target(500.0, -120.0, 2000.0), Some(200.0));
        // Clamped at both ends
        assert_eq!(wheel_target(1900.0, 120.0, 2000.0), Some(2000.0));
        assert_eq!(wheel_target(100.0, -120.0, 2000.0), Some(0.0));
    }

    #[test]
    fn test_scroll_fraction() {
        assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(5000.0, 3000.0, 1000.0), 1.0);
        // Page shorter than the viewport
        assert_eq!(scroll_fraction(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scrolled_past() {
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(51.0, 50.0));
    }
}
