//! Leptos Motion Utilities
//!
//! Small browser animation helpers for Leptos:
//! - Typewriter text driven by an explicit state machine
//! - Eased smooth scrolling for in-page anchors
//! - Scroll progress and reveal-on-scroll wrappers

mod reveal;
mod scroll;
mod typewriter;

pub use reveal::{PageTransition, Reveal};
pub use scroll::{
    bind_anchor_scroll, bind_wheel_accelerator, ease_in_out_cubic, is_scrolled_past,
    scroll_fraction, scroll_position, smooth_scroll_to, wheel_target, ScrollProgress,
    WheelAccelerator, WHEEL_STEP_PX, WHEEL_THRESHOLD,
};
pub use typewriter::{Phase, Typewriter, TypewriterText, TypewriterTiming};
