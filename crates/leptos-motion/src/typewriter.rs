//! Typewriter Text
//!
//! Types a list of strings one character at a time, holds the full text,
//! deletes it and moves on to the next string, cycling forever.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delays between typewriter steps, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub speed_ms: u32,
    pub delete_speed_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            speed_ms: 100,
            delete_speed_ms: 50,
            pause_ms: 2000,
        }
    }
}

/// What the typewriter does on its next step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Adding characters of the current text
    Typing,
    /// Holding the fully typed text
    Pausing,
    /// Removing characters; advances to the next text once empty
    Deleting,
}

/// Typewriter state machine.
///
/// `delay_ms()` is how long to wait before calling `tick()`; the driver
/// schedules exactly one callback at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    index: usize,
    visible: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new<I, S>(texts: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            texts: texts.into_iter().map(|t| t.as_ref().chars().collect()).collect(),
            index: 0,
            visible: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the text currently being typed or deleted
    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently visible prefix of the active text
    pub fn text(&self) -> String {
        self.texts
            .get(self.index)
            .map(|t| t.iter().take(self.visible).collect())
            .unwrap_or_default()
    }

    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.timing.speed_ms,
            Phase::Pausing => self.timing.pause_ms,
            Phase::Deleting => self.timing.delete_speed_ms,
        }
    }

    /// Advance one step
    pub fn tick(&mut self) {
        let Some(target) = self.texts.get(self.index) else {
            return;
        };
        match self.phase {
            Phase::Typing => {
                if self.visible < target.len() {
                    self.visible += 1;
                } else {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                if self.visible > 0 {
                    self.visible -= 1;
                } else {
                    self.phase = Phase::Typing;
                    self.index = (self.index + 1) % self.texts.len();
                }
            }
        }
    }
}

/// Animated typewriter span with a blinking caret
#[component]
pub fn TypewriterText(
    texts: Vec<String>,
    #[prop(default = TypewriterTiming::default())] timing: TypewriterTiming,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let cancelled = Arc::new(AtomicBool::new(false));

    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.store(true, Ordering::Relaxed));
    }

    let mut machine = Typewriter::new(texts, timing);
    if !machine.is_empty() {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(machine.delay_ms()).await;
                if cancelled.load(Ordering::Relaxed) {
                    break;
                }
                machine.tick();
                set_text.set(machine.text());
            }
        });
    }

    view! {
        <span class=class>
            {move || text.get()}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the machine for `until_ms` and record (time, text) whenever the text changes
    fn timeline(machine: &mut Typewriter, until_ms: u32) -> Vec<(u32, String)> {
        let mut now = 0;
        let mut out = Vec::new();
        let mut last = machine.text();
        while now < until_ms {
            now += machine.delay_ms();
            machine.tick();
            let current = machine.text();
            if current != last {
                out.push((now, current.clone()));
                last = current;
            }
        }
        out
    }

    #[test]
    fn test_types_holds_deletes_then_advances() {
        let mut tw = Typewriter::new(["A", "B"], TypewriterTiming::default());
        let events = timeline(&mut tw, 2500);

        // "A" at 100ms, full-text check at 200ms, pause until 2200ms,
        // deleted at 2250ms, advance at 2300ms, "B" at 2400ms
        assert_eq!(
            events,
            vec![
                (100, "A".to_string()),
                (2250, String::new()),
                (2400, "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_cycles_back_to_first_text() {
        let mut tw = Typewriter::new(["A", "B"], TypewriterTiming::default());
        let events = timeline(&mut tw, 5000);
        let texts: Vec<&str> = events.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["A", "", "B", "", "A"]);
    }

    #[test]
    fn test_phase_delays() {
        let mut tw = Typewriter::new(["A"], TypewriterTiming::default());
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.delay_ms(), 100);
        tw.tick(); // "A"
        tw.tick(); // fully typed -> pausing
        assert_eq!(tw.phase(), Phase::Pausing);
        assert_eq!(tw.delay_ms(), 2000);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.delay_ms(), 50);
    }

    #[test]
    fn test_multibyte_text_types_by_character() {
        let mut tw = Typewriter::new(["Saç"], TypewriterTiming::default());
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Saç");
    }

    #[test]
    fn test_empty_text_list_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default());
        assert!(tw.is_empty());
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 0);
    }
}
