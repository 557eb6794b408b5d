use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::content;
use crate::mascot::{announce_for, MascotState};

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

const KEY_BUFFER_CAPACITY: usize = 10;
pub const CELEBRATION_MILLIS: u32 = 10_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeySequenceDetector {
    keys: Vec<String>,
}

impl KeySequenceDetector {
    pub fn record(&mut self, key: &str) -> bool {
        self.keys.push(key.to_string());
        if self.keys.len() > KEY_BUFFER_CAPACITY {
            let excess = self.keys.len() - KEY_BUFFER_CAPACITY;
            self.keys.drain(..excess);
        }
        self.matches()
    }

    pub fn step(&mut self, key: &str, active: bool) -> bool {
        if active {
            return false;
        }
        self.record(key)
    }

    fn matches(&self) -> bool {
        if self.keys.len() < KONAMI_SEQUENCE.len() {
            return false;
        }
        let tail = &self.keys[self.keys.len() - KONAMI_SEQUENCE.len()..];
        tail.iter()
            .zip(KONAMI_SEQUENCE.iter())
            .all(|(have, want)| have == want)
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

#[cfg(target_arch = "wasm32")]
struct KeyListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

pub fn use_konami(mascot: MascotState) -> Signal<bool> {
    let active = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let detector = use_signal(KeySequenceDetector::default);
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<KeyListener>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            tracing::debug!("konami: attach key listener");
            let Some(window) = web_sys::window() else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let mut active = active;
            let mut detector = detector;
            let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                let celebrating = *active.peek();
                let matched =
                    detector.with_mut(|detector| detector.step(&event.key(), celebrating));
                if matched {
                    active.set(true);
                }
            }) as Box<dyn FnMut(_)>));

            let _ = window.add_event_listener_with_callback(
                "keydown",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(KeyListener { closure }));
        });

        let listener = listener;
        use_drop(move || {
            if let Some(handle) = listener.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        handle.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    use_effect(move || {
        if !active() {
            return;
        }
        tracing::debug!("konami: code entered, celebration on");
        announce_for(mascot, content::CELEBRATION_MESSAGE, CELEBRATION_MILLIS);
        #[cfg(target_arch = "wasm32")]
        {
            let mut active = active;
            let mut detector = detector;
            spawn(async move {
                TimeoutFuture::new(CELEBRATION_MILLIS).await;
                detector.with_mut(|detector| detector.reset());
                active.set(false);
            });
        }
    });

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_matches_on_the_last_key() {
        let mut detector = KeySequenceDetector::default();
        for key in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            assert!(!detector.record(key));
        }
        assert!(detector.record("a"));
    }

    #[test]
    fn leading_noise_is_forgotten() {
        let mut detector = KeySequenceDetector::default();
        detector.record("x");
        detector.record("Escape");
        let mut matched = false;
        for key in KONAMI_SEQUENCE {
            matched = detector.record(key);
        }
        assert!(matched);
    }

    #[test]
    fn one_wrong_key_breaks_the_run() {
        let mut detector = KeySequenceDetector::default();
        for key in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            detector.record(key);
        }
        assert!(!detector.record("Enter"));
        assert!(!detector.record("a"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut detector = KeySequenceDetector::default();
        for key in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            detector.record(key);
        }
        assert!(!detector.record("A"));
    }

    #[test]
    fn buffer_never_grows_past_capacity() {
        let mut detector = KeySequenceDetector::default();
        for _ in 0..100 {
            detector.record("b");
        }
        assert!(detector.keys.len() <= KEY_BUFFER_CAPACITY);
    }

    #[test]
    fn a_second_sequence_mid_celebration_does_not_retrigger() {
        let mut detector = KeySequenceDetector::default();
        let mut celebrating = false;
        for key in KONAMI_SEQUENCE {
            if detector.step(key, celebrating) {
                celebrating = true;
            }
        }
        assert!(celebrating);

        for key in KONAMI_SEQUENCE {
            assert!(!detector.step(key, celebrating));
        }

        detector.reset();
        celebrating = false;
        let mut matched = false;
        for key in KONAMI_SEQUENCE {
            matched = detector.step(key, celebrating);
        }
        assert!(matched);
    }

    #[test]
    fn detector_works_again_after_reset() {
        let mut detector = KeySequenceDetector::default();
        for key in KONAMI_SEQUENCE {
            detector.record(key);
        }
        detector.reset();
        assert!(detector.keys.is_empty());
        let mut matched = false;
        for key in KONAMI_SEQUENCE {
            matched = detector.record(key);
        }
        assert!(matched);
    }
}
