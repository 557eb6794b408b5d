use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::content;
use crate::viewport::ViewportFlags;

const GREETING_MILLIS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Idle,
    Excited,
}

impl Mood {
    pub fn css_class(self) -> &'static str {
        match self {
            Mood::Idle => "idle",
            Mood::Excited => "excited",
        }
    }
}

#[derive(Clone, Copy)]
pub struct MascotState {
    pub mood: Signal<Mood>,
    pub bubble: Signal<Option<String>>,
    // bumped per announcement; a stale hide timer sees a newer value and backs off
    generation: Signal<u64>,
}

pub fn use_mascot() -> MascotState {
    let mood = use_signal(Mood::default);
    let bubble = use_signal(|| None::<String>);
    let generation = use_signal(|| 0u64);
    use_context_provider(|| MascotState {
        mood,
        bubble,
        generation,
    })
}

pub fn announce(mut state: MascotState, message: &str) {
    let next = *state.generation.peek() + 1;
    state.generation.set(next);
    state.bubble.set(Some(message.to_string()));
    state.mood.set(Mood::Excited);
}

pub fn announce_for(state: MascotState, message: &str, millis: u32) {
    announce(state, message);
    #[cfg(target_arch = "wasm32")]
    {
        let shown = *state.generation.peek();
        spawn(async move {
            TimeoutFuture::new(millis).await;
            if *state.generation.peek() != shown {
                return;
            }
            calm(state);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = millis;
    }
}

pub fn calm(mut state: MascotState) {
    state.bubble.set(None);
    state.mood.set(Mood::Idle);
}

#[component]
pub fn CharacterGuide() -> Element {
    let flags = use_context::<Signal<ViewportFlags>>();
    let state = use_context::<MascotState>();

    if !flags().show_mascot {
        return rsx! {};
    }

    let mood_class = state.mood.read().css_class();
    let bubble = state.bubble.read().clone();

    rsx! {
        div {
            class: "character-guide {mood_class}",
            role: "button",
            tabindex: "0",
            onclick: move |_| {
                tracing::debug!("mascot: clicked");
                announce_for(state, content::GREETING_MESSAGE, GREETING_MILLIS);
            },
            div { class: "character",
                div { class: "character-head",
                    div { class: "character-eyes",
                        div { class: "character-eye" }
                        div { class: "character-eye" }
                    }
                    div { class: "character-smile" }
                }
                div { class: "character-body" }
                div { class: "character-arm character-arm-left" }
                div { class: "character-arm character-arm-right" }
                div { class: "character-leg character-leg-left" }
                div { class: "character-leg character-leg-right" }
            }
            if let Some(message) = bubble {
                div { class: "speech-bubble",
                    "{message}"
                    div { class: "bubble-arrow" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_maps_to_animation_classes() {
        assert_eq!(Mood::Idle.css_class(), "idle");
        assert_eq!(Mood::Excited.css_class(), "excited");
        assert_eq!(Mood::default(), Mood::Idle);
    }
}
