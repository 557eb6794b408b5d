use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::content::{self, NAV_ITEMS};
use crate::mascot::{announce_for, MascotState};

pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const SECTION_ROOT_MARGIN: &str = "-100px";
pub const SCROLL_THRESHOLD: f64 = 50.0;
const CAPTION_MILLIS: u32 = 4_000;

pub fn resolve_section_id(id: &str) -> Option<&'static str> {
    NAV_ITEMS.iter().find(|item| item.id == id).map(|item| item.id)
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    targets: Vec<web_sys::Element>,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

pub fn use_active_section(mascot: MascotState) -> Signal<Option<&'static str>> {
    let observed = use_signal(|| None::<&'static str>);
    #[cfg(target_arch = "wasm32")]
    let mut handle = use_signal(|| None::<ObserverHandle>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if handle.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Ok(nodes) = document.query_selector_all("section[id]") else {
                return;
            };
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsValue;

            let mut observed = observed;
            let closure = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for index in 0..entries.length() {
                        let entry = entries.get(index);
                        if entry.is_null() || entry.is_undefined() {
                            continue;
                        }
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let Some(id) = resolve_section_id(&entry.target().id()) else {
                            continue;
                        };
                        if *observed.peek() != Some(id) {
                            observed.set(Some(id));
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
            options.set_root_margin(SECTION_ROOT_MARGIN);
            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                closure.as_ref().as_ref().unchecked_ref(),
                &options,
            ) else {
                tracing::debug!("scrollspy: intersection observer unavailable");
                return;
            };

            let mut targets = Vec::new();
            for index in 0..nodes.length() {
                let Some(node) = nodes.item(index) else {
                    continue;
                };
                let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                    continue;
                };
                observer.observe(&element);
                targets.push(element);
            }
            tracing::debug!("scrollspy: observing {} sections", targets.len());
            handle.set(Some(ObserverHandle {
                observer,
                targets,
                _closure: closure,
            }));
        });

        let handle = handle;
        use_drop(move || {
            if let Some(active) = handle.read().as_ref() {
                for target in &active.targets {
                    active.observer.unobserve(target);
                }
            }
        });
    }

    let mut last_caption = use_signal(|| None::<&'static str>);
    use_effect(move || {
        let Some(id) = observed() else {
            return;
        };
        if *last_caption.peek() == Some(id) {
            return;
        }
        last_caption.set(Some(id));
        if let Some(caption) = content::section_caption(id) {
            announce_for(mascot, caption, CAPTION_MILLIS);
        }
    });

    observed
}

#[cfg(target_arch = "wasm32")]
struct ScrollWatcher {
    scroll_closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
    _frame_closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(f64)>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

pub fn use_scrolled() -> Signal<bool> {
    let scrolled = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut watcher = use_signal(|| None::<ScrollWatcher>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if watcher.read().is_some() {
                return;
            }
            tracing::debug!("scrollspy: attach scroll listener");
            let Some(window) = web_sys::window() else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let frame_id = Rc::new(Cell::new(None::<i32>));

            let frame_pending = frame_id.clone();
            let mut scrolled = scrolled;
            let frame_closure = Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
                frame_pending.set(None);
                let Some(window) = web_sys::window() else {
                    return;
                };
                let offset = window.scroll_y().unwrap_or(0.0);
                let next = is_scrolled(offset);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            }) as Box<dyn FnMut(f64)>));

            let scroll_pending = frame_id.clone();
            let scroll_frame = frame_closure.clone();
            let scroll_closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                if scroll_pending.get().is_some() {
                    return;
                }
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Ok(id) =
                    window.request_animation_frame(scroll_frame.as_ref().as_ref().unchecked_ref())
                {
                    scroll_pending.set(Some(id));
                }
            }) as Box<dyn FnMut(_)>));

            let _ = window.add_event_listener_with_callback(
                "scroll",
                scroll_closure.as_ref().as_ref().unchecked_ref(),
            );
            watcher.set(Some(ScrollWatcher {
                scroll_closure,
                _frame_closure: frame_closure,
                frame_id,
            }));
        });

        let watcher = watcher;
        use_drop(move || {
            if let Some(active) = watcher.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        active.scroll_closure.as_ref().as_ref().unchecked_ref(),
                    );
                    if let Some(id) = active.frame_id.get() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
            }
        });
    }

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sections_resolve_to_themselves() {
        for item in NAV_ITEMS {
            assert_eq!(resolve_section_id(item.id), Some(item.id));
        }
    }

    #[test]
    fn unknown_sections_do_not_resolve() {
        assert_eq!(resolve_section_id("footer"), None);
        assert_eq!(resolve_section_id(""), None);
        assert_eq!(resolve_section_id("HOME"), None);
    }

    #[test]
    fn nav_shrinks_only_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(SCROLL_THRESHOLD + 0.1));
        assert!(is_scrolled(400.0));
    }
}
