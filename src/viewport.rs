use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

pub const TOUCH_MAX_WIDTH: f64 = 768.0;
pub const MASCOT_MIN_WIDTH: f64 = 1024.0;

const FALLBACK_WIDTH: f64 = 1280.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportFlags {
    pub show_mascot: bool,
    pub show_cursor: bool,
    pub collapse_nav: bool,
}

impl ViewportFlags {
    pub fn from_width(width: f64) -> Self {
        Self {
            show_mascot: width > MASCOT_MIN_WIDTH,
            show_cursor: width > TOUCH_MAX_WIDTH,
            collapse_nav: width <= TOUCH_MAX_WIDTH,
        }
    }
}

impl Default for ViewportFlags {
    fn default() -> Self {
        Self::from_width(FALLBACK_WIDTH)
    }
}

fn current_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn initial_flags() -> ViewportFlags {
    current_width()
        .map(ViewportFlags::from_width)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
struct ResizeListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

pub fn use_viewport_flags() -> Signal<ViewportFlags> {
    let flags = use_signal(initial_flags);

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<ResizeListener>);

        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            tracing::debug!("viewport: attach resize listener");
            let Some(window) = web_sys::window() else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let mut flags = flags;
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let Some(width) = current_width() else {
                    return;
                };
                let next = ViewportFlags::from_width(width);
                if *flags.peek() != next {
                    flags.set(next);
                }
            }) as Box<dyn FnMut(_)>));

            let _ = window.add_event_listener_with_callback(
                "resize",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(ResizeListener { closure }));
        });

        let listener = listener;
        use_drop(move || {
            if let Some(handle) = listener.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        handle.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewports_show_everything_inline() {
        let flags = ViewportFlags::from_width(1400.0);
        assert!(flags.show_mascot);
        assert!(flags.show_cursor);
        assert!(!flags.collapse_nav);
    }

    #[test]
    fn narrow_viewports_hide_decorations_and_collapse_nav() {
        let flags = ViewportFlags::from_width(600.0);
        assert!(!flags.show_mascot);
        assert!(!flags.show_cursor);
        assert!(flags.collapse_nav);
    }

    #[test]
    fn resize_from_desktop_to_phone_flips_exactly_the_three_flags() {
        let before = ViewportFlags::from_width(1400.0);
        let after = ViewportFlags::from_width(600.0);
        assert_ne!(before, after);
        assert_eq!(before.show_mascot, !after.show_mascot);
        assert_eq!(before.show_cursor, !after.show_cursor);
        assert_eq!(before.collapse_nav, !after.collapse_nav);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let at_touch = ViewportFlags::from_width(TOUCH_MAX_WIDTH);
        assert!(!at_touch.show_cursor);
        assert!(at_touch.collapse_nav);

        let just_above_touch = ViewportFlags::from_width(TOUCH_MAX_WIDTH + 1.0);
        assert!(just_above_touch.show_cursor);
        assert!(!just_above_touch.collapse_nav);
        assert!(!just_above_touch.show_mascot);

        let at_mascot = ViewportFlags::from_width(MASCOT_MIN_WIDTH);
        assert!(!at_mascot.show_mascot);
        assert!(ViewportFlags::from_width(MASCOT_MIN_WIDTH + 1.0).show_mascot);
    }
}
