use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::viewport::ViewportFlags;

pub const TRAIL_CAPACITY: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailBuffer {
    samples: Vec<(f64, f64)>,
}

impl TrailBuffer {
    pub fn record(&mut self, x: f64, y: f64) {
        self.samples.insert(0, (x, y));
        self.samples.truncate(TRAIL_CAPACITY);
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

pub fn dot_opacity(index: usize) -> f64 {
    (1.0 - index as f64 / TRAIL_CAPACITY as f64) * 0.8
}

pub fn dot_scale(index: usize) -> f64 {
    1.0 - index as f64 / TRAIL_CAPACITY as f64
}

fn trail_dot_style(index: usize, x: f64, y: f64) -> String {
    format!(
        "left: {x}px; top: {y}px; opacity: {:.3}; transform: translate(-50%, -50%) scale({:.3});",
        dot_opacity(index),
        dot_scale(index)
    )
}

#[cfg(target_arch = "wasm32")]
struct PointerTracker {
    move_closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
    _frame_closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(f64)>>,
    // at most one queued frame; cleared when it fires
    frame_id: Rc<Cell<Option<i32>>>,
}

#[component]
pub fn CursorOverlay() -> Element {
    let flags = use_context::<Signal<ViewportFlags>>();
    let position = use_signal(|| (0.0f64, 0.0f64));
    let trail = use_signal(TrailBuffer::default);
    #[cfg(target_arch = "wasm32")]
    let mut tracker = use_signal(|| None::<PointerTracker>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let mut trail = trail;
            let show_cursor = flags().show_cursor;
            let attached = tracker.read().is_some();
            if show_cursor == attached {
                return;
            }

            if !show_cursor {
                tracing::debug!("cursor: detach pointer listener");
                let closure = tracker
                    .read()
                    .as_ref()
                    .map(|active| active.move_closure.clone());
                let pending = tracker
                    .read()
                    .as_ref()
                    .and_then(|active| active.frame_id.get());
                if let Some(closure) = closure {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            closure.as_ref().as_ref().unchecked_ref(),
                        );
                        if let Some(id) = pending {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                }
                tracker.set(None);
                trail.with_mut(|buffer| buffer.clear());
                return;
            }

            tracing::debug!("cursor: attach pointer listener");
            let Some(window) = web_sys::window() else {
                return;
            };
            use wasm_bindgen::closure::Closure;

            let latest = Rc::new(Cell::new((0.0f64, 0.0f64)));
            let frame_id = Rc::new(Cell::new(None::<i32>));

            let frame_latest = latest.clone();
            let frame_pending = frame_id.clone();
            let mut frame_position = position;
            let mut frame_trail = trail;
            let frame_closure = Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
                frame_pending.set(None);
                let (x, y) = frame_latest.get();
                frame_position.set((x, y));
                frame_trail.with_mut(|buffer| buffer.record(x, y));
            }) as Box<dyn FnMut(f64)>));

            let move_latest = latest;
            let move_pending = frame_id.clone();
            let move_frame = frame_closure.clone();
            let move_closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                move_latest.set((event.client_x() as f64, event.client_y() as f64));
                if move_pending.get().is_some() {
                    return;
                }
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Ok(id) = window
                    .request_animation_frame(move_frame.as_ref().as_ref().unchecked_ref())
                {
                    move_pending.set(Some(id));
                }
            }) as Box<dyn FnMut(_)>));

            let _ = window.add_event_listener_with_callback(
                "mousemove",
                move_closure.as_ref().as_ref().unchecked_ref(),
            );
            tracker.set(Some(PointerTracker {
                move_closure,
                _frame_closure: frame_closure,
                frame_id,
            }));
        });

        let tracker = tracker;
        use_drop(move || {
            if let Some(active) = tracker.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "mousemove",
                        active.move_closure.as_ref().as_ref().unchecked_ref(),
                    );
                    if let Some(id) = active.frame_id.get() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
            }
        });
    }

    if !flags().show_cursor {
        return rsx! {};
    }

    let (x, y) = position();
    let samples: Vec<(f64, f64)> = trail.read().samples().to_vec();

    rsx! {
        div { class: "custom-cursor", style: "left: {x}px; top: {y}px;" }
        for (index, (dot_x, dot_y)) in samples.into_iter().enumerate() {
            div { class: "cursor-trail", style: "{trail_dot_style(index, dot_x, dot_y)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_sample_comes_first() {
        let mut buffer = TrailBuffer::default();
        buffer.record(1.0, 2.0);
        buffer.record(3.0, 4.0);
        assert_eq!(buffer.samples()[0], (3.0, 4.0));
        assert_eq!(buffer.samples()[1], (1.0, 2.0));
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut buffer = TrailBuffer::default();
        for step in 0..50 {
            buffer.record(step as f64, step as f64);
            assert!(buffer.samples().len() <= TRAIL_CAPACITY);
        }
        assert_eq!(buffer.samples().len(), TRAIL_CAPACITY);
        // the oldest surviving sample is the one recorded CAPACITY steps ago
        assert_eq!(buffer.samples()[TRAIL_CAPACITY - 1].0, 42.0);
        assert_eq!(buffer.samples()[0].0, 49.0);
    }

    #[test]
    fn clearing_empties_the_buffer() {
        let mut buffer = TrailBuffer::default();
        buffer.record(5.0, 5.0);
        buffer.clear();
        assert!(buffer.samples().is_empty());
    }

    #[test]
    fn dots_fade_and_shrink_with_age() {
        assert!((dot_opacity(0) - 0.8).abs() < 1e-9);
        assert!((dot_scale(0) - 1.0).abs() < 1e-9);
        for index in 1..TRAIL_CAPACITY {
            assert!(dot_opacity(index) < dot_opacity(index - 1));
            assert!(dot_scale(index) < dot_scale(index - 1));
            assert!(dot_opacity(index) >= 0.0);
            assert!(dot_scale(index) >= 0.0);
        }
    }
}
