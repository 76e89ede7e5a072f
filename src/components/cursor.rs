//! Custom Cursor Component
//!
//! Two-layer cursor overlay: a dot that tracks the pointer closely and a
//! ring that trails behind it. Touch layouts keep the native cursor.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_scrolltrigger::{scrub_settled, scrub_step};
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Catch-up horizons in seconds, per layer and axis.
const DOT_LAG_X: f64 = 0.3;
const DOT_LAG_Y: f64 = 0.2;
const RING_LAG: f64 = 0.5;
/// Press/release pulse horizon in seconds.
const SCALE_LAG: f64 = 0.2;
/// Scale while the pointer is held down.
const PRESSED_SCALE: f64 = 0.6;
/// Upper bound on a frame delta, so a background tab does not teleport.
const MAX_FRAME_DT: f64 = 0.1;

struct CursorState {
    target_x: f64,
    target_y: f64,
    dot_x: f64,
    dot_y: f64,
    ring_x: f64,
    ring_y: f64,
    scale: f64,
    scale_target: f64,
    last_ts: Option<f64>,
    raf_id: Option<i32>,
}

impl CursorState {
    fn settled(&self) -> bool {
        scrub_settled(self.dot_x, self.target_x)
            && scrub_settled(self.dot_y, self.target_y)
            && scrub_settled(self.ring_x, self.target_x)
            && scrub_settled(self.ring_y, self.target_y)
            && scrub_settled(self.scale, self.scale_target)
    }
}

fn is_touch_layout() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(max-width: 768px)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn write_layer(id: &str, x: f64, y: f64, scale: f64) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let transform = format!(
        "translate(-50%, -50%) translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
        x, y, scale
    );
    let _ = html.style().set_property("transform", &transform);
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    if is_touch_layout() {
        return ().into_any();
    }

    let state = Rc::new(RefCell::new(CursorState {
        target_x: 0.0,
        target_y: 0.0,
        dot_x: 0.0,
        dot_y: 0.0,
        ring_x: 0.0,
        ring_y: 0.0,
        scale: 1.0,
        scale_target: 1.0,
        last_ts: None,
        raf_id: None,
    }));
    let raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    {
        let state = state.clone();
        let raf_self = raf.clone();
        *raf.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
            let mut s = state.borrow_mut();
            s.raf_id = None;
            let dt = match s.last_ts {
                Some(prev) => ((ts - prev) / 1000.0).clamp(0.0, MAX_FRAME_DT),
                None => 0.0,
            };
            s.last_ts = Some(ts);
            // A wake frame has no usable delta; step from the next one.
            if dt > 0.0 {
                s.dot_x = scrub_step(s.dot_x, s.target_x, dt, DOT_LAG_X);
                s.dot_y = scrub_step(s.dot_y, s.target_y, dt, DOT_LAG_Y);
                s.ring_x = scrub_step(s.ring_x, s.target_x, dt, RING_LAG);
                s.ring_y = scrub_step(s.ring_y, s.target_y, dt, RING_LAG);
                s.scale = scrub_step(s.scale, s.scale_target, dt, SCALE_LAG);
                write_layer("cursor-dot", s.dot_x, s.dot_y, s.scale);
                write_layer("cursor-ring", s.ring_x, s.ring_y, s.scale);
            }
            if s.settled() {
                s.last_ts = None;
                return;
            }
            let Some(win) = web_sys::window() else {
                return;
            };
            let raf_ref = raf_self.borrow();
            let Some(cb) = raf_ref.as_ref() else {
                return;
            };
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                s.raf_id = Some(id);
            }
        }));
    }

    let schedule = {
        let state = state.clone();
        let raf = raf.clone();
        move || {
            let mut s = state.borrow_mut();
            if s.raf_id.is_some() {
                return;
            }
            let Some(win) = web_sys::window() else {
                return;
            };
            let raf_ref = raf.borrow();
            let Some(cb) = raf_ref.as_ref() else {
                return;
            };
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                s.raf_id = Some(id);
            }
        }
    };

    let move_cb = {
        let state = state.clone();
        let schedule = schedule.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            {
                let mut s = state.borrow_mut();
                s.target_x = ev.client_x() as f64;
                s.target_y = ev.client_y() as f64;
            }
            schedule();
        })
    };
    let down_cb = {
        let state = state.clone();
        let schedule = schedule.clone();
        Closure::<dyn FnMut()>::new(move || {
            state.borrow_mut().scale_target = PRESSED_SCALE;
            schedule();
        })
    };
    let up_cb = {
        let state = state.clone();
        let schedule = schedule.clone();
        Closure::<dyn FnMut()>::new(move || {
            state.borrow_mut().scale_target = 1.0;
            schedule();
        })
    };

    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("mousemove", move_cb.as_ref().unchecked_ref());
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mousedown", down_cb.as_ref().unchecked_ref());
            let _ =
                doc.add_event_listener_with_callback("mouseup", up_cb.as_ref().unchecked_ref());
        }
    }

    let cleanup = SendWrapper::new(move || {
        if let Some(win) = web_sys::window() {
            let _ = win
                .remove_event_listener_with_callback("mousemove", move_cb.as_ref().unchecked_ref());
            if let Some(doc) = win.document() {
                let _ = doc.remove_event_listener_with_callback(
                    "mousedown",
                    down_cb.as_ref().unchecked_ref(),
                );
                let _ = doc
                    .remove_event_listener_with_callback("mouseup", up_cb.as_ref().unchecked_ref());
            }
            if let Some(id) = state.borrow_mut().raf_id.take() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        raf.borrow_mut().take();
    });
    on_cleanup(move || cleanup.take()());

    view! {
        <div
            id="cursor-dot"
            class="fixed top-0 left-0 w-[20px] h-[20px] bg-white rounded-full pointer-events-none z-[999] mix-blend-difference"
            style="transform: translate(-50%, -50%)"
        ></div>
        <div
            id="cursor-ring"
            class="fixed top-0 left-0 w-[48px] h-[40px] border rounded-full border-white pointer-events-none z-[999] mix-blend-difference opacity-50"
            style="transform: translate(-50%, -50%)"
        ></div>
    }
    .into_any()
}
