//! Leptos ScrollTrigger Utilities
//!
//! Scroll-linked animation timelines for Leptos. Progress math lives in
//! pure modules; this shell binds scroll/resize listeners, drives a
//! requestAnimationFrame loop while anything is mid-flight, and writes
//! inline styles.
//!
//! Each section creates its own [`SectionTriggers`] handle. The handle
//! owns every listener and frame callback it registered and disposes
//! exactly those on cleanup, so concurrently mounted sections never
//! cancel each other.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod ease;
mod progress;
mod timeline;

pub use ease::{lerp, Ease, Rgb};
pub use progress::{
    panel_progress, resolve_window, scrub_settled, scrub_step, snap_target, toggle_command,
    zone_of, ElementMetrics, Playback, ScrollPoint, ScrollWindow, WindowEnd, Zone,
};
pub use timeline::{css_updates, StyleProp, StyleValue, Timeline, Tween};

/// Scroll pauses longer than this arm snapping.
const SNAP_IDLE_MS: f64 = 150.0;
/// Snap scroll tween length in seconds.
const SNAP_SECONDS: f64 = 0.25;
/// Upper bound on a frame delta, so a background tab does not teleport.
const MAX_FRAME_DT: f64 = 0.1;

/// How a trigger maps scroll to its timeline playhead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Play forward on window enter, reverse on leave, at real-time rate.
    Toggle,
    /// Bind the playhead to scroll progress, catching up over `smooth`
    /// seconds (zero binds directly).
    Scrub { smooth: f64 },
}

/// Declarative description of one scroll-bound timeline.
#[derive(Clone)]
pub struct TriggerSpec {
    /// Id of the element the window is measured against; `None` spans the
    /// whole document.
    pub trigger: Option<String>,
    pub start: ScrollPoint,
    pub end: WindowEnd,
    pub mode: TriggerMode,
    pub timeline: Timeline,
    /// Element whose scrollWidth feeds [`WindowEnd::ElementScrollWidth`];
    /// defaults to the trigger element.
    pub measure: Option<String>,
    /// Number of evenly spaced snap stops (0 disables snapping).
    pub snap_stops: usize,
    /// Called with the playhead progress in [0,1] whenever it changes.
    pub on_update: Option<Rc<dyn Fn(f64)>>,
}

impl TriggerSpec {
    pub fn new(trigger: impl Into<String>) -> Self {
        TriggerSpec {
            trigger: Some(trigger.into()),
            start: ScrollPoint::top(0.8),
            end: WindowEnd::Point(ScrollPoint::BOTTOM_TOP),
            mode: TriggerMode::Toggle,
            timeline: Timeline::default(),
            measure: None,
            snap_stops: 0,
            on_update: None,
        }
    }

    /// A trigger spanning the full document scroll range.
    pub fn document() -> Self {
        TriggerSpec {
            trigger: None,
            start: ScrollPoint::TOP_TOP,
            end: WindowEnd::Point(ScrollPoint::BOTTOM_BOTTOM),
            mode: TriggerMode::Scrub { smooth: 0.0 },
            timeline: Timeline::default(),
            measure: None,
            snap_stops: 0,
            on_update: None,
        }
    }

    pub fn start(mut self, start: ScrollPoint) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: WindowEnd) -> Self {
        self.end = end;
        self
    }

    pub fn scrub(mut self, smooth: f64) -> Self {
        self.mode = TriggerMode::Scrub { smooth };
        self
    }

    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn measure(mut self, id: impl Into<String>) -> Self {
        self.measure = Some(id.into());
        self
    }

    pub fn snap(mut self, stops: usize) -> Self {
        self.snap_stops = stops;
        self
    }

    pub fn on_update(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_update = Some(Rc::new(f));
        self
    }
}

struct ActiveTrigger {
    spec: TriggerSpec,
    window: Option<ScrollWindow>,
    /// Timeline length in seconds, floored away from zero.
    total: f64,
    zone: Zone,
    /// Playhead in timeline seconds, within [0, total].
    playhead: f64,
    /// Toggle playback direction: -1.0, 0.0 or 1.0.
    direction: f64,
    /// Scrub target in timeline seconds.
    scrub_target: f64,
    last_reported: Option<f64>,
    elements: Vec<(String, web_sys::Element)>,
}

impl ActiveTrigger {
    fn needs_frames(&self) -> bool {
        match self.spec.mode {
            TriggerMode::Toggle => self.direction != 0.0,
            TriggerMode::Scrub { smooth } => {
                smooth > 0.0 && !scrub_settled(self.playhead, self.scrub_target)
            }
        }
    }

    fn progress(&self) -> f64 {
        (self.playhead / self.total).clamp(0.0, 1.0)
    }
}

struct SnapRun {
    from_scroll: f64,
    to_scroll: f64,
    started_at: f64,
}

struct Inner {
    triggers: Vec<ActiveTrigger>,
    scroll_cb: Option<Closure<dyn FnMut()>>,
    resize_cb: Option<Closure<dyn FnMut()>>,
    raf_id: Option<i32>,
    last_tick_ts: Option<f64>,
    last_scroll_at: f64,
    snap: Option<SnapRun>,
    disposed: bool,
}

/// Owner handle for one section's scroll-bound animations.
///
/// Clone is shallow; dispose through any clone tears down everything the
/// handle registered and nothing else.
#[derive(Clone)]
pub struct SectionTriggers {
    inner: Rc<RefCell<Inner>>,
    raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

/// Create a handle tied to the current reactive owner: it disposes itself
/// when the owning component unmounts.
pub fn use_section_triggers() -> SectionTriggers {
    let handle = SectionTriggers::new();
    let cleanup = send_wrapper::SendWrapper::new(handle.clone());
    leptos::prelude::on_cleanup(move || cleanup.take().dispose());
    handle
}

impl Default for SectionTriggers {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTriggers {
    pub fn new() -> Self {
        SectionTriggers {
            inner: Rc::new(RefCell::new(Inner {
                triggers: Vec::new(),
                scroll_cb: None,
                resize_cb: None,
                raf_id: None,
                last_tick_ts: None,
                last_scroll_at: 0.0,
                snap: None,
                disposed: false,
            })),
            raf: Rc::new(RefCell::new(None)),
        }
    }

    /// Bind one trigger. Listeners attach on the first registration; the
    /// trigger's initial state is measured and flushed immediately.
    pub fn register(&self, spec: TriggerSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let total = spec.timeline.duration().max(0.001);
            inner.triggers.push(ActiveTrigger {
                spec,
                window: None,
                total,
                zone: Zone::Before,
                playhead: 0.0,
                direction: 0.0,
                scrub_target: 0.0,
                last_reported: None,
                elements: Vec::new(),
            });
            let idx = inner.triggers.len() - 1;
            bind_initial(&mut inner.triggers[idx]);
        }
        self.attach_listeners();
        self.report_progress();
        self.ensure_frame();
    }

    /// Re-measure every trigger window, after layout changes the engine
    /// cannot see on its own.
    pub fn refresh(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            for trigger in &mut inner.triggers {
                remeasure(trigger);
            }
        }
        self.handle_scroll();
    }

    /// Drop every registered trigger but keep the handle and its listeners
    /// alive, so a section can rebuild its bindings after layout regroups.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.triggers.clear();
        inner.snap = None;
    }

    /// Ease the page to `progress` inside the named trigger's scroll
    /// window, driving the same tween snapping uses so scrubbed timelines
    /// stay live on the way.
    pub fn scroll_to_progress(&self, id: &str, progress: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let Some(scroll_y) = current_scroll_y() else {
                return;
            };
            let Some(now) = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
            else {
                return;
            };
            let window = inner
                .triggers
                .iter_mut()
                .find(|t| t.spec.trigger.as_deref() == Some(id))
                .and_then(|t| {
                    if t.window.is_none() {
                        remeasure(t);
                    }
                    t.window
                });
            let Some(window) = window else {
                return;
            };
            inner.snap = Some(SnapRun {
                from_scroll: scroll_y,
                to_scroll: window.scroll_for(progress.clamp(0.0, 1.0)),
                started_at: now,
            });
        }
        self.schedule_frame();
    }

    /// Remove every listener and frame callback this handle registered.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.disposed = true;
        if let Some(win) = web_sys::window() {
            if let Some(cb) = inner.scroll_cb.take() {
                let _ = win
                    .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = inner.resize_cb.take() {
                let _ = win
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
            if let Some(id) = inner.raf_id.take() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        inner.triggers.clear();
        inner.snap = None;
        drop(inner);
        self.raf.borrow_mut().take();
    }

    fn attach_listeners(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.scroll_cb.is_some() || inner.disposed {
            return;
        }
        let Some(win) = web_sys::window() else {
            return;
        };

        let handle = self.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            handle.inner.borrow_mut().last_scroll_at = js_sys::Date::now();
            handle.handle_scroll();
            handle.report_progress();
            handle.ensure_frame();
        });
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        inner.scroll_cb = Some(on_scroll);

        let handle = self.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            handle.refresh();
            handle.report_progress();
            handle.ensure_frame();
        });
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        inner.resize_cb = Some(on_resize);
    }

    /// Update every trigger's scroll-derived state. Direct-bound scrubs
    /// flush synchronously; everything else waits for the frame loop.
    fn handle_scroll(&self) {
        let Some(scroll_y) = current_scroll_y() else {
            return;
        };
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        for trigger in &mut inner.triggers {
            let Some(window) = trigger.window else {
                continue;
            };
            let raw = window.raw_progress(scroll_y);
            let new_zone = zone_of(raw);
            match trigger.spec.mode {
                TriggerMode::Toggle => {
                    if let Some(cmd) = toggle_command(trigger.zone, new_zone) {
                        trigger.direction = match cmd {
                            Playback::Forward => 1.0,
                            Playback::Reverse => -1.0,
                        };
                    }
                }
                TriggerMode::Scrub { smooth } => {
                    trigger.scrub_target = raw.clamp(0.0, 1.0) * trigger.total;
                    if smooth <= 0.0 {
                        trigger.playhead = trigger.scrub_target;
                        flush(trigger);
                    }
                }
            }
            trigger.zone = new_zone;
        }
    }

    /// Invoke on_update callbacks outside any borrow.
    fn report_progress(&self) {
        let mut pending: Vec<(Rc<dyn Fn(f64)>, f64)> = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            for trigger in &mut inner.triggers {
                let Some(cb) = trigger.spec.on_update.clone() else {
                    continue;
                };
                let p = trigger.progress();
                let changed = trigger
                    .last_reported
                    .map(|prev| (prev - p).abs() > 1e-4)
                    .unwrap_or(true);
                if changed {
                    trigger.last_reported = Some(p);
                    pending.push((cb, p));
                }
            }
        }
        for (cb, p) in pending {
            cb(p);
        }
    }

    fn ensure_frame(&self) {
        {
            let inner = self.inner.borrow();
            if inner.disposed || inner.raf_id.is_some() {
                return;
            }
            let wants_snap = inner
                .triggers
                .iter()
                .any(|t| t.spec.snap_stops >= 2 && t.zone == Zone::Inside);
            let active = inner.triggers.iter().any(ActiveTrigger::needs_frames);
            if !active && !wants_snap && inner.snap.is_none() {
                return;
            }
        }
        self.schedule_frame();
    }

    fn schedule_frame(&self) {
        if self.raf.borrow().is_none() {
            let handle = self.clone();
            *self.raf.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
                handle.inner.borrow_mut().raf_id = None;
                handle.tick(ts);
            }));
        }
        let Some(win) = web_sys::window() else {
            return;
        };
        let raf = self.raf.borrow();
        let Some(cb) = raf.as_ref() else {
            return;
        };
        if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
            self.inner.borrow_mut().raf_id = Some(id);
        }
    }

    fn tick(&self, ts: f64) {
        let mut keep_going = false;
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let dt = match inner.last_tick_ts {
                Some(prev) => ((ts - prev) / 1000.0).clamp(0.0, MAX_FRAME_DT),
                None => 0.0,
            };
            inner.last_tick_ts = Some(ts);

            for trigger in &mut inner.triggers {
                match trigger.spec.mode {
                    TriggerMode::Toggle => {
                        if trigger.direction == 0.0 {
                            continue;
                        }
                        trigger.playhead =
                            (trigger.playhead + dt * trigger.direction).clamp(0.0, trigger.total);
                        if trigger.playhead <= 0.0 || trigger.playhead >= trigger.total {
                            trigger.direction = 0.0;
                        }
                        flush(trigger);
                    }
                    TriggerMode::Scrub { smooth } => {
                        if smooth <= 0.0 || scrub_settled(trigger.playhead, trigger.scrub_target) {
                            continue;
                        }
                        trigger.playhead =
                            scrub_step(trigger.playhead, trigger.scrub_target, dt, smooth);
                        if scrub_settled(trigger.playhead, trigger.scrub_target) {
                            trigger.playhead = trigger.scrub_target;
                        }
                        flush(trigger);
                    }
                }
            }

            step_snap(&mut inner, ts);
            keep_going = inner.triggers.iter().any(ActiveTrigger::needs_frames)
                || inner.snap.is_some()
                || inner
                    .triggers
                    .iter()
                    .any(|t| t.spec.snap_stops >= 2 && t.zone == Zone::Inside);
            if !keep_going {
                inner.last_tick_ts = None;
            }
        }
        self.report_progress();
        if keep_going {
            self.schedule_frame();
        }
    }
}

/// Advance or arm the snap scroll tween.
fn step_snap(inner: &mut Inner, ts: f64) {
    if let Some(run) = &inner.snap {
        let t = ((ts - run.started_at) / (SNAP_SECONDS * 1000.0)).clamp(0.0, 1.0);
        let eased = Ease::QuadOut.apply(t);
        let y = lerp(run.from_scroll, run.to_scroll, eased);
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, y);
        }
        if t >= 1.0 {
            inner.snap = None;
            inner.last_scroll_at = js_sys::Date::now();
        }
        return;
    }

    if js_sys::Date::now() - inner.last_scroll_at < SNAP_IDLE_MS {
        return;
    }
    let Some(scroll_y) = current_scroll_y() else {
        return;
    };
    for trigger in &inner.triggers {
        if trigger.spec.snap_stops < 2 || trigger.zone != Zone::Inside {
            continue;
        }
        let Some(window) = trigger.window else {
            continue;
        };
        let progress = window.progress(scroll_y);
        let target = snap_target(progress, trigger.spec.snap_stops);
        if (target - progress).abs() <= 0.001 {
            continue;
        }
        inner.snap = Some(SnapRun {
            from_scroll: scroll_y,
            to_scroll: window.scroll_for(target),
            started_at: ts,
        });
        break;
    }
}

/// Measure and set the initial playhead so targets start styled.
fn bind_initial(trigger: &mut ActiveTrigger) {
    remeasure(trigger);
    let Some(window) = trigger.window else {
        flush(trigger);
        return;
    };
    let Some(scroll_y) = current_scroll_y() else {
        return;
    };
    let raw = window.raw_progress(scroll_y);
    trigger.zone = zone_of(raw);
    match trigger.spec.mode {
        TriggerMode::Toggle => match trigger.zone {
            Zone::Before => trigger.playhead = 0.0,
            // Entered before we bound: animate in from the start.
            Zone::Inside => trigger.direction = 1.0,
            Zone::After => trigger.playhead = trigger.total,
        },
        TriggerMode::Scrub { .. } => {
            trigger.scrub_target = raw.clamp(0.0, 1.0) * trigger.total;
            trigger.playhead = trigger.scrub_target;
        }
    }
    flush(trigger);
}

fn remeasure(trigger: &mut ActiveTrigger) {
    trigger.window = measure_metrics(&trigger.spec)
        .map(|(metrics, viewport_h)| {
            resolve_window(trigger.spec.start, trigger.spec.end, metrics, viewport_h)
        });
}

fn measure_metrics(spec: &TriggerSpec) -> Option<(ElementMetrics, f64)> {
    let win = web_sys::window()?;
    let doc = win.document()?;
    let viewport_h = win.inner_height().ok()?.as_f64()?;
    let scroll_y = win.scroll_y().ok()?;

    let scroll_width = spec
        .measure
        .as_deref()
        .or(spec.trigger.as_deref())
        .and_then(|id| doc.get_element_by_id(id))
        .map(|el| el.scroll_width() as f64)
        .unwrap_or(0.0);

    let metrics = match &spec.trigger {
        None => {
            let height = doc.document_element().map(|el| el.scroll_height() as f64)?;
            ElementMetrics {
                doc_top: 0.0,
                height,
                scroll_width,
            }
        }
        Some(id) => {
            let el = doc.get_element_by_id(id)?;
            let rect = el.get_bounding_client_rect();
            ElementMetrics {
                doc_top: rect.top() + scroll_y,
                height: rect.height(),
                scroll_width,
            }
        }
    };
    Some((metrics, viewport_h))
}

fn current_scroll_y() -> Option<f64> {
    web_sys::window().and_then(|win| win.scroll_y().ok())
}

/// Sample the trigger's timeline at its playhead and write styles.
fn flush(trigger: &mut ActiveTrigger) {
    let samples = trigger.spec.timeline.sample(trigger.playhead);
    for (target_id, values) in samples {
        let element = lookup_element(&mut trigger.elements, &target_id);
        let Some(element) = element else {
            continue;
        };
        write_styles(&element, &css_updates(&values));
    }
}

/// Cached id -> element lookup. Misses are retried on the next flush so
/// late-mounted targets still attach.
fn lookup_element(
    cache: &mut Vec<(String, web_sys::Element)>,
    id: &str,
) -> Option<web_sys::Element> {
    if let Some((_, el)) = cache.iter().find(|(cached, _)| cached == id) {
        return Some(el.clone());
    }
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    cache.push((id.to_string(), el.clone()));
    Some(el)
}

fn write_styles(element: &web_sys::Element, css: &[(&'static str, String)]) {
    let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    for (prop, value) in css {
        let _ = style.set_property(prop, value);
    }
}

/// Apply a timeline at an externally computed playhead, for sub-timelines
/// driven by a containing animation's progress instead of raw scroll.
pub fn apply_timeline_at(timeline: &Timeline, progress: f64) {
    let total = timeline.duration().max(0.001);
    let samples = timeline.sample(progress.clamp(0.0, 1.0) * total);
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for (target_id, values) in samples {
        let Some(element) = doc.get_element_by_id(&target_id) else {
            continue;
        };
        write_styles(&element, &css_updates(&values));
    }
}
