//! Project Section Component
//!
//! Fetches the project list and lays it out as a pinned, horizontally
//! scrubbed carousel. Panels regroup between one and two cards at the
//! tablet breakpoint, and the strip announces itself to the header
//! because its tall pin wrapper never crosses the section observer's
//! thresholds.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

use leptos_scrolltrigger::{
    apply_timeline_at, panel_progress, use_section_triggers, Ease, ScrollPoint, StyleProp,
    Timeline, TriggerSpec, Tween, WindowEnd,
};

use crate::api;
use crate::carousel;
use crate::components::{ChevronLeftIcon, ChevronRightIcon, ShareIcon};
use crate::models::Project;

/// Project list as the section sees it.
#[derive(Clone)]
enum FetchState {
    Loading,
    Loaded(Vec<Project>),
    Failed(String),
}

/// Pin wrapper height: one viewport plus the strip's scroll extent.
fn pin_height_style(pages: usize) -> String {
    format!("height: calc(100vh + {}vw);", pages * 100)
}

/// The strip holds one viewport-wide panel per page.
fn strip_width_style(pages: usize) -> String {
    format!("width: {}vw;", pages * 100)
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

fn reload_page() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

/// Broadcast which section owns the viewport while the strip is pinned.
fn announce_section(section: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str("section"),
        &JsValue::from_str(section),
    );
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("sectionInView", &init) {
        let _ = win.dispatch_event(&event);
    }
}

/// One card: the image (or an initial-letter stand-in once the image
/// errors) above the title row. The title links out to the live site
/// when the record has one, falling back to the repo.
fn project_card(panel: usize, slot: usize, project: Project) -> impl IntoView {
    let (img_failed, set_img_failed) = signal(false);
    let initial = project
        .title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let title = project.title.clone();
    let alt = project.title.clone();
    let image_url = project.image_url.clone();
    let link = [project.deploy_link.clone(), project.github_repo.clone()]
        .into_iter()
        .find(|url| !url.is_empty());

    view! {
        <div class="relative flex-1 h-full flex flex-col items-center justify-center p-4 sm:p-8 md:p-12 min-w-0">
            <div
                id=format!("project-image-{}-{}", panel, slot)
                class="max-w-full max-h-[60vh] flex items-center justify-center"
            >
                {move || {
                    if img_failed.get() {
                        view! {
                            <div class="w-64 h-64 md:w-80 md:h-80 rounded-2xl bg-gradient-to-br from-purple-500 to-violet-700 flex items-center justify-center text-white text-7xl font-bold">
                                {initial.clone()}
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <img
                                class="max-w-full max-h-[60vh] rounded-2xl object-cover"
                                src=image_url.clone()
                                alt=alt.clone()
                                on:error=move |_| set_img_failed.set(true)
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
            <h2
                id=format!("project-card-title-{}-{}", panel, slot)
                class="md:text-3xl text-sm md:font-bold text-black mt-6 z-50 text-nowrap"
            >
                {match link {
                    Some(href) => {
                        view! {
                            <a
                                class="flex items-center gap-3 hover:text-gray-400 transition-colors duration-300"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {title}
                                <ShareIcon class="w-5 h-5" />
                            </a>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <span class="flex items-center gap-3">
                                {title}
                                <ShareIcon class="w-5 h-5" />
                            </span>
                        }
                            .into_any()
                    }
                }}
            </h2>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let (state, set_state) = signal(FetchState::Loading);
    let (viewport, set_viewport) = signal(viewport_width());
    let (page, set_page) = signal(0_usize);
    let (touch_start, set_touch_start) = signal(0.0_f64);
    let per_page = Memo::new(move |_| carousel::cards_per_page(viewport.get()));
    let triggers = use_section_triggers();

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_projects().await {
                Ok(projects) => set_state.set(FetchState::Loaded(projects)),
                Err(message) => set_state.set(FetchState::Failed(message)),
            }
        });
    });

    Effect::new(move |_| {
        let Some(win) = web_sys::window() else {
            return;
        };
        let resize_cb = Closure::<dyn FnMut()>::new(move || {
            set_viewport.set(viewport_width());
        });
        let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        let cleanup = SendWrapper::new(move || {
            if let Some(win) = web_sys::window() {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
            }
        });
        on_cleanup(move || cleanup.take()());
    });

    // Scroll choreography, rebuilt whenever the data or the card
    // grouping changes. The panel DOM is rendered by then, so the
    // strip can be measured.
    let anim_triggers = triggers.clone();
    Effect::new(move |_| {
        let fetch = state.get();
        let per = per_page.get();
        anim_triggers.clear();

        anim_triggers.register(
            TriggerSpec::new("project").timeline(Timeline::new(vec![
                Tween::new(
                    "project-title",
                    vec![
                        StyleProp::Y {
                            from: 100.0,
                            to: 0.0,
                        },
                        StyleProp::Opacity { from: 0.0, to: 1.0 },
                    ],
                )
                .duration(1.2)
                .ease(Ease::QuartOut),
                Tween::new(
                    "project-line",
                    vec![
                        StyleProp::WidthPercent {
                            from: 0.0,
                            to: 100.0,
                        },
                        StyleProp::Opacity { from: 0.0, to: 1.0 },
                    ],
                )
                .duration(1.0)
                .at(0.5)
                .ease(Ease::QuartInOut),
            ])),
        );

        anim_triggers.register(
            TriggerSpec::new("project")
                .start(ScrollPoint::TOP_BOTTOM)
                .end(WindowEnd::Point(ScrollPoint::BOTTOM_TOP))
                .scrub(0.0)
                .timeline(Timeline::new(vec![Tween::new(
                    "project",
                    vec![StyleProp::BackgroundPosY {
                        from: 0.0,
                        to: 100.0,
                    }],
                )
                .ease(Ease::Linear)])),
        );

        let FetchState::Loaded(projects) = fetch else {
            return;
        };
        if projects.is_empty() {
            return;
        }
        let pages = carousel::page_count(projects.len(), per);

        anim_triggers.register(
            TriggerSpec::new("project")
                .start(ScrollPoint::top(0.7))
                .timeline(Timeline::new(vec![Tween::new(
                    "project-window",
                    vec![
                        StyleProp::Y {
                            from: 100.0,
                            to: 0.0,
                        },
                        StyleProp::RotationX {
                            from: 20.0,
                            to: 0.0,
                        },
                        StyleProp::Opacity { from: 0.0, to: 1.0 },
                    ],
                )
                .duration(1.0)
                .at(0.2)
                .ease(Ease::CubicOut)])),
        );

        let shift = -100.0 * (pages as f64 - 1.0);
        let strip_tweens: Vec<Tween> = (0..pages)
            .map(|i| {
                Tween::new(
                    format!("project-panel-{}", i),
                    vec![StyleProp::XPercent {
                        from: 0.0,
                        to: shift,
                    }],
                )
                .ease(Ease::Linear)
            })
            .collect();

        let panel_timelines: Vec<Timeline> = (0..pages)
            .map(|i| {
                let mut tweens = Vec::new();
                for j in 0..carousel::page_slice(projects.len(), per, i).len() {
                    tweens.push(
                        Tween::new(
                            format!("project-image-{}-{}", i, j),
                            vec![
                                StyleProp::Scale { from: 0.0, to: 1.0 },
                                StyleProp::Rotation {
                                    from: -20.0,
                                    to: 1.0,
                                },
                            ],
                        )
                        .duration(0.5),
                    );
                    tweens.push(
                        Tween::new(
                            format!("project-card-title-{}-{}", i, j),
                            vec![StyleProp::Y {
                                from: 30.0,
                                to: -100.0,
                            }],
                        )
                        .duration(0.3)
                        .at(0.2),
                    );
                }
                Timeline::new(tweens)
            })
            .collect();

        let was_inside = Rc::new(Cell::new(false));
        anim_triggers.register(
            TriggerSpec::new("project-pin")
                .start(ScrollPoint::TOP_TOP)
                .end(WindowEnd::ElementScrollWidth)
                .measure("project-strip")
                .scrub(1.0)
                .snap(pages)
                .timeline(Timeline::new(strip_tweens))
                .on_update(move |p| {
                    set_page.set(carousel::page_at_progress(p, pages));
                    let inside = p > 0.0 && p < 1.0;
                    if inside && !was_inside.get() {
                        announce_section("project");
                    }
                    was_inside.set(inside);
                    for (i, timeline) in panel_timelines.iter().enumerate() {
                        apply_timeline_at(timeline, panel_progress(p, i, pages));
                    }
                }),
        );
    });

    let view_triggers = SendWrapper::new(triggers);
    view! {
        <section id="project" class="relative py-20 bg-[#f6f6f6] overflow-hidden">
            <div class="container mx-auto px-4 mb-16 relative z-10">
                <h2
                    id="project-title"
                    class="text-4xl md:text-5xl lg:text-6xl font-bold text-black text-center mb-4 opacity-0"
                >
                    "Featured Project"
                </h2>
                <div
                    id="project-line"
                    class="w-0 h-1 bg-gradient-to-r from-purple-500 to-pink-500 mx-auto opacity-0"
                ></div>
            </div>

            {move || match state.get() {
                FetchState::Loading => {
                    view! {
                        <div class="container mx-auto px-4">
                            <div class="grid md:grid-cols-2 gap-8">
                                <div class="h-80 rounded-2xl bg-gray-200 animate-pulse"></div>
                                <div class="h-80 rounded-2xl bg-gray-200 animate-pulse hidden md:block"></div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Failed(message) => {
                    view! {
                        <div class="container mx-auto px-4 py-20 text-center">
                            <p class="text-gray-700 mb-6">{message}</p>
                            <button
                                class="px-6 py-3 rounded-xl bg-purple-600 text-white font-bold hover:bg-purple-700 transition-colors"
                                on:click=move |_| reload_page()
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Loaded(projects) if projects.is_empty() => {
                    view! {
                        <div class="container mx-auto px-4 py-20 text-center">
                            <p class="text-gray-500 text-lg">"No projects yet. Check back soon!"</p>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Loaded(projects) => {
                    let per = per_page.get();
                    let count = projects.len();
                    let pages = carousel::page_count(count, per);

                    let panels = (0..pages)
                        .map(|i| {
                            let cards = projects[carousel::page_slice(count, per, i)]
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(j, project)| project_card(i, j, project))
                                .collect_view();
                            view! {
                                <div
                                    id=format!("project-panel-{}", i)
                                    class="w-screen h-full flex-shrink-0 flex items-center justify-center gap-8"
                                >
                                    {cards}
                                </div>
                            }
                        })
                        .collect_view();

                    let dot_triggers = view_triggers.clone();
                    let dots = (0..pages)
                        .map(|i| {
                            let t = dot_triggers.clone();
                            view! {
                                <button
                                    class=move || {
                                        if page.get() == i {
                                            "w-2.5 h-2.5 rounded-full bg-purple-600 transition-colors"
                                        } else {
                                            "w-2.5 h-2.5 rounded-full bg-gray-400 hover:bg-gray-600 transition-colors"
                                        }
                                    }
                                    aria-label=format!("Go to page {}", i + 1)
                                    on:click=move |_| {
                                        t.scroll_to_progress(
                                            "project-pin",
                                            carousel::page_progress(i, pages),
                                        )
                                    }
                                ></button>
                            }
                        })
                        .collect_view();

                    let prev_triggers = view_triggers.clone();
                    let next_triggers = view_triggers.clone();
                    let swipe_triggers = view_triggers.clone();

                    view! {
                        <div id="project-pin" class="relative" style=pin_height_style(pages)>
                            <div
                                id="project-window"
                                class="sticky top-0 h-screen overflow-hidden opacity-0"
                                on:touchstart=move |ev: web_sys::TouchEvent| {
                                    if let Some(touch) = ev.touches().item(0) {
                                        set_touch_start.set(touch.client_x() as f64);
                                    }
                                }
                                on:touchend=move |ev: web_sys::TouchEvent| {
                                    let Some(touch) = ev.changed_touches().item(0) else {
                                        return;
                                    };
                                    let delta = touch.client_x() as f64 - touch_start.get();
                                    let target = carousel::swipe_step(page.get(), pages, delta);
                                    if target != page.get() {
                                        swipe_triggers
                                            .scroll_to_progress(
                                                "project-pin",
                                                carousel::page_progress(target, pages),
                                            );
                                    }
                                }
                            >
                                <div id="project-strip" class="flex h-full" style=strip_width_style(pages)>
                                    {panels}
                                </div>

                                <button
                                    class="absolute left-4 top-1/2 -translate-y-1/2 z-20 p-2 rounded-full bg-black/30 text-white hover:bg-black/50 transition-colors"
                                    aria-label="Previous projects"
                                    on:click=move |_| {
                                        let target = carousel::clamp_page(page.get() as isize - 1, pages);
                                        prev_triggers
                                            .scroll_to_progress(
                                                "project-pin",
                                                carousel::page_progress(target, pages),
                                            );
                                    }
                                >
                                    <ChevronLeftIcon class="w-6 h-6" />
                                </button>
                                <button
                                    class="absolute right-4 top-1/2 -translate-y-1/2 z-20 p-2 rounded-full bg-black/30 text-white hover:bg-black/50 transition-colors"
                                    aria-label="Next projects"
                                    on:click=move |_| {
                                        let target = carousel::clamp_page(page.get() as isize + 1, pages);
                                        next_triggers
                                            .scroll_to_progress(
                                                "project-pin",
                                                carousel::page_progress(target, pages),
                                            );
                                    }
                                >
                                    <ChevronRightIcon class="w-6 h-6" />
                                </button>

                                <div class="absolute bottom-6 left-0 right-0 flex items-center justify-center gap-2 z-20">
                                    {dots}
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_sizes_follow_page_count() {
        assert_eq!(pin_height_style(3), "height: calc(100vh + 300vw);");
        assert_eq!(strip_width_style(3), "width: 300vw;");
        assert_eq!(strip_width_style(1), "width: 100vw;");
    }
}
