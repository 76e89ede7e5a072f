//! Header Component
//!
//! Fixed navigation bar: section links with the active underline, social
//! icons, CV link and the hire-me modal. Which section is active comes
//! from an IntersectionObserver over the section elements plus the
//! carousel's sectionInView events; the document title follows it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::{
    CloseIcon, ContactForm, GithubIcon, InstagramIcon, LinkedinIcon, MenuIcon,
};
use crate::nav::{self, CV_URL, HEADER_OFFSET, NAV_ITEMS, SOCIAL_LINKS};

type ObserverSlot = Rc<
    RefCell<
        Option<(
            web_sys::IntersectionObserver,
            Closure<dyn FnMut(js_sys::Array)>,
        )>,
    >,
>;
type ListenerSlot = Rc<RefCell<Option<Closure<dyn FnMut(web_sys::CustomEvent)>>>>;

/// Smooth scroll to a section, compensating for the fixed header. The
/// lookup waits a tick so a tap in the closing mobile menu still finds
/// settled layout.
fn scroll_to_section(section_id: &'static str) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(100).await;
        let Some(win) = web_sys::window() else {
            return;
        };
        let Some(doc) = win.document() else {
            return;
        };
        let Some(el) = doc.get_element_by_id(section_id) else {
            web_sys::console::warn_1(
                &format!("[Header] Section \"{}\" not found in DOM", section_id).into(),
            );
            return;
        };
        let page_y = win.page_y_offset().unwrap_or(0.0);
        let y = el.get_bounding_client_rect().top() + page_y - HEADER_OFFSET;
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(y);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    });
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

fn social_icon(label: &str, class: &'static str) -> AnyView {
    match label {
        "GitHub" => view! { <GithubIcon class=class/> }.into_any(),
        "Instagram" => view! { <InstagramIcon class=class/> }.into_any(),
        _ => view! { <LinkedinIcon class=class/> }.into_any(),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (form_open, set_form_open) = signal(false);
    let (active, set_active) = signal(String::from("home"));

    let observer_slot: ObserverSlot = Rc::new(RefCell::new(None));
    let listener_slot: ListenerSlot = Rc::new(RefCell::new(None));

    // Watch the five sections; a section counts as active once 30% of it
    // sits inside the middle 60% of the viewport.
    {
        let observer_slot = observer_slot.clone();
        let listener_slot = listener_slot.clone();
        Effect::new(move |_| {
            let Some(win) = web_sys::window() else {
                return;
            };
            let Some(doc) = win.document() else {
                return;
            };

            let cb = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                    if entry.is_intersecting() {
                        set_active.set(entry.target().id().to_lowercase());
                    }
                }
            });
            let opts = web_sys::IntersectionObserverInit::new();
            opts.set_root_margin("-20% 0px -20% 0px");
            opts.set_threshold(&JsValue::from_f64(0.3));
            if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                cb.as_ref().unchecked_ref(),
                &opts,
            ) {
                for (_, id) in NAV_ITEMS.iter() {
                    if let Some(el) = doc.get_element_by_id(id) {
                        observer.observe(&el);
                    }
                }
                *observer_slot.borrow_mut() = Some((observer, cb));
            }

            // The pinned carousel announces itself since its wrapper is
            // too tall for the observer thresholds.
            let on_section =
                Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |ev: web_sys::CustomEvent| {
                    let detail = ev.detail();
                    if let Ok(section) = js_sys::Reflect::get(&detail, &JsValue::from_str("section"))
                    {
                        if let Some(section) = section.as_string() {
                            set_active.set(section.to_lowercase());
                        }
                    }
                });
            let _ = win.add_event_listener_with_callback(
                "sectionInView",
                on_section.as_ref().unchecked_ref(),
            );
            *listener_slot.borrow_mut() = Some(on_section);
        });
    }

    // Single owner of the document title.
    Effect::new(move |_| {
        let title = nav::page_title(&active.get());
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&title);
        }
    });

    {
        let observer_slot = observer_slot.clone();
        let listener_slot = listener_slot.clone();
        let cleanup = SendWrapper::new(move || {
            if let Some((observer, _cb)) = observer_slot.borrow_mut().take() {
                observer.disconnect();
            }
            if let Some(cb) = listener_slot.borrow_mut().take() {
                if let Some(win) = web_sys::window() {
                    let _ = win.remove_event_listener_with_callback(
                        "sectionInView",
                        cb.as_ref().unchecked_ref(),
                    );
                }
            }
            set_body_overflow("unset");
        });
        on_cleanup(move || cleanup.take()());
    }

    let toggle_menu = move |_| {
        let opening = !menu_open.get();
        set_body_overflow(if opening { "hidden" } else { "unset" });
        set_menu_open.set(opening);
    };

    let nav_click = move |id: &'static str| {
        scroll_to_section(id);
        if menu_open.get() {
            set_body_overflow("unset");
            set_menu_open.set(false);
        }
    };

    view! {
        <header class="fixed w-full z-50 transition-all duration-300 bg-black/10 backdrop-blur-sm">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <div
                        class="flex items-center gap-3 cursor-pointer"
                        on:click=move |_| nav_click("home")
                    >
                        <div class="flex items-center">
                            <div class="h-10 w-10 rounded-xl bg-gradient-to-r from-gray-500 to-gray-100 flex items-center justify-center text-purple-600 font-bold text-xl">
                                "J"
                            </div>
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-gray-300 to-gray-100 bg-clip-text text-transparent">
                            "Jefta"
                        </span>
                    </div>

                    <nav class="lg:flex hidden space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, id)| {
                                let id = *id;
                                let label = *label;
                                view! {
                                    <button
                                        class=move || {
                                            let base = "relative text-gray-200 hover:text-violet-400 font-medium transition-colors duration-300 group bg-transparent border-none cursor-pointer";
                                            if active.get() == id {
                                                format!("{} text-violet-400", base)
                                            } else {
                                                base.to_string()
                                            }
                                        }
                                        on:click=move |_| nav_click(id)
                                    >
                                        {label}
                                        <span class=move || {
                                            let base = "absolute bottom-0 left-0 h-0.5 bg-violet-600 transition-all duration-300";
                                            if active.get() == id {
                                                format!("{} w-full", base)
                                            } else {
                                                format!("{} w-0 group-hover:w-full", base)
                                            }
                                        }></span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center gap-4">
                        <div class="flex items-center space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <a
                                            class="text-gray-300 hover:text-violet-400 transition-colors duration-300"
                                            href=*href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=*label
                                        >
                                            {social_icon(label, "w-5 h-5")}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <a
                            href=CV_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-xl border border-gray-400 text-gray-300 font-bold hover:border-violet-400 hover:text-violet-400 hover:bg-violet-400/10 transition-all duration-300"
                        >
                            "Look at My CV"
                        </a>

                        <button
                            class="px-4 py-2 rounded-xl bg-gradient-to-r from-gray-400 to-gray-100 text-violet-700 font-bold hover:from-violet-700 hover:to-purple-700 hover:text-white transition-all duration-500"
                            on:click=move |_| set_form_open.set(true)
                        >
                            "Hire Me"
                        </button>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="text-gray-300 p-2 hover:text-violet-400 transition-colors"
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                            on:click=toggle_menu
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <CloseIcon class="h-6 w-6"/> }.into_any()
                                } else {
                                    view! { <MenuIcon class="h-6 w-6"/> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <nav class=move || {
                let base = "md:hidden overflow-hidden bg-gray-900/95 backdrop-blur-sm shadow-lg transition-all duration-300";
                if menu_open.get() {
                    format!("{} max-h-screen opacity-100", base)
                } else {
                    format!("{} max-h-0 opacity-0", base)
                }
            }>
                <div class="px-5 py-5 space-y-5">
                    <div class="flex flex-col space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, id)| {
                                let id = *id;
                                let label = *label;
                                view! {
                                    <button
                                        class=move || {
                                            let base = "text-gray-300 hover:text-violet-400 font-medium py-3 px-3 transition-all duration-300 text-left rounded-lg hover:bg-violet-600/10";
                                            if active.get() == id {
                                                format!("{} text-violet-400 bg-violet-600/10", base)
                                            } else {
                                                base.to_string()
                                            }
                                        }
                                        on:click=move |_| nav_click(id)
                                    >
                                        <span class="flex items-center gap-2">
                                            {move || {
                                                (active.get() == id)
                                                    .then(|| {
                                                        view! {
                                                            <span class="w-1 h-4 bg-violet-400 rounded-full"></span>
                                                        }
                                                    })
                                            }}
                                            {label}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="pt-4 border-t border-gray-700">
                        <div class="flex space-x-5 mb-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <a
                                            href=*href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=*label
                                            class="text-gray-300 hover:text-violet-400 transition-colors"
                                        >
                                            {social_icon(label, "h-5 w-5")}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <a
                            href=CV_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block w-full px-4 py-3 mb-3 text-center rounded-lg border border-gray-400 text-gray-300 font-bold hover:border-violet-400 hover:text-violet-400 hover:bg-violet-400/10 transition-all duration-300"
                        >
                            "Look at My CV"
                        </a>

                        <button
                            class="w-full px-4 py-3 rounded-lg bg-gradient-to-r from-violet-600 to-violet-400 text-white font-bold hover:from-violet-700 hover:to-purple-700 transition-all"
                            on:click=move |_| {
                                set_body_overflow("unset");
                                set_menu_open.set(false);
                                set_form_open.set(true);
                            }
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>
            </nav>
        </header>

        <ContactForm is_open=form_open set_open=set_form_open/>
    }
}
