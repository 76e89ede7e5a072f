//! Contact Section Component
//!
//! Pinned closer: the page holds for two extra viewport heights while a
//! circle swallows the screen and the call to action fades in. The pin is
//! a sticky child inside a tall wrapper, so the scroll window stays two
//! viewports long.

use leptos::prelude::*;
use leptos_scrolltrigger::{
    use_section_triggers, Ease, Rgb, ScrollPoint, StyleProp, Timeline, TriggerSpec, Tween,
    WindowEnd,
};

use crate::components::ContactForm;

#[component]
pub fn Contact() -> impl IntoView {
    let (form_open, set_form_open) = signal(false);
    let triggers = use_section_triggers();

    Effect::new(move |_| {
        triggers.register(
            TriggerSpec::new("contact-pin")
                .start(ScrollPoint::TOP_TOP)
                .end(WindowEnd::ViewportHeights(2.0))
                .scrub(0.5)
                .timeline(Timeline::new(vec![
                    Tween::new(
                        "contact-circle",
                        vec![
                            StyleProp::Scale { from: 1.0, to: 5.0 },
                            StyleProp::BackgroundColor {
                                from: Rgb::new(255, 255, 255),
                                to: Rgb::new(147, 51, 234),
                            },
                        ],
                    )
                    .duration(0.5)
                    .ease(Ease::QuadInOut),
                    Tween::new(
                        "contact-initial-text",
                        vec![StyleProp::Opacity { from: 1.0, to: 0.0 }],
                    )
                    .duration(0.2)
                    .at(0.1)
                    .ease(Ease::QuadOut),
                    Tween::new(
                        "contact-circle",
                        vec![
                            StyleProp::Scale {
                                from: 5.0,
                                to: 17.0,
                            },
                            StyleProp::BackgroundColor {
                                from: Rgb::new(147, 51, 234),
                                to: Rgb::new(233, 213, 255),
                            },
                            StyleProp::GlowAlpha {
                                color: Rgb::new(233, 213, 255),
                                from: 0.0,
                                to: 0.3,
                            },
                        ],
                    )
                    .duration(0.5)
                    .at(0.6)
                    .ease(Ease::CubicInOut),
                    Tween::new(
                        "contact-final-text",
                        vec![StyleProp::Opacity { from: 0.0, to: 1.0 }],
                    )
                    .duration(0.2)
                    .at(0.7)
                    .ease(Ease::CubicIn),
                ])),
        );
    });

    view! {
        <div id="contact-pin" class="relative h-[300vh]" style="overscroll-behavior: none;">
            <section
                id="contact"
                class="sticky top-0 h-screen flex items-center justify-center bg-black relative overflow-hidden"
            >
                <div
                    id="contact-circle"
                    class="w-24 sm:w-28 md:w-32 h-24 sm:h-28 md:h-32 rounded-full flex items-center justify-center relative transition-shadow duration-1000 shadow-violet-300/50 shadow-lg bg-gradient-to-r from-violet-400 to-pink-100"
                >
                    <p
                        id="contact-initial-text"
                        class="text-black font-bold text-base sm:text-lg md:text-xl absolute inset-0 flex items-center text-center"
                    >
                        "SCROLL DOWN"
                    </p>

                    <div
                        id="contact-final-text"
                        class="text-center relative flex flex-col items-center justify-center opacity-0"
                    >
                        <h1 class="text-black md:w-[10rem] w-[20rem] lg:scale-[0.4] sm:scale-[0.25] scale-[0.07] md:font-bold text-sm sm:text-base leading-none mb-5">
                            "Turn Ideas into Products."
                        </h1>
                        <p class="text-black lg:w-[40rem] w-[20rem] absolute sm:mt-3 mt-1 md:scale-[0.1] scale-[0.068]">
                            "I’m Jefta, a Full-Stack Developer who combines React with a solid backend to deliver fast, dynamic web experiences."
                        </p>

                        <button
                            class="px-10 py-2 rounded-xl bg-black hover:bg-white hover:text-balance transition-all duration-500 scale-[0.1] absolute sm:mt-9 mt-7 text-nowrap"
                            on:click=move |_| set_form_open.set(true)
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>

                <ContactForm is_open=form_open set_open=set_form_open/>
            </section>
        </div>
    }
}
