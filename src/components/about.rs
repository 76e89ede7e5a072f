//! About Section Component
//!
//! Full-screen panel with the rising title/intro reveal and a field of
//! parallax stars. Star placement is rolled once at mount so re-renders
//! and window resizes never reshuffle the sky.

use leptos::prelude::*;
use leptos_scrolltrigger::{
    use_section_triggers, Ease, ScrollPoint, StyleProp, Timeline, TriggerSpec, Tween, WindowEnd,
};

const STAR_COUNT: usize = 10;

#[derive(Clone, Copy)]
struct Star {
    size: f64,
    top: f64,
    left: f64,
    opacity: f64,
    scrub: f64,
    drift_x: f64,
    drift_y: f64,
    spin: f64,
}

/// Roll the star field. Even stars drift right, odd ones left, and the
/// later a star sits in the list the bigger and farther it travels.
fn roll_stars() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|i| {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            Star {
                size: 10.0 + 3.0 * i as f64,
                top: js_sys::Math::random() * 100.0,
                left: js_sys::Math::random() * 100.0,
                opacity: 0.2 + js_sys::Math::random() * 0.4,
                scrub: 0.5 + js_sys::Math::random() * 0.5,
                drift_x: direction * (100.0 + 20.0 * i as f64),
                drift_y: direction * -50.0 - 10.0 * i as f64,
                spin: direction * 360.0,
            }
        })
        .collect()
}

#[component]
pub fn About() -> impl IntoView {
    let stars = roll_stars();
    let star_anim = stars.clone();
    let triggers = use_section_triggers();

    Effect::new(move |_| {
        triggers.register(
            TriggerSpec::new("about")
                .start(ScrollPoint::top(0.4))
                .timeline(Timeline::new(vec![
                    Tween::new(
                        "about-title",
                        vec![
                            StyleProp::Y {
                                from: 100.0,
                                to: -300.0,
                            },
                            StyleProp::Opacity { from: 0.0, to: 1.0 },
                        ],
                    )
                    .duration(0.8),
                    Tween::new(
                        "about-intro",
                        vec![
                            StyleProp::Y {
                                from: 100.0,
                                to: -400.0,
                            },
                            StyleProp::Opacity { from: 0.0, to: 1.0 },
                            StyleProp::Blur {
                                from: 10.0,
                                to: 0.0,
                            },
                        ],
                    )
                    .duration(1.5),
                ])),
        );

        for (i, star) in star_anim.iter().enumerate() {
            triggers.register(
                TriggerSpec::new("about")
                    .start(ScrollPoint::TOP_BOTTOM)
                    .end(WindowEnd::Point(ScrollPoint::BOTTOM_TOP))
                    .scrub(star.scrub)
                    .timeline(Timeline::new(vec![Tween::new(
                        format!("about-star-{}", i),
                        vec![
                            StyleProp::X {
                                from: 0.0,
                                to: star.drift_x,
                            },
                            StyleProp::Y {
                                from: 0.0,
                                to: star.drift_y,
                            },
                            StyleProp::Rotation {
                                from: 0.0,
                                to: star.spin,
                            },
                        ],
                    )
                    .ease(Ease::Linear)])),
            );
        }
    });

    view! {
        <section
            id="about"
            class="h-screen relative overflow-hidden bg-gradient-to-b from-black to-[#9a74cf50]"
        >
            <div class="absolute inset-0 overflow-hidden">
                {stars
                    .iter()
                    .enumerate()
                    .map(|(i, star)| {
                        view! {
                            <div
                                id=format!("about-star-{}", i)
                                class="absolute rounded-full"
                                style=format!(
                                    "width: {}px; height: {}px; background-color: white; opacity: {:.3}; top: {:.2}%; left: {:.2}%;",
                                    star.size,
                                    star.size,
                                    star.opacity,
                                    star.top,
                                    star.left,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-4 h-full flex flex-col items-center justify-center">
                <h1
                    id="about-title"
                    class="text-4xl md:text-6xl font-bold sm:mb-16 text-center text-white opacity-0"
                >
                    "About Me"
                </h1>
            </div>

            <div
                id="about-intro"
                class="absolute lg:bottom-[-20rem] md:bottom-[-10rem] bottom-[-20rem] left-0 w-full flex md:flex-row flex-col justify-between lg:px-24 items-center opacity-0"
            >
                <h3 class="text-sm md:text-2xl font-bold text-purple-200 z-50 lg:max-w-[45rem] max-w-[27rem] tracking-wider md:mt-20 sm:mt-[-40rem] mt-[-32rem]">
                    "Lorem ipsum, dolor sit amet consectetur adipisicing elit. Similique,
                    aperiam qui, quo nihil repellat nobis at ducimus delectus fugiat,
                    quibusdam doloremque deleniti saepe quis ratione iure voluptas quasi
                    nesciunt nam."
                </h3>

                <img
                    class="lg:h-[40rem] md:h-[25rem] h-[20rem] mix-blend-lighten"
                    src="images/gradient.png"
                    alt="Gradient decoration"
                />
            </div>
        </section>
    }
}
