//! Hero Section Component
//!
//! Landing viewport with the staggered headline entrance and the
//! decorative orb filling the right column.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before the headline slides in, in ms.
const HEADLINE_DELAY_MS: u32 = 1300;
/// Extra delay before the tagline follows, in ms.
const TAGLINE_STAGGER_MS: u32 = 500;

fn entrance_class(shown: bool) -> &'static str {
    if shown {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-20"
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (headline_in, set_headline_in) = signal(false);
    let (tagline_in, set_tagline_in) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(HEADLINE_DELAY_MS).await;
            set_headline_in.set(true);
            gloo_timers::future::TimeoutFuture::new(TAGLINE_STAGGER_MS).await;
            set_tagline_in.set(true);
        });
    });

    view! {
        <section
            id="home"
            class="relative min-h-[100svh] bg-gradient-to-b from-violet-900 to-black overflow-visible"
        >
            <div class="mx-auto w-full max-w-[1760px] px-4 lg:pl-40 py-16 md:py-24">
                <div class="grid items-center gap-8 lg:grid-cols-12">
                    <div class="order-2 lg:order-1 lg:col-span-5 text-center lg:text-left">
                        <h1 class=move || {
                            format!(
                                "font-extrabold tracking-tight text-white text-[clamp(2.5rem,6.5vw,6.5rem)] leading-[1.05] transition-all duration-700 ease-out {}",
                                entrance_class(headline_in.get()),
                            )
                        }>
                            "Full-Stack Development"
                            <br/>
                            "with Precision"
                        </h1>

                        <p class=move || {
                            format!(
                                "mt-6 text-purple-200/90 text-[clamp(1rem,1.2vw+0.75rem,1.35rem)] max-w-3xl mx-auto lg:mx-0 transition-all duration-700 ease-out {}",
                                entrance_class(tagline_in.get()),
                            )
                        }>
                            "Expert in Next.js, MERN, and modern frameworks to deliver reliable digital solutions"
                        </p>
                    </div>

                    <div class="order-1 lg:order-2 lg:col-span-7 relative">
                        <div class="relative ml-auto w-full h-[75vh] min-h-[520px] lg:min-h-[640px] xl:min-h-[720px] max-w-none lg:translate-x-2 scale-[1.15] md:scale-[1.2] xl:scale-[1.25] origin-center">
                            <div
                                class="absolute inset-0 m-auto w-[60%] aspect-square rounded-full bg-gradient-to-tr from-purple-600 via-violet-500 to-fuchsia-400 blur-2xl opacity-70 animate-pulse"
                                aria-hidden="true"
                            ></div>
                            <div
                                class="absolute inset-0 m-auto w-[38%] aspect-square rounded-full bg-gradient-to-b from-violet-300 to-purple-800 shadow-[0_0_120px_40px_rgba(147,51,234,0.35)]"
                                aria-hidden="true"
                            ></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
