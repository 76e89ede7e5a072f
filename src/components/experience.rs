//! Experience Section Component
//!
//! Work history timeline with the title/underline reveal and six blurred
//! gradient blobs drifting at their own scrub speeds behind it. Blob
//! placement is rolled once at mount.

use leptos::prelude::*;
use leptos_scrolltrigger::{
    use_section_triggers, Ease, ScrollPoint, StyleProp, Timeline, TriggerSpec, Tween, WindowEnd,
};

const BLOB_COUNT: usize = 6;

struct ExperienceEntry {
    year: &'static str,
    period: &'static str,
    role: &'static str,
    summary: &'static str,
    org: &'static str,
}

const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        year: "2023",
        period: "Agustus - Oktober",
        role: "Marketing Communcation",
        summary: "Collaborated in planning and organizing in-house events at OK OCE Office, resulting in improved internal communication and community engagement.",
        org: "OK OCE",
    },
    ExperienceEntry {
        year: "2023",
        period: "Oktober - November",
        role: "Content Maker",
        summary: "Designed visual content and managed social media materials as Graphic Designer and Content Creator for OK OCE platforms, increasing engagement rate across channels.",
        org: "OK OCE",
    },
    ExperienceEntry {
        year: "2023",
        period: "Desember",
        role: "Video Editor",
        summary: "Edited and produced the official company profile video, enhancing corporate branding and stakeholder presentation quality",
        org: "OK OCE",
    },
];

#[derive(Clone, Copy)]
struct Blob {
    size: f64,
    top: f64,
    left: f64,
}

fn roll_blobs() -> Vec<Blob> {
    (0..BLOB_COUNT)
        .map(|i| Blob {
            size: 200.0 + 50.0 * i as f64,
            top: js_sys::Math::random() * 100.0,
            left: js_sys::Math::random() * 100.0,
        })
        .collect()
}

#[component]
pub fn Experience() -> impl IntoView {
    let blobs = roll_blobs();
    let triggers = use_section_triggers();

    Effect::new(move |_| {
        triggers.register(
            TriggerSpec::new("experience").timeline(Timeline::new(vec![
                Tween::new(
                    "experience-title",
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
                    "experience-line",
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

        triggers.register(
            TriggerSpec::new("experience")
                .start(ScrollPoint::top(0.7))
                .timeline(Timeline::new(vec![Tween::new(
                    "experience-content",
                    vec![
                        StyleProp::Y {
                            from: 50.0,
                            to: 0.0,
                        },
                        StyleProp::Opacity { from: 0.0, to: 1.0 },
                    ],
                )
                .duration(1.0)
                .at(0.8)
                .ease(Ease::CubicOut)])),
        );

        for i in 0..BLOB_COUNT {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            triggers.register(
                TriggerSpec::new("experience")
                    .start(ScrollPoint::TOP_BOTTOM)
                    .end(WindowEnd::Point(ScrollPoint::BOTTOM_TOP))
                    .scrub(0.5 + 0.2 * i as f64)
                    .timeline(Timeline::new(vec![Tween::new(
                        format!("experience-blob-{}", i),
                        vec![
                            StyleProp::Y {
                                from: 0.0,
                                to: direction * 100.0,
                            },
                            StyleProp::Rotation {
                                from: 0.0,
                                to: direction * 180.0,
                            },
                            StyleProp::Opacity {
                                from: 0.2,
                                to: 0.3,
                            },
                        ],
                    )
                    .ease(Ease::Linear)])),
            );
        }
    });

    view! {
        <section
            id="experience"
            class="relative min-h-screen bg-gradient-to-b from-black to-[#9a74cf50] overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden">
                {blobs
                    .iter()
                    .enumerate()
                    .map(|(i, blob)| {
                        view! {
                            <div
                                id=format!("experience-blob-{}", i)
                                class="absolute rounded-full bg-gradient-to-r from-purple-500/20 to-pink-500/20 blur-3xl"
                                style=format!(
                                    "width: {}px; height: {}px; top: {:.2}%; left: {:.2}%; opacity: 0.2;",
                                    blob.size,
                                    blob.size,
                                    blob.top,
                                    blob.left,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="mb-16 pt-20">
                    <h2
                        id="experience-title"
                        class="text-4xl md:text-5xl lg:text-6xl font-bold text-white text-center mb-4 opacity-0"
                    >
                        "Experience"
                    </h2>
                    <div
                        id="experience-line"
                        class="w-0 h-1 bg-gradient-to-r from-purple-400 to-black mx-auto opacity-0"
                    ></div>
                </div>

                <div id="experience-content" class="opacity-0 max-w-4xl mx-auto pb-20">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="relative pl-8 md:pl-12 pb-12 border-l border-purple-500/30">
                                    <div class="absolute -left-[9px] top-1 h-4 w-4 rounded-full bg-purple-500/40 border border-purple-500"></div>
                                    <h3 class="text-2xl md:text-4xl font-bold text-purple-300">
                                        {entry.year}
                                    </h3>
                                    <p class="text-purple-200/70 text-sm mb-4">{entry.period}</p>
                                    <h4 class="text-lg md:text-2xl font-semibold mb-4 text-white">
                                        {entry.role}
                                    </h4>
                                    <p class="text-neutral-400 text-sm md:text-base mb-4">
                                        {entry.summary}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        <span class="px-3 py-1 text-xs rounded-full bg-purple-500/20 text-purple-300 border border-purple-500/30">
                                            {entry.org}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
