//! Progress Bar Component
//!
//! Fixed reading-progress bar at the top of the page, bound to document
//! scroll. The fill recolors as the reader moves through the page.

use leptos::prelude::*;
use leptos_scrolltrigger::{use_section_triggers, Ease, StyleProp, Timeline, TriggerSpec, Tween};

/// Fill color bands over document progress.
fn fill_color(progress: f64) -> &'static str {
    if progress > 0.75 {
        "#7E22CE"
    } else if progress > 0.5 {
        "#A855F7"
    } else if progress > 0.1 {
        "#B53389"
    } else {
        "#C54BBC"
    }
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);
    let triggers = use_section_triggers();

    Effect::new(move |_| {
        triggers.register(
            TriggerSpec::document()
                .scrub(0.3)
                .timeline(Timeline::new(vec![Tween::new(
                    "progress-fill",
                    vec![StyleProp::WidthPercent {
                        from: 0.0,
                        to: 100.0,
                    }],
                )
                .ease(Ease::Linear)]))
                .on_update(move |p| set_progress.set(p)),
        );
    });

    view! {
        <div class="fixed top-0 left-0 w-full h-[5px] bg-gray-800 z-50">
            <div
                id="progress-fill"
                class="h-full w-0 bg-[#A1045A] transition-colors duration-300"
                style:background-color=move || fill_color(progress.get())
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color_bands() {
        assert_eq!(fill_color(0.05), "#C54BBC");
        assert_eq!(fill_color(0.3), "#B53389");
        assert_eq!(fill_color(0.6), "#A855F7");
        assert_eq!(fill_color(0.9), "#7E22CE");
    }
}
