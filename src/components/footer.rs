//! Footer Component

use leptos::prelude::*;

use crate::components::{GithubIcon, InstagramIcon, LinkedinIcon};
use crate::nav::SOCIAL_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-16 px-6 mt-40">
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-between items-center">
                    <h2 class="text-3xl font-bold bg-gradient-to-r from-purple-400 to-purple-200 bg-clip-text text-transparent">
                        "Jefta"
                    </h2>

                    <div>
                        <h3 class="text-3xl font-semibold mb-4 text-purple-200">"Connect"</h3>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    let icon = match *label {
                                        "GitHub" => view! { <GithubIcon class="w-5 h-5"/> }.into_any(),
                                        "Instagram" => {
                                            view! { <InstagramIcon class="w-5 h-5"/> }.into_any()
                                        }
                                        _ => view! { <LinkedinIcon class="w-5 h-5"/> }.into_any(),
                                    };
                                    view! {
                                        <a
                                            class="text-gray-700 hover:text-violet-400 transition-colors"
                                            href=*href
                                            aria-label=*label
                                        >
                                            {icon}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-700 mt-12 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-500 text-sm">"@2025 Jefta"</p>

                    <div class="flex space-x-6 mt-4 md:mt-0">
                        <a class="text-gray-50 hover:text-white text-sm transition-colors" href="">
                            "Privacy Policy"
                        </a>
                        <a class="text-gray-50 hover:text-white text-sm transition-colors" href="">
                            "Terms of service"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
