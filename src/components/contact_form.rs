//! Contact Form Component
//!
//! Modal dialog with the get-in-touch form. Clicking the backdrop closes
//! it; clicks inside the card stay inside.

use leptos::prelude::*;

use crate::components::CloseIcon;

#[component]
pub fn ContactForm(is_open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        web_sys::console::log_1(&"[ContactForm] Form submitted".into());
        set_open.set(false);
    };

    move || {
        is_open.get().then(|| {
            view! {
                <div
                    class="fixed inset-0 bg-black/50 backdrop-blur-sm z-[100] flex items-center justify-center p-4"
                    on:click=move |_| set_open.set(false)
                >
                    <div
                        class="bg-gray-800 rounded-xl shadow-xl w-full max-w-md p-6"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex justify-between items-center mb-4">
                            <h1 class="text-2xl font-bold text-gray-200">"Get in touch"</h1>
                            <button
                                class="text-gray-400 hover:text-white transition-colors"
                                on:click=move |_| set_open.set(false)
                            >
                                <CloseIcon class="w-5 h-5"/>
                            </button>
                        </div>

                        <form class="space-y-4" on:submit=submit>
                            <div>
                                <label for="name" class="block text-sm font-medium text-gray-300 mb-1">
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    placeholder="Your Name"
                                    class="w-full px-4 py-2 border border-gray-600 rounded-lg focus:ring-2 focus:ring-violet-500 focus:border-violet-500 bg-gray-700 text-white placeholder-gray-400"
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-gray-300 mb-1">
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    placeholder="Your Email"
                                    class="w-full px-4 py-2 border border-gray-600 rounded-lg focus:ring-2 focus:ring-violet-500 focus:border-violet-500 bg-gray-700 text-white placeholder-gray-400"
                                />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium text-gray-300 mb-1">
                                    "Message"
                                </label>
                                <textarea
                                    rows="4"
                                    id="message"
                                    name="message"
                                    required
                                    placeholder="How can I help you?"
                                    class="w-full px-4 py-2 border border-gray-600 rounded-lg focus:ring-2 focus:ring-violet-500 focus:border-violet-500 bg-gray-700 text-white placeholder-gray-400 resize-none"
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="w-full px-4 py-3 bg-gradient-to-r from-violet-600 to-violet-400 text-white font-bold hover:from-violet-700 hover:to-purple-700 transition-all duration-300 rounded-lg shadow-md hover:shadow-lg hover:shadow-violet-600/30"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            }
        })
    }
}
