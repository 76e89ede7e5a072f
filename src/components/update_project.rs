//! Update Project Page Component
//!
//! Loads one project into the same form the dashboard creates with,
//! then PUTs the edits back. Picking a new image swaps the preview;
//! cancelling the new image restores the stored one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use web_sys::File;

use super::dashboard::{alert, load_image_preview};
use crate::api;
use crate::components::MultiSelectDropdown;
use crate::session::stored_token;
use crate::tech_stack;

#[component]
pub fn UpdateProject() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let (loading, set_loading) = signal(false);
    let (loading_project, set_loading_project) = signal(true);

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (github_repo, set_github_repo) = signal(String::new());
    let (deploy_link, set_deploy_link) = signal(String::new());
    let (demo_video_url, set_demo_video_url) = signal(String::new());
    let (tech_selected, set_tech_selected) = signal(Vec::<String>::new());
    let (image_file, set_image_file) = signal(None::<File>);
    let (image_preview, set_image_preview) = signal(None::<String>);
    let (stored_image, set_stored_image) = signal(None::<String>);

    // Guard on the token, then pull the record for this id.
    let guard_navigate = navigate.clone();
    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        if stored_token().is_none() {
            guard_navigate("/login", Default::default());
            return;
        }
        set_loading_project.set(true);
        spawn_local(async move {
            match api::get_project(&id).await {
                Ok(project) => {
                    set_title.set(project.title);
                    set_description.set(project.description);
                    set_github_repo.set(project.github_repo);
                    set_deploy_link.set(project.deploy_link);
                    set_demo_video_url.set(project.demo_video_url);
                    set_tech_selected.set(project.tech_stack);
                    if !project.image_url.is_empty() {
                        set_image_preview.set(Some(project.image_url.clone()));
                        set_stored_image.set(Some(project.image_url));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[UpdateProject] Loading project failed: {}", e).into(),
                    );
                    alert("Failed to load project");
                }
            }
            set_loading_project.set(false);
        });
    });

    let submit_navigate = navigate.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        let id = params.get().get("id").unwrap_or_default();
        let form = crate::models::ProjectForm {
            title: title.get(),
            description: description.get(),
            github_repo: github_repo.get(),
            deploy_link: deploy_link.get(),
            demo_video_url: demo_video_url.get(),
            tech_stack: tech_selected.get(),
        };
        let image = image_file.get();
        let token = stored_token().unwrap_or_default();
        let navigate = submit_navigate.clone();
        spawn_local(async move {
            match api::update_project(&id, &form, image.as_ref(), &token).await {
                Ok(()) => {
                    alert("Project berhasil diupdate!");
                    navigate("/dashboard", Default::default());
                }
                Err(message) => alert(&format!("Error: {}", message)),
            }
            set_loading.set(false);
        });
    };

    let cancel_navigate = navigate;
    let cancel = move |_: web_sys::MouseEvent| {
        cancel_navigate("/dashboard", Default::default());
    };

    view! {
        {move || {
            if loading_project.get() {
                view! {
                    <div class="min-h-screen bg-gradient-to-br from-green-400 via-green-500 to-green-600 flex items-center justify-center">
                        <div class="text-white text-center">
                            <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-white"></div>
                            <p class="mt-4">"Loading project..."</p>
                        </div>
                    </div>
                }
                    .into_any()
            } else {
                let submit = submit.clone();
                let kembali = cancel.clone();
                let batal = cancel.clone();
                view! {
                    <div class="min-h-screen bg-gradient-to-br from-green-400 via-green-500 to-green-600 pt-6 sm:pt-8">
                        <header class="bg-green-900 text-white p-4 flex justify-between items-center rounded-t-2xl mx-4">
                            <h1 class="text-xl font-semibold italic">"Update Project"</h1>
                            <div class="text-3xl font-bold font-serif">"ᴊ"</div>
                        </header>

                        <div class="p-4">
                            <div class="max-w-4xl mx-auto">
                                <div class="bg-yellow-100 rounded-2xl p-8 shadow-lg">
                                    <div class="flex justify-between items-center mb-6">
                                        <h2 class="text-2xl font-bold text-cyan-600">"Update Proyekmu"</h2>
                                        <button
                                            class="px-4 py-2 text-gray-600 hover:text-gray-800 cursor-pointer"
                                            on:click=kembali
                                        >
                                            "← Kembali"
                                        </button>
                                    </div>

                                    <form class="space-y-4" on:submit=submit>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">
                                                "Judul"
                                            </label>
                                            <input
                                                type="text"
                                                placeholder="Nama project kamu"
                                                required
                                                prop:value=move || title.get()
                                                disabled=move || loading.get()
                                                on:input=move |ev| set_title.set(event_target_value(&ev))
                                                class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
                                            />
                                        </div>

                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 mb-2">
                                                    "Deskripsi"
                                                </label>
                                                <textarea
                                                    placeholder="Deskripsi project"
                                                    required
                                                    rows="4"
                                                    prop:value=move || description.get()
                                                    disabled=move || loading.get()
                                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                                    class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 resize-none text-gray-900 bg-white"
                                                ></textarea>

                                                <div class="mt-4">
                                                    <label class="block text-sm font-medium text-gray-700 mb-2">
                                                        "Tech Stack"
                                                    </label>
                                                    <MultiSelectDropdown
                                                        selected=tech_selected
                                                        set_selected=set_tech_selected
                                                        disabled=loading
                                                    />

                                                    {move || {
                                                        let values = tech_selected.get();
                                                        (!values.is_empty())
                                                            .then(|| {
                                                                view! {
                                                                    <div class="mt-3 p-3 bg-white rounded-lg border border-gray-200">
                                                                        <p class="text-xs text-gray-500 mb-2">"Preview:"</p>
                                                                        <div class="flex flex-wrap gap-1">
                                                                            {values
                                                                                .iter()
                                                                                .filter_map(|value| tech_stack::find_tech(value))
                                                                                .map(|(label, category)| {
                                                                                    view! {
                                                                                        <span class=format!(
                                                                                            "inline-block px-2 py-1 text-xs rounded-full {}",
                                                                                            tech_stack::badge_class(category),
                                                                                        )>{label}</span>
                                                                                    }
                                                                                })
                                                                                .collect_view()}
                                                                        </div>
                                                                    </div>
                                                                }
                                                            })
                                                    }}
                                                </div>
                                            </div>

                                            <div class="space-y-4">
                                                <div>
                                                    <label class="block text-sm font-medium text-gray-700 mb-2">
                                                        "Github repo"
                                                    </label>
                                                    <input
                                                        type="url"
                                                        placeholder="https://github.com/..."
                                                        prop:value=move || github_repo.get()
                                                        disabled=move || loading.get()
                                                        on:input=move |ev| set_github_repo.set(event_target_value(&ev))
                                                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
                                                    />
                                                </div>

                                                <div>
                                                    <label class="block text-sm font-medium text-gray-700 mb-2">
                                                        "Link Deploy"
                                                    </label>
                                                    <input
                                                        type="url"
                                                        placeholder="https://..."
                                                        prop:value=move || deploy_link.get()
                                                        disabled=move || loading.get()
                                                        on:input=move |ev| set_deploy_link.set(event_target_value(&ev))
                                                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
                                                    />
                                                </div>

                                                <div>
                                                    <label class="block text-sm font-medium text-gray-700 mb-2">
                                                        "Demo Video (YouTube/Drive)"
                                                    </label>
                                                    <input
                                                        type="url"
                                                        placeholder="https://youtube.com/... atau https://drive.google.com/..."
                                                        prop:value=move || demo_video_url.get()
                                                        disabled=move || loading.get()
                                                        on:input=move |ev| set_demo_video_url.set(event_target_value(&ev))
                                                        class="w-full px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
                                                    />
                                                </div>
                                            </div>
                                        </div>

                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-2">
                                                "Gambar Project"
                                            </label>

                                            {move || {
                                                image_preview
                                                    .get()
                                                    .map(|src| {
                                                        view! {
                                                            <div class="mb-3">
                                                                <img
                                                                    src=src
                                                                    alt="Preview"
                                                                    class="h-40 w-auto object-cover rounded border"
                                                                />
                                                            </div>
                                                        }
                                                    })
                                            }}

                                            <label class="cursor-pointer">
                                                <input
                                                    type="file"
                                                    accept="image/*"
                                                    class="hidden"
                                                    disabled=move || loading.get()
                                                    on:change=move |ev| {
                                                        load_image_preview(&ev, set_image_file, set_image_preview)
                                                    }
                                                />
                                                <div class="inline-flex items-center px-4 py-2 bg-orange-400 text-white rounded-lg hover:bg-orange-500 transition cursor-pointer">
                                                    {move || {
                                                        if image_preview.get().is_some() {
                                                            "📁 Ganti Gambar"
                                                        } else {
                                                            "📁 Upload Gambar"
                                                        }
                                                    }}
                                                </div>
                                            </label>

                                            {move || {
                                                image_file
                                                    .get()
                                                    .is_some()
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class="ml-3 text-sm text-red-600 hover:text-red-800 cursor-pointer"
                                                                on:click=move |_| {
                                                                    set_image_file.set(None);
                                                                    set_image_preview.set(stored_image.get());
                                                                }
                                                            >
                                                                "Batalkan gambar baru"
                                                            </button>
                                                        }
                                                    })
                                            }}
                                        </div>

                                        <div class="flex gap-3">
                                            <button
                                                type="submit"
                                                disabled=move || loading.get()
                                                class="flex-1 py-3 bg-green-700 text-white font-semibold rounded-lg hover:bg-green-800 transition disabled:opacity-50"
                                            >
                                                {move || {
                                                    if loading.get() { "Menyimpan..." } else { "Update Project" }
                                                }}
                                            </button>

                                            <button
                                                type="button"
                                                disabled=move || loading.get()
                                                class="px-6 py-3 bg-gray-500 text-white font-semibold rounded-lg hover:bg-gray-600 transition disabled:opacity-50"
                                                on:click=batal
                                            >
                                                "Batal"
                                            </button>
                                        </div>
                                    </form>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
