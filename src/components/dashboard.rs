//! Dashboard Page Component
//!
//! Authenticated project management: a create form with the grouped
//! tech-stack multi-select and image upload, the project grid with
//! update/delete actions, and the account info tab. Visits without a
//! stored session bounce straight to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlInputElement};

use crate::api;
use crate::components::{ChevronDownIcon, MenuIcon};
use crate::models::ProjectForm;
use crate::session::{read_session, store_logout, stored_token, use_session, SessionStateStoreFields};
use crate::tech_stack;

pub(crate) fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Read the chosen file and hand back (file, data-URL preview) through
/// the two setters. The reader callback is one-shot, so it is handed
/// over to the JS side for collection.
pub(crate) fn load_image_preview(
    ev: &web_sys::Event,
    set_file: WriteSignal<Option<File>>,
    set_preview: WriteSignal<Option<String>>,
) {
    let input = event_target::<HtmlInputElement>(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    set_file.set(Some(file.clone()));

    let Ok(reader) = FileReader::new() else {
        return;
    };
    let reader_handle = reader.clone();
    let onloadend = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_handle.result() {
            if let Some(data_url) = result.as_string() {
                set_preview.set(Some(data_url));
            }
        }
    });
    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    let _ = reader.read_as_data_url(&file);
}

/// Searchable multi-select over the tech catalog, grouped by category.
#[component]
pub fn MultiSelectDropdown(
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (search, set_search) = signal(String::new());

    view! {
        <div class="relative">
            <div
                class=move || {
                    let state = if disabled.get() {
                        "opacity-50 cursor-not-allowed"
                    } else {
                        "hover:border-green-500"
                    };
                    format!(
                        "w-full px-3 sm:px-4 py-2 rounded-lg border border-gray-300 bg-white cursor-pointer flex items-center justify-between {}",
                        state,
                    )
                }
                on:click=move |_| {
                    if !disabled.get() {
                        set_open.update(|o| *o = !*o);
                    }
                }
            >
                <span class=move || {
                    if selected.get().is_empty() { "text-gray-400" } else { "text-gray-900" }
                }>
                    {move || {
                        let count = selected.get().len();
                        if count > 0 {
                            format!("{} tech selected", count)
                        } else {
                            "Select technologies...".to_string()
                        }
                    }}
                </span>
                <span class=move || {
                    format!(
                        "inline-block transition-transform {}",
                        if open.get() { "rotate-180" } else { "" },
                    )
                }>
                    <ChevronDownIcon class="w-5 h-5" />
                </span>
            </div>

            {move || {
                let values = selected.get();
                (!values.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-2 text-sm text-gray-600">
                                {format!("Selected: {}", tech_stack::selected_labels(&values))}
                            </div>
                        }
                    })
            }}

            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="absolute z-50 w-full mt-1 bg-white border border-gray-300 rounded-lg shadow-lg max-h-64 overflow-auto">
                                <div class="sticky top-0 bg-white p-2 border-b">
                                    <input
                                        type="text"
                                        placeholder="Search technologies..."
                                        class="w-full px-3 py-1 border border-gray-200 rounded focus:outline-none focus:ring-1 focus:ring-green-500"
                                        prop:value=move || search.get()
                                        on:click=|ev| ev.stop_propagation()
                                        on:input=move |ev| set_search.set(event_target_value(&ev))
                                    />
                                </div>

                                <div class="p-2">
                                    {move || {
                                        tech_stack::filter_grouped(&search.get())
                                            .into_iter()
                                            .map(|(category, options)| {
                                                view! {
                                                    <div class="mb-3">
                                                        <div class="text-xs font-semibold text-gray-500 uppercase px-2 py-1">
                                                            {category}
                                                        </div>
                                                        {options
                                                            .into_iter()
                                                            .map(|(value, label)| {
                                                                view! {
                                                                    <label class="flex items-center px-2 py-1.5 hover:bg-gray-100 cursor-pointer rounded">
                                                                        <input
                                                                            type="checkbox"
                                                                            class="mr-2 text-green-600 focus:ring-green-500"
                                                                            prop:checked=move || {
                                                                                selected.get().iter().any(|v| v == value)
                                                                            }
                                                                            on:change=move |_| {
                                                                                set_selected
                                                                                    .update(|current| {
                                                                                        if let Some(pos) = current
                                                                                            .iter()
                                                                                            .position(|v| v == value)
                                                                                        {
                                                                                            current.remove(pos);
                                                                                        } else {
                                                                                            current.push(value.to_string());
                                                                                        }
                                                                                    });
                                                                            }
                                                                        />
                                                                        <span class="text-sm text-gray-700">{label}</span>
                                                                    </label>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>

                                <div class="sticky bottom-0 bg-white border-t p-2 flex justify-between">
                                    <button
                                        type="button"
                                        class="text-xs px-3 py-1 text-gray-600 hover:text-gray-800"
                                        on:click=move |_| set_selected.set(Vec::new())
                                    >
                                        "Clear all"
                                    </button>
                                    <button
                                        type="button"
                                        class="text-xs px-3 py-1 bg-green-600 text-white rounded hover:bg-green-700 cursor-pointer"
                                        on:click=move |_| set_open.set(false)
                                    >
                                        "Done"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn url_field(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1.5">{label}</label>
            <input
                type="url"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || loading.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-3 sm:px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
            />
        </div>
    }
}

fn account_field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-green-900 mb-1.5">{label}</label>
            <input
                type="text"
                prop:value=value
                disabled=true
                class="w-full px-4 py-2 rounded-lg border border-gray-300 bg-gray-100 text-gray-900"
            />
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (active_tab, set_active_tab) = signal("dashboard");
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (projects, set_projects) = signal(Vec::new());
    let (loading, set_loading) = signal(false);
    let (loading_projects, set_loading_projects) = signal(false);

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (github_repo, set_github_repo) = signal(String::new());
    let (deploy_link, set_deploy_link) = signal(String::new());
    let (demo_video_url, set_demo_video_url) = signal(String::new());
    let (tech_selected, set_tech_selected) = signal(Vec::<String>::new());
    let (image_file, set_image_file) = signal(None::<File>);
    let (image_preview, set_image_preview) = signal(None::<String>);

    let load_projects = move || {
        set_loading_projects.set(true);
        spawn_local(async move {
            match api::get_projects().await {
                Ok(list) => set_projects.set(list),
                Err(e) => web_sys::console::error_1(
                    &format!("[Dashboard] Loading projects failed: {}", e).into(),
                ),
            }
            set_loading_projects.set(false);
        });
    };

    // Auth guard: no stored session means no dashboard.
    let guard_navigate = navigate.clone();
    Effect::new(move |_| {
        if read_session().is_none() {
            guard_navigate("/login", Default::default());
        } else {
            load_projects();
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        let form = ProjectForm {
            title: title.get(),
            description: description.get(),
            github_repo: github_repo.get(),
            deploy_link: deploy_link.get(),
            demo_video_url: demo_video_url.get(),
            tech_stack: tech_selected.get(),
        };
        let image = image_file.get();
        let token = stored_token().unwrap_or_default();
        spawn_local(async move {
            match api::create_project(&form, image.as_ref(), &token).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_github_repo.set(String::new());
                    set_deploy_link.set(String::new());
                    set_demo_video_url.set(String::new());
                    set_tech_selected.set(Vec::new());
                    set_image_file.set(None);
                    set_image_preview.set(None);
                    load_projects();
                    alert("Project berhasil ditambahkan!");
                }
                Err(message) => alert(&format!("Error: {}", message)),
            }
            set_loading.set(false);
        });
    };

    let delete_project = move |id: String| {
        if !confirm("Yakin ingin hapus project ini?") {
            return;
        }
        let token = stored_token().unwrap_or_default();
        spawn_local(async move {
            match api::delete_project(&id, &token).await {
                Ok(()) => {
                    load_projects();
                    alert("Project berhasil dihapus!");
                }
                Err(message) => alert(&format!("Error: {}", message)),
            }
        });
    };

    let update_navigate = navigate.clone();
    let go_update = move |id: String| {
        update_navigate(&format!("/dashboard/update/{}", id), Default::default());
    };

    let desktop_logout_navigate = navigate.clone();
    let mobile_logout_navigate = navigate;

    view! {
        <div
            class="min-h-screen relative overflow-x-hidden bg-gradient-to-br from-green-400 via-green-500 to-green-600"
            style="cursor: default;"
        >
            <header class="sticky top-0 z-40 bg-green-900/90 backdrop-blur text-white text-xs sm:text-sm">
                <div class="mx-auto max-w-6xl px-2 sm:px-4 py-2 sm:py-3 flex items-center justify-between">
                    <h1 class="font-semibold italic">
                        <span class="block sm:hidden text-[11px] leading-tight">"Project"</span>
                        <span class="block sm:hidden text-[11px] leading-tight">"Management"</span>
                        <span class="block sm:hidden text-[11px] leading-tight">"System"</span>
                        <span class="hidden sm:block">"Project Management System"</span>
                    </h1>

                    <button
                        class="lg:hidden inline-flex items-center gap-1 px-2 py-1 rounded bg-green-800 hover:bg-green-700"
                        on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    >
                        <span class="text-[10px] sm:text-xs">"Menu"</span>
                        <MenuIcon class="w-3 h-3 sm:w-4 sm:h-4" />
                    </button>

                    <div class="hidden lg:block text-2xl md:text-3xl font-bold font-serif">"ᴊ"</div>
                </div>

                <div class=move || {
                    format!(
                        "lg:hidden transition-all overflow-hidden {}",
                        if mobile_menu_open.get() { "max-h-40" } else { "max-h-0" },
                    )
                }>
                    <nav class="mx-auto max-w-6xl px-2 sm:px-4 pb-2 flex gap-1">
                        <button
                            class=move || {
                                format!(
                                    "flex-1 px-2 py-1 rounded text-xl sm:text-2xl font-medium {}",
                                    if active_tab.get() == "dashboard" {
                                        "bg-orange-400 text-white"
                                    } else {
                                        "bg-green-800 hover:bg-green-700 text-white/90"
                                    },
                                )
                            }
                            on:click=move |_| {
                                set_active_tab.set("dashboard");
                                set_mobile_menu_open.set(false);
                            }
                        >
                            "Dashboard"
                        </button>
                        <button
                            class=move || {
                                format!(
                                    "flex-1 px-2 py-1 rounded text-xl sm:text-2xl font-medium {}",
                                    if active_tab.get() == "account" {
                                        "bg-orange-400 text-white"
                                    } else {
                                        "bg-green-800 hover:bg-green-700 text-white/90"
                                    },
                                )
                            }
                            on:click=move |_| {
                                set_active_tab.set("account");
                                set_mobile_menu_open.set(false);
                            }
                        >
                            "Info Account"
                        </button>
                        <button
                            class="px-2 py-1 rounded text-[10px] sm:text-xs font-medium bg-red-600 hover:bg-red-700 text-white"
                            on:click=move |_| {
                                store_logout(&session);
                                mobile_logout_navigate("/", Default::default());
                            }
                        >
                            "Log Out"
                        </button>
                    </nav>
                </div>
            </header>

            <div class="mx-auto max-w-6xl px-3 sm:px-4 py-4 sm:py-6 flex flex-col lg:flex-row gap-4">
                <aside class="hidden lg:block lg:w-60 shrink-0">
                    <div class="bg-yellow-100 rounded-2xl p-4 sticky top-20">
                        <nav class="space-y-2">
                            <button
                                class=move || {
                                    format!(
                                        "w-full text-left px-4 py-3 rounded-lg cursor-pointer transition-colors text-sm font-medium {}",
                                        if active_tab.get() == "dashboard" {
                                            "bg-orange-400 text-white"
                                        } else {
                                            "hover:bg-yellow-200 text-gray-700"
                                        },
                                    )
                                }
                                on:click=move |_| set_active_tab.set("dashboard")
                            >
                                "Dashboard"
                            </button>
                            <button
                                class=move || {
                                    format!(
                                        "w-full text-left px-4 py-3 rounded-lg cursor-pointer transition-colors text-sm font-medium {}",
                                        if active_tab.get() == "account" {
                                            "bg-orange-400 text-white"
                                        } else {
                                            "hover:bg-yellow-200 text-gray-700"
                                        },
                                    )
                                }
                                on:click=move |_| set_active_tab.set("account")
                            >
                                "Info Account"
                            </button>
                            <button
                                class="w-full text-left px-4 py-3 rounded-lg hover:bg-yellow-200 text-gray-700 transition-colors text-sm font-medium cursor-pointer"
                                on:click=move |_| {
                                    store_logout(&session);
                                    desktop_logout_navigate("/", Default::default());
                                }
                            >
                                "Log Out"
                            </button>
                        </nav>
                    </div>
                </aside>

                <main class="flex-1 space-y-6">
                    {move || {
                        if active_tab.get() == "dashboard" {
                            let go_update = go_update.clone();
                            view! {
                                <div class="bg-yellow-100 rounded-2xl p-4 sm:p-6 md:p-8 shadow-lg">
                                    <h2 class="text-xl sm:text-2xl font-bold text-cyan-600 mb-4 sm:mb-6">
                                        "Tambah Proyekmu"
                                    </h2>

                                    <form class="space-y-4 max-w-3xl" on:submit=submit>
                                        <div>
                                            <label class="block text-sm font-medium text-gray-700 mb-1.5">
                                                "Judul"
                                            </label>
                                            <input
                                                type="text"
                                                placeholder="Nama project kamu"
                                                required
                                                prop:value=move || title.get()
                                                disabled=move || loading.get()
                                                on:input=move |ev| set_title.set(event_target_value(&ev))
                                                class="w-full px-3 sm:px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 text-gray-900 bg-white"
                                            />
                                        </div>

                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 mb-1.5">
                                                    "Deskripsi"
                                                </label>
                                                <textarea
                                                    placeholder="Deskripsi project"
                                                    required
                                                    rows="4"
                                                    prop:value=move || description.get()
                                                    disabled=move || loading.get()
                                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                                    class="w-full px-3 sm:px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 resize-y text-gray-900 bg-white"
                                                ></textarea>

                                                <div class="mt-4 text-black">
                                                    <label class="block text-sm font-medium text-gray-700 mb-1.5">
                                                        "Tech Stack"
                                                    </label>
                                                    <MultiSelectDropdown
                                                        selected=tech_selected
                                                        set_selected=set_tech_selected
                                                        disabled=loading
                                                    />
                                                </div>
                                            </div>

                                            <div class="space-y-4">
                                                {url_field(
                                                    "Github repo",
                                                    "https://github.com/...",
                                                    github_repo,
                                                    set_github_repo,
                                                    loading,
                                                )}
                                                {url_field(
                                                    "Link Deploy",
                                                    "https://...",
                                                    deploy_link,
                                                    set_deploy_link,
                                                    loading,
                                                )}
                                                {url_field(
                                                    "Demo Video (YouTube/Drive)",
                                                    "https://youtube.com/... atau https://drive.google.com/...",
                                                    demo_video_url,
                                                    set_demo_video_url,
                                                    loading,
                                                )}
                                            </div>
                                        </div>

                                        <div class="flex flex-wrap items-center gap-3">
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
                                                <div class="inline-flex items-center px-4 py-2 bg-orange-400 text-white rounded-lg hover:bg-orange-500 transition">
                                                    "📁 Upload Image"
                                                </div>
                                            </label>

                                            {move || {
                                                image_preview
                                                    .get()
                                                    .map(|src| {
                                                        view! {
                                                            <div class="relative">
                                                                <img
                                                                    src=src
                                                                    alt="Preview"
                                                                    class="h-16 w-16 sm:h-20 sm:w-20 object-cover rounded border"
                                                                />
                                                                <button
                                                                    type="button"
                                                                    class="absolute -top-2 -right-2 bg-red-500 text-white rounded-full w-6 h-6 flex items-center justify-center text-xs cursor-pointer hover:bg-red-600"
                                                                    on:click=move |_| {
                                                                        set_image_preview.set(None);
                                                                        set_image_file.set(None);
                                                                    }
                                                                >
                                                                    "×"
                                                                </button>
                                                            </div>
                                                        }
                                                    })
                                            }}
                                        </div>

                                        <button
                                            type="submit"
                                            disabled=move || loading.get()
                                            class="w-full sm:w-auto px-6 py-3 bg-green-700 text-white font-semibold rounded-lg hover:bg-green-800 transition disabled:opacity-50 cursor-pointer"
                                        >
                                            {move || {
                                                if loading.get() { "Menyimpan..." } else { "Tambah Project" }
                                            }}
                                        </button>
                                    </form>
                                </div>

                                <div class="bg-white rounded-2xl p-4 sm:p-6 md:p-8 shadow-lg">
                                    <h3 class="text-lg sm:text-xl font-bold text-gray-800 mb-4 sm:mb-6">
                                        "Your Projects"
                                    </h3>

                                    {move || {
                                        let go_update = go_update.clone();
                                        if loading_projects.get() {
                                            view! {
                                                <div class="text-center py-8">
                                                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-gray-900"></div>
                                                    <p class="mt-2 text-gray-600">"Loading projects..."</p>
                                                </div>
                                            }
                                                .into_any()
                                        } else if projects.get().is_empty() {
                                            view! {
                                                <p class="text-gray-500 text-center py-12">
                                                    "No projects yet. Add your first project above!"
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                                    {projects
                                                        .get()
                                                        .into_iter()
                                                        .map(|project| {
                                                            let go_update = go_update.clone();
                                                            let update_id = project.id.clone();
                                                            let delete_id = project.id.clone();
                                                            view! {
                                                                <div class="border border-gray-200 rounded-lg overflow-hidden hover:shadow-lg transition">
                                                                    {(!project.image_url.is_empty())
                                                                        .then(|| {
                                                                            view! {
                                                                                <img
                                                                                    src=project.image_url.clone()
                                                                                    alt=project.title.clone()
                                                                                    class="w-full h-40 object-cover"
                                                                                />
                                                                            }
                                                                        })}
                                                                    <div class="p-4">
                                                                        <h4 class="font-semibold text-gray-900 mb-2">
                                                                            {project.title.clone()}
                                                                        </h4>
                                                                        <p class="text-sm text-gray-600 mb-3 line-clamp-2">
                                                                            {project.description.clone()}
                                                                        </p>

                                                                        {(!project.tech_stack.is_empty())
                                                                            .then(|| {
                                                                                view! {
                                                                                    <div class="flex flex-wrap gap-1 mb-3">
                                                                                        {project
                                                                                            .tech_stack
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
                                                                                }
                                                                            })}

                                                                        <div class="flex gap-2 flex-wrap mb-3">
                                                                            {(!project.github_repo.is_empty())
                                                                                .then(|| {
                                                                                    view! {
                                                                                        <a
                                                                                            href=project.github_repo.clone()
                                                                                            target="_blank"
                                                                                            rel="noopener noreferrer"
                                                                                            class="text-xs px-3 py-1 bg-gray-800 text-white rounded hover:bg-gray-700 cursor-pointer"
                                                                                        >
                                                                                            "GitHub"
                                                                                        </a>
                                                                                    }
                                                                                })}
                                                                            {(!project.deploy_link.is_empty())
                                                                                .then(|| {
                                                                                    view! {
                                                                                        <a
                                                                                            href=project.deploy_link.clone()
                                                                                            target="_blank"
                                                                                            rel="noopener noreferrer"
                                                                                            class="text-xs px-3 py-1 bg-blue-600 text-white rounded hover:bg-blue-700 cursor-pointer"
                                                                                        >
                                                                                            "🌐 Live Site"
                                                                                        </a>
                                                                                    }
                                                                                })}
                                                                            {(!project.demo_video_url.is_empty())
                                                                                .then(|| {
                                                                                    view! {
                                                                                        <a
                                                                                            href=project.demo_video_url.clone()
                                                                                            target="_blank"
                                                                                            rel="noopener noreferrer"
                                                                                            class="text-xs px-3 py-1 bg-red-600 text-white rounded hover:bg-red-700"
                                                                                        >
                                                                                            "📹 Demo Video"
                                                                                        </a>
                                                                                    }
                                                                                })}
                                                                        </div>

                                                                        <div class="flex gap-2">
                                                                            <button
                                                                                class="text-xs px-3 py-1 bg-green-600 text-white rounded hover:bg-green-700 font-medium cursor-pointer"
                                                                                on:click=move |_| go_update(update_id.clone())
                                                                            >
                                                                                "Update"
                                                                            </button>
                                                                            <button
                                                                                class="text-xs px-3 py-1 bg-red-600 text-white rounded hover:bg-red-700 font-medium cursor-pointer"
                                                                                on:click=move |_| delete_project(delete_id.clone())
                                                                            >
                                                                                "Delete"
                                                                            </button>
                                                                        </div>
                                                                    </div>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="bg-yellow-100 rounded-2xl p-4 sm:p-6 md:p-8 shadow-lg max-w-2xl">
                                    <h2 class="text-xl sm:text-2xl font-bold text-green-900 mb-4 sm:mb-6">
                                        "Info Account"
                                    </h2>

                                    <div class="space-y-4">
                                        {move || {
                                            let user = session.user().get().unwrap_or_default();
                                            view! {
                                                {account_field("Username", user.username)}
                                                {account_field("Email", user.email)}
                                                {account_field("User ID", user.id)}
                                            }
                                        }}
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}
