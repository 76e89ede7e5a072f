//! Login Page Component
//!
//! Credential form for the dashboard. Field validation runs locally
//! before anything goes over the wire; API failures land in a single
//! error box above the submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::{store_login, use_session};

const LOGIN_FALLBACK_ERROR: &str = "Invalid username or password. Please try again.";

/// Field errors for the two inputs, `None` when a field passes.
fn validate(username: &str, password: &str) -> (Option<&'static str>, Option<&'static str>) {
    let username_error = if username.trim().is_empty() {
        Some("Username is required")
    } else {
        None
    };
    let password_error = if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    };
    (username_error, password_error)
}

fn input_class(has_error: bool) -> String {
    let border = if has_error {
        "border-red-500"
    } else {
        "border-gray-300"
    };
    format!(
        "w-full px-4 py-3 bg-gray-50 border {} rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500 focus:border-transparent disabled:opacity-50 disabled:cursor-not-allowed transition duration-200",
        border
    )
}

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (username_error, set_username_error) = signal(None::<&'static str>);
    let (password_error, set_password_error) = signal(None::<&'static str>);
    let (api_error, set_api_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        let (user_err, pass_err) = validate(&user, &pass);
        set_username_error.set(user_err);
        set_password_error.set(pass_err);
        if user_err.is_some() || pass_err.is_some() {
            return;
        }

        set_loading.set(true);
        set_api_error.set(String::new());
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok((token, logged_in)) => {
                    store_login(&session, token, logged_in);
                    navigate("/dashboard", Default::default());
                }
                Err(message) => {
                    let message = if message.is_empty() {
                        LOGIN_FALLBACK_ERROR.to_string()
                    } else {
                        message
                    };
                    set_api_error.set(message);
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-green-400 via-green-500 to-green-600 flex flex-col">
            <header class="bg-green-900 text-white p-4 mx-4 mt-4 rounded-t-2xl">
                <div class="container mx-auto flex justify-between items-center">
                    <h1 class="text-xl font-semibold italic">"Project Management System"</h1>
                    <div class="text-3xl font-bold font-serif">"ᴊ"</div>
                </div>
            </header>

            <div class="flex-1 flex items-center justify-center p-4">
                <div class="bg-yellow-100 rounded-2xl shadow-2xl p-8 w-full max-w-md">
                    <div class="mb-6">
                        <h2 class="text-3xl font-bold text-green-900 mb-2">"Login"</h2>
                        <p class="text-sm text-gray-700">
                            "Achieve your goals by managing projects smarter with our management system"
                        </p>
                    </div>

                    <form class="space-y-4 text-black" on:submit=submit>
                        <div class="mb-4">
                            <label
                                for="username"
                                class="block text-sm font-medium text-green-900 mb-2"
                            >
                                "username"
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Enter your username"
                                class=move || input_class(username_error.get().is_some())
                                prop:value=move || username.get()
                                disabled=move || loading.get()
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_username_error.set(None);
                                }
                            />
                            {move || {
                                username_error
                                    .get()
                                    .map(|e| view! { <p class="mt-1 text-xs text-red-500">{e}</p> })
                            }}
                        </div>

                        <div class="mb-4">
                            <label
                                for="password"
                                class="block text-sm font-medium text-green-900 mb-2"
                            >
                                "password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                class=move || input_class(password_error.get().is_some())
                                prop:value=move || password.get()
                                disabled=move || loading.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_password_error.set(None);
                                }
                            />
                            {move || {
                                password_error
                                    .get()
                                    .map(|e| view! { <p class="mt-1 text-xs text-red-500">{e}</p> })
                            }}
                        </div>

                        {move || {
                            let message = api_error.get();
                            (!message.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="p-3 bg-red-50 border border-red-200 rounded-lg">
                                            <p class="text-sm text-red-600">{message}</p>
                                        </div>
                                    }
                                })
                        }}

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full py-3 bg-green-700 text-white font-semibold rounded-lg hover:bg-green-800 transition disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer"
                        >
                            {move || if loading.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        let (user, pass) = validate("", "");
        assert_eq!(user, Some("Username is required"));
        assert_eq!(pass, Some("Password is required"));
    }

    #[test]
    fn test_validate_whitespace_username_fails() {
        let (user, _) = validate("   ", "longenough");
        assert_eq!(user, Some("Username is required"));
    }

    #[test]
    fn test_validate_short_password_fails() {
        let (user, pass) = validate("jefta", "12345");
        assert_eq!(user, None);
        assert_eq!(pass, Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_validate_accepts_good_credentials() {
        assert_eq!(validate("jefta", "123456"), (None, None));
    }
}
