//! Auth Commands
//!
//! Login call for the dashboard. The session itself lives in
//! localStorage, see `crate::session`.

use gloo_net::http::Request;
use serde::Serialize;

use super::{error_message, NETWORK_ERROR};
use crate::config;
use crate::models::{LoginResponse, User};

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

const LOGIN_FAILED: &str = "Login failed";

/// Exchange credentials for a token/user pair.
///
/// Non-2xx responses surface the backend's message when it sends one. A
/// 2xx body without `success`, a token and a user also counts as failed.
pub async fn login(username: &str, password: &str) -> Result<(String, User), String> {
    let request = Request::post(&config::login_url())
        .json(&LoginArgs { username, password })
        .map_err(|e| e.to_string())?;

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Login request failed: {}", e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, LOGIN_FAILED).await);
    }

    let body = resp
        .json::<LoginResponse>()
        .await
        .map_err(|e| e.to_string())?;

    match body.user {
        Some(user) if body.success && !body.token.is_empty() => Ok((body.token, user)),
        _ => Err(LOGIN_FAILED.to_string()),
    }
}
