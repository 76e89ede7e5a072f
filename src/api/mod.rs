//! Portfolio API Client
//!
//! HTTP bindings to the external REST backend, organized by domain.

mod auth;
mod projects;

use gloo_net::http::Response;

use crate::models::ApiMessage;

// Re-export all public items
pub use auth::*;
pub use projects::*;

/// Shown whenever a request never reaches the backend.
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Pull the backend's message out of a non-2xx body, or fall back.
async fn error_message(resp: Response, fallback: &str) -> String {
    match resp.json::<ApiMessage>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => fallback.to_string(),
    }
}
