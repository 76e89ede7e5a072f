//! API Configuration
//!
//! Base URL and endpoint builders for the portfolio REST API.

/// Base URL of the portfolio API, overridable at build time.
pub const API_URL: &str = match option_env!("PORTFOLIO_API_URL") {
    Some(url) => url,
    None => "/api",
};

pub fn projects_url() -> String {
    format!("{}/projects", API_URL)
}

pub fn project_url(id: &str) -> String {
    format!("{}/projects/{}", API_URL, id)
}

pub fn login_url() -> String {
    format!("{}/auth/login", API_URL)
}

pub fn register_url() -> String {
    format!("{}/auth/register", API_URL)
}

pub fn verify_url() -> String {
    format!("{}/auth/verify", API_URL)
}

pub fn health_url() -> String {
    format!("{}/health", API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url_includes_id() {
        let url = project_url("abc123");
        assert!(url.ends_with("/projects/abc123"));
        assert!(url.starts_with(API_URL));
    }
}
