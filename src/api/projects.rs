//! Project Commands
//!
//! Public reads for the landing page plus the authenticated CRUD calls
//! used by the dashboard. Create and update ship multipart bodies so
//! the image file can ride along with the text fields.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{bearer, error_message, NETWORK_ERROR};
use crate::config;
use crate::models::{Project, ProjectEnvelope, ProjectForm, ProjectsEnvelope};

const FETCH_PROJECTS_FAILED: &str = "Failed to fetch projects";
const FETCH_PROJECT_FAILED: &str = "Failed to fetch project";
const CREATE_FAILED: &str = "Failed to create project";
const UPDATE_FAILED: &str = "Failed to update project";
const DELETE_FAILED: &str = "Failed to delete project";
const FORM_BUILD_FAILED: &str = "Could not assemble the upload payload";

pub async fn get_projects() -> Result<Vec<Project>, String> {
    let resp = match Request::get(&config::projects_url()).send().await {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Fetching projects failed: {}", e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, FETCH_PROJECTS_FAILED).await);
    }

    let envelope = resp
        .json::<ProjectsEnvelope>()
        .await
        .map_err(|e| e.to_string())?;
    Ok(envelope.into_projects())
}

pub async fn get_project(id: &str) -> Result<Project, String> {
    let resp = match Request::get(&config::project_url(id)).send().await {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Fetching project {} failed: {}", id, e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, FETCH_PROJECT_FAILED).await);
    }

    let envelope = resp
        .json::<ProjectEnvelope>()
        .await
        .map_err(|e| e.to_string())?;
    match envelope.data {
        Some(project) if envelope.success => Ok(project),
        _ => Err(FETCH_PROJECT_FAILED.to_string()),
    }
}

pub async fn create_project(
    form: &ProjectForm,
    image: Option<&File>,
    token: &str,
) -> Result<(), String> {
    let body = multipart_body(form, image)?;
    let request = Request::post(&config::projects_url())
        .header("Authorization", &bearer(token))
        .body(body)
        .map_err(|e| e.to_string())?;

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Creating project failed: {}", e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, CREATE_FAILED).await);
    }
    Ok(())
}

pub async fn update_project(
    id: &str,
    form: &ProjectForm,
    image: Option<&File>,
    token: &str,
) -> Result<(), String> {
    let body = multipart_body(form, image)?;
    let request = Request::put(&config::project_url(id))
        .header("Authorization", &bearer(token))
        .body(body)
        .map_err(|e| e.to_string())?;

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Updating project {} failed: {}", id, e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, UPDATE_FAILED).await);
    }
    Ok(())
}

pub async fn delete_project(id: &str, token: &str) -> Result<(), String> {
    let resp = match Request::delete(&config::project_url(id))
        .header("Authorization", &bearer(token))
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            web_sys::console::error_1(&format!("[API] Deleting project {} failed: {}", id, e).into());
            return Err(NETWORK_ERROR.to_string());
        }
    };

    if !resp.ok() {
        return Err(error_message(resp, DELETE_FAILED).await);
    }
    Ok(())
}

/// Text fields plus the optional image file. The tech stack travels as
/// one JSON-encoded array string, the way the backend expects it.
fn multipart_body(form: &ProjectForm, image: Option<&File>) -> Result<FormData, String> {
    let tech_stack = serde_json::to_string(&form.tech_stack).map_err(|e| e.to_string())?;
    let data = FormData::new().map_err(|_| FORM_BUILD_FAILED.to_string())?;

    let fields = [
        ("title", form.title.as_str()),
        ("description", form.description.as_str()),
        ("githubRepo", form.github_repo.as_str()),
        ("deployLink", form.deploy_link.as_str()),
        ("demoVideoUrl", form.demo_video_url.as_str()),
        ("techStack", tech_stack.as_str()),
    ];
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|_| FORM_BUILD_FAILED.to_string())?;
    }

    if let Some(file) = image {
        data.append_with_blob("image", file)
            .map_err(|_| FORM_BUILD_FAILED.to_string())?;
    }

    Ok(data)
}
