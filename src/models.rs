//! Frontend Models
//!
//! Data structures matching the portfolio API payloads.

use serde::{Deserialize, Serialize};

/// Project record owned by the backend.
///
/// Ids arrive as `_id` from the primary backend and `id` from the legacy
/// one; every other field defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub deploy_link: String,
    #[serde(default)]
    pub github_repo: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub demo_video_url: String,
}

/// Response envelopes the projects endpoint has shipped over time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProjectsEnvelope {
    Wrapped {
        data: Vec<Project>,
    },
    Legacy {
        projects: Vec<Project>,
    },
    Bare(Vec<Project>),
}

impl ProjectsEnvelope {
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            ProjectsEnvelope::Wrapped { data } => data,
            ProjectsEnvelope::Legacy { projects } => projects,
            ProjectsEnvelope::Bare(projects) => projects,
        }
    }
}

/// Single-record envelope from `GET /projects/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Project>,
}

/// Authenticated user as stored in the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: String,
    pub user: Option<User>,
}

/// Error payload shape shared by the API's non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Fields shared by project create and update submissions. The image is
/// carried separately as a multipart file part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub github_repo: String,
    pub deploy_link: String,
    pub demo_video_url: String,
    pub tech_stack: Vec<String>,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        ProjectForm {
            title: project.title.clone(),
            description: project.description.clone(),
            github_repo: project.github_repo.clone(),
            deploy_link: project.deploy_link.clone(),
            demo_video_url: project.demo_video_url.clone(),
            tech_stack: project.tech_stack.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_envelope() {
        let json = r#"{"data":[{"_id":"a1","title":"One"}]}"#;
        let envelope: ProjectsEnvelope = serde_json::from_str(json).unwrap();
        let projects = envelope.into_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "a1");
        assert_eq!(projects[0].title, "One");
        assert!(projects[0].tech_stack.is_empty());
    }

    #[test]
    fn test_legacy_envelope() {
        let json = r#"{"projects":[{"id":"b2","title":"Two"}]}"#;
        let envelope: ProjectsEnvelope = serde_json::from_str(json).unwrap();
        let projects = envelope.into_projects();
        assert_eq!(projects[0].id, "b2");
    }

    #[test]
    fn test_bare_array_envelope() {
        let json = r#"[{"_id":"c3"},{"_id":"d4"}]"#;
        let envelope: ProjectsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_projects().len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"_id":"e5","title":"Bare"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.image_url, "");
        assert_eq!(project.deploy_link, "");
        assert!(project.tech_stack.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"_id":"f6","imageUrl":"/img.png","githubRepo":"https://github.com/x","techStack":["react","rust"],"demoVideoUrl":"https://youtu.be/v"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.image_url, "/img.png");
        assert_eq!(project.github_repo, "https://github.com/x");
        assert_eq!(project.tech_stack, vec!["react", "rust"]);
        assert_eq!(project.demo_video_url, "https://youtu.be/v");
    }

    #[test]
    fn test_user_roundtrip() {
        let user = User {
            id: "u1".into(),
            username: "jefta".into(),
            email: "j@example.com".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
