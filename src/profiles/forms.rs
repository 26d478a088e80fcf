use tracing::debug;

use crate::error::ClientError;
use crate::profiles::dto::{NewProfile, Project, ProfileUpdate};

/// Raw values of the create form, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub education: String,
    pub work: String,
    pub links: String,
    pub skills: String,
    pub project_title: String,
    pub project_description: String,
    pub project_tech: String,
}

impl ProfileForm {
    /// Reads every field in form order and assembles the create body.
    /// Only presence of the email is checked; uniqueness is up to the backend.
    pub fn collect(&self) -> Result<NewProfile, ClientError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let education = self.education.trim().to_string();
        let work = self.work.trim().to_string();
        let links = self.links.trim().to_string();
        let skills = split_skills(&self.skills);
        let project = Project {
            title: self.project_title.trim().to_string(),
            description: non_blank(&self.project_description),
            tech_stack: non_blank(&self.project_tech),
        };

        if email.is_empty() {
            return Err(ClientError::EmailMissing);
        }

        debug!(skills = skills.len(), "profile form collected");
        Ok(NewProfile {
            name,
            email,
            education,
            work,
            links,
            skills,
            projects: vec![project],
        })
    }
}

/// `"AI, Python, "` -> `["AI", "Python"]`.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_profile_id(raw: &str) -> Result<i64, ClientError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ClientError::InvalidId(raw.to_string()))
}

/// Only a JSON object is accepted as an edited profile.
pub fn parse_edit_payload(raw: &str) -> Result<ProfileUpdate, ClientError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ClientError::InvalidPayload(e.to_string()))?;
    if !value.is_object() {
        return Err(ClientError::InvalidPayload(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ClientError::InvalidPayload(e.to_string()))
}

fn non_blank(raw: &str) -> Option<String> {
    let v = raw.trim();
    (!v.is_empty()).then(|| v.to_string())
}
