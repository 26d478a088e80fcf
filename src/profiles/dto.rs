use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
}

/// Body of `POST /profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub email: String, // unique, enforced by the backend
    pub education: String,
    pub work: String,
    pub links: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

/// Response of `POST /profile`; only the assigned id is relied on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedProfile {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Item of `GET /profiles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>, // titles only
}

/// Prefill returned by `GET /profile/{id}/edit`. Email is not editable and not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableProfile {
    pub name: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub work: Option<String>,
    #[serde(default)]
    pub links: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Body of `PUT /profile/{id}`. Absent fields are left alone by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub message: String,
    pub id: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn partial_update_omits_absent_fields() {
        let update = ProfileUpdate {
            work: Some("ML Intern".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"work":"ML Intern"}"#);
    }

    #[test]
    fn edit_prefill_accepts_nulls() {
        let body = r#"{
            "name": "Ada",
            "education": null,
            "work": null,
            "links": null,
            "skills": ["python"],
            "projects": [{"title": "Shelf AI", "description": null, "tech_stack": "opencv"}]
        }"#;
        let profile: EditableProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.education, None);
        assert_eq!(profile.projects[0].tech_stack.as_deref(), Some("opencv"));
    }

    #[test]
    fn summary_tolerates_missing_lists() {
        let s: ProfileSummary = serde_json::from_str(r#"{"id": 1, "name": "Ada"}"#).unwrap();
        assert!(s.skills.is_empty());
        assert!(s.projects.is_empty());
    }
}
