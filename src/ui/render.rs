use serde::Serialize;

use crate::outcome::Outcome;
use crate::profiles::dto::{CreatedProfile, EditableProfile, HealthStatus, ProfileSummary, UpdateAck};
use crate::ui::Sink;

pub const NO_PROFILES: &str = "No profiles found";
pub const UNAUTHORIZED: &str = "Unauthorized: check username and password";
pub const RATE_LIMITED: &str = "Rate limited: please wait before trying again";
pub const NOT_FOUND: &str = "Profile not found";

pub fn created(outcome: &Outcome<CreatedProfile>) -> String {
    match outcome {
        Outcome::Success(c) => format!("Profile created with ID: {}", c.id),
        other => failure(other, "Server error"),
    }
}

pub fn profile_list(outcome: &Outcome<Vec<ProfileSummary>>) -> String {
    match outcome {
        Outcome::Success(list) if list.is_empty() => NO_PROFILES.to_string(),
        Outcome::Success(list) => pretty(list),
        other => failure(other, "Failed to load profiles"),
    }
}

/// A loaded profile goes into the edit field; anything else is an alert.
pub fn edit_prefill(outcome: &Outcome<EditableProfile>) -> (Sink, String) {
    match outcome {
        Outcome::Success(p) => (Sink::EditJson, pretty(p)),
        other => (Sink::Alert, failure(other, "Failed to load profile")),
    }
}

pub fn updated(outcome: &Outcome<UpdateAck>) -> String {
    match outcome {
        Outcome::Success(ack) if ack.message.is_empty() => {
            format!("Profile {} updated", ack.id)
        }
        Outcome::Success(ack) => ack.message.clone(),
        other => failure(other, "Update failed"),
    }
}

pub fn search_results(outcome: &Outcome<serde_json::Value>) -> String {
    match outcome {
        Outcome::Success(v) => pretty(v),
        other => failure(other, "Search failed"),
    }
}

pub fn health(outcome: &Outcome<HealthStatus>) -> String {
    match outcome {
        Outcome::Success(h) => format!("Backend status: {}", h.status),
        other => failure(other, "Health check failed"),
    }
}

fn failure<T>(outcome: &Outcome<T>, failed: &str) -> String {
    match outcome {
        Outcome::Success(_) => failed.to_string(),
        Outcome::Unauthorized => UNAUTHORIZED.to_string(),
        Outcome::RateLimited => RATE_LIMITED.to_string(),
        Outcome::NotFound => NOT_FOUND.to_string(),
        Outcome::ServerError {
            status,
            detail: Some(detail),
        } => format!("{} ({}): {}", failed, status, detail),
        Outcome::ServerError { status, detail: None } => format!("{} ({})", failed, status),
        Outcome::TransportFailure(reason) => format!("Request failed: {}", reason),
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Failed to render: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_not_an_error() {
        assert_eq!(profile_list(&Outcome::Success(vec![])), NO_PROFILES);
        let failed = profile_list(&Outcome::TransportFailure("connection refused".into()));
        assert_ne!(failed, NO_PROFILES);
        assert!(failed.contains("connection refused"));
    }

    #[test]
    fn created_reports_the_id() {
        let out = Outcome::Success(CreatedProfile {
            id: 7,
            name: None,
            email: None,
        });
        assert_eq!(created(&out), "Profile created with ID: 7");
        assert_eq!(created(&Outcome::RateLimited), RATE_LIMITED);
        assert_eq!(created(&Outcome::Unauthorized), UNAUTHORIZED);
    }

    #[test]
    fn server_errors_carry_context() {
        let out: Outcome<UpdateAck> = Outcome::ServerError {
            status: 404,
            detail: Some("Profile not found".into()),
        };
        assert_eq!(updated(&out), "Update failed (404): Profile not found");
        let out: Outcome<CreatedProfile> = Outcome::ServerError {
            status: 500,
            detail: None,
        };
        assert_eq!(created(&out), "Server error (500)");
    }

    #[test]
    fn prefill_targets_the_edit_field() {
        let profile = EditableProfile {
            name: "Ada".into(),
            education: None,
            work: None,
            links: None,
            skills: vec!["python".into()],
            projects: vec![],
        };
        let (sink, text) = edit_prefill(&Outcome::Success(profile));
        assert_eq!(sink, Sink::EditJson);
        assert!(text.contains("\"name\": \"Ada\""));

        assert_eq!(
            edit_prefill(&Outcome::NotFound),
            (Sink::Alert, NOT_FOUND.to_string())
        );
    }
}
