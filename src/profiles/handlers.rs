use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{build_auth_header, header_for, AuthHeader, Credentials},
    error::ClientError,
    outcome::Outcome,
    profiles::{
        dto::{CreatedProfile, EditableProfile, HealthStatus, NewProfile, ProfileSummary, UpdateAck},
        forms::{parse_edit_payload, parse_profile_id},
    },
    state::AppState,
    transport::{ApiRequest, ApiResponse, TransportError},
};

// --- operations ---

/// POST /profile
#[instrument(skip(state, profile, creds), fields(skills = profile.skills.len()))]
pub async fn create_profile(
    state: &AppState,
    profile: &NewProfile,
    creds: Option<&Credentials>,
) -> Result<Outcome<CreatedProfile>, ClientError> {
    if profile.email.trim().is_empty() {
        return Err(ClientError::EmailMissing);
    }
    let auth = create_auth(state, creds)?;

    let req = ApiRequest::post("/profile").auth(auth).json(profile);
    let outcome: Outcome<CreatedProfile> = send(state, req, Outcome::from_response).await;
    if let Outcome::Success(created) = &outcome {
        info!(profile_id = created.id, "profile created");
    }
    Ok(outcome)
}

/// GET /profiles. An empty list is a success, not an error.
#[instrument(skip(state))]
pub async fn load_all_profiles(state: &AppState) -> Outcome<Vec<ProfileSummary>> {
    let outcome: Outcome<Vec<ProfileSummary>> =
        send(state, Ok(ApiRequest::get("/profiles")), Outcome::from_response).await;
    if let Outcome::Success(list) = &outcome {
        info!(count = list.len(), "profiles loaded");
    }
    outcome
}

/// GET /profile/{id}/edit
#[instrument(skip(state))]
pub async fn load_profile(
    state: &AppState,
    id_raw: &str,
) -> Result<Outcome<EditableProfile>, ClientError> {
    let id = parse_profile_id(id_raw)?;
    let req = ApiRequest::get(format!("/profile/{}/edit", id));
    Ok(send(state, Ok(req), Outcome::from_lookup).await)
}

/// PUT /profile/{id}. `edited_json` is only read; a rejected update leaves it as typed.
#[instrument(skip(state, edited_json, creds))]
pub async fn update_profile(
    state: &AppState,
    id_raw: &str,
    edited_json: &str,
    creds: Option<&Credentials>,
) -> Result<Outcome<UpdateAck>, ClientError> {
    let id = parse_profile_id(id_raw)?;
    let update = parse_edit_payload(edited_json)?;
    let auth = header_for(creds)?;

    let req = ApiRequest::put(format!("/profile/{}", id)).auth(Some(auth)).json(&update);
    let outcome: Outcome<UpdateAck> = send(state, req, Outcome::from_response).await;
    if let Outcome::Success(ack) = &outcome {
        info!(profile_id = ack.id, "profile updated");
    }
    Ok(outcome)
}

/// GET /profiles/search?skill={term}. The raw array is handed back untouched.
#[instrument(skip(state))]
pub async fn search_skill(state: &AppState, term: &str) -> Outcome<serde_json::Value> {
    let req = ApiRequest::get("/profiles/search").query("skill", term);
    send(state, Ok(req), Outcome::from_response).await
}

/// GET /health
#[instrument(skip(state))]
pub async fn health(state: &AppState) -> Outcome<HealthStatus> {
    send(state, Ok(ApiRequest::get("/health")), Outcome::from_response).await
}

// --- helpers ---

fn create_auth(
    state: &AppState,
    creds: Option<&Credentials>,
) -> Result<Option<AuthHeader>, ClientError> {
    match (state.config.create_requires_auth, creds) {
        (true, creds) => header_for(creds).map(Some),
        (false, Some(c)) => build_auth_header(&c.user, &c.pass).map(Some),
        (false, None) => Ok(None),
    }
}

/// Dispatches once and classifies the reply. No retries on any path.
async fn send<T: DeserializeOwned>(
    state: &AppState,
    req: Result<ApiRequest, TransportError>,
    classify: fn(&ApiResponse) -> Outcome<T>,
) -> Outcome<T> {
    let req = match req {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "failed to build request");
            return Outcome::TransportFailure(e.to_string());
        }
    };
    let (method, path) = (req.method.clone(), req.path.clone());
    match state.transport.send(req).await {
        Ok(res) => {
            if !res.status.is_success() {
                warn!(%method, %path, status = %res.status, "request rejected");
            }
            classify(&res)
        }
        Err(e) => {
            error!(error = %e, %method, %path, "request failed");
            Outcome::TransportFailure(e.to_string())
        }
    }
}
