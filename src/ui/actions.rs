//! One function per button: collect input, dispatch once, render the outcome.

use tracing::instrument;

use crate::auth::Credentials;
use crate::profiles::{self, forms::ProfileForm};
use crate::state::AppState;
use crate::ui::{render, Display, Sink};

#[instrument(skip_all)]
pub async fn on_create(
    state: &AppState,
    display: &dyn Display,
    form: &ProfileForm,
    creds: Option<&Credentials>,
) {
    let profile = match form.collect() {
        Ok(p) => p,
        Err(e) => return display.show(Sink::Alert, &e.to_string()),
    };
    match profiles::create_profile(state, &profile, creds).await {
        Ok(outcome) => display.show(Sink::Alert, &render::created(&outcome)),
        Err(e) => display.show(Sink::Alert, &e.to_string()),
    }
}

#[instrument(skip_all)]
pub async fn on_load_all(state: &AppState, display: &dyn Display) {
    let outcome = profiles::load_all_profiles(state).await;
    display.show(Sink::ProfilesOutput, &render::profile_list(&outcome));
}

#[instrument(skip(state, display))]
pub async fn on_load_profile(state: &AppState, display: &dyn Display, id_raw: &str) {
    match profiles::load_profile(state, id_raw).await {
        Ok(outcome) => {
            let (sink, text) = render::edit_prefill(&outcome);
            display.show(sink, &text);
        }
        Err(e) => display.show(Sink::Alert, &e.to_string()),
    }
}

/// Never writes to the edit field, so whatever the user typed stays put.
#[instrument(skip(state, display, edited_json, creds))]
pub async fn on_update(
    state: &AppState,
    display: &dyn Display,
    id_raw: &str,
    edited_json: &str,
    creds: Option<&Credentials>,
) {
    match profiles::update_profile(state, id_raw, edited_json, creds).await {
        Ok(outcome) => display.show(Sink::Alert, &render::updated(&outcome)),
        Err(e) => display.show(Sink::Alert, &e.to_string()),
    }
}

#[instrument(skip(state, display))]
pub async fn on_search(state: &AppState, display: &dyn Display, term: &str) {
    let outcome = profiles::search_skill(state, term).await;
    display.show(Sink::SearchOutput, &render::search_results(&outcome));
}

#[instrument(skip_all)]
pub async fn on_health(state: &AppState, display: &dyn Display) {
    let outcome = profiles::health(state).await;
    display.show(Sink::HealthOutput, &render::health(&outcome));
}
