//! Client for the TrackA-Me profile directory API.
//!
//! Each user action is collected into typed input, dispatched as exactly one HTTP
//! request and turned into an [`outcome::Outcome`] that the [`ui`] layer renders.

pub mod auth;
pub mod config;
pub mod error;
pub mod outcome;
pub mod profiles;
pub mod state;
pub mod transport;
pub mod ui;

pub use error::ClientError;
pub use outcome::Outcome;
pub use state::AppState;
