use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::transport::ApiResponse;

/// Result of a dispatched operation. Every variant is terminal: nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Unauthorized,
    RateLimited,
    NotFound,
    ServerError { status: u16, detail: Option<String> },
    TransportFailure(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: DeserializeOwned> Outcome<T> {
    /// 2xx parses the body; 401 and 429 get their own variants; anything else is a
    /// server error.
    pub fn from_response(res: &ApiResponse) -> Self {
        match res.status {
            s if s.is_success() => parse_body(res),
            StatusCode::UNAUTHORIZED => Outcome::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Outcome::RateLimited,
            status => {
                warn!(%status, "backend returned an error status");
                Outcome::ServerError {
                    status: status.as_u16(),
                    detail: error_detail(&res.body),
                }
            }
        }
    }

    /// Fetch-by-id: any non-2xx means the record is not there.
    pub fn from_lookup(res: &ApiResponse) -> Self {
        if res.status.is_success() {
            parse_body(res)
        } else {
            warn!(status = %res.status, "lookup failed");
            Outcome::NotFound
        }
    }
}

fn parse_body<T: DeserializeOwned>(res: &ApiResponse) -> Outcome<T> {
    match serde_json::from_str(&res.body) {
        Ok(v) => Outcome::Success(v),
        Err(e) => {
            warn!(error = %e, "response body did not parse");
            Outcome::TransportFailure(format!("invalid response body: {}", e))
        }
    }
}

/// Pulls `{"detail": "..."}` out of an error body when the backend sends one.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Id {
        id: i64,
    }

    fn res(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        }
    }

    #[test]
    fn success_parses_body() {
        let out: Outcome<Id> = Outcome::from_response(&res(201, r#"{"id": 3}"#));
        assert_eq!(out, Outcome::Success(Id { id: 3 }));
    }

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(Outcome::<Id>::from_response(&res(401, "")), Outcome::Unauthorized);
        assert_eq!(Outcome::<Id>::from_response(&res(429, "")), Outcome::RateLimited);
        assert_eq!(
            Outcome::<Id>::from_response(&res(400, r#"{"detail":"Profile with this email already exists"}"#)),
            Outcome::ServerError {
                status: 400,
                detail: Some("Profile with this email already exists".into())
            }
        );
        assert_eq!(
            Outcome::<Id>::from_response(&res(502, "<html>bad gateway</html>")),
            Outcome::ServerError { status: 502, detail: None }
        );
    }

    #[test]
    fn unparseable_success_is_transport_failure() {
        let out: Outcome<Id> = Outcome::from_response(&res(200, "not json"));
        assert!(matches!(out, Outcome::TransportFailure(_)));
    }

    #[test]
    fn lookup_collapses_errors_to_not_found() {
        assert_eq!(Outcome::<Id>::from_lookup(&res(404, "")), Outcome::NotFound);
        assert_eq!(Outcome::<Id>::from_lookup(&res(500, "")), Outcome::NotFound);
        assert_eq!(Outcome::<Id>::from_lookup(&res(401, "")), Outcome::NotFound);
    }
}
