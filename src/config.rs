use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub create_requires_auth: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = std::env::var("TRACKAME_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.into());
        let create_requires_auth = std::env::var("TRACKAME_CREATE_REQUIRES_AUTH")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);
        Self::new(&backend_url, create_requires_auth)
    }

    pub fn new(backend_url: &str, create_requires_auth: bool) -> anyhow::Result<Self> {
        Ok(Self {
            backend_url: normalize_base_url(backend_url)?,
            create_requires_auth,
        })
    }

    /// Joins an API path (always starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let url = raw.trim().trim_end_matches('/');
    anyhow::ensure!(
        url.starts_with("http://") || url.starts_with("https://"),
        "backend url must start with http:// or https://, got {:?}",
        raw
    );
    Ok(url.to_string())
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
