use crate::config::AppConfig;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Everything an action needs, built once at startup and passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub transport: Arc<dyn HttpTransport>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(config.clone())) as Arc<dyn HttpTransport>;
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn from_parts(config: Arc<AppConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    #[cfg(test)]
    pub fn fake(transport: Arc<crate::transport::fake::FakeTransport>) -> Self {
        let config = Arc::new(AppConfig {
            backend_url: "http://fake.local".into(),
            create_requires_auth: true,
        });
        Self {
            config,
            transport: transport as Arc<dyn HttpTransport>,
        }
    }
}
