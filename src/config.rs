use std::env;

/// Default request timeout. The generation endpoint is a cold-starting
/// serverless function, so the first request can take tens of seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            base_url: None,
            timeout_secs: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("INKGEN_BASE_URL").ok();
        let timeout_secs = env::var("INKGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        GeneratorConfig {
            base_url,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}
