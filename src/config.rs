/// Gateway settings shared with every component through Leptos context.
use leptos::logging::log;

const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `API_GATEWAY_URL` at build time, since the browser bundle has no
    /// process environment to consult at runtime.
    pub fn from_env() -> Self {
        match option_env!("API_GATEWAY_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                log!("[CONFIG] API_GATEWAY_URL not set, using {}", DEFAULT_GATEWAY_URL);
                Self::new(DEFAULT_GATEWAY_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
