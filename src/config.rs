//! API Configuration
//!
//! Where the task API lives.

/// Fallback used when neither the build nor the page gives a base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from `TASK_LIST_API_URL` at build time, then the page origin
    pub fn resolve(page_origin: Option<String>) -> Self {
        Self::from_sources(option_env!("TASK_LIST_API_URL"), page_origin)
    }

    fn from_sources(build_url: Option<&str>, page_origin: Option<String>) -> Self {
        let base = build_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or(page_origin.filter(|origin| origin.starts_with("http")))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// Join the base URL with an absolute API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
