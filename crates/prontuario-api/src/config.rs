use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Scheme, host and optional prefix, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}
