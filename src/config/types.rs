use serde::Deserialize;

/// Main configuration structure for vulnscrape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub filter: FilterConfig,
}

/// HTTP client behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-seconds")]
    pub connect_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("vulnscrape/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

/// Text filtering configuration for extracted sections
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Lines matching one of these labels exactly are dropped from section text
    #[serde(rename = "banned-labels")]
    pub banned_labels: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            banned_labels: vec![
                "About Release".to_string(),
                "Description".to_string(),
                "Back to the Top".to_string(),
            ],
        }
    }
}
