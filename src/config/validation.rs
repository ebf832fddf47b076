use crate::config::types::{Config, FilterConfig, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_filter_config(&config.filter)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_seconds < 1 || config.timeout_seconds > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-seconds must be between 1 and 300, got {}",
            config.timeout_seconds
        )));
    }

    if config.connect_timeout_seconds < 1 || config.connect_timeout_seconds > 60 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-seconds must be between 1 and 60, got {}",
            config.connect_timeout_seconds
        )));
    }

    Ok(())
}

/// Validates text filtering configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for label in &config.banned_labels {
        if label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "banned-labels entries cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
