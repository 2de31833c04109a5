//! Configuration constants and utilities for greenline
//!
//! This module contains greenline-specific configuration constants and
//! utilities: the catalog API base URL and the optional log file location.

/// Default base URL of the remote plant catalog API
pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

/// Environment variable name for overriding the catalog API base URL
pub const API_URL_ENV_VAR: &str = "GREENLINE_API_URL";

/// Environment variable holding the log file path (logging is off without it)
pub const LOG_PATH_ENV_VAR: &str = "GREENLINE_LOG";

/// Get the catalog API base URL, checking environment variable first,
/// then falling back to default
pub fn get_api_base_url() -> String {
    std::env::var_os(API_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Get the log file path, if logging was requested via the environment
pub fn get_log_path() -> Option<String> {
    std::env::var_os(LOG_PATH_ENV_VAR).and_then(|val| val.into_string().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base_url() {
        assert_eq!(
            DEFAULT_API_BASE_URL,
            "https://openapi.programming-hero.com/api"
        );
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(API_URL_ENV_VAR, "GREENLINE_API_URL");
        assert_eq!(LOG_PATH_ENV_VAR, "GREENLINE_LOG");
    }

    #[test]
    fn test_get_api_base_url_default_and_override() {
        // Save current env var state
        let original = std::env::var_os(API_URL_ENV_VAR);

        // Remove env var if set
        std::env::remove_var(API_URL_ENV_VAR);
        assert_eq!(get_api_base_url(), DEFAULT_API_BASE_URL);

        let test_url = "http://localhost:9999/api";
        std::env::set_var(API_URL_ENV_VAR, test_url);
        assert_eq!(get_api_base_url(), test_url);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(API_URL_ENV_VAR, val),
            None => std::env::remove_var(API_URL_ENV_VAR),
        }
    }
}
