//! Backend connection settings, read once at startup.

use crate::{Result, TideNotesError};

/// Connection settings for the hosted notes backend.
///
/// Holds the project base URL and the API key sent with every request.
/// Constructed once at startup and handed to [`RestBackend`](crate::RestBackend);
/// nothing in this crate reads the environment after that point.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// API key, sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl BackendConfig {
    /// Creates a config from explicit values, normalising the URL.
    #[must_use]
    pub fn new(url: &str, api_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TideNotesError::Config`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let url = require_env("SUPABASE_URL")?;
        let api_key = require_env("SUPABASE_KEY")?;
        Ok(Self::new(&url, &api_key))
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TideNotesError::Config(format!("{name} is not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = BackendConfig::new("https://abc.supabase.co/", "key");
        assert_eq!(config.url, "https://abc.supabase.co");
    }

    #[test]
    fn test_from_env_reads_both_values() {
        // Single test driving both the missing and present cases so parallel
        // test threads never race on the process environment.
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_KEY");
        assert!(BackendConfig::from_env().is_err());

        std::env::set_var("SUPABASE_URL", "https://abc.supabase.co/");
        std::env::set_var("SUPABASE_KEY", "service-key");
        let config = BackendConfig::from_env().unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.api_key, "service-key");

        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_KEY");
    }
}
