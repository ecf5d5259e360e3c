use std::env;

use thiserror::Error;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Credentials for the two backend families. Both must be present before any
/// provider call is made; a missing key is fatal at startup rather than
/// something the provider layer works around.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub google_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: require_var(OPENAI_API_KEY)?,
            google_api_key: require_var(GOOGLE_API_KEY)?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn from_env_requires_both_keys() {
        env::remove_var(OPENAI_API_KEY);
        env::remove_var(GOOGLE_API_KEY);
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingVar(OPENAI_API_KEY))
        ));

        env::set_var(OPENAI_API_KEY, "sk-test");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingVar(GOOGLE_API_KEY))
        ));

        env::set_var(GOOGLE_API_KEY, "g-test");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.google_api_key, "g-test");

        env::remove_var(OPENAI_API_KEY);
        env::remove_var(GOOGLE_API_KEY);
    }
}
