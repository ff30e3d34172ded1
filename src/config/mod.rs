//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MAKE_BUY_PARTNER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use make_buy_partner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("AI provider: {}", config.ai.primary_provider.as_str());
//! ```

mod ai;
mod error;
mod features;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MAKE_BUY_PARTNER";

/// Root application configuration
///
/// Every section has defaults, so the service starts with no environment at
/// all and runs on the deterministic core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI/Anthropic)
    #[serde(default)]
    pub ai: AiConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MAKE_BUY_PARTNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MAKE_BUY_PARTNER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MAKE_BUY_PARTNER__AI__PRIMARY_PROVIDER=openai` -> `ai.primary_provider = openai`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Whether requests should reach an AI provider at all.
    pub fn ai_enabled(&self) -> bool {
        self.features.enable_ai && self.ai.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "MAKE_BUY_PARTNER__SERVER__PORT",
        "MAKE_BUY_PARTNER__SERVER__ENVIRONMENT",
        "MAKE_BUY_PARTNER__AI__PRIMARY_PROVIDER",
        "MAKE_BUY_PARTNER__AI__OPENAI_API_KEY",
        "MAKE_BUY_PARTNER__AI__ANTHROPIC_API_KEY",
        "MAKE_BUY_PARTNER__AI__TIMEOUT_SECS",
        "MAKE_BUY_PARTNER__FEATURES__ENABLE_AI",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_without_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.primary_provider, AiProvider::Anthropic);
        assert!(config.features.enable_ai);
        assert!(config.validate().is_ok());
        assert!(!config.ai_enabled());
    }

    #[test]
    fn test_load_ai_provider_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("MAKE_BUY_PARTNER__AI__PRIMARY_PROVIDER", "openai"),
            ("MAKE_BUY_PARTNER__AI__OPENAI_API_KEY", "sk-test"),
            ("MAKE_BUY_PARTNER__AI__TIMEOUT_SECS", "45"),
        ])
        .unwrap();

        assert_eq!(config.ai.primary_provider, AiProvider::OpenAI);
        assert_eq!(config.ai.api_key(AiProvider::OpenAI), Some("sk-test"));
        assert_eq!(config.ai.timeout_secs, 45);
        assert!(config.ai_enabled());
    }

    #[test]
    fn test_feature_flag_disables_ai() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("MAKE_BUY_PARTNER__AI__ANTHROPIC_API_KEY", "sk-ant-test"),
            ("MAKE_BUY_PARTNER__FEATURES__ENABLE_AI", "false"),
        ])
        .unwrap();

        assert!(config.ai.is_configured());
        assert!(!config.ai_enabled());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("MAKE_BUY_PARTNER__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("MAKE_BUY_PARTNER__SERVER__PORT", "3000")]).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = load_with(&[("MAKE_BUY_PARTNER__SERVER__PORT", "not-a-port")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
