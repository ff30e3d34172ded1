//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Use the AI coach; when off every endpoint uses the deterministic core
    #[serde(default = "default_enable_ai")]
    pub enable_ai: bool,

    /// Enable AI fallback provider on primary failure
    #[serde(default)]
    pub enable_ai_fallback: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_ai: default_enable_ai(),
            enable_ai_fallback: false,
            verbose_errors: false,
        }
    }
}

fn default_enable_ai() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_ai);
        assert!(!flags.enable_ai_fallback);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_ai": false,
            "enable_ai_fallback": true,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_ai);
        assert!(flags.enable_ai_fallback);
        assert!(flags.verbose_errors);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.enable_ai);
        assert!(!flags.verbose_errors);
    }
}
