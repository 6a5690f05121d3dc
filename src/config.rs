//! Process-wide diagnostic configuration.
//!
//! Built once at startup from the environment and passed by `Arc` into the
//! orchestrator and API state. There is no lazy global: "initialize once"
//! holds by construction.

pub const APP_NAME: &str = "VetAI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chat model when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default provider endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model identifier stamped on fallback results.
pub const FALLBACK_MODEL: &str = "mock-demo";

/// Low sampling temperature: consistency over creativity for medical advice.
pub const TEMPERATURE: f32 = 0.3;

/// Output budget for a diagnosis completion.
pub const MAX_DIAGNOSIS_TOKENS: u32 = 2000;

/// Output budget for a care-recommendations completion.
pub const MAX_RECOMMENDATION_TOKENS: u32 = 1500;

/// Configuration for the diagnostic provider client.
#[derive(Debug, Clone)]
pub struct DiagnosticConfig {
    /// Provider credential. `None` means the pipeline runs in fallback-only
    /// mode and never attempts an upstream call.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Upstream request timeout in seconds. A timeout degrades to fallback.
    pub timeout_secs: u64,
}

impl DiagnosticConfig {
    /// Read configuration from the environment. Empty strings count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: env_non_empty("OPENAI_API_KEY"),
            model: env_non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env_non_empty("VETAI_PROVIDER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: timeout_from(env_non_empty("VETAI_PROVIDER_TIMEOUT_SECS")),
        }
    }

    /// Is the upstream provider usable at all?
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Unconfigured test/demo instance.
    pub fn unconfigured() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,vetai=debug".to_string()
}

fn env_non_empty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Timeout override parsing: anything non-numeric falls back to the default.
fn timeout_from(value: Option<String>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_has_no_key_but_sane_defaults() {
        let config = DiagnosticConfig::unconfigured();
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn configured_when_key_present() {
        let config = DiagnosticConfig {
            api_key: Some("sk-test".into()),
            ..DiagnosticConfig::unconfigured()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn env_non_empty_treats_blank_values_as_unset() {
        // Uniquely named vars so parallel tests never collide.
        std::env::remove_var("VETAI_TEST_ENV_UNSET");
        assert_eq!(env_non_empty("VETAI_TEST_ENV_UNSET"), None);

        std::env::set_var("VETAI_TEST_ENV_EMPTY", "");
        assert_eq!(env_non_empty("VETAI_TEST_ENV_EMPTY"), None);

        std::env::set_var("VETAI_TEST_ENV_BLANK", "   ");
        assert_eq!(env_non_empty("VETAI_TEST_ENV_BLANK"), None);

        std::env::set_var("VETAI_TEST_ENV_SET", "gpt-4o");
        assert_eq!(env_non_empty("VETAI_TEST_ENV_SET").as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn timeout_parses_or_falls_back() {
        assert_eq!(timeout_from(None), 30);
        assert_eq!(timeout_from(Some("not-a-number".into())), 30);
        assert_eq!(timeout_from(Some("-5".into())), 30);
        assert_eq!(timeout_from(Some("60".into())), 60);
        assert_eq!(timeout_from(Some(" 45 ".into())), 45);
    }

    #[test]
    fn fallback_model_is_mock_demo() {
        assert_eq!(FALLBACK_MODEL, "mock-demo");
    }

    #[test]
    fn temperature_favors_determinism() {
        assert!(TEMPERATURE <= 0.5);
    }
}
