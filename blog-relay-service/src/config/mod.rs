use relay_core::config as core_config;
use relay_core::error::AppError;
use secrecy::Secret;
use std::env;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://blog-buddy-ai.vercel.app";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    /// Model name used in the `generateContent` path (e.g., gemini-1.5-flash)
    pub model: String,
    /// Base URL up to and excluding `/models`
    pub api_base: String,
    /// Outbound timeout; `None` waits for the provider indefinitely.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Builds the service settings from an arbitrary key lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("gemini_api_key"))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!("GEMINI_API_KEY is required but not set"))
            })?;

        let request_timeout_secs = match lookup("GEMINI_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GEMINI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?),
            None => None,
        };

        Ok(RelayConfig {
            common,
            gemini: GeminiSettings {
                api_key: Secret::new(api_key),
                model: get_env(&lookup, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env(&lookup, "GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE)
                    .trim_end_matches('/')
                    .to_string(),
                request_timeout_secs,
            },
            cors: CorsSettings {
                allowed_origin: get_env(&lookup, "CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
            },
        })
    }
}

fn get_env<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
