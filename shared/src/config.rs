//! Environment configuration for the playground.
//!
//! Every lookup re-reads the live process environment; nothing is cached.
//! Values are returned as set, empty strings included. Only the mode default,
//! the "is configured" checks and the production warning treat an empty value
//! as missing.

use serde::{Serialize, Serializer};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::{Error, Result};

/// Mode used when `NODE_ENV` is unset or empty.
pub const DEFAULT_NODE_ENV: &str = "development";

/// Mode in which a missing API key is worth a warning.
pub const PRODUCTION_ENV: &str = "production";

const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const GOOGLE_GENERATIVE_AI_API_KEY: &str = "GOOGLE_GENERATIVE_AI_API_KEY";
const NODE_ENV: &str = "NODE_ENV";
const VERCEL_ENV: &str = "VERCEL_ENV";

/// AI providers whose keys the application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Google,
}

impl Provider {
    /// All known providers.
    pub const ALL: [Provider; 2] = [Provider::OpenAi, Provider::Google];

    /// Tag used by callers (`"openai"` / `"google"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Google => "google",
        }
    }

    /// Environment variable holding this provider's key.
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::OpenAi => OPENAI_API_KEY,
            Provider::Google => GOOGLE_GENERATIVE_AI_API_KEY,
        }
    }

    /// Current key for this provider, as set (possibly empty).
    pub fn api_key(&self) -> Option<String> {
        read_var(self.env_var())
    }

    /// Whether a non-empty key is configured.
    pub fn is_configured(&self) -> bool {
        is_present(self.api_key().as_deref())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "google" => Ok(Provider::Google),
            other => Err(Error::Config(format!("Unknown provider: {}", other))),
        }
    }
}

/// Snapshot of the environment variables the application cares about.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentConfig {
    /// OpenAI API key
    #[serde(rename = "openai_configured", serialize_with = "serialize_configured")]
    pub openai_api_key: Option<String>,
    /// Google Generative AI API key
    #[serde(rename = "google_configured", serialize_with = "serialize_configured")]
    pub google_generative_ai_api_key: Option<String>,
    /// Runtime mode, `development` unless set
    pub node_env: String,
    /// Deployment environment (preview, production, ...)
    pub vercel_env: Option<String>,
}

impl EnvironmentConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: read_var(OPENAI_API_KEY),
            google_generative_ai_api_key: read_var(GOOGLE_GENERATIVE_AI_API_KEY),
            node_env: read_var(NODE_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_NODE_ENV.to_string()),
            vercel_env: read_var(VERCEL_ENV),
        }
    }

    pub fn is_production(&self) -> bool {
        self.node_env == PRODUCTION_ENV
    }

    pub fn is_development(&self) -> bool {
        self.node_env == DEFAULT_NODE_ENV
    }

    /// Key captured for `provider` in this snapshot.
    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Google => self.google_generative_ai_api_key.as_deref(),
        }
    }

    /// Providers with a non-empty key in this snapshot.
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| is_present(self.api_key(*p)))
            .collect()
    }

    pub fn has_any_api_key(&self) -> bool {
        is_present(self.openai_api_key.as_deref())
            || is_present(self.google_generative_ai_api_key.as_deref())
    }
}

impl fmt::Debug for EnvironmentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentConfig")
            .field("openai_api_key", &redacted(&self.openai_api_key))
            .field(
                "google_generative_ai_api_key",
                &redacted(&self.google_generative_ai_api_key),
            )
            .field("node_env", &self.node_env)
            .field("vercel_env", &self.vercel_env)
            .finish()
    }
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "[REDACTED]")
}

fn serialize_configured<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_bool(is_present(value.as_deref()))
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Read the environment and warn when production runs without any AI key.
///
/// Never fails; a missing key only produces a warning.
pub fn validate_environment() -> EnvironmentConfig {
    let config = EnvironmentConfig::from_env();

    if config.is_production() && !config.has_any_api_key() {
        warn!(
            "No AI API keys configured. At least one of {} or {} should be set for production use.",
            OPENAI_API_KEY, GOOGLE_GENERATIVE_AI_API_KEY
        );
    }

    config
}

/// Whether a non-empty key is configured for the provider tag.
///
/// Unknown tags return `false`.
pub fn has_api_key(provider: &str) -> bool {
    provider
        .parse::<Provider>()
        .map(|p| p.is_configured())
        .unwrap_or(false)
}

/// Key for the provider tag as set, or `None` if unset or the tag is unknown.
///
/// An empty variable yields `Some("")`; use [`has_api_key`] to test for a usable key.
pub fn get_api_key(provider: &str) -> Option<String> {
    provider.parse::<Provider>().ok().and_then(|p| p.api_key())
}

/// Key for a provider that the caller cannot do without.
pub fn require_api_key(provider: Provider) -> Result<String> {
    provider.api_key().filter(|k| !k.is_empty()).ok_or_else(|| {
        Error::Config(format!(
            "{} environment variable not set",
            provider.env_var()
        ))
    })
}
