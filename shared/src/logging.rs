//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::{EnvironmentConfig, Error, Result};

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `info`). Production emits
/// JSON lines; every other mode uses the human-readable format. Returns an error
/// if a global subscriber is already installed.
pub fn init_tracing(config: &EnvironmentConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let config = EnvironmentConfig {
            openai_api_key: None,
            google_generative_ai_api_key: None,
            node_env: "test".to_string(),
            vercel_env: None,
        };

        // Only one global subscriber per process, so at most one call succeeds.
        let _ = init_tracing(&config);
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.status_code(), 500);
    }
}
