//! Shared helpers for the AI playground web application.
//!
//! This crate reads the environment configuration (provider API keys, runtime
//! mode) and validates untrusted request input before it reaches a handler.

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{
    get_api_key, has_api_key, require_api_key, validate_environment, EnvironmentConfig, Provider,
};
pub use error::{Error, Result, ValidationError};
pub use logging::init_tracing;
pub use validation::{
    sanitize_code_input, sanitize_code_input_with_limit, validate_http_method, validate_json,
    validate_json_as, validate_model_name, validate_number_in_range, validate_url,
};
