//! Validation helpers for untrusted request input.
//!
//! Each function either returns the (possibly normalized) input or a
//! [`ValidationError`] describing the constraint that failed.

use regex::Regex;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

use crate::error::ValidationError;

/// Methods accepted by [`validate_http_method`].
pub const ALLOWED_HTTP_METHODS: [&str; 7] =
    ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Default limit for [`sanitize_code_input`], in Unicode scalar values.
pub const DEFAULT_MAX_CODE_LENGTH: usize = 10_000;

/// Denylist for code snippets, matched case-insensitively.
///
/// This catches the obvious ways to reach the module system, the process or
/// the filesystem. It is not exhaustive and must not be relied on as a sandbox.
const UNSAFE_CODE_PATTERNS: [(&str, &str); 9] = [
    ("require", r"require\s*\("),
    ("import", r"import\s+"),
    ("eval", r"eval\s*\("),
    ("function_constructor", r"Function\s*\("),
    ("process", r"process\."),
    ("dirname", r"__dirname"),
    ("filename", r"__filename"),
    ("child_process", r"child_process"),
    ("fs", r"fs\."),
];

static UNSAFE_CODE_REGEXES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
static MODEL_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn unsafe_code_regexes() -> &'static [(&'static str, Regex)] {
    UNSAFE_CODE_REGEXES.get_or_init(|| {
        UNSAFE_CODE_PATTERNS
            .iter()
            .map(|(name, pattern)| {
                // `(?i)` folds Unicode case too, so `ſ` matches `s`.
                let regex = Regex::new(&format!("(?i){}", pattern))
                    .expect("Invalid unsafe code pattern");
                (*name, regex)
            })
            .collect()
    })
}

fn model_name_regex() -> &'static Regex {
    MODEL_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9\-/._]+$").expect("Invalid model name regex"))
}

/// Validate a URL and return its canonical form.
///
/// Only `http` and `https` are accepted.
pub fn validate_url(url: &str) -> Result<String, ValidationError> {
    let parsed = Url::parse(url).map_err(|_| ValidationError::InvalidUrl)?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        _ => Err(ValidationError::DisallowedScheme),
    }
}

/// Validate an HTTP method, returning it uppercased.
pub fn validate_http_method(method: &str) -> Result<String, ValidationError> {
    let upper = method.to_uppercase();
    if !ALLOWED_HTTP_METHODS.contains(&upper.as_str()) {
        return Err(ValidationError::InvalidHttpMethod(method.to_string()));
    }
    Ok(upper)
}

/// Check a user code snippet against the length limit and the denylist.
///
/// Uses [`DEFAULT_MAX_CODE_LENGTH`].
pub fn sanitize_code_input(code: &str) -> Result<&str, ValidationError> {
    sanitize_code_input_with_limit(code, DEFAULT_MAX_CODE_LENGTH)
}

/// Like [`sanitize_code_input`] with an explicit limit.
///
/// Length is counted in Unicode scalar values (`char`s), not bytes or UTF-16
/// code units, so `"😀"` counts as one.
pub fn sanitize_code_input_with_limit(
    code: &str,
    max_length: usize,
) -> Result<&str, ValidationError> {
    if code.chars().count() > max_length {
        return Err(ValidationError::CodeTooLong { max_length });
    }

    if let Some((name, _)) = unsafe_code_regexes()
        .iter()
        .find(|(_, regex)| regex.is_match(code))
    {
        debug!(pattern = *name, "Code input rejected by denylist");
        return Err(ValidationError::UnsafeCode);
    }

    Ok(code)
}

/// Validate a model identifier such as `gpt-4.1/mini`.
pub fn validate_model_name(model: &str) -> Result<&str, ValidationError> {
    if !model_name_regex().is_match(model) {
        return Err(ValidationError::InvalidModelName);
    }
    Ok(model)
}

/// Validate that `value` lies in `[min, max]`.
///
/// Values that do not compare (NaN) are rejected.
pub fn validate_number_in_range<T>(
    value: T,
    min: T,
    max: T,
    field_name: &str,
) -> Result<T, ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        return Ok(value);
    }
    Err(ValidationError::OutOfRange {
        field: field_name.to_string(),
        min: min.to_string(),
        max: max.to_string(),
    })
}

/// Parse a JSON document into an untyped value.
///
/// Parsing is strict RFC 8259 via `serde_json`: numbers outside the `f64`
/// range (`1e400`) and lone UTF-16 surrogate escapes (`"\ud800"`) are
/// rejected rather than mapped to `Infinity` or kept as-is.
pub fn validate_json(json: &str) -> Result<serde_json::Value, ValidationError> {
    validate_json_as(json)
}

/// Parse a JSON document into `T`.
pub fn validate_json_as<T: DeserializeOwned>(json: &str) -> Result<T, ValidationError> {
    serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "JSON input rejected");
        ValidationError::InvalidJson
    })
}
