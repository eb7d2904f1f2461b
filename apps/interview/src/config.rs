use crate::errors::AppError;

/// Application configuration loaded from environment variables.
/// Fails at startup if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub rust_log: String,
    /// Cap on "retry requested" loops per question in the elaborate interview.
    /// `None` keeps the session on the same question for as long as the model asks.
    pub max_retries_per_question: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
            max_retries_per_question: parse_retry_cap(
                std::env::var("INTERVIEW_MAX_RETRIES").ok().as_deref(),
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String, AppError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Configuration(format!(
            "Required environment variable '{key}' is not set"
        ))),
    }
}

fn parse_retry_cap(raw: Option<&str>) -> Result<Option<u32>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<u32>() {
            Ok(cap) if cap > 0 => Ok(Some(cap)),
            _ => Err(AppError::Configuration(format!(
                "INTERVIEW_MAX_RETRIES must be a positive integer, got '{value}'"
            ))),
        },
    }
}
