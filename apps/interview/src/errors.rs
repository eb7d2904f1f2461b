use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is terminal for the interview session; `main` prints it and stops.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Student record not found: {}", path.display())]
    RecordNotFound { path: PathBuf },

    #[error("Failed to read student record {}: {source}", path.display())]
    RecordRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Student record {} is not valid JSON: {source}", path.display())]
    RecordParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No usable source material: the record has no coursework notes or activities left after filtering")]
    ExtractionEmpty,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}
