use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Image not found: '{name}' (resolved to {})", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("Image decode failed for '{name}': {reason}")]
    Decode { name: String, reason: String },

    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Inference failed for '{name}': {reason}")]
    Inference { name: String, reason: String },

    #[error("Cannot rank an empty set of class confidences")]
    EmptyInput,

    #[error("Invalid raw confidence for class '{label}': {value}")]
    InvalidScore { label: String, value: f32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClassifyError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ClassifyError::NotFound { .. } => "NOT_FOUND",
            ClassifyError::Decode { .. } => "DECODE_ERROR",
            ClassifyError::ModelLoad(_) => "MODEL_LOAD_ERROR",
            ClassifyError::Inference { .. } => "INFERENCE_ERROR",
            ClassifyError::EmptyInput => "EMPTY_INPUT",
            ClassifyError::InvalidScore { .. } => "INVALID_SCORE",
            ClassifyError::Config(_) => "CONFIG_ERROR",
            ClassifyError::Io(_) => "IO_ERROR",
            ClassifyError::Json(_) => "JSON_ERROR",
        }
    }

    pub(crate) fn inference(name: &str, reason: impl std::fmt::Display) -> Self {
        ClassifyError::Inference {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(name: &str, reason: impl std::fmt::Display) -> Self {
        ClassifyError::Decode {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
