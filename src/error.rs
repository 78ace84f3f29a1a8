//! Error handling for the resume tailor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Please set your Google API key in the .env file ({0} is not set)")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Language model API error (status {status}): {message}")]
    LlmApi { status: u16, message: String },

    #[error("LLM inference error: {0}")]
    LlmInference(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeTailorError>;

/// Convert reqwest transport errors to our custom error type
impl From<reqwest::Error> for ResumeTailorError {
    fn from(err: reqwest::Error) -> Self {
        ResumeTailorError::Network(err.to_string())
    }
}

/// Convert template rendering errors to our custom error type
impl From<askama::Error> for ResumeTailorError {
    fn from(err: askama::Error) -> Self {
        ResumeTailorError::OutputFormatting(err.to_string())
    }
}
