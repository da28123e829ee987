//! Error handling for the resume profiler

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeProfilerError {
    /// Declared type and file extension are both outside the dispatch table.
    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    /// A recognized format's decoder rejected the document.
    #[error("Failed to decode document: {0}")]
    DecodeFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeProfilerError>;

impl ResumeProfilerError {
    /// Errors raised while turning bytes into text. Anything else means the
    /// caller's environment failed, not the document.
    pub fn is_decode_stage(&self) -> bool {
        matches!(
            self,
            ResumeProfilerError::UnsupportedFormat(_) | ResumeProfilerError::DecodeFailure(_)
        )
    }
}
