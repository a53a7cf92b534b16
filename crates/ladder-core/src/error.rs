//! Error types and exit codes for ladder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Dictionary error (missing or unreadable word list)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the ladder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Dictionary error - missing or unreadable word list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ladder operations
#[derive(Error, Debug)]
pub enum LadderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("unknown algorithm: {0} (expected: ucs, greedy, or astar)")]
    UnknownAlgorithm(String),

    #[error("not a lowercase alphabetic word: {0:?}")]
    InvalidWord(String),

    #[error("words must be the same length: {start:?} has {start_len} letters, {end:?} has {end_len}")]
    LengthMismatch {
        start: String,
        start_len: usize,
        end: String,
        end_len: usize,
    },

    #[error("{0}")]
    UsageError(String),

    // Dictionary errors (exit code 3)
    #[error("dictionary not found at {path:?}")]
    DictionaryNotFound { path: PathBuf },

    #[error("dictionary at {path:?} contains no words")]
    EmptyDictionary { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LadderError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            LadderError::UnknownFormat(_)
            | LadderError::DuplicateFormat
            | LadderError::UnknownAlgorithm(_)
            | LadderError::InvalidWord(_)
            | LadderError::LengthMismatch { .. }
            | LadderError::UsageError(_) => ExitCode::Usage,

            // Dictionary errors
            LadderError::DictionaryNotFound { .. } | LadderError::EmptyDictionary { .. } => {
                ExitCode::Data
            }

            // Generic failures
            LadderError::Io(_) | LadderError::Json(_) | LadderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LadderError::UnknownFormat(_) => "unknown_format",
            LadderError::DuplicateFormat => "duplicate_format",
            LadderError::UnknownAlgorithm(_) => "unknown_algorithm",
            LadderError::InvalidWord(_) => "invalid_word",
            LadderError::LengthMismatch { .. } => "length_mismatch",
            LadderError::UsageError(_) => "usage_error",
            LadderError::DictionaryNotFound { .. } => "dictionary_not_found",
            LadderError::EmptyDictionary { .. } => "empty_dictionary",
            LadderError::Io(_) => "io_error",
            LadderError::Json(_) => "json_error",
            LadderError::Other(_) => "other",
        }
    }
}

/// Result type alias for ladder operations
pub type Result<T> = std::result::Result<T, LadderError>;
