//! Error types for task-cli
//!
//! Every error ends the current invocation. Exit codes:
//! - 0: Success, help, or a prompt the user quit
//! - 1: Any error (I/O, corrupt storage, unknown task, bad input)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the task-cli binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for task-cli operations
#[derive(Error, Debug)]
pub enum Error {
    // Lookup and input errors
    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No task ids left: the largest possible id is already taken")]
    IdsExhausted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Storage errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot decode tasks in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate task id {id} in {}", .path.display())]
    DuplicateId { path: PathBuf, id: u64 },

    #[error("Cannot encode tasks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Short machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            Error::TaskNotFound(_) => "task_not_found",
            Error::InvalidInput(_) => "invalid_input",
            Error::IdsExhausted => "ids_exhausted",
            Error::InvalidConfig(_) | Error::TomlParse(_) => "invalid_config",
            Error::Io(_) => "io_error",
            Error::Decode { .. } | Error::DuplicateId { .. } => "decode_error",
            Error::Encode(_) => "encode_error",
        }
    }

    /// Structured fields for JSON output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::TaskNotFound(id) => Some(serde_json::json!({ "id": id })),
            Error::InvalidInput(message) | Error::InvalidConfig(message) => {
                Some(serde_json::json!({ "message": message }))
            }
            Error::Decode { path, .. } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            Error::DuplicateId { path, id } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
                "id": id,
            })),
            _ => None,
        }
    }
}

/// Result type alias for task-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
            details: err.details(),
        }
    }
}
