//! Shared error types for the application.
//!
//! The taxonomy follows the recoverable error classes of the assessment
//! pipeline: lead validation, transport/remote endpoint failures, document
//! generation, and print-environment failures. None of these are fatal to a
//! session; each is recoverable by user retry and nothing retries
//! automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LossmapError {
    /// Required lead fields missing; blocks submission before any I/O
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A lead field outside its fixed enumeration
    #[error("invalid value for {field}: {value:?}")]
    InvalidBracket { field: &'static str, value: String },

    /// Remote endpoint rejected the submission; message surfaced verbatim
    #[error("{message}")]
    Endpoint {
        message: String,
        code: Option<String>,
    },

    /// The submission never reached the endpoint
    #[error("submission failed: {0}")]
    Transport(String),

    /// Export document generation failed
    #[error("export failed: {0}")]
    Export(String),

    /// Print document could not be produced
    #[error("nothing to print: {0}")]
    Print(&'static str),

    /// Unknown gap id passed to a session mutation
    #[error("unknown gap id: {0}")]
    UnknownGap(u32),

    /// Configuration file problems
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LossmapError {
    /// Transport errors carry whatever message the HTTP layer produced
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_all_fields() {
        let err = LossmapError::MissingFields(vec!["name", "phone"]);
        assert_eq!(err.to_string(), "missing required fields: name, phone");
    }

    #[test]
    fn endpoint_errors_surface_the_message_verbatim() {
        let err = LossmapError::Endpoint {
            message: "Database error: duplicate key".into(),
            code: Some("23505".into()),
        };
        assert_eq!(err.to_string(), "Database error: duplicate key");
    }
}
