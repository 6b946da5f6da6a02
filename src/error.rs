//! Error types for incoterm-wizard.
//!
//! The decision logic itself cannot fail. These errors cover the outer
//! surfaces: configuration files, terminal I/O, and text parsing at the
//! CLI boundary.

use thiserror::Error;

use crate::types::Question;

/// The main error type for incoterm-wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration file could not be read or understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O errors.
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(String),

    /// A one-shot resolution was requested without every answer.
    #[error("Incomplete answers, missing: {}", join_ids(.missing))]
    Incomplete { missing: Vec<Question> },

    /// Unknown identifier for a closed set (category, question, party).
    #[error("Unknown {kind}: '{value}'")]
    Parse { kind: &'static str, value: String },
}

impl WizardError {
    /// Create a parse error for the given kind of identifier.
    pub fn parse(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            value: value.into(),
        }
    }
}

fn join_ids(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|q| q.id())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for incoterm-wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;
