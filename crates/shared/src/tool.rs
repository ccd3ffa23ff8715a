//! Tool types shared between the orchestration layer and its collaborators.
//!
//! A tool collects a few structured fields, turns them into a prompt and
//! publishes whatever the model returns through a [`ToolState`].

use serde::{Deserialize, Serialize};

/// Prefix used when a failure is shown in place of a model response
pub const ERROR_PREFIX: &str = "Error: ";

/// Render a failure the way it appears in a tool's result slot.
pub fn error_text(message: impl std::fmt::Display) -> String {
    format!("{}{}", ERROR_PREFIX, message)
}

/// True when a result string carries an inline failure rather than model output.
pub fn is_error_text(text: &str) -> bool {
    text.starts_with(ERROR_PREFIX)
}

/// Observable state of one tool controller.
///
/// `busy` is only true between dispatch and completion. `error` is cleared
/// on each dispatch but `error` and `result` may both hold values left over
/// from an earlier call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub busy: bool,
    pub error: Option<String>,
    /// Empty until the first response arrives
    pub result: String,
}

impl ToolState {
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }
}

/// Catalog entry describing one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

/// Failure talking to the hosted model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("{0}")]
    Transport(String),

    #[error("gemini error: {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response from gemini: {0}")]
    Decode(String),

    #[error("could not encode image: {0}")]
    Image(String),
}

impl GenerationError {
    /// The inline `"Error: ..."` text shown where a response would be.
    pub fn to_result_text(&self) -> String {
        error_text(self)
    }
}

/// Tool error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// Input failed the tool's precondition; nothing was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Tool has not been initialized with an API key")]
    NotInitialized,

    #[error("A request is already in progress")]
    Busy,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
