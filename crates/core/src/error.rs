//! Error types for the VeggieTools domain.
//!
//! Only protocol-level failures are errors. A plant key that is not in the
//! table or a zone outside 1-10 is answered with ordinary text and never
//! reaches these types.

use thiserror::Error;

/// The top-level error type for all VeggieTools operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while turning a tool call into a typed request.
///
/// The transport surfaces both variants as protocol errors; callers are
/// expected to fix the request and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}
