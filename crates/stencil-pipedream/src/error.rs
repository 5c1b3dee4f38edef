use thiserror::Error;

/// Errors produced by the Pipedream client and tools.
#[derive(Error, Debug)]
pub enum PipedreamError {
    /// The API answered with a non-success status; carries the raw
    /// response body.
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),

    /// The API answered with a success status but the body was not JSON.
    #[error("invalid json response from pipedream api: {0}")]
    InvalidResponse(String),

    /// A well-formed response was missing an expected field.
    #[error("response missing `{0}` field")]
    MissingField(&'static str),

    /// A tool was invoked with a malformed arguments object.
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PipedreamError>;
