//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while parsing a request head.
#[derive(Debug, Error)]
pub enum Error {
    /// The request is not valid UTF-8.
    #[error("Request is not valid UTF-8")]
    NotUtf8,

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line does not have exactly three parts.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request target does not start with `/`.
    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    /// The HTTP version is not 1.0 or 1.1.
    #[error("Unsupported HTTP version: {0}")]
    InvalidVersion(String),

    /// A header line has no `:` separator.
    #[error("Invalid header line: {0}")]
    InvalidHeader(String),

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(&'static str),
}
