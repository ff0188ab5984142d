//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::{Error as ParserError, Method};

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The request used a method other than GET.
    #[error("Method {0} not allowed for path: {1}")]
    MethodNotAllowed(Method, String),

    /// The configuration document could not be deserialized.
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),

    /// The configuration deserialized but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
